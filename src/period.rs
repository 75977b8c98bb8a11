//! Inclusive date/time periods.

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::DateError;
use crate::parse::{parse_datetime, parse_dmy};
use crate::query::days_in_period;

/// An inclusive range between two instants.
///
/// Conceptually `start <= end`; a reversed period is not an error, it simply
/// contains nothing and yields empty or adjusted results downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Period {
    /// Create a period from two instants.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Parse a period from two date/time strings.
    ///
    /// Both bounds accept the formats of
    /// [`parse_datetime`](crate::parse::parse_datetime).
    pub fn parse(start: &str, end: &str) -> Result<Self, DateError> {
        Ok(Self {
            start: parse_datetime(start)?,
            end: parse_datetime(end)?,
        })
    }

    /// Parse a period from two `DD-MM-YYYY` strings, midnight-aligned.
    pub fn parse_dmy(start: &str, end: &str) -> Result<Self, DateError> {
        Ok(Self {
            start: parse_dmy(start)?.and_time(NaiveTime::MIN),
            end: parse_dmy(end)?.and_time(NaiveTime::MIN),
        })
    }

    /// Whether an instant falls within the period, inclusive on both ends.
    pub fn contains(&self, dt: NaiveDateTime) -> bool {
        self.start <= dt && dt <= self.end
    }

    /// Inclusive day count of the period.
    ///
    /// See [`days_in_period`](crate::query::days_in_period) for the rounding
    /// contract.
    pub fn num_days(&self) -> i64 {
        days_in_period(self.start, self.end)
    }
}
