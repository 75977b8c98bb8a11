//! String to date/time parsing.
//!
//! Every function here accepts a fixed machine-parseable representation and
//! returns a chrono value or a [`DateError::Parse`]. Free-form natural
//! language dates are out of scope.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use crate::constants::{DATE_FORMAT, DMY_FORMAT};
use crate::error::DateError;

/// Parse a date/time string, trying multiple formats.
///
/// Strategies are tried in order; the first match wins:
/// 1. RFC 3339 with offset (e.g. `2025-01-15T14:30:00Z`); the offset is
///    honored and the result normalized to UTC
/// 2. ISO 8601 without offset (e.g. `2025-01-15T14:30:00` or with
///    fractional seconds)
/// 3. Space-separated format (e.g. `2025-01-15 14:30:00`)
/// 4. Bare calendar date (e.g. `2025-01-15`), taken as midnight
///
/// # Returns
/// * `Result<NaiveDateTime, DateError>` - Parsed value or `DateError::Parse`
///   carrying the last chrono error
pub fn parse_datetime(input: &str) -> Result<NaiveDateTime, DateError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S") {
        return Ok(dt);
    }
    match NaiveDate::parse_from_str(input, DATE_FORMAT) {
        Ok(date) => {
            log::trace!("parse_datetime: '{input}' matched the date-only form");
            Ok(date.and_time(NaiveTime::MIN))
        }
        Err(source) => Err(DateError::Parse {
            input: input.to_string(),
            source,
        }),
    }
}

/// Parse a date string in `YYYY-MM-DD` format.
pub fn parse_date(input: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|source| DateError::Parse {
        input: input.to_string(),
        source,
    })
}

/// Parse a date string in `DD-MM-YYYY` format (the work schedule wire format).
pub fn parse_dmy(input: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(input, DMY_FORMAT).map_err(|source| DateError::Parse {
        input: input.to_string(),
        source,
    })
}
