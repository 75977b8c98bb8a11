//! Scalar and boolean derivations over date values.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};

use crate::constants::{DAY_NAMES, MS_PER_DAY};
use crate::error::DateError;
use crate::parse::parse_datetime;

/// Convert a date/time string to milliseconds since 1970-01-01T00:00:00Z.
///
/// Accepts the formats of [`parse_datetime`](crate::parse::parse_datetime);
/// strings without an explicit offset are interpreted as UTC.
///
/// # Arguments
/// * `input` - Date/time string
///
/// # Returns
/// * `Result<i64, DateError>` - Epoch milliseconds or a parse error for
///   unrecognized input
pub fn date_to_timestamp(input: &str) -> Result<i64, DateError> {
    Ok(parse_datetime(input)?.and_utc().timestamp_millis())
}

/// Get the English name of a date's weekday, Sunday-indexed.
pub fn day_name(date: NaiveDate) -> &'static str {
    DAY_NAMES[date.weekday().num_days_from_sunday() as usize]
}

/// Get the quarter (1..=4) a date falls in.
pub fn quarter(date: NaiveDate) -> u32 {
    date.month0() / 3 + 1
}

/// Whether the date's year is a Gregorian leap year.
pub fn is_leap_year(date: NaiveDate) -> bool {
    let year = date.year();
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in the given month (1..=12) of the given year.
///
/// Computed as the day component of "day zero of the next month", i.e. the
/// first day of the following month stepped back by one day.
///
/// # Returns
/// * `Result<u32, DateError>` - 28..=31, `DateError::InvalidMonth` for a
///   month outside 1..=12, or `DateError::OutOfRange` at the edge of
///   chrono's representable years
pub fn days_in_month(month: u32, year: i32) -> Result<u32, DateError> {
    if !(1..=12).contains(&month) {
        return Err(DateError::InvalidMonth { month });
    }
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map(|last_of_month| last_of_month.day())
        .ok_or(DateError::OutOfRange { year })
}

/// Inclusive day count between two instants: `round((end - start) / day) + 1`.
///
/// Midnight-aligned inputs count exactly; other inputs round per
/// `f64::round` (ties away from zero). A single instant counts as one day.
/// Reversed inputs are not validated and yield the natural adjusted value.
pub fn days_in_period(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    let delta_ms = (end - start).num_milliseconds();
    (delta_ms as f64 / MS_PER_DAY as f64).round() as i64 + 1
}

/// Whether the date falls on a Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
