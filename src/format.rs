//! Date and time rendering.

use chrono::{NaiveDate, NaiveDateTime};

use crate::constants::{DMY_FORMAT, TIME_FORMAT, US_DATETIME_FORMAT};

/// Format the time-of-day component as `HH:MM:SS` (24-hour clock).
pub fn format_time(dt: NaiveDateTime) -> String {
    dt.format(TIME_FORMAT).to_string()
}

/// Format a date and time in en-US style: `M/D/YYYY, H:MM:SS AM|PM`.
///
/// Month, day, and hour are unpadded; the hour uses the 12-hour clock with
/// midnight rendered as `12`; the meridiem is uppercase.
pub fn format_date(dt: NaiveDateTime) -> String {
    dt.format(US_DATETIME_FORMAT).to_string()
}

/// Format a NaiveDate to a `DD-MM-YYYY` string (the work schedule wire format).
pub fn format_dmy(date: NaiveDate) -> String {
    date.format(DMY_FORMAT).to_string()
}
