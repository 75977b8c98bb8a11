//! Constants used throughout the library
//!
//! This module centralizes the fixed day-name table, millisecond conversion
//! factors, and date format strings so every module renders and parses the
//! same way.

// Day names, indexed by the Sunday-based weekday number (0 = Sunday)
pub const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

// Millisecond conversion factors
/// Milliseconds in one civil day
pub const MS_PER_DAY: i64 = 86_400_000;
/// Milliseconds in one week
pub const MS_PER_WEEK: i64 = 7 * MS_PER_DAY;

// Date format strings (chrono strftime syntax)
/// ISO calendar date, `YYYY-MM-DD`
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Day-first calendar date, `DD-MM-YYYY` (the work schedule wire format)
pub const DMY_FORMAT: &str = "%d-%m-%Y";
/// 24-hour clock time, `HH:MM:SS`
pub const TIME_FORMAT: &str = "%H:%M:%S";
/// en-US style date and time, `M/D/YYYY, H:MM:SS AM|PM`
pub const US_DATETIME_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";
