//! Calendar search: next weekday occurrences and week numbers.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::constants::MS_PER_WEEK;
use crate::error::DateError;

/// Calculate the next occurrence of a target weekday from a given date.
///
/// The result is strictly after `from`: when `from` already falls on the
/// target weekday, the occurrence a full week later is returned.
pub fn next_weekday(from: NaiveDate, target: Weekday) -> NaiveDate {
    let from_w = from.weekday().num_days_from_monday() as i64;
    let tgt_w = target.num_days_from_monday() as i64;
    let mut delta = (7 + tgt_w - from_w) % 7;
    if delta == 0 {
        delta = 7;
    }
    from + Duration::days(delta)
}

/// Calculate the next Friday strictly after the given date.
pub fn next_friday(date: NaiveDate) -> NaiveDate {
    next_weekday(date, Weekday::Fri)
}

/// Find the nearest Friday the 13th, scanning months from the given date's
/// month (inclusive) onward.
///
/// The scan starts at the current month even when its 13th has already
/// passed, so the result can lie earlier in the same month than `date`
/// itself. Months run through December, then the scan restarts at January
/// of the following year. Every calendar year contains at least one Friday
/// the 13th, so the loop finishes within two year passes.
///
/// # Returns
/// * `Result<NaiveDate, DateError>` - The 13th of the first matching month,
///   or `DateError::OutOfRange` if the scan leaves chrono's representable
///   years
pub fn next_friday_the_13th(date: NaiveDate) -> Result<NaiveDate, DateError> {
    let mut year = date.year();
    let mut month = date.month();
    loop {
        for m in month..=12 {
            match NaiveDate::from_ymd_opt(year, m, 13) {
                Some(thirteenth) if thirteenth.weekday() == Weekday::Fri => {
                    return Ok(thirteenth);
                }
                Some(_) => {}
                None => return Err(DateError::OutOfRange { year }),
            }
        }
        log::debug!(
            "no Friday the 13th in the rest of {year}, scanning {}",
            year + 1
        );
        year += 1;
        month = 1;
    }
}

/// Week number of a date within its year; weeks start on Monday and week 1
/// contains January 1.
///
/// The anchor is January 1 pushed forward by `7 - dow` days (`dow` being
/// January 1's Sunday-based weekday index), i.e. the last day of week 1.
/// When January 1 falls on a Sunday the anchor stays at January 1 itself,
/// making that Sunday a one-day week 1 with the following Monday opening
/// week 2. The result is `ceil((date - anchor) / week) + 1`, always >= 1.
pub fn week_number(date: NaiveDate) -> u32 {
    let jan1 = match NaiveDate::from_ymd_opt(date.year(), 1, 1) {
        Some(jan1) => jan1,
        // January 1 exists in every year that has a representable date
        None => unreachable!("January 1 of year {} is constructible", date.year()),
    };
    let dow = i64::from(jan1.weekday().num_days_from_sunday());
    let anchor = if dow == 0 {
        jan1
    } else {
        jan1 + Duration::days(7 - dow)
    };
    let delta_ms = (date - anchor).num_milliseconds();
    ((delta_ms + MS_PER_WEEK - 1).div_euclid(MS_PER_WEEK) + 1) as u32
}
