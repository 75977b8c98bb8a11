//! Weekend counting and work-schedule generation.

use chrono::NaiveDate;

use crate::error::DateError;
use crate::format::format_dmy;
use crate::period::Period;
use crate::query::{days_in_month, is_weekend};

/// Count the Saturdays and Sundays in the given month (1..=12) of the given
/// year, by day-by-day iteration from the 1st to the last day.
pub fn weekends_in_month(month: u32, year: i32) -> Result<u32, DateError> {
    let mut count = 0;
    for day in 1..=days_in_month(month, year)? {
        // Every day of a validated month is constructible.
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            if is_weekend(date) {
                count += 1;
            }
        }
    }
    Ok(count)
}

/// Generate a work schedule over a period: a repeating cycle of `work_days`
/// working days followed by `off_days` off days, starting at the period's
/// first day.
///
/// One `DD-MM-YYYY` entry is emitted per work day; off days are skipped
/// silently. The walk stops once the cursor passes the period's end, so a
/// work block is truncated mid-cycle when the period runs out. A reversed
/// period produces an empty schedule.
///
/// # Arguments
/// * `period` - The date range to fill, inclusive on both ends (see
///   [`Period::parse_dmy`] for the wire format)
/// * `work_days` - Working days per cycle, must be >= 1
/// * `off_days` - Off days per cycle; 0 means no rest days
///
/// # Returns
/// * `Result<Vec<String>, DateError>` - One entry per work day, or
///   `DateError::EmptyWorkPattern` when `work_days` is 0
pub fn work_schedule(
    period: &Period,
    work_days: u32,
    off_days: u32,
) -> Result<Vec<String>, DateError> {
    if work_days == 0 {
        return Err(DateError::EmptyWorkPattern);
    }

    let end = period.end.date();
    // Widened so the cycle length can hold u32::MAX work and off days.
    let cycle = u64::from(work_days) + u64::from(off_days);
    let mut cursor = period.start.date();
    let mut position: u64 = 0;
    let mut schedule = Vec::new();

    // The cursor is a locally-owned copy; the caller's period is never
    // touched. The cycle length is >= 1, so the walk always advances.
    while cursor <= end {
        if position < u64::from(work_days) {
            schedule.push(format_dmy(cursor));
        }
        position = (position + 1) % cycle;
        match cursor.succ_opt() {
            Some(next) => cursor = next,
            None => break,
        }
    }

    log::debug!(
        "work schedule: {} work days of a {}+{} cycle between {} and {}",
        schedule.len(),
        work_days,
        off_days,
        format_dmy(period.start.date()),
        format_dmy(end),
    );
    Ok(schedule)
}
