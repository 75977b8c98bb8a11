use datemath::error::DateError;
use datemath::schedule::*;
use datemath::Period;

#[test]
fn test_weekends_in_month_january_2024() {
    // Four full weekends: Sat 6/13/20/27, Sun 7/14/21/28
    assert_eq!(weekends_in_month(1, 2024).unwrap(), 8);
}

#[test]
fn test_weekends_in_month_september_2024() {
    // September 2024 starts on a Sunday: five Sundays, four Saturdays
    assert_eq!(weekends_in_month(9, 2024).unwrap(), 9);
}

#[test]
fn test_weekends_in_month_leap_february() {
    assert_eq!(weekends_in_month(2, 2024).unwrap(), 8);
}

#[test]
fn test_weekends_in_month_rejects_invalid_month() {
    assert_eq!(weekends_in_month(0, 2024).unwrap_err(), DateError::InvalidMonth { month: 0 });
    assert_eq!(weekends_in_month(13, 2024).unwrap_err(), DateError::InvalidMonth { month: 13 });
}

#[test]
fn test_work_schedule_one_on_three_off() {
    let period = Period::parse_dmy("01-01-2024", "15-01-2024").unwrap();
    let schedule = work_schedule(&period, 1, 3).unwrap();
    assert_eq!(schedule, vec!["01-01-2024", "05-01-2024", "09-01-2024", "13-01-2024"]);
}

#[test]
fn test_work_schedule_block_truncated_by_period_end() {
    let period = Period::parse_dmy("01-01-2024", "03-01-2024").unwrap();
    let schedule = work_schedule(&period, 5, 2).unwrap();
    assert_eq!(schedule, vec!["01-01-2024", "02-01-2024", "03-01-2024"]);
}

#[test]
fn test_work_schedule_no_off_days_emits_every_day() {
    let period = Period::parse_dmy("01-01-2024", "05-01-2024").unwrap();
    let schedule = work_schedule(&period, 2, 0).unwrap();
    assert_eq!(schedule.len(), 5);
}

#[test]
fn test_work_schedule_crosses_month_boundary() {
    let period = Period::parse_dmy("30-01-2024", "02-02-2024").unwrap();
    let schedule = work_schedule(&period, 1, 1).unwrap();
    assert_eq!(schedule, vec!["30-01-2024", "01-02-2024"]);
}

#[test]
fn test_work_schedule_reversed_period_is_empty() {
    let period = Period::parse_dmy("15-01-2024", "01-01-2024").unwrap();
    assert!(work_schedule(&period, 1, 3).unwrap().is_empty());
}

#[test]
fn test_work_schedule_extreme_counts_do_not_overflow() {
    // A cycle of u32::MAX + 1 days must not wrap the cycle arithmetic
    let period = Period::parse_dmy("01-01-2024", "05-01-2024").unwrap();
    let schedule = work_schedule(&period, u32::MAX, 1).unwrap();
    assert_eq!(schedule.len(), 5);
    let schedule = work_schedule(&period, 1, u32::MAX).unwrap();
    assert_eq!(schedule, vec!["01-01-2024"]);
}

#[test]
fn test_work_schedule_rejects_zero_work_days() {
    let period = Period::parse_dmy("01-01-2024", "15-01-2024").unwrap();
    assert_eq!(work_schedule(&period, 0, 3).unwrap_err(), DateError::EmptyWorkPattern);
}

#[test]
fn test_work_schedule_single_day_period() {
    let period = Period::parse_dmy("01-01-2024", "01-01-2024").unwrap();
    assert_eq!(work_schedule(&period, 3, 1).unwrap(), vec!["01-01-2024"]);
}
