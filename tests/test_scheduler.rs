use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime};
use grindboard_be::sync::scheduler::duration_until_next_reset;

fn at(hour: u32, min: u32, sec: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 10)
        .unwrap()
        .and_hms_opt(hour, min, sec)
        .unwrap()
}

#[test]
fn test_wait_until_tonight() {
    let wait = duration_until_next_reset(at(21, 0, 0), 0);
    assert_eq!(wait, Duration::from_secs(3 * 3600));
}

#[test]
fn test_reset_time_just_passed_waits_a_full_day() {
    // One second past midnight: the next reset is tomorrow, not now. A
    // restart right after the boundary must not trigger a second reset.
    let wait = duration_until_next_reset(at(0, 0, 1), 0);
    assert_eq!(wait, Duration::from_secs(24 * 3600 - 1));
}

#[test]
fn test_exact_reset_time_waits_a_full_day() {
    let wait = duration_until_next_reset(at(0, 0, 0), 0);
    assert_eq!(wait, Duration::from_secs(24 * 3600));
}

#[test]
fn test_nonmidnight_reset_hour() {
    let wait = duration_until_next_reset(at(2, 30, 0), 4);
    assert_eq!(wait, Duration::from_secs(90 * 60));
}
