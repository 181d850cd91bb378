//! Time and timestamp utilities

use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};

/// Get the current local date and time, truncated to whole seconds.
///
/// The stored line format carries second precision only, so the clock
/// is truncated here to keep freshly logged events identical to their
/// re-read form.
pub fn current_datetime() -> NaiveDateTime {
    // Zero is always in range for with_nanosecond.
    Local::now().naive_local().with_nanosecond(0).unwrap()
}

/// Get the current local calendar date.
pub fn current_date() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_datetime_has_no_subsecond_part() {
        let now = current_datetime();
        assert_eq!(now.nanosecond(), 0);
    }

    #[test]
    fn test_current_date_matches_datetime_date() {
        // Not racing midnight is good enough for a unit test; retry once
        // in case the date rolled over between the two calls.
        let a = current_datetime().date();
        let b = current_date();
        if a != b {
            assert_eq!(current_datetime().date(), current_date());
        }
    }
}
