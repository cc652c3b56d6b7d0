//! Conversion of a UTC date/time to local standard time.

use crate::calendar::rollover_days_in_month;
use crate::DateTime;

/**
 * Returns the given UTC date/time shifted by a whole-hour offset, rolling the date over when the
 * hour leaves 0..=23.
 *
 * DST is not applied here. Minutes and seconds are left alone. Applying this twice shifts twice,
 * so call it exactly once per decoded sample.
 *
 * * February is always taken to be 28 days long, so a leap day is skipped by the rollover.
 * * Years are limited to 2 digits, so the year wraps between 99 and 0.
 *
 * # Arguments
 * * `utc` - date and time in UTC
 * * `offset_hours` - standard time offset from UTC, -23..=23
 */
pub fn apply_utc_offset(utc: DateTime, offset_hours: i8) -> DateTime {
    let mut local = utc;
    let hour = i16::from(utc.hour) + i16::from(offset_hours);

    if hour < 0 {
        local.day = local.day.saturating_sub(1);
        if local.day == 0 {
            local.month = local.month.saturating_sub(1);
            if local.month == 0 {
                local.month = 12;
                local.day = 31;
                local.year = if local.year == 0 { 99 } else { local.year - 1 };
            } else {
                local.day = rollover_days_in_month(local.month);
            }
        }
        local.hour = (hour + 24) as u8;
    } else if hour > 23 {
        local.day += 1;
        if local.day > rollover_days_in_month(local.month) {
            local.day = 1;
            local.month += 1;
            if local.month > 12 {
                local.month = 1;
                local.year = if local.year >= 99 { 0 } else { local.year + 1 };
            }
        }
        local.hour = (hour - 24) as u8;
    } else {
        local.hour = hour as u8;
    }
    local
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::days_in_month;
    use proptest::prelude::*;

    #[test]
    fn test_same_day() {
        let local = apply_utc_offset(DateTime::new(23, 7, 4, 17, 30, 18), -7);
        assert_eq!(local, DateTime::new(23, 7, 4, 10, 30, 18));
    }

    #[test]
    fn test_previous_day() {
        let local = apply_utc_offset(DateTime::new(23, 3, 12, 6, 30, 0), -7);
        assert_eq!(local, DateTime::new(23, 3, 11, 23, 30, 0));
    }

    #[test]
    fn test_previous_month() {
        let local = apply_utc_offset(DateTime::new(23, 5, 1, 2, 0, 0), -7);
        assert_eq!(local, DateTime::new(23, 4, 30, 19, 0, 0));
    }

    #[test]
    fn test_previous_year() {
        let local = apply_utc_offset(DateTime::new(23, 1, 1, 3, 0, 0), -7);
        assert_eq!(local, DateTime::new(22, 12, 31, 20, 0, 0));
    }

    #[test]
    fn test_previous_year_wraps_century() {
        let local = apply_utc_offset(DateTime::new(0, 1, 1, 3, 0, 0), -7);
        assert_eq!(local, DateTime::new(99, 12, 31, 20, 0, 0));
    }

    #[test]
    fn test_next_day() {
        let local = apply_utc_offset(DateTime::new(23, 6, 14, 22, 15, 45), 3);
        assert_eq!(local, DateTime::new(23, 6, 15, 1, 15, 45));
    }

    #[test]
    fn test_next_month() {
        let local = apply_utc_offset(DateTime::new(23, 4, 30, 23, 0, 0), 1);
        assert_eq!(local, DateTime::new(23, 5, 1, 0, 0, 0));
    }

    #[test]
    fn test_next_year_wraps_century() {
        let local = apply_utc_offset(DateTime::new(99, 12, 31, 20, 0, 0), 10);
        assert_eq!(local, DateTime::new(0, 1, 1, 6, 0, 0));
    }

    #[test]
    fn test_leap_day_skipped_backwards() {
        // 2024-03-01 02:00 UTC is 2024-02-29 19:00 MST, but February is taken as 28 days long
        let local = apply_utc_offset(DateTime::new(24, 3, 1, 2, 0, 0), -7);
        assert_eq!(local, DateTime::new(24, 2, 28, 19, 0, 0));
    }

    #[test]
    fn test_leap_day_skipped_forwards() {
        let local = apply_utc_offset(DateTime::new(24, 2, 28, 20, 0, 0), 9);
        assert_eq!(local, DateTime::new(24, 3, 1, 5, 0, 0));
    }

    #[test]
    fn test_month_end_carry() {
        let local = apply_utc_offset(DateTime::new(23, 1, 31, 20, 0, 0), 5);
        assert_eq!(local, DateTime::new(23, 2, 1, 1, 0, 0));
        let local = apply_utc_offset(DateTime::new(24, 2, 29, 23, 0, 0), 1);
        assert_eq!(local, DateTime::new(24, 3, 1, 0, 0, 0));
    }

    #[test]
    fn test_zero_offset() {
        let utc = DateTime::new(23, 11, 5, 9, 0, 1);
        assert_eq!(apply_utc_offset(utc, 0), utc);
    }

    #[test]
    fn test_not_idempotent() {
        let utc = DateTime::new(23, 3, 12, 6, 30, 0);
        let once = apply_utc_offset(utc, -7);
        let twice = apply_utc_offset(once, -7);
        assert_ne!(once, twice);
        assert_eq!(twice, DateTime::new(23, 3, 11, 16, 30, 0));
    }

    proptest! {
        #[test]
        fn result_is_a_valid_date_time(
            (year, month, day) in (0u8..=99, 1u8..=12).prop_flat_map(|(year, month)| {
                let last = days_in_month(month, year).unwrap_or(28);
                (Just(year), Just(month), 1u8..=last)
            }),
            hour in 0u8..=23,
            minute in 0u8..=59,
            second in 0u8..=59,
            offset in -23i8..=23,
        ) {
            let utc = DateTime::new(year, month, day, hour, minute, second);
            let local = apply_utc_offset(utc, offset);
            prop_assert!(local.is_valid());
            prop_assert_eq!(local.minute(), minute);
            prop_assert_eq!(local.second(), second);
        }

        #[test]
        fn nonzero_offset_changes_the_hour(
            hour in 0u8..=23,
            offset in (-23i8..=23).prop_filter("nonzero", |o| *o != 0),
        ) {
            let utc = DateTime::new(23, 6, 15, hour, 0, 0);
            prop_assert_ne!(apply_utc_offset(utc, offset), utc);
        }
    }
}
