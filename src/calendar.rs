//! Integer-only calendar helpers: leap years, month lengths and the day of the week.

/// The receiver only reports two-digit years, so the century is fixed.
pub const CENTURY: u16 = 2000;

/// Month key values of the Key Value weekday method, January first.
pub const MONTH_KEYS: [u8; 12] = [1, 4, 4, 0, 2, 5, 0, 3, 6, 1, 4, 6];

/// Century key values, indexed by `(century % 400) / 100`.
pub const CENTURY_KEYS: [u8; 4] = [6, 0, 2, 4];

/// Month lengths of a common year, January first.
const MONTH_LENGTHS: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Day of the week as returned by [`day_of_week`].
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weekday {
    Saturday = 0,
    Sunday = 1,
    Monday = 2,
    Tuesday = 3,
    Wednesday = 4,
    Thursday = 5,
    Friday = 6,
}

impl Weekday {
    /// Map a Key Value result (0 = Saturday) to a weekday, or None if it is not in 0..=6.
    pub fn from_key_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Saturday),
            1 => Some(Self::Sunday),
            2 => Some(Self::Monday),
            3 => Some(Self::Tuesday),
            4 => Some(Self::Wednesday),
            5 => Some(Self::Thursday),
            6 => Some(Self::Friday),
            _ => None,
        }
    }
}

/// Returns if the given full (four-digit) year is a Gregorian leap year.
pub fn is_leap_year(year: u16) -> bool {
    if year % 400 == 0 {
        true
    } else if year % 100 == 0 {
        false
    } else {
        year % 4 == 0
    }
}

/// Full year of the given two-digit year.
#[inline]
pub fn full_year(year: u8) -> u16 {
    CENTURY + u16::from(year)
}

/// Returns the number of days in the given month, or None if `month` is not in 1..=12.
///
/// February is leap-aware here. Date rollover uses [`rollover_days_in_month`] instead.
///
/// # Arguments
/// * `month` - month, 1..=12
/// * `year` - two-digit year within [`CENTURY`]
pub fn days_in_month(month: u8, year: u8) -> Option<u8> {
    if month == 2 && is_leap_year(full_year(year)) {
        return Some(29);
    }
    MONTH_LENGTHS.get(usize::from(month).checked_sub(1)?).copied()
}

/// Month length used by date rollover.
///
/// February is always 28 days long, so rolling over in a leap year skips the 29th.
/// Months outside 1..=12 count as 30 days.
pub fn rollover_days_in_month(month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        2 => 28,
        _ => 30,
    }
}

/// Key value of the given century.
pub const fn century_key(century: u16) -> u8 {
    CENTURY_KEYS[((century % 400) / 100) as usize]
}

/**
 * Returns the day of the week using the Key Value method, or None if `month` is not in 1..=12.
 *
 * 0 is Saturday, 1 is Sunday, up to 6 for Friday.
 *
 * # Arguments
 * * `year` - two-digit year within [`CENTURY`]
 * * `month` - month, 1..=12
 * * `day` - day of the month
 */
pub fn day_of_week(year: u8, month: u8, day: u8) -> Option<u8> {
    let month_key = *MONTH_KEYS.get(usize::from(month).checked_sub(1)?)?;
    let year = u16::from(year);
    let mut t = year / 4 + u16::from(day) + u16::from(month_key);
    t += u16::from(century_key(CENTURY)) + year;
    if month < 3 && is_leap_year(CENTURY + year) {
        t -= 1;
    }
    Some((t % 7) as u8)
}

/// Day of the month of the first Sunday of the given month, or None if `month` is invalid.
pub fn first_sunday(year: u8, month: u8) -> Option<u8> {
    let weekday = day_of_week(year, month, 1)?;
    // weekday 1 (Sunday) lands on day 1, a Monday on day 7
    Some((8 - weekday) % 7 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_is_leap_year() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2400));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2100));
        assert!(is_leap_year(2004));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn ok_days_in_month_regular() {
        assert_eq!(days_in_month(1, 23), Some(31));
        assert_eq!(days_in_month(4, 23), Some(30));
        assert_eq!(days_in_month(12, 23), Some(31));
    }
    #[test]
    fn ok_days_in_month_february() {
        assert_eq!(days_in_month(2, 23), Some(28));
        assert_eq!(days_in_month(2, 24), Some(29));
        assert_eq!(days_in_month(2, 0), Some(29)); // 2000 is a leap century
    }
    #[test]
    fn bad_days_in_month() {
        assert_eq!(days_in_month(0, 23), None);
        assert_eq!(days_in_month(13, 23), None);
    }

    #[test]
    fn test_rollover_days_in_month() {
        assert_eq!(rollover_days_in_month(2), 28);
        assert_eq!(rollover_days_in_month(7), 31);
        assert_eq!(rollover_days_in_month(8), 31);
        assert_eq!(rollover_days_in_month(11), 30);
        assert_eq!(rollover_days_in_month(0), 30);
    }

    #[test]
    fn test_century_key() {
        assert_eq!(century_key(2000), 6);
        assert_eq!(century_key(2100), 0);
        assert_eq!(century_key(1900), 4);
    }

    #[test]
    fn ok_day_of_week_reference_dates() {
        assert_eq!(day_of_week(0, 1, 1), Some(0)); // Saturday 2000-01-01
        assert_eq!(day_of_week(23, 3, 1), Some(4)); // Wednesday
        assert_eq!(day_of_week(23, 11, 1), Some(4)); // Wednesday
        assert_eq!(day_of_week(24, 2, 29), Some(5)); // Thursday, leap-year adjustment
        assert_eq!(day_of_week(99, 12, 31), Some(5)); // Thursday 2099-12-31
    }
    #[test]
    fn bad_day_of_week_month() {
        assert_eq!(day_of_week(23, 0, 1), None);
        assert_eq!(day_of_week(23, 13, 1), None);
    }

    #[test]
    fn test_weekday_from_key_value() {
        assert_eq!(Weekday::from_key_value(0), Some(Weekday::Saturday));
        assert_eq!(Weekday::from_key_value(1), Some(Weekday::Sunday));
        assert_eq!(Weekday::from_key_value(6), Some(Weekday::Friday));
        assert_eq!(Weekday::from_key_value(7), None);
    }

    #[test]
    fn test_first_sunday() {
        assert_eq!(first_sunday(23, 3), Some(5));
        assert_eq!(first_sunday(23, 11), Some(5));
        assert_eq!(first_sunday(21, 11), Some(7)); // November 1st is a Monday
        assert_eq!(first_sunday(20, 11), Some(1)); // November 1st is a Sunday
        assert_eq!(first_sunday(25, 11), Some(2)); // November 1st is a Saturday
        assert_eq!(first_sunday(23, 14), None);
    }

    proptest! {
        #[test]
        fn weekday_repeats_every_seven_days(year in 0u8..=99, month in 1u8..=12, day in 1u8..=21) {
            prop_assert_eq!(day_of_week(year, month, day), day_of_week(year, month, day + 7));
        }

        #[test]
        fn weekday_is_in_range(year in 0u8..=99, month in 1u8..=12, day in 1u8..=31) {
            let weekday = day_of_week(year, month, day);
            prop_assert!(matches!(weekday, Some(0..=6)));
        }
    }
}
