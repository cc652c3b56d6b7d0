//! Local wall-clock time from GPS RMC sentences, for segmented clock displays.
//!
//! Decoded UTC date/time fields are shifted by a fixed whole-hour offset and checked against a
//! DST rule using integer arithmetic only.

//! Build with no_std for embedded platforms.
#![cfg_attr(not(test), no_std)]

use core::fmt::{self, Write};
use heapless::String;

pub mod calendar;
pub mod clock;
pub mod config;
pub mod display;
pub mod dst;
pub mod error;
pub mod nmea;
pub mod normalize;

pub use calendar::Weekday;
pub use clock::{GpsClock, SharedDateTime};
pub use config::ClockConfig;
pub use dst::{in_dst, DstRule, NoDst, UsDstRule};
pub use error::{Error, Field, SentenceError};
pub use normalize::apply_utc_offset;

/// A date and time as reported by the receiver, either in UTC or shifted to local standard time.
///
/// Minutes and seconds are kept as separate tens and ones digits, since the display addresses
/// each digit on its own.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateTime {
    /// two-digit year, 0..=99 within [`calendar::CENTURY`]
    pub year: u8,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute_tens: u8,
    pub minute_ones: u8,
    pub second_tens: u8,
    pub second_ones: u8,
}

impl Default for DateTime {
    fn default() -> Self {
        Self::new(0, 1, 1, 0, 0, 0)
    }
}

impl DateTime {
    /**
     * Create a new DateTime, splitting minute and second into their digits.
     *
     * No range checks are done here, the sentence decoder validates its input.
     */
    pub const fn new(year: u8, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute_tens: minute / 10,
            minute_ones: minute % 10,
            second_tens: second / 10,
            second_ones: second % 10,
        }
    }

    pub const fn minute(&self) -> u8 {
        self.minute_tens * 10 + self.minute_ones
    }

    pub const fn second(&self) -> u8 {
        self.second_tens * 10 + self.second_ones
    }

    /// Full four-digit year.
    pub fn full_year(&self) -> u16 {
        calendar::full_year(self.year)
    }

    /// Day of the week, or None if the month is invalid.
    pub fn weekday(&self) -> Option<Weekday> {
        calendar::day_of_week(self.year, self.month, self.day).and_then(Weekday::from_key_value)
    }

    /// Returns if all fields hold a valid calendar date and time of day.
    pub fn is_valid(&self) -> bool {
        calendar::days_in_month(self.month, self.year).is_some_and(|last| (1..=last).contains(&self.day))
            && self.year <= 99
            && self.hour <= 23
            && self.minute() <= 59
            && self.second() <= 60
    }

    /// Date as `yyyy-mm-dd`.
    pub fn str_date(&self) -> String<10> {
        let mut s = String::<10>::new();
        // a four-digit year keeps a valid record within capacity
        let _ = write!(s, "{:04}-{:02}-{:02}", self.full_year(), self.month, self.day);
        s
    }

    /// Time as `hh:mm:ss`.
    pub fn str_time(&self) -> String<8> {
        let mut s = String::<8>::new();
        // out-of-range fields are truncated rather than panicking
        let _ = write!(
            s,
            "{:02}:{}{}:{}{}",
            self.hour, self.minute_tens, self.minute_ones, self.second_tens, self.second_ones
        );
        s
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.str_date(), self.str_time())
    }
}
