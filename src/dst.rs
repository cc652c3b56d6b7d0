//! Daylight saving time rules.
//!
//! The stored date/time is always local standard time, the DST hour is only ever added for
//! display. A rule is therefore asked for every rendered frame instead of caching its verdict.

use crate::calendar::first_sunday;
use crate::error::{Error, Result};
use crate::DateTime;

/// Local standard hour at which the U.S. DST transitions take place.
pub const US_TRANSITION_HOUR: u8 = 2;

/// A regional DST rule, evaluated on local standard time.
pub trait DstRule {
    /// Returns if DST is in effect, or [`Error::UnreachableMonth`] for a month outside 1..=12.
    fn checked_in_dst(&self, local: &DateTime) -> Result<bool>;

    /// Returns if DST is in effect, treating an invalid month as standard time.
    fn in_dst(&self, local: &DateTime) -> bool {
        self.checked_in_dst(local).unwrap_or_else(|err| {
            log::error!("DST check on {:?}: {}", local, err);
            false
        })
    }
}

/// U.S. rule since 2007: from the second Sunday of March 02:00 through the first Sunday of
/// November 02:00.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UsDstRule;

/// For regions which stay on standard time all year.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoDst;

impl DstRule for UsDstRule {
    fn checked_in_dst(&self, local: &DateTime) -> Result<bool> {
        checked_in_dst(local)
    }
}

impl DstRule for NoDst {
    fn checked_in_dst(&self, local: &DateTime) -> Result<bool> {
        if (1..=12).contains(&local.month) {
            Ok(false)
        } else {
            Err(Error::UnreachableMonth(local.month))
        }
    }
}

/// Returns if U.S. DST is in effect for the given local standard time.
///
/// A month outside 1..=12 is a caller bug; it is logged and reported as standard time.
pub fn in_dst(local: &DateTime) -> bool {
    UsDstRule.in_dst(local)
}

/**
 * Returns if U.S. DST is in effect for the given local standard time.
 *
 * Only March and November need the day of the week, the other months are decided by the month
 * alone.
 *
 * # Arguments
 * * `local` - date and time in local standard time
 */
pub fn checked_in_dst(local: &DateTime) -> Result<bool> {
    match local.month {
        1 | 2 | 12 => Ok(false),
        4..=10 => Ok(true),
        3 => {
            // the second Sunday is always in 8..=14
            if local.day < 8 {
                return Ok(false);
            }
            if local.day > 13 {
                return Ok(true);
            }
            let second_sunday = first_sunday(local.year, 3).ok_or(Error::UnreachableMonth(3))? + 7;
            Ok(match local.day.cmp(&second_sunday) {
                core::cmp::Ordering::Less => false,
                core::cmp::Ordering::Greater => true,
                core::cmp::Ordering::Equal => local.hour >= US_TRANSITION_HOUR,
            })
        }
        11 => {
            if local.day > 7 {
                return Ok(false);
            }
            let first_sunday = first_sunday(local.year, 11).ok_or(Error::UnreachableMonth(11))?;
            Ok(match local.day.cmp(&first_sunday) {
                core::cmp::Ordering::Less => true,
                core::cmp::Ordering::Greater => false,
                core::cmp::Ordering::Equal => local.hour < US_TRANSITION_HOUR,
            })
        }
        month => Err(Error::UnreachableMonth(month)),
    }
}
