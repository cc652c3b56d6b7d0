//! Compile-time clock configuration.

/// Standard time offsets from UTC, in hours. DST is applied separately.
pub const EASTERN: i8 = -5;
pub const CENTRAL: i8 = -6;
pub const MOUNTAIN: i8 = -7;
pub const PACIFIC: i8 = -8;
pub const ALASKA: i8 = -9;
pub const HAWAII: i8 = -10;

/// Key of the recommended minimum sentence of a GPS-only receiver.
pub const GPRMC: &str = "$GPRMC";
/// Key of the recommended minimum sentence of a multi-constellation receiver.
pub const GNRMC: &str = "$GNRMC";

/// Deployment settings of a clock.
///
/// Construct it in a `const` so that an invalid offset fails the build:
/// ```
/// use gps_datetime_utils::config::{ClockConfig, PACIFIC};
///
/// const CONFIG: ClockConfig = ClockConfig::new(PACIFIC, true);
/// assert_eq!(CONFIG.utc_offset(), -8);
/// ```
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockConfig {
    utc_offset: i8,
    observes_dst: bool,
    sentence_key: &'static str,
}

impl ClockConfig {
    /**
     * Create a new configuration listening to [`GPRMC`] sentences.
     *
     * # Arguments
     * * `utc_offset` - standard time offset in whole hours, -23..=23
     * * `observes_dst` - whether the region observes daylight saving time
     */
    pub const fn new(utc_offset: i8, observes_dst: bool) -> Self {
        assert!(
            utc_offset >= -23 && utc_offset <= 23,
            "UTC offset must be within -23..=23 hours"
        );
        Self {
            utc_offset,
            observes_dst,
            sentence_key: GPRMC,
        }
    }

    /// Replace the expected sentence key, which must be six characters long like `$GPRMC`.
    pub const fn with_sentence_key(self, sentence_key: &'static str) -> Self {
        assert!(sentence_key.len() == 6, "sentence key must be six characters");
        Self {
            sentence_key,
            ..self
        }
    }

    pub const fn utc_offset(&self) -> i8 {
        self.utc_offset
    }

    pub const fn observes_dst(&self) -> bool {
        self.observes_dst
    }

    pub const fn sentence_key(&self) -> &'static str {
        self.sentence_key
    }
}

impl Default for ClockConfig {
    /// Mountain Standard Time with DST, listening to `$GPRMC`.
    fn default() -> Self {
        Self::new(MOUNTAIN, true)
    }
}
