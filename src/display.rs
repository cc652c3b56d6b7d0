//! Projection of the local time onto a six-digit seven-segment display.

use core::ops::Range;
use core::sync::atomic::{AtomicBool, Ordering};

use crate::DateTime;

/// Number of digits on the display, `hh mm ss`.
pub const DIGITS: usize = 6;

/// Number of LEDs making up one segment.
pub const LEDS_PER_SEGMENT: usize = 12;

/// Segments of a digit, in the order their LED strings are chained.
///
/// ```text
///    A
/// F     B
///    G
/// E     C
///    D
/// ```
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    D = 0,
    C = 1,
    B = 2,
    A = 3,
    F = 4,
    G = 5,
    E = 6,
}

impl Segment {
    /// All segments in chain order.
    pub const ALL: [Segment; 7] = [
        Segment::D,
        Segment::C,
        Segment::B,
        Segment::A,
        Segment::F,
        Segment::G,
        Segment::E,
    ];

    /// Indexes of the LEDs of this segment within its digit.
    pub const fn pixel_range(self) -> Range<usize> {
        let start = self as usize * LEDS_PER_SEGMENT;
        start..start + LEDS_PER_SEGMENT
    }

    const fn mask(self) -> u8 {
        1 << self as u8
    }
}

/// Set of lit segments of one digit.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Segments(u8);

impl Segments {
    pub const NONE: Segments = Segments(0);

    pub const fn from_segments(segments: &[Segment]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < segments.len() {
            bits |= segments[i].mask();
            i += 1;
        }
        Segments(bits)
    }

    pub const fn contains(self, segment: Segment) -> bool {
        self.0 & segment.mask() != 0
    }

    /// Bit set indexed by chain position, bit 0 is segment D.
    pub const fn bits(self) -> u8 {
        self.0
    }
}

use Segment::{A, B, C, D, E, F, G};

/// Lit segments of the decimal digits 0 through 9.
pub const DIGIT_SEGMENTS: [Segments; 10] = [
    Segments::from_segments(&[A, B, C, D, E, F]),
    Segments::from_segments(&[B, C]),
    Segments::from_segments(&[A, B, D, E, G]),
    Segments::from_segments(&[A, B, C, D, G]),
    Segments::from_segments(&[B, C, F, G]),
    Segments::from_segments(&[A, C, D, F, G]),
    Segments::from_segments(&[A, C, D, E, F, G]),
    Segments::from_segments(&[A, B, C]),
    Segments::from_segments(&[A, B, C, D, E, F, G]),
    Segments::from_segments(&[A, B, C, D, F, G]),
];

/// Returns the lit segments of a decimal digit, or None if `digit` is larger than 9.
pub fn segments_for_digit(digit: u8) -> Option<Segments> {
    DIGIT_SEGMENTS.get(usize::from(digit)).copied()
}

/// The six digits to render.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayTime {
    digits: [u8; DIGITS],
}

impl DisplayTime {
    /// Shown until the first sentence has been decoded.
    pub const UNSYNCHRONIZED: DisplayTime = DisplayTime { digits: [8; DIGITS] };

    /**
     * Project a local standard time onto the display.
     *
     * # Arguments
     * * `local` - date and time in local standard time, left untouched
     * * `dst` - whether DST is in effect, which adds an hour (wrapping 23 to 0)
     */
    pub fn project(local: &DateTime, dst: bool) -> Self {
        let hour = if dst { (local.hour + 1) % 24 } else { local.hour };
        Self {
            digits: [
                hour / 10,
                hour % 10,
                local.minute_tens,
                local.minute_ones,
                local.second_tens,
                local.second_ones,
            ],
        }
    }

    /// Digits from the hour tens down to the second ones.
    pub fn digits(&self) -> [u8; DIGITS] {
        self.digits
    }

    pub fn hour(&self) -> u8 {
        self.digits[0] * 10 + self.digits[1]
    }

    /// Segment patterns in the same order as [`DisplayTime::digits`].
    pub fn segments(&self) -> [Segments; DIGITS] {
        self.digits
            .map(|digit| segments_for_digit(digit).unwrap_or(Segments::NONE))
    }
}

/// Blinking colon state, toggled from a periodic timer and picked up by the render loop.
pub struct ColonBlink {
    colon: AtomicBool,
    updated: AtomicBool,
}

impl Default for ColonBlink {
    fn default() -> Self {
        Self::new()
    }
}

impl ColonBlink {
    pub const fn new() -> Self {
        Self {
            colon: AtomicBool::new(false),
            updated: AtomicBool::new(true),
        }
    }

    /// Flip the colon; called from the timer interrupt.
    pub fn tick(&self) {
        let colon = !self.colon.load(Ordering::Relaxed);
        self.colon.store(colon, Ordering::Relaxed);
        self.updated.store(false, Ordering::Release);
    }

    /// Returns the colon state once after each tick, None if it has already been rendered.
    pub fn poll(&self) -> Option<bool> {
        if self.updated.load(Ordering::Acquire) {
            return None;
        }
        self.updated.store(true, Ordering::Relaxed);
        Some(self.colon.load(Ordering::Relaxed))
    }
}
