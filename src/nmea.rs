//! Decoding of the UTC time and date of an NMEA 0183 RMC sentence.
//!
//! Only the key, time and date fields are looked at; the checksum is not verified.

use core::ops::RangeInclusive;
use heapless::Vec;

use crate::calendar::days_in_month;
use crate::error::{Field, SentenceError};
use crate::DateTime;

/// Maximum length of an NMEA 0183 sentence, from `$` through the line terminator.
pub const MAX_SENTENCE_LEN: usize = 82;

/// Position of the `hhmmss.sss` UTC time field, counting the key as field 0.
pub const TIME_FIELD: usize = 1;
/// Position of the `ddmmyy` UTC date field.
pub const DATE_FIELD: usize = 9;

/**
 * Decode the UTC date and time of an RMC sentence.
 *
 * Fields are addressed by position, so empty fields in between (e.g. speed before a fix) are
 * fine. A trailing `\r\n` is ignored.
 *
 * # Arguments
 * * `line` - the sentence, starting with its key, e.g. `$GPRMC,...`
 * * `key` - the expected key, other sentences yield [`SentenceError::UnexpectedKey`]
 */
pub fn decode_rmc(line: &[u8], key: &str) -> Result<DateTime, SentenceError> {
    let line = line
        .strip_suffix(b"\r\n")
        .or_else(|| line.strip_suffix(b"\n"))
        .unwrap_or(line);
    let mut fields = line.split(|&b| b == b',');

    if fields.next() != Some(key.as_bytes()) {
        return Err(SentenceError::UnexpectedKey);
    }
    let time = fields.next().ok_or(SentenceError::MissingField(Field::Hour))?;
    let date = fields
        .nth(DATE_FIELD - TIME_FIELD - 1)
        .ok_or(SentenceError::MissingField(Field::Day))?;

    let hour = decimal_pair(time, 0, Field::Hour, 0..=23)?;
    let minute = decimal_pair(time, 2, Field::Minute, 0..=59)?;
    let second = decimal_pair(time, 4, Field::Second, 0..=60)?; // leap second
    let day = decimal_pair(date, 0, Field::Day, 1..=31)?;
    let month = decimal_pair(date, 2, Field::Month, 1..=12)?;
    let year = decimal_pair(date, 4, Field::Year, 0..=99)?;
    if days_in_month(month, year).is_some_and(|last| day > last) {
        return Err(SentenceError::OutOfRange {
            field: Field::Day,
            value: day,
        });
    }

    Ok(DateTime::new(year, month, day, hour, minute, second))
}

/// Returns the value of two ASCII digits at `at` in `field`, checked against `range`.
fn decimal_pair(
    field: &[u8],
    at: usize,
    which: Field,
    range: RangeInclusive<u8>,
) -> Result<u8, SentenceError> {
    let Some(&[c0, c1]) = field.get(at..at + 2) else {
        return Err(SentenceError::MissingField(which));
    };
    if !c0.is_ascii_digit() || !c1.is_ascii_digit() {
        return Err(SentenceError::InvalidInput(which));
    }
    let value = 10 * (c0 - b'0') + (c1 - b'0');
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(SentenceError::OutOfRange {
            field: which,
            value,
        })
    }
}

/// Collects received bytes into complete sentences.
///
/// A `$` starts a new sentence, `\n` ends it and `\r` is dropped. A sentence longer than `N`
/// bytes is thrown away as a whole.
pub struct SentenceBuffer<const N: usize = MAX_SENTENCE_LEN> {
    buffer: Vec<u8, N>,
    overflow: bool,
    complete: bool,
}

impl<const N: usize> Default for SentenceBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> SentenceBuffer<N> {
    pub const fn new() -> Self {
        Self {
            buffer: Vec::new(),
            overflow: false,
            complete: false,
        }
    }

    /// Add a received byte, returning the sentence (without terminator) once `\n` arrives.
    pub fn push(&mut self, byte: u8) -> Option<&[u8]> {
        if self.complete {
            self.buffer.clear();
            self.complete = false;
        }
        match byte {
            b'$' => {
                if !self.buffer.is_empty() {
                    log::debug!("dropping unterminated sentence of {} bytes", self.buffer.len());
                }
                self.buffer.clear();
                self.overflow = false;
                let _ = self.buffer.push(byte);
                None
            }
            b'\r' => None,
            b'\n' => {
                if self.overflow {
                    log::debug!("dropping sentence longer than {} bytes", N);
                    self.buffer.clear();
                    self.overflow = false;
                    return None;
                }
                if self.buffer.is_empty() {
                    return None;
                }
                self.complete = true;
                Some(&self.buffer[..])
            }
            _ => {
                if self.buffer.push(byte).is_err() {
                    self.overflow = true;
                }
                None
            }
        }
    }

    /// Drop any partially received sentence.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.overflow = false;
        self.complete = false;
    }
}
