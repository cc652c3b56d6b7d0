//! The current local date/time, as maintained from incoming sentences.

use core::cell::Cell;
use embassy_sync::blocking_mutex::CriticalSectionMutex;

use crate::config::ClockConfig;
use crate::display::DisplayTime;
use crate::dst::{DstRule, UsDstRule};
use crate::error::{Error, Result, SentenceError};
use crate::nmea::{decode_rmc, SentenceBuffer};
use crate::normalize::apply_utc_offset;
use crate::DateTime;

/// Keeps the latest local standard date/time decoded from the receiver.
///
/// The clock is the single writer of its value. Readers in other execution contexts get
/// their copy through a [`SharedDateTime`].
pub struct GpsClock<R: DstRule = UsDstRule> {
    config: ClockConfig,
    rule: R,
    current: DateTime,
    synchronized: bool,
    buffer: SentenceBuffer,
}

impl GpsClock<UsDstRule> {
    /// Create a clock using the U.S. DST rule.
    pub const fn new(config: ClockConfig) -> Self {
        Self::with_rule(config, UsDstRule)
    }
}

impl<R: DstRule> GpsClock<R> {
    pub const fn with_rule(config: ClockConfig, rule: R) -> Self {
        Self {
            config,
            rule,
            current: DateTime::new(0, 1, 1, 0, 0, 0),
            synchronized: false,
            buffer: SentenceBuffer::new(),
        }
    }

    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    /// Latest local standard date/time, or 2000-01-01 00:00:00 before the first fix.
    pub fn current_local_date_time(&self) -> DateTime {
        self.current
    }

    /// Returns if at least one sentence has been decoded since power-up.
    pub fn is_synchronized(&self) -> bool {
        self.synchronized
    }

    /// Returns if DST is in effect at the given local standard time.
    ///
    /// Always false when the configured region does not observe DST.
    pub fn is_dst_active(&self, local: &DateTime) -> bool {
        self.config.observes_dst() && self.rule.in_dst(local)
    }

    /**
     * Decode a sentence and, if it is a valid RMC sentence, replace the current date/time.
     *
     * On error the current date/time is left alone, so the clock keeps showing the last
     * valid reading.
     *
     * # Arguments
     * * `line` - one sentence, with or without its `\r\n` terminator
     */
    pub fn ingest(&mut self, line: &[u8]) -> Result<DateTime> {
        let local = normalize_sentence(&self.config, line);
        self.commit(local)
    }

    /// Add one received byte, updating the clock when it completes a sentence.
    ///
    /// Returns None while a sentence is still incomplete.
    pub fn receive(&mut self, byte: u8) -> Option<Result<DateTime>> {
        let line = self.buffer.push(byte)?;
        let local = normalize_sentence(&self.config, line);
        Some(self.commit(local))
    }

    /// What to render right now: DST-adjusted time, or 88:88:88 before the first fix.
    pub fn display_time(&self) -> DisplayTime {
        if !self.synchronized {
            return DisplayTime::UNSYNCHRONIZED;
        }
        DisplayTime::project(&self.current, self.is_dst_active(&self.current))
    }

    fn commit(&mut self, local: core::result::Result<DateTime, SentenceError>) -> Result<DateTime> {
        match local {
            Ok(local) => {
                log::trace!("local standard time {}", local);
                self.current = local;
                self.synchronized = true;
                Ok(local)
            }
            Err(SentenceError::UnexpectedKey) => {
                log::trace!("ignoring sentence of another type");
                Err(Error::from(SentenceError::UnexpectedKey))
            }
            Err(err) => {
                log::debug!("discarding sentence: {}", err);
                Err(err.into())
            }
        }
    }
}

fn normalize_sentence(
    config: &ClockConfig,
    line: &[u8],
) -> core::result::Result<DateTime, SentenceError> {
    let utc = decode_rmc(line, config.sentence_key())?;
    Ok(apply_utc_offset(utc, config.utc_offset()))
}

/// Single-slot mailbox handing the latest date/time to another execution context.
///
/// Each update replaces the whole record inside a critical section, so a reader never sees a
/// half-written value.
pub struct SharedDateTime {
    slot: CriticalSectionMutex<Cell<Option<DateTime>>>,
}

impl Default for SharedDateTime {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedDateTime {
    pub const fn new() -> Self {
        Self {
            slot: CriticalSectionMutex::new(Cell::new(None)),
        }
    }

    pub fn publish(&self, local: DateTime) {
        self.slot.lock(|slot| slot.set(Some(local)));
    }

    /// Latest published value, None if nothing was published yet.
    pub fn latest(&self) -> Option<DateTime> {
        self.slot.lock(Cell::get)
    }
}
