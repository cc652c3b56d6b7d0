//! Error types for sentence decoding and DST evaluation.

/// Field of an RMC sentence, used to report where decoding failed.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Key,
    Hour,
    Minute,
    Second,
    Day,
    Month,
    Year,
}

impl core::fmt::Display for Field {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::Key => "key",
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
            Self::Day => "day",
            Self::Month => "month",
            Self::Year => "year",
        })
    }
}

/// Reasons for discarding a navigation sentence.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SentenceError {
    /// Leading key is not the expected one, e.g. another sentence type.
    #[error("unexpected sentence key")]
    UnexpectedKey,

    #[error("missing {0} field")]
    MissingField(Field),

    /// A byte where a decimal digit was expected.
    #[error("non-numeric input in {0} field")]
    InvalidInput(Field),

    #[error("{field} value {value} is out of range")]
    OutOfRange { field: Field, value: u8 },
}

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The sentence was discarded, the last valid date/time stays in effect.
    #[error("malformed sentence: {0}")]
    MalformedSentence(#[from] SentenceError),

    /// DST was evaluated for a month outside 1..=12, which callers must never do.
    #[error("month {0} is outside 1..=12")]
    UnreachableMonth(u8),
}

pub type Result<T> = core::result::Result<T, Error>;
