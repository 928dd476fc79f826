//! Error types for decoding, interpolation and share documents.

use num_bigint::BigInt;

use crate::constants::types::Index;

/// Errors raised while decoding a digit string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The base lies outside `2..=36`.
    #[error("invalid base {0}: must be between 2 and 36")]
    InvalidBase(u32),

    /// A character is not a digit of the declared base.
    #[error("invalid digit '{digit}' at position {position} for base {base}")]
    InvalidDigit {
        /// Offending character as written in the input.
        digit: char,
        /// Zero-based character position in the digit string.
        position: usize,
        /// Declared base.
        base: u32,
    },

    /// The digit string has no characters.
    #[error("empty digit string")]
    EmptyDigits,
}

/// Errors raised while reconstructing a secret from shares.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InterpolationError {
    /// A threshold of zero points was requested.
    #[error("threshold must be at least 1")]
    InvalidThreshold,

    /// Fewer usable points than the threshold.
    #[error("not enough points to solve polynomial: have {available}, need {required}")]
    InsufficientPoints {
        /// Points available after skipping missing entries.
        available: usize,
        /// Threshold k.
        required: usize,
    },

    /// Two selected shares carry the same index, so a Lagrange denominator is zero.
    #[error("duplicate share index {0}")]
    DuplicateIndex(Index),

    /// An explicitly selected index has no decoded share.
    #[error("no share with index {0}")]
    UnknownIndex(Index),

    /// The weighted sum is not divisible by the common denominator.
    #[error("inexact reconstruction: {numerator} is not divisible by {denominator}")]
    InexactReconstruction {
        /// Weighted sum of the share values over the common denominator.
        numerator: BigInt,
        /// Common denominator of the Lagrange terms.
        denominator: BigInt,
    },
}

/// Errors raised while reading or validating a share document.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("failed to read share document: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed share document: {0}")]
    Json(#[from] serde_json::Error),

    /// `n` or `k` is zero.
    #[error("invalid threshold pair: n = {n}, k = {k}")]
    InvalidKeys { n: u64, k: u64 },

    /// An entry is present but is not a `{ "base": ..., "value": ... }` object of strings.
    #[error("malformed entry {index}: {source}")]
    MalformedEntry {
        index: Index,
        #[source]
        source: serde_json::Error,
    },

    /// The base field of an entry is not a decimal integer.
    #[error("invalid base {base:?} at entry {index}")]
    MalformedBase { index: Index, base: String },

    /// A negative share value cannot be written as a digit string.
    #[error("share {index} has a negative value")]
    NegativeValue { index: Index },

    /// The base or value of an entry failed to decode.
    #[error("entry {index}: {source}")]
    Entry {
        index: Index,
        #[source]
        source: DecodeError,
    },
}

/// Any error produced by the crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Interpolation(#[from] InterpolationError),

    #[error(transparent)]
    Document(#[from] DocumentError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
