//! # Error Types
//!
//! Errors raised while turning documents into canonical bytes or parsing
//! the textual encodings used on the wire.

use thiserror::Error;

/// A document could not be canonicalized.
///
/// Fatal for the signing or verification operation that requested the
/// encoding; never retried.
#[derive(Error, Debug)]
pub enum EncodingError {
    /// Non-integer numbers have no stable canonical form and are rejected.
    /// This also covers NaN and the infinities.
    #[error("float values are not permitted in canonical documents: {0}")]
    FloatRejected(f64),

    /// The value could not be serialized to JSON (e.g. a map with
    /// non-string keys).
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A hex string could not be decoded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HexError {
    /// Hex strings encode whole bytes.
    #[error("hex string must have even length, got {0}")]
    OddLength(usize),

    /// A character outside `[0-9a-fA-F]`.
    #[error("invalid hex digit at position {0}")]
    InvalidDigit(usize),

    /// Decoded length does not match the fixed-size target.
    #[error("expected {expected} bytes, got {actual}")]
    WrongLength {
        /// Required byte length.
        expected: usize,
        /// Decoded byte length.
        actual: usize,
    },
}

/// A timestamp string was not an RFC 3339 UTC instant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimestampError {
    /// Only the `Z` suffix is accepted; explicit offsets, even `+00:00`,
    /// would give the same instant two encodings.
    #[error("timestamp must use Z suffix (UTC only), got: {0:?}")]
    NotUtc(String),

    /// Not parseable as RFC 3339.
    #[error("invalid RFC 3339 timestamp {input:?}: {reason}")]
    Invalid {
        /// The rejected input.
        input: String,
        /// Parser message.
        reason: String,
    },
}
