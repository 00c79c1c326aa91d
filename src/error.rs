//! # Error Types
//!
//! This module defines the error types used throughout the NMEA parsing library.

use thiserror::Error;

/// Represents all possible reasons a sentence can be rejected by [`parse`](crate::parse).
///
/// Errors are returned as values; the caller decides whether to log, skip or abort.
/// A record is never partially populated: extraction either succeeds completely or
/// yields one of these tags.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ParseError {
    /// A latitude or longitude direction letter is absent or illegal for its axis.
    #[error("invalid latitude or longitude direction")]
    InvalidDirection,

    /// The checksum section is missing, malformed or does not match the payload.
    #[error("invalid sentence format or checksum")]
    InvalidFormat,

    /// The sentence has fewer tokens than its type requires, or a required
    /// numeric field could not be parsed.
    #[error("missing or malformed fields")]
    MissingFields,

    /// An unknown error occurred.
    ///
    /// This is a catch-all for unexpected error conditions.
    #[error("unknown error")]
    UnknownError,

    /// The sentence identifier is not one of the supported sentence types.
    #[error("unsupported sentence type")]
    UnsupportedType,
}

/// Failure conditions of the individual field parsers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The text is not a complete numeric literal.
    #[error("malformed number {0:?}")]
    MalformedNumber(String),

    /// A fixed-width field is shorter than its layout requires.
    #[error("field {field:?} is shorter than {length} characters")]
    TooShort {
        /// The offending field
        field: String,
        /// The length required by the field layout
        length: usize,
    },

    /// The field parsed as a number but does not describe a valid time or date.
    #[error("value out of range in {0:?}")]
    OutOfRange(String),
}

impl From<FieldError> for ParseError {
    fn from(_: FieldError) -> Self {
        ParseError::MissingFields
    }
}

/// Reasons a sentence fails checksum validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChecksumError {
    /// No `*` delimiter, or nothing after it.
    #[error("sentence carries no checksum")]
    Missing,

    /// The transmitted checksum differs from the one calculated over the payload.
    ///
    /// The comparison is textual: `7b` and `07B` do not match `7B`.
    #[error("calculated checksum {expected} does not match transmitted {found:?}")]
    Mismatch {
        /// The checksum calculated from the payload, as two uppercase hex digits
        expected: String,
        /// The checksum text found in the sentence
        found: String,
    },
}

impl From<ChecksumError> for ParseError {
    fn from(_: ChecksumError) -> Self {
        ParseError::InvalidFormat
    }
}
