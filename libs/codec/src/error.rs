//! Error types for identifier conversion.

use thiserror::Error;

/// Errors that can occur when converting between hex and Base32 forms.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The input has the wrong number of characters.
    ///
    /// For hex input `expected` is the maximum length after the `0x` prefix
    /// is removed; for Base32 input it is the exact length.
    #[error("invalid length: expected {expected} characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// A character outside the accepted alphabet was found.
    #[error("invalid character {character:?} at position {index}")]
    InvalidCharacter { character: char, index: usize },

    /// The leading Base32 symbol sets bits above the 128-bit range.
    #[error("identifier overflows 128 bits: leading symbol {symbol:?} is above '7'")]
    Overflow { symbol: char },

    /// Only radix 10 and 16 are rendered.
    #[error("unsupported radix {0}: expected 10 or 16")]
    UnsupportedRadix(String),

    /// The timestamp cannot be represented as a calendar date.
    #[error("timestamp {0} ms is out of range")]
    TimestampOutOfRange(u64),
}

impl CodecError {
    /// Returns true if this error indicates the input had the wrong length.
    pub fn is_length_error(&self) -> bool {
        matches!(self, CodecError::InvalidLength { .. })
    }

    /// Returns true if this error indicates a character outside the alphabet.
    pub fn is_character_error(&self) -> bool {
        matches!(self, CodecError::InvalidCharacter { .. })
    }
}
