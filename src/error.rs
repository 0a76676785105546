//! Error types for parsing and formatting.
//!
//! None of these escape the top-level rendering functions, which are total;
//! they travel between the internal stages until a fallback is chosen.

use thiserror::Error;

/// Errors that can occur when parsing a decimal pattern.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("unexpected character at position {position}: found '{found}'")]
    UnexpectedChar { position: usize, found: char },

    #[error("unterminated quote starting at position {position}")]
    UnterminatedQuote { position: usize },

    #[error("second decimal point at position {position}")]
    MultipleDecimalPoints { position: usize },

    #[error("malformed exponent at position {position}")]
    MalformedExponent { position: usize },

    #[error("pattern has no digit placeholders")]
    NoDigits,

    #[error("too many sections (maximum 2 allowed)")]
    TooManySections,

    #[error("empty pattern")]
    EmptyPattern,
}

/// Errors that can occur when rendering a value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    #[error("date out of range: serial number {serial}")]
    DateOutOfRange { serial: f64 },

    #[error("invalid serial number: {value}")]
    InvalidSerialNumber { value: f64 },

    #[error("unsupported numeral system in pattern {pattern:?}")]
    UnsupportedNumeralSystem { pattern: String },

    #[error(transparent)]
    Pattern(#[from] ParseError),
}

/// Error returned when a cell address is not valid A1 notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid cell address: {0:?}")]
pub struct AddressError(pub String);
