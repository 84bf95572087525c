//! Error types for bit word operations.

use thiserror::Error;

/// Error variants for bit word operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A bit index was provided outside `0..64`.
    #[error("index out of bounds: {0}")]
    IndexOutOfBounds(usize),

    /// A textual word did not contain exactly 64 binary digits.
    #[error("invalid length: expected 64 digits, got {0}")]
    InvalidLength(usize),

    /// A textual word contained something other than `0` or `1`.
    #[error("invalid digit {digit:?} at position {position}")]
    InvalidDigit {
        /// The offending character.
        digit: char,
        /// Character offset from the start of the digits (most significant first).
        position: usize,
    },
}

/// A specialized Result type for bit word operations.
pub type Result<T> = std::result::Result<T, Error>;
