//! Error types for alphabet conversions.

use std::fmt;

/// Result type for signal alphabet operations.
pub type SignalResult<T> = Result<T, SignalError>;

/// Errors raised when a value outside the bit or level alphabet crosses the
/// boundary into typed form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignalError {
    /// Numeric bit value other than 0 or 1.
    BitOutOfRange {
        /// The rejected value.
        value: u8,
    },

    /// Numeric level value other than -1, 0 or +1.
    LevelOutOfRange {
        /// The rejected value.
        value: i8,
    },

    /// Character in a bit string that is neither a bit nor a separator.
    InvalidBitChar {
        /// The rejected character.
        ch: char,
        /// Character position in the input.
        position: usize,
    },

    /// Character in a level string that is neither a level nor a separator.
    InvalidLevelChar {
        /// The rejected character.
        ch: char,
        /// Character position in the input.
        position: usize,
    },
}

impl fmt::Display for SignalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BitOutOfRange { value } => {
                write!(f, "bit value {value} is outside {{0, 1}}")
            }
            Self::LevelOutOfRange { value } => {
                write!(f, "level value {value} is outside {{-1, 0, +1}}")
            }
            Self::InvalidBitChar { ch, position } => {
                write!(f, "invalid bit character {ch:?} at position {position}")
            }
            Self::InvalidLevelChar { ch, position } => {
                write!(f, "invalid level character {ch:?} at position {position}")
            }
        }
    }
}

impl std::error::Error for SignalError {}
