//! Error types for line-code operations.

use std::fmt;

use signal::{Level, SignalError};

use crate::scheme::Scheme;

/// Result type for line-code operations.
pub type LineCodeResult<T> = Result<T, LineCodeError>;

/// Errors that can occur while configuring a line code or decoding a trace.
///
/// Encoding never fails: every bit sequence has an encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineCodeError {
    /// Alphabet conversion error.
    Signal(SignalError),

    /// The assumed preceding level must carry a polarity.
    InvalidInitialLevel { level: Level },

    /// Scheme name not recognized.
    UnknownScheme { name: String },

    /// Scheme has no bipolar violation rule.
    ViolationCheckUnsupported { scheme: Scheme },

    /// Level not used by the scheme (strict mode only).
    InvalidLevel {
        scheme: Scheme,
        /// Level index in the trace.
        position: usize,
        level: Level,
    },

    /// Two-interval symbol without a mid-bit transition (strict mode only).
    MissingMidBitTransition {
        scheme: Scheme,
        /// Index of the bit being decoded.
        bit_index: usize,
        first: Level,
        second: Level,
    },

    /// Trace ended halfway through a two-interval symbol (strict mode only).
    TrailingInterval {
        scheme: Scheme,
        /// Level index of the unpaired interval.
        position: usize,
    },

    /// Stream decoder used again after rejecting a symbol, without a reset.
    StreamHalted {
        scheme: Scheme,
        /// Index of the rejected bit.
        bit_index: usize,
    },
}

impl fmt::Display for LineCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Signal(e) => write!(f, "signal error: {e}"),
            Self::InvalidInitialLevel { level } => {
                write!(f, "initial level must be HIGH or LOW, got {level}")
            }
            Self::UnknownScheme { name } => write!(f, "unknown line code {name:?}"),
            Self::ViolationCheckUnsupported { scheme } => {
                write!(f, "{scheme} has no bipolar violation rule")
            }
            Self::InvalidLevel {
                scheme,
                position,
                level,
            } => {
                write!(f, "{scheme} does not use {level} (level {position})")
            }
            Self::MissingMidBitTransition {
                scheme,
                bit_index,
                first,
                second,
            } => {
                write!(
                    f,
                    "{scheme} bit {bit_index} has no mid-bit transition: {first} then {second}"
                )
            }
            Self::TrailingInterval { scheme, position } => {
                write!(
                    f,
                    "{scheme} trace ends with an unpaired interval at level {position}"
                )
            }
            Self::StreamHalted { scheme, bit_index } => {
                write!(
                    f,
                    "{scheme} stream decoder halted at bit {bit_index}; reset before reuse"
                )
            }
        }
    }
}

impl std::error::Error for LineCodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Signal(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SignalError> for LineCodeError {
    fn from(err: SignalError) -> Self {
        Self::Signal(err)
    }
}
