//! Physical line levels.

use std::fmt;

use crate::error::{SignalError, SignalResult};

/// Instantaneous signal level for one signal interval.
///
/// The numeric form follows the usual convention of `+1` for [`Level::High`],
/// `-1` for [`Level::Low`] and `0` for [`Level::NoLine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Level {
    High,
    Low,
    NoLine,
}

impl Level {
    /// Returns the numeric amplitude (`+1`, `-1` or `0`).
    #[must_use]
    pub const fn as_i8(self) -> i8 {
        match self {
            Self::High => 1,
            Self::Low => -1,
            Self::NoLine => 0,
        }
    }

    /// Returns `true` for a non-zero pulse.
    #[must_use]
    pub const fn is_pulse(self) -> bool {
        !matches!(self, Self::NoLine)
    }

    /// Returns the opposite polarity.
    ///
    /// `Low` becomes `High`; every other level becomes `Low`.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Low => Self::High,
            Self::High | Self::NoLine => Self::Low,
        }
    }

    /// Returns the character used in level strings.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::High => '+',
            Self::Low => '-',
            Self::NoLine => '0',
        }
    }

    /// Parses a single level character (`+`, `-`, `0`, or `H`/`L`/`N`).
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '+' | 'H' | 'h' => Some(Self::High),
            '-' | 'L' | 'l' => Some(Self::Low),
            '0' | 'N' | 'n' => Some(Self::NoLine),
            _ => None,
        }
    }

    /// Converts a sequence of raw amplitudes, failing on the first value
    /// outside the alphabet.
    pub fn from_i8_slice(values: &[i8]) -> SignalResult<Vec<Self>> {
        values.iter().map(|&value| Self::try_from(value)).collect()
    }
}

impl TryFrom<i8> for Level {
    type Error = SignalError;

    fn try_from(value: i8) -> SignalResult<Self> {
        match value {
            1 => Ok(Self::High),
            -1 => Ok(Self::Low),
            0 => Ok(Self::NoLine),
            _ => Err(SignalError::LevelOutOfRange { value }),
        }
    }
}

impl From<Level> for i8 {
    fn from(level: Level) -> Self {
        level.as_i8()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::High => "HIGH",
            Self::Low => "LOW",
            Self::NoLine => "NO_LINE",
        };
        write!(f, "{name}")
    }
}
