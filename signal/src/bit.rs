//! Logical bit values.

use std::fmt;
use std::ops::Not;

use crate::error::{SignalError, SignalResult};

/// A single logical bit of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Bit {
    #[default]
    Zero,
    One,
}

impl Bit {
    /// Returns the bit as `0` or `1`.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Zero => 0,
            Self::One => 1,
        }
    }

    /// Returns `true` for [`Bit::One`].
    #[must_use]
    pub const fn is_one(self) -> bool {
        matches!(self, Self::One)
    }

    /// Returns the character used in bit strings.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Zero => '0',
            Self::One => '1',
        }
    }

    /// Converts a sequence of raw `0`/`1` values, failing on the first value
    /// outside the alphabet.
    pub fn from_u8_slice(values: &[u8]) -> SignalResult<Vec<Self>> {
        values.iter().map(|&value| Self::try_from(value)).collect()
    }
}

impl From<bool> for Bit {
    fn from(value: bool) -> Self {
        if value {
            Self::One
        } else {
            Self::Zero
        }
    }
}

impl From<Bit> for bool {
    fn from(bit: Bit) -> Self {
        bit.is_one()
    }
}

impl From<Bit> for u8 {
    fn from(bit: Bit) -> Self {
        bit.as_u8()
    }
}

impl TryFrom<u8> for Bit {
    type Error = SignalError;

    fn try_from(value: u8) -> SignalResult<Self> {
        match value {
            0 => Ok(Self::Zero),
            1 => Ok(Self::One),
            _ => Err(SignalError::BitOutOfRange { value }),
        }
    }
}

impl Not for Bit {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Self::Zero => Self::One,
            Self::One => Self::Zero,
        }
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}
