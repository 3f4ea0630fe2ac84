//! Bipolar (three-level) codes.
//!
//! One bit value idles the line at `NoLine`; the other is sent as a pulse whose
//! polarity alternates from the previous pulse. Bipolar-AMI pulses on `1`,
//! Pseudoternary pulses on `0`. Decoding only looks at pulse presence: polarity
//! carries no information beyond what [`ViolationCheck`] inspects.

use signal::{Bit, Level};

use crate::config::CodecConfig;
use crate::error::LineCodeResult;
use crate::scheme::{symbol_levels, LineCode, Scheme};
use crate::violation::ViolationCheck;

/// Shared AMI/Pseudoternary rule, parameterized by the bit value that pulses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Bipolar {
    mark: Bit,
}

impl Bipolar {
    const AMI: Self = Self { mark: Bit::One };
    const PSEUDOTERNARY: Self = Self { mark: Bit::Zero };

    /// State is the polarity of the last pulse; idle intervals leave it alone.
    fn encode_bit(self, state: Level, bit: Bit, out: &mut Vec<Level>) -> Level {
        if bit == self.mark {
            let pulse = state.toggled();
            out.push(pulse);
            pulse
        } else {
            out.push(Level::NoLine);
            state
        }
    }

    fn decode_level(self, level: Level) -> Bit {
        if level.is_pulse() {
            self.mark
        } else {
            !self.mark
        }
    }
}

/// Bipolar alternate mark inversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BipolarAmi {
    config: CodecConfig,
}

impl BipolarAmi {
    #[must_use]
    pub const fn new() -> Self {
        Self::with_config(CodecConfig::DEFAULT)
    }

    #[must_use]
    pub const fn with_config(config: CodecConfig) -> Self {
        Self { config }
    }
}

impl LineCode for BipolarAmi {
    fn scheme(&self) -> Scheme {
        Scheme::BipolarAmi
    }

    fn config(&self) -> &CodecConfig {
        &self.config
    }

    fn encode_bit(&self, state: Level, bit: Bit, out: &mut Vec<Level>) -> Level {
        Bipolar::AMI.encode_bit(state, bit, out)
    }

    fn decode_symbol(
        &self,
        state: Level,
        symbol: &[Level],
        bit_index: usize,
    ) -> LineCodeResult<(Level, Bit)> {
        let [level] = symbol_levels(Scheme::BipolarAmi, symbol, bit_index)?;
        Ok((state, Bipolar::AMI.decode_level(level)))
    }

    fn violation_check(&self) -> Option<&dyn ViolationCheck> {
        Some(self)
    }
}

impl ViolationCheck for BipolarAmi {}

/// AMI with the bit roles swapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pseudoternary {
    config: CodecConfig,
}

impl Pseudoternary {
    #[must_use]
    pub const fn new() -> Self {
        Self::with_config(CodecConfig::DEFAULT)
    }

    #[must_use]
    pub const fn with_config(config: CodecConfig) -> Self {
        Self { config }
    }
}

impl LineCode for Pseudoternary {
    fn scheme(&self) -> Scheme {
        Scheme::Pseudoternary
    }

    fn config(&self) -> &CodecConfig {
        &self.config
    }

    fn encode_bit(&self, state: Level, bit: Bit, out: &mut Vec<Level>) -> Level {
        Bipolar::PSEUDOTERNARY.encode_bit(state, bit, out)
    }

    fn decode_symbol(
        &self,
        state: Level,
        symbol: &[Level],
        bit_index: usize,
    ) -> LineCodeResult<(Level, Bit)> {
        let [level] = symbol_levels(Scheme::Pseudoternary, symbol, bit_index)?;
        Ok((state, Bipolar::PSEUDOTERNARY.decode_level(level)))
    }

    fn violation_check(&self) -> Option<&dyn ViolationCheck> {
        Some(self)
    }
}

impl ViolationCheck for Pseudoternary {}
