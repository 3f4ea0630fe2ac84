//! Non-return-to-zero codes.
//!
//! - NRZ-L: the level itself carries the bit (`1` = LOW, `0` = HIGH).
//! - NRZ-I: a transition at the start of the interval carries a `1`, no
//!   transition carries a `0`.

use signal::{Bit, Level};

use crate::config::CodecConfig;
use crate::error::LineCodeResult;
use crate::scheme::{require_polarity, symbol_levels, LineCode, Scheme};

/// NRZ-Level. Stateless: one level per bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NrzL {
    config: CodecConfig,
}

impl NrzL {
    #[must_use]
    pub const fn new() -> Self {
        Self::with_config(CodecConfig::DEFAULT)
    }

    #[must_use]
    pub const fn with_config(config: CodecConfig) -> Self {
        Self { config }
    }
}

impl LineCode for NrzL {
    fn scheme(&self) -> Scheme {
        Scheme::NrzL
    }

    fn config(&self) -> &CodecConfig {
        &self.config
    }

    fn encode_bit(&self, state: Level, bit: Bit, out: &mut Vec<Level>) -> Level {
        out.push(match bit {
            Bit::One => Level::Low,
            Bit::Zero => Level::High,
        });
        state
    }

    fn decode_symbol(
        &self,
        state: Level,
        symbol: &[Level],
        bit_index: usize,
    ) -> LineCodeResult<(Level, Bit)> {
        let [level] = symbol_levels(Scheme::NrzL, symbol, bit_index)?;
        require_polarity(Scheme::NrzL, &self.config, level, bit_index)?;
        let bit = match level {
            Level::Low => Bit::One,
            Level::High | Level::NoLine => Bit::Zero,
        };
        Ok((state, bit))
    }
}

/// NRZ-Inverted. The state is the level of the previous interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NrzI {
    config: CodecConfig,
}

impl NrzI {
    #[must_use]
    pub const fn new() -> Self {
        Self::with_config(CodecConfig::DEFAULT)
    }

    #[must_use]
    pub const fn with_config(config: CodecConfig) -> Self {
        Self { config }
    }
}

impl LineCode for NrzI {
    fn scheme(&self) -> Scheme {
        Scheme::NrzI
    }

    fn config(&self) -> &CodecConfig {
        &self.config
    }

    fn encode_bit(&self, state: Level, bit: Bit, out: &mut Vec<Level>) -> Level {
        let level = match bit {
            Bit::One => state.toggled(),
            Bit::Zero => state,
        };
        out.push(level);
        level
    }

    fn decode_symbol(
        &self,
        state: Level,
        symbol: &[Level],
        bit_index: usize,
    ) -> LineCodeResult<(Level, Bit)> {
        let [level] = symbol_levels(Scheme::NrzI, symbol, bit_index)?;
        require_polarity(Scheme::NrzI, &self.config, level, bit_index)?;
        Ok((level, Bit::from(level != state)))
    }
}
