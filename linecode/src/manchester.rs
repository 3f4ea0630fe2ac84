//! Two-interval codes with a guaranteed mid-bit transition.
//!
//! Manchester puts the bit in the direction of the mid-bit transition
//! (`1` = LOW→HIGH, `0` = HIGH→LOW) and carries nothing between bits.
//! Differential Manchester puts the bit in the boundary instead: a transition at
//! the start of the interval is a `0`, no transition is a `1`.

use signal::{Bit, Level};

use crate::config::CodecConfig;
use crate::error::{LineCodeError, LineCodeResult};
use crate::scheme::{require_polarity, symbol_levels, LineCode, Scheme};

/// Strict-mode framing checks shared by both two-interval codes.
fn check_halves(
    scheme: Scheme,
    config: &CodecConfig,
    [first, second]: [Level; 2],
    bit_index: usize,
) -> LineCodeResult<()> {
    if !config.is_strict() {
        return Ok(());
    }
    require_polarity(scheme, config, first, bit_index * 2)?;
    require_polarity(scheme, config, second, bit_index * 2 + 1)?;
    if first == second {
        return Err(LineCodeError::MissingMidBitTransition {
            scheme,
            bit_index,
            first,
            second,
        });
    }
    Ok(())
}

/// Manchester (IEEE 802.3 polarity).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Manchester {
    config: CodecConfig,
}

impl Manchester {
    #[must_use]
    pub const fn new() -> Self {
        Self::with_config(CodecConfig::DEFAULT)
    }

    #[must_use]
    pub const fn with_config(config: CodecConfig) -> Self {
        Self { config }
    }
}

impl LineCode for Manchester {
    fn scheme(&self) -> Scheme {
        Scheme::Manchester
    }

    fn config(&self) -> &CodecConfig {
        &self.config
    }

    fn encode_bit(&self, state: Level, bit: Bit, out: &mut Vec<Level>) -> Level {
        match bit {
            Bit::One => out.extend([Level::Low, Level::High]),
            Bit::Zero => out.extend([Level::High, Level::Low]),
        }
        state
    }

    fn decode_symbol(
        &self,
        state: Level,
        symbol: &[Level],
        bit_index: usize,
    ) -> LineCodeResult<(Level, Bit)> {
        let halves = symbol_levels(Scheme::Manchester, symbol, bit_index)?;
        check_halves(Scheme::Manchester, &self.config, halves, bit_index)?;
        let bit = Bit::from(halves == [Level::Low, Level::High]);
        Ok((state, bit))
    }
}

/// Differential Manchester. The state is the second half of the previous bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DifferentialManchester {
    config: CodecConfig,
}

impl DifferentialManchester {
    #[must_use]
    pub const fn new() -> Self {
        Self::with_config(CodecConfig::DEFAULT)
    }

    #[must_use]
    pub const fn with_config(config: CodecConfig) -> Self {
        Self { config }
    }
}

impl LineCode for DifferentialManchester {
    fn scheme(&self) -> Scheme {
        Scheme::DifferentialManchester
    }

    fn config(&self) -> &CodecConfig {
        &self.config
    }

    fn encode_bit(&self, state: Level, bit: Bit, out: &mut Vec<Level>) -> Level {
        let first = match bit {
            Bit::Zero => state.toggled(),
            Bit::One => state,
        };
        let second = first.toggled();
        out.extend([first, second]);
        second
    }

    fn decode_symbol(
        &self,
        state: Level,
        symbol: &[Level],
        bit_index: usize,
    ) -> LineCodeResult<(Level, Bit)> {
        let halves @ [first, second] =
            symbol_levels(Scheme::DifferentialManchester, symbol, bit_index)?;
        check_halves(
            Scheme::DifferentialManchester,
            &self.config,
            halves,
            bit_index,
        )?;
        Ok((second, Bit::from(first == state)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use signal::{format_levels, parse_bits, parse_levels};

    fn bits(text: &str) -> Vec<Bit> {
        parse_bits(text).unwrap()
    }

    fn levels(text: &str) -> Vec<Level> {
        parse_levels(text).unwrap()
    }

    #[test]
    fn manchester_pairs() {
        let code = Manchester::new();
        assert_eq!(
            code.encode(&bits("10")),
            vec![Level::Low, Level::High, Level::High, Level::Low]
        );
        assert_eq!(code.decode(&levels("-++-")).unwrap(), bits("10"));
    }

    #[test]
    fn manchester_lenient_non_canonical_pair_is_zero() {
        let code = Manchester::new();
        assert_eq!(code.decode(&levels("++-+00")).unwrap(), bits("010"));
    }

    #[test]
    fn manchester_strict_rejects_flat_pair() {
        let code = Manchester::with_config(CodecConfig::strict_default());
        let err = code.decode(&levels("-+++")).unwrap_err();
        assert_eq!(
            err,
            LineCodeError::MissingMidBitTransition {
                scheme: Scheme::Manchester,
                bit_index: 1,
                first: Level::High,
                second: Level::High,
            }
        );
    }

    #[test]
    fn manchester_strict_rejects_no_line() {
        let code = Manchester::with_config(CodecConfig::strict_default());
        let err = code.decode(&levels("-++0")).unwrap_err();
        assert_eq!(
            err,
            LineCodeError::InvalidLevel {
                scheme: Scheme::Manchester,
                position: 3,
                level: Level::NoLine,
            }
        );
    }

    #[test]
    fn manchester_odd_length() {
        let lenient = Manchester::new();
        assert_eq!(lenient.decode(&levels("-++")).unwrap(), bits("1"));

        let strict = Manchester::with_config(CodecConfig::strict_default());
        assert_eq!(
            strict.decode(&levels("-++")).unwrap_err(),
            LineCodeError::TrailingInterval {
                scheme: Scheme::Manchester,
                position: 2,
            }
        );
    }

    #[test]
    fn differential_manchester_boundary_transitions() {
        let code = DifferentialManchester::new();
        assert_eq!(
            code.encode(&bits("01")),
            vec![Level::High, Level::Low, Level::Low, Level::High]
        );
        assert_eq!(format_levels(&code.encode(&bits("0011"))), "+-+--++-");
    }

    #[test]
    fn differential_manchester_decode() {
        let code = DifferentialManchester::new();
        assert_eq!(code.decode(&levels("+-+--++-")).unwrap(), bits("0011"));
    }

    #[test]
    fn differential_manchester_is_polarity_insensitive() {
        // Inverting the whole trace and the assumed preceding level keeps the bits.
        let encoded = DifferentialManchester::new().encode(&bits("100110"));
        let inverted: Vec<Level> = encoded.iter().map(|level| level.toggled()).collect();
        let high = DifferentialManchester::with_config(CodecConfig::new(Level::High).unwrap());
        assert_eq!(high.decode(&inverted).unwrap(), bits("100110"));
    }

    #[test]
    fn differential_manchester_strict_rejects_flat_pair() {
        let code = DifferentialManchester::with_config(CodecConfig::strict_default());
        let err = code.decode(&levels("+---")).unwrap_err();
        assert!(matches!(
            err,
            LineCodeError::MissingMidBitTransition { bit_index: 1, .. }
        ));
    }

    #[test]
    fn differential_manchester_lenient_drops_trailing_half() {
        let code = DifferentialManchester::new();
        assert_eq!(code.decode(&levels("+--")).unwrap(), bits("0"));
    }
}
