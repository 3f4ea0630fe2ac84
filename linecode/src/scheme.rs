//! The line-code contract and scheme selection.

use std::fmt;
use std::str::FromStr;

use signal::{Bit, Level};

use crate::bipolar::{BipolarAmi, Pseudoternary};
use crate::config::CodecConfig;
use crate::error::{LineCodeError, LineCodeResult};
use crate::manchester::{DifferentialManchester, Manchester};
use crate::nrz::{NrzI, NrzL};
use crate::stream::StreamDecoder;
use crate::violation::ViolationCheck;

/// The six supported line-coding schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    NrzL,
    NrzI,
    BipolarAmi,
    Pseudoternary,
    Manchester,
    DifferentialManchester,
}

impl Scheme {
    /// Every scheme, in taxonomy order.
    pub const ALL: [Self; 6] = [
        Self::NrzL,
        Self::NrzI,
        Self::BipolarAmi,
        Self::Pseudoternary,
        Self::Manchester,
        Self::DifferentialManchester,
    ];

    /// Conventional display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::NrzL => "NRZ-L",
            Self::NrzI => "NRZ-I",
            Self::BipolarAmi => "Bipolar-AMI",
            Self::Pseudoternary => "Pseudoternary",
            Self::Manchester => "Manchester",
            Self::DifferentialManchester => "Differential Manchester",
        }
    }

    /// Number of signal intervals each bit occupies.
    #[must_use]
    pub const fn intervals_per_bit(self) -> usize {
        match self {
            Self::Manchester | Self::DifferentialManchester => 2,
            Self::NrzL | Self::NrzI | Self::BipolarAmi | Self::Pseudoternary => 1,
        }
    }

    /// Returns `true` for the polarity-alternating schemes.
    #[must_use]
    pub const fn has_violation_check(self) -> bool {
        matches!(self, Self::BipolarAmi | Self::Pseudoternary)
    }

    /// Builds a coder for this scheme.
    #[must_use]
    pub fn build(self, config: CodecConfig) -> Box<dyn LineCode + Send + Sync> {
        match self {
            Self::NrzL => Box::new(NrzL::with_config(config)),
            Self::NrzI => Box::new(NrzI::with_config(config)),
            Self::BipolarAmi => Box::new(BipolarAmi::with_config(config)),
            Self::Pseudoternary => Box::new(Pseudoternary::with_config(config)),
            Self::Manchester => Box::new(Manchester::with_config(config)),
            Self::DifferentialManchester => Box::new(DifferentialManchester::with_config(config)),
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scheme {
    type Err = LineCodeError;

    fn from_str(s: &str) -> LineCodeResult<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "nrz-l" | "nrzl" => Ok(Self::NrzL),
            "nrz-i" | "nrzi" => Ok(Self::NrzI),
            "ami" | "bipolar-ami" | "bipolar" => Ok(Self::BipolarAmi),
            "pseudoternary" => Ok(Self::Pseudoternary),
            "manchester" => Ok(Self::Manchester),
            "differential-manchester" | "diff-manchester" => Ok(Self::DifferentialManchester),
            _ => Err(LineCodeError::UnknownScheme {
                name: s.to_string(),
            }),
        }
    }
}

/// A line code: a left-to-right fold over bits (encode) or signal intervals
/// (decode) threading one scalar of state.
///
/// Implementors supply the per-step functions; [`LineCode::encode`] and
/// [`LineCode::decode`] run them over whole sequences starting from
/// [`CodecConfig::initial_level`]. State never outlives a call.
pub trait LineCode {
    fn scheme(&self) -> Scheme;

    fn config(&self) -> &CodecConfig;

    /// Appends the intervals for `bit` to `out` and returns the next state.
    fn encode_bit(&self, state: Level, bit: Bit, out: &mut Vec<Level>) -> Level;

    /// Decodes one symbol of [`LineCode::intervals_per_bit`] levels.
    ///
    /// `bit_index` locates the symbol for error reporting.
    fn decode_symbol(
        &self,
        state: Level,
        symbol: &[Level],
        bit_index: usize,
    ) -> LineCodeResult<(Level, Bit)>;

    /// The bipolar violation checker, for schemes that define one.
    fn violation_check(&self) -> Option<&dyn ViolationCheck> {
        None
    }

    fn intervals_per_bit(&self) -> usize {
        self.scheme().intervals_per_bit()
    }

    /// Encodes a whole bit sequence.
    fn encode(&self, bits: &[Bit]) -> Vec<Level> {
        let mut out = Vec::with_capacity(bits.len() * self.intervals_per_bit());
        bits.iter().fold(self.config().initial_level(), |state, &bit| {
            self.encode_bit(state, bit, &mut out)
        });
        out
    }

    /// Decodes a whole level sequence.
    fn decode(&self, levels: &[Level]) -> LineCodeResult<Vec<Bit>> {
        let mut decoder = StreamDecoder::new(self);
        let bits = decoder.push(levels)?;
        decoder.finish()?;
        Ok(bits)
    }

    /// Decodes a trace of signed amplitudes (`1`, `-1`, `0`).
    fn decode_amplitudes(&self, amplitudes: &[i8]) -> LineCodeResult<Vec<Bit>> {
        let levels = Level::from_i8_slice(amplitudes)?;
        self.decode(&levels)
    }
}

/// Takes the first `N` levels of a symbol as an array.
///
/// A short symbol is reported at its first level, the same position
/// [`StreamDecoder::finish`] reports for a buffered half symbol.
pub(crate) fn symbol_levels<const N: usize>(
    scheme: Scheme,
    symbol: &[Level],
    bit_index: usize,
) -> LineCodeResult<[Level; N]> {
    symbol
        .get(..N)
        .and_then(|levels| <[Level; N]>::try_from(levels).ok())
        .ok_or(LineCodeError::TrailingInterval {
            scheme,
            position: bit_index * N,
        })
}

/// Rejects `NoLine` for schemes that only signal with polarities.
pub(crate) fn require_polarity(
    scheme: Scheme,
    config: &CodecConfig,
    level: Level,
    position: usize,
) -> LineCodeResult<()> {
    if config.is_strict() && !level.is_pulse() {
        return Err(LineCodeError::InvalidLevel {
            scheme,
            position,
            level,
        });
    }
    Ok(())
}
