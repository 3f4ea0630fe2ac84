//! Encoder/decoder configuration.

use signal::Level;

use crate::error::{LineCodeError, LineCodeResult};

/// How decoders treat levels a scheme never emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodeMode {
    /// Unexpected levels fall through to the scheme's default bit and a
    /// trailing half symbol is dropped.
    #[default]
    Lenient,
    /// Unexpected levels, missing mid-bit transitions and trailing half
    /// symbols are reported as errors.
    Strict,
}

/// Configuration shared by all line codes.
///
/// `initial_level` is the level assumed to precede the first interval. It is
/// only consulted by schemes with carry-over state (NRZ-I, AMI, Pseudoternary,
/// Differential Manchester), and encoder and decoder must agree on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    initial_level: Level,
    mode: DecodeMode,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl CodecConfig {
    /// Preceding level `LOW`, lenient decoding.
    pub const DEFAULT: Self = Self {
        initial_level: Level::Low,
        mode: DecodeMode::Lenient,
    };

    /// Creates a configuration with the given preceding level.
    ///
    /// `NoLine` carries no polarity and is rejected.
    pub fn new(initial_level: Level) -> LineCodeResult<Self> {
        if !initial_level.is_pulse() {
            return Err(LineCodeError::InvalidInitialLevel {
                level: initial_level,
            });
        }
        Ok(Self {
            initial_level,
            mode: DecodeMode::Lenient,
        })
    }

    /// Preceding level `LOW`, strict decoding.
    #[must_use]
    pub const fn strict_default() -> Self {
        Self::DEFAULT.strict()
    }

    #[must_use]
    pub const fn with_mode(mut self, mode: DecodeMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub const fn strict(self) -> Self {
        self.with_mode(DecodeMode::Strict)
    }

    #[must_use]
    pub const fn initial_level(&self) -> Level {
        self.initial_level
    }

    #[must_use]
    pub const fn mode(&self) -> DecodeMode {
        self.mode
    }

    #[must_use]
    pub const fn is_strict(&self) -> bool {
        matches!(self.mode, DecodeMode::Strict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_low_and_lenient() {
        let config = CodecConfig::default();
        assert_eq!(config.initial_level(), Level::Low);
        assert_eq!(config.mode(), DecodeMode::Lenient);
        assert!(!config.is_strict());
    }

    #[test]
    fn new_accepts_polarities() {
        assert_eq!(
            CodecConfig::new(Level::High).unwrap().initial_level(),
            Level::High
        );
        assert_eq!(CodecConfig::new(Level::Low).unwrap(), CodecConfig::DEFAULT);
    }

    #[test]
    fn new_rejects_no_line() {
        let err = CodecConfig::new(Level::NoLine).unwrap_err();
        assert_eq!(
            err,
            LineCodeError::InvalidInitialLevel {
                level: Level::NoLine
            }
        );
    }

    #[test]
    fn strict_builders() {
        assert!(CodecConfig::strict_default().is_strict());
        let config = CodecConfig::new(Level::High).unwrap().strict();
        assert!(config.is_strict());
        assert_eq!(config.initial_level(), Level::High);
        assert_eq!(
            config.with_mode(DecodeMode::Lenient).mode(),
            DecodeMode::Lenient
        );
    }
}
