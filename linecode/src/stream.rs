//! Chunked encoding and decoding.
//!
//! [`StreamEncoder`] and [`StreamDecoder`] hold a scheme's scalar state between
//! calls, so a bit or level sequence can be fed in pieces. The output for any
//! chunking equals the one-shot [`LineCode::encode`] / [`LineCode::decode`]
//! output for the concatenated input.

use signal::{Bit, Level};
use tracing::{debug, trace};

use crate::error::{LineCodeError, LineCodeResult};
use crate::scheme::LineCode;

/// Incremental encoder.
#[derive(Debug)]
pub struct StreamEncoder<'a, C: LineCode + ?Sized> {
    code: &'a C,
    state: Level,
    bits_encoded: usize,
}

impl<'a, C: LineCode + ?Sized> StreamEncoder<'a, C> {
    /// Creates an encoder starting from the code's initial level.
    pub fn new(code: &'a C) -> Self {
        Self {
            code,
            state: code.config().initial_level(),
            bits_encoded: 0,
        }
    }

    /// Encodes the next chunk of bits.
    pub fn push(&mut self, bits: &[Bit]) -> Vec<Level> {
        let mut out = Vec::with_capacity(bits.len() * self.code.intervals_per_bit());
        for &bit in bits {
            self.state = self.code.encode_bit(self.state, bit, &mut out);
        }
        self.bits_encoded += bits.len();
        out
    }

    /// Current carry-over state.
    pub const fn state(&self) -> Level {
        self.state
    }

    pub const fn bits_encoded(&self) -> usize {
        self.bits_encoded
    }

    /// Returns to the initial level, as if nothing had been encoded.
    pub fn reset(&mut self) {
        self.state = self.code.config().initial_level();
        self.bits_encoded = 0;
    }
}

/// Incremental decoder.
///
/// A two-interval symbol split across chunks is buffered until its second
/// half arrives. Once a symbol is rejected the decoder is halted: further
/// `push` and `finish` calls return [`LineCodeError::StreamHalted`] until
/// [`reset`](Self::reset).
#[derive(Debug)]
pub struct StreamDecoder<'a, C: LineCode + ?Sized> {
    code: &'a C,
    state: Level,
    pending: Vec<Level>,
    bits_decoded: usize,
    halted: bool,
}

impl<'a, C: LineCode + ?Sized> StreamDecoder<'a, C> {
    /// Creates a decoder starting from the code's initial level.
    pub fn new(code: &'a C) -> Self {
        Self {
            code,
            state: code.config().initial_level(),
            pending: Vec::new(),
            bits_decoded: 0,
            halted: false,
        }
    }

    /// Decodes every complete symbol available after appending `levels`.
    pub fn push(&mut self, levels: &[Level]) -> LineCodeResult<Vec<Bit>> {
        self.ensure_running()?;
        let width = self.code.intervals_per_bit();
        let mut bits = Vec::with_capacity((self.pending.len() + levels.len()) / width);
        let mut rest = levels;

        if !self.pending.is_empty() {
            let needed = width - self.pending.len();
            if rest.len() < needed {
                self.pending.extend_from_slice(rest);
                return Ok(bits);
            }
            let (head, tail) = rest.split_at(needed);
            self.pending.extend_from_slice(head);
            let symbol = std::mem::take(&mut self.pending);
            bits.push(self.step(&symbol)?);
            rest = tail;
        }

        let mut symbols = rest.chunks_exact(width);
        for symbol in &mut symbols {
            bits.push(self.step(symbol)?);
        }
        self.pending.extend_from_slice(symbols.remainder());
        Ok(bits)
    }

    /// Ends the stream.
    ///
    /// A buffered half symbol is an error in strict mode and dropped otherwise.
    pub fn finish(self) -> LineCodeResult<usize> {
        self.ensure_running()?;
        if self.pending.is_empty() {
            return Ok(self.bits_decoded);
        }
        let scheme = self.code.scheme();
        let position = self.bits_decoded * self.code.intervals_per_bit();
        if self.code.config().is_strict() {
            debug!(%scheme, position, "trailing interval");
            return Err(LineCodeError::TrailingInterval { scheme, position });
        }
        trace!(%scheme, position, dropped = self.pending.len(), "dropping trailing interval");
        Ok(self.bits_decoded)
    }

    /// Current carry-over state.
    pub const fn state(&self) -> Level {
        self.state
    }

    pub const fn bits_decoded(&self) -> usize {
        self.bits_decoded
    }

    /// Returns `true` after a rejected symbol, until the next reset.
    pub const fn is_halted(&self) -> bool {
        self.halted
    }

    /// Number of buffered levels waiting for the rest of their symbol.
    pub fn pending_levels(&self) -> usize {
        self.pending.len()
    }

    /// Returns to the initial level and discards any buffered levels.
    pub fn reset(&mut self) {
        self.state = self.code.config().initial_level();
        self.pending.clear();
        self.bits_decoded = 0;
        self.halted = false;
    }

    fn ensure_running(&self) -> LineCodeResult<()> {
        if self.halted {
            return Err(LineCodeError::StreamHalted {
                scheme: self.code.scheme(),
                bit_index: self.bits_decoded,
            });
        }
        Ok(())
    }

    fn step(&mut self, symbol: &[Level]) -> LineCodeResult<Bit> {
        match self.code.decode_symbol(self.state, symbol, self.bits_decoded) {
            Ok((state, bit)) => {
                self.state = state;
                self.bits_decoded += 1;
                Ok(bit)
            }
            Err(err) => {
                debug!(
                    scheme = %self.code.scheme(),
                    bit_index = self.bits_decoded,
                    %err,
                    "decode rejected"
                );
                self.halted = true;
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CodecConfig, DifferentialManchester, Manchester, NrzI};
    use signal::{parse_bits, parse_levels};

    #[test]
    fn encoder_carries_state_across_chunks() {
        let code = NrzI::new();
        let mut encoder = StreamEncoder::new(&code);
        let mut levels = encoder.push(&parse_bits("011").unwrap());
        assert_eq!(encoder.state(), Level::Low);
        levels.extend(encoder.push(&parse_bits("01").unwrap()));
        assert_eq!(levels, code.encode(&parse_bits("01101").unwrap()));
        assert_eq!(encoder.bits_encoded(), 5);
    }

    #[test]
    fn encoder_reset() {
        let code = NrzI::new();
        let mut encoder = StreamEncoder::new(&code);
        let first = encoder.push(&parse_bits("1").unwrap());
        encoder.reset();
        assert_eq!(encoder.state(), Level::Low);
        assert_eq!(encoder.push(&parse_bits("1").unwrap()), first);
    }

    #[test]
    fn decoder_buffers_split_symbol() {
        let code = DifferentialManchester::new();
        let levels = parse_levels("+-+--++-").unwrap();
        let mut decoder = StreamDecoder::new(&code);

        let mut bits = decoder.push(&levels[..3]).unwrap();
        assert_eq!(bits.len(), 1);
        assert_eq!(decoder.pending_levels(), 1);

        bits.extend(decoder.push(&levels[3..4]).unwrap());
        assert_eq!(decoder.pending_levels(), 0);
        bits.extend(decoder.push(&levels[4..]).unwrap());

        assert_eq!(bits, parse_bits("0011").unwrap());
        assert_eq!(decoder.finish().unwrap(), 4);
    }

    #[test]
    fn decoder_single_level_chunks() {
        let code = Manchester::new();
        let levels = code.encode(&parse_bits("1100101").unwrap());
        let mut decoder = StreamDecoder::new(&code);
        let mut bits = Vec::new();
        for level in &levels {
            bits.extend(decoder.push(std::slice::from_ref(level)).unwrap());
        }
        assert_eq!(bits, parse_bits("1100101").unwrap());
    }

    #[test]
    fn finish_strict_trailing_interval() {
        let code = Manchester::with_config(CodecConfig::strict_default());
        let mut decoder = StreamDecoder::new(&code);
        decoder.push(&parse_levels("-+-").unwrap()).unwrap();
        assert_eq!(
            decoder.finish().unwrap_err(),
            LineCodeError::TrailingInterval {
                scheme: crate::Scheme::Manchester,
                position: 2,
            }
        );
    }

    #[test]
    fn finish_lenient_drops_trailing_interval() {
        let code = Manchester::new();
        let mut decoder = StreamDecoder::new(&code);
        let bits = decoder.push(&parse_levels("-+-").unwrap()).unwrap();
        assert_eq!(bits, parse_bits("1").unwrap());
        assert_eq!(decoder.finish().unwrap(), 1);
    }

    #[test]
    fn decoder_reset_clears_pending() {
        let code = Manchester::new();
        let mut decoder = StreamDecoder::new(&code);
        decoder.push(&[Level::Low]).unwrap();
        decoder.reset();
        assert_eq!(decoder.pending_levels(), 0);
        assert_eq!(decoder.bits_decoded(), 0);
        assert_eq!(decoder.state(), Level::Low);
    }

    #[test]
    fn decoder_halts_after_rejected_symbol() {
        let code = Manchester::with_config(CodecConfig::strict_default());
        let mut decoder = StreamDecoder::new(&code);
        assert_eq!(decoder.push(&parse_levels("-+").unwrap()).unwrap().len(), 1);

        let err = decoder.push(&parse_levels("++-+").unwrap()).unwrap_err();
        assert!(matches!(
            err,
            LineCodeError::MissingMidBitTransition { bit_index: 1, .. }
        ));
        assert!(decoder.is_halted());

        // A well-formed chunk is refused rather than decoded from a stale state.
        assert_eq!(
            decoder.push(&parse_levels("+-").unwrap()).unwrap_err(),
            LineCodeError::StreamHalted {
                scheme: crate::Scheme::Manchester,
                bit_index: 1,
            }
        );

        decoder.reset();
        assert!(!decoder.is_halted());
        assert_eq!(
            decoder.push(&parse_levels("+-").unwrap()).unwrap(),
            parse_bits("0").unwrap()
        );
        assert_eq!(decoder.finish().unwrap(), 1);
    }

    #[test]
    fn finish_refused_after_error() {
        let code = NrzI::with_config(CodecConfig::strict_default());
        let mut decoder = StreamDecoder::new(&code);
        decoder.push(&parse_levels("-0").unwrap()).unwrap_err();
        assert!(matches!(
            decoder.finish().unwrap_err(),
            LineCodeError::StreamHalted { bit_index: 1, .. }
        ));
    }

    #[test]
    fn works_through_trait_objects() {
        let code = crate::Scheme::NrzI.build(CodecConfig::default());
        let mut encoder = StreamEncoder::new(&*code);
        let levels = encoder.push(&parse_bits("1011").unwrap());
        let mut decoder = StreamDecoder::new(&*code);
        assert_eq!(decoder.push(&levels).unwrap(), parse_bits("1011").unwrap());
    }
}
