//! Text forms of bit and level sequences.
//!
//! Whitespace, `,` and `_` act as separators and are skipped, so `"1011 0010"`
//! and `"+,-,0"` both parse.

use crate::bit::Bit;
use crate::error::{SignalError, SignalResult};
use crate::level::Level;

const fn is_separator(ch: char) -> bool {
    ch.is_ascii_whitespace() || ch == ',' || ch == '_'
}

/// Parses a string of `0`/`1` characters.
pub fn parse_bits(text: &str) -> SignalResult<Vec<Bit>> {
    let mut bits = Vec::with_capacity(text.len());
    for (position, ch) in text.chars().enumerate() {
        match ch {
            '0' => bits.push(Bit::Zero),
            '1' => bits.push(Bit::One),
            ch if is_separator(ch) => {}
            ch => return Err(SignalError::InvalidBitChar { ch, position }),
        }
    }
    Ok(bits)
}

/// Parses a string of level symbols (`+`, `-`, `0`, or `H`, `L`, `N`).
pub fn parse_levels(text: &str) -> SignalResult<Vec<Level>> {
    let mut levels = Vec::with_capacity(text.len());
    for (position, ch) in text.chars().enumerate() {
        if is_separator(ch) {
            continue;
        }
        let level = Level::from_symbol(ch).ok_or(SignalError::InvalidLevelChar { ch, position })?;
        levels.push(level);
    }
    Ok(levels)
}

/// Renders bits as a compact `0`/`1` string.
#[must_use]
pub fn format_bits(bits: &[Bit]) -> String {
    bits.iter().map(|bit| bit.symbol()).collect()
}

/// Renders levels as a compact `+`/`-`/`0` string.
#[must_use]
pub fn format_levels(levels: &[Level]) -> String {
    levels.iter().map(|level| level.symbol()).collect()
}
