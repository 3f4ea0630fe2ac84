//! Bipolar violation detection.
//!
//! A violation is two consecutive pulses of the same polarity, ignoring the
//! `NoLine` intervals between them. A correct AMI or Pseudoternary encoder never
//! produces one, so a violation marks a corrupted or hand-built trace.

use signal::Level;
use tracing::debug;

/// A pair of consecutive pulses sharing a polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation {
    /// Level index of the earlier pulse.
    pub previous: usize,
    /// Level index of the repeated pulse.
    pub position: usize,
    /// The repeated polarity.
    pub polarity: Level,
}

/// Violation checking for the polarity-alternating schemes.
///
/// Both AMI and Pseudoternary use the same rule; the bit roles they swap do not
/// affect which pulses may follow one another.
pub trait ViolationCheck {
    /// Returns the first violation in `levels`, if any.
    fn find_violation(&self, levels: &[Level]) -> Option<Violation> {
        find_bipolar_violation(levels)
    }

    fn has_violations(&self, levels: &[Level]) -> bool {
        self.find_violation(levels).is_some()
    }
}

/// Scans `levels` once and returns the first violation.
#[must_use]
pub fn find_bipolar_violation(levels: &[Level]) -> Option<Violation> {
    let mut last_pulse: Option<(usize, Level)> = None;
    for (position, &level) in levels.iter().enumerate() {
        if !level.is_pulse() {
            continue;
        }
        if let Some((previous, polarity)) = last_pulse {
            if polarity == level {
                debug!(previous, position, polarity = %level, "bipolar violation");
                return Some(Violation {
                    previous,
                    position,
                    polarity,
                });
            }
        }
        last_pulse = Some((position, level));
    }
    None
}

/// Returns `true` if `levels` contains a bipolar violation.
#[must_use]
pub fn has_bipolar_violations(levels: &[Level]) -> bool {
    find_bipolar_violation(levels).is_some()
}
