//! NRZ, bipolar and Manchester line codes for the linesim simulator.
//!
//! This crate translates logical bit sequences into physical line-level
//! sequences and back, using the six classic baseband schemes:
//!
//! | Scheme | Intervals/bit | Carry-over state | Violation check |
//! |---|---|---|---|
//! | [`NrzL`] | 1 | none | no |
//! | [`NrzI`] | 1 | previous level | no |
//! | [`BipolarAmi`] | 1 | last pulse polarity | yes |
//! | [`Pseudoternary`] | 1 | last pulse polarity | yes |
//! | [`Manchester`] | 2 | none | no |
//! | [`DifferentialManchester`] | 2 | previous half level | no |
//!
//! # Design Principles
//!
//! - **One contract** - Every scheme implements [`LineCode`] as a pair of step
//!   functions folded over the input.
//! - **Explicit initial state** - The level assumed before the first interval
//!   is part of [`CodecConfig`], not a hidden convention.
//! - **Deterministic** - Same inputs produce same outputs; nothing persists
//!   between calls unless a [`StreamEncoder`]/[`StreamDecoder`] holds it.
//!
//! # Example
//!
//! ```
//! use linecode::{BipolarAmi, LineCode, ViolationCheck};
//! use signal::{parse_bits, format_levels};
//!
//! let ami = BipolarAmi::new();
//! let bits = parse_bits("10011").unwrap();
//! let levels = ami.encode(&bits);
//! assert_eq!(format_levels(&levels), "+00-+");
//! assert!(!ami.has_violations(&levels));
//! assert_eq!(ami.decode(&levels).unwrap(), bits);
//! ```

mod bipolar;
mod config;
mod error;
mod manchester;
mod nrz;
mod scheme;
mod stream;
mod violation;

pub use bipolar::{BipolarAmi, Pseudoternary};
pub use config::{CodecConfig, DecodeMode};
pub use error::{LineCodeError, LineCodeResult};
pub use manchester::{DifferentialManchester, Manchester};
pub use nrz::{NrzI, NrzL};
pub use scheme::{LineCode, Scheme};
pub use stream::{StreamDecoder, StreamEncoder};
pub use violation::{find_bipolar_violation, has_bipolar_violations, Violation, ViolationCheck};

#[cfg(test)]
mod tests {
    use super::*;
    use signal::{Bit, Level};

    #[test]
    fn public_api_exports() {
        let _ = NrzL::new();
        let _ = NrzI::new();
        let _ = BipolarAmi::new();
        let _ = Pseudoternary::new();
        let _ = Manchester::new();
        let _ = DifferentialManchester::new();
        let _ = CodecConfig::default();
        let _ = DecodeMode::Strict;
        let _ = Scheme::ALL;
        let _ = has_bipolar_violations(&[]);

        let _: LineCodeResult<()> = Ok(());
    }

    #[test]
    fn concrete_types_match_built_codes() {
        let bits = [Bit::One, Bit::Zero, Bit::One, Bit::One];
        let built = Scheme::DifferentialManchester.build(CodecConfig::default());
        assert_eq!(
            built.encode(&bits),
            DifferentialManchester::new().encode(&bits)
        );
    }

    #[test]
    fn codes_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NrzL>();
        assert_send_sync::<BipolarAmi>();
        assert_send_sync::<DifferentialManchester>();
        assert_send_sync::<Box<dyn LineCode + Send + Sync>>();
    }

    #[test]
    fn violation_on_hand_built_trace() {
        let trace = [Level::Low, Level::NoLine, Level::NoLine, Level::Low];
        assert!(BipolarAmi::new().has_violations(&trace));
        assert!(Pseudoternary::new().has_violations(&trace));
    }
}
