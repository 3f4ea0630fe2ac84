//! Bit and line-level alphabet for the linesim line-coding simulator.
//!
//! This crate provides [`Bit`] and [`Level`], the two alphabets every line code
//! translates between, plus the checked conversions that bring raw numbers and
//! text into typed form.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **Closed alphabets** - Out-of-alphabet values are rejected at the boundary,
//!   never carried inside a typed sequence.
//! - **No scheme knowledge** - This crate knows nothing about NRZ, AMI or Manchester.
//! - **Explicit errors** - All failures return structured errors, never panic.
//!
//! # Example
//!
//! ```
//! use signal::{parse_bits, format_levels, Bit, Level};
//!
//! let bits = parse_bits("1011").unwrap();
//! assert_eq!(bits[0], Bit::One);
//!
//! let levels = vec![Level::High, Level::NoLine, Level::Low];
//! assert_eq!(format_levels(&levels), "+0-");
//! ```

mod bit;
mod error;
mod level;
mod text;

pub use bit::Bit;
pub use error::{SignalError, SignalResult};
pub use level::Level;
pub use text::{format_bits, format_levels, parse_bits, parse_levels};
