
//! Exact rational arithmetic of unbounded precision, with a literal
//! syntax covering integers, repeating decimals, and fractions in
//! binary, octal, decimal, and hexadecimal.
//!
//! ```ignore
//! use exact_ratio::{rational, ratio};
//!
//! let third = rational("0.(3)")?;
//! assert_eq!(third, ratio(1, 3)?);
//! assert_eq!((third * 2).to_decimal(3), "0.667");
//! ```

pub mod error;
pub mod literal;
pub mod math;
pub mod parsing;
pub mod rational;
pub mod util;

pub use error::Error;
pub use rational::{Rational, rational, ratio};
