
use crate::literal::LiteralParseError;

use thiserror::Error;

/// Every failure the crate can report. Errors are raised at the point
/// of the offending call and never recovered internally.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
  /// A zero denominator at construction, or a non-integral value where
  /// an integer is required.
  #[error("Invalid argument: {0}")]
  InvalidArgument(String),
  #[error("Division by zero")]
  DivisionByZero,
  /// A NaN or infinite float was converted to a rational.
  #[error("Invalid conversion: {0}")]
  InvalidConversion(String),
  #[error("{0}")]
  ParseError(#[from] LiteralParseError),
}

impl Error {
  pub fn invalid_argument(message: impl Into<String>) -> Self {
    Self::InvalidArgument(message.into())
  }

  pub fn invalid_conversion(message: impl Into<String>) -> Self {
    Self::InvalidConversion(message.into())
  }
}
