
use crate::parsing::source::{SourceOffset, Span};
use crate::util::radix::Radix;

use thiserror::Error;

use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum LiteralParseError {
  #[error("Empty literal")]
  EmptyInput,
  #[error("Expected {expected}, found '{found}' at offset {offset}")]
  UnexpectedChar { expected: Expected, found: char, offset: SourceOffset },
  #[error("Expected {expected}, found end of input at offset {offset}")]
  UnexpectedEof { expected: Expected, offset: SourceOffset },
  #[error("Invalid {radix} digits at {span}")]
  InvalidDigits { radix: Radix, span: Span },
}

/// What the parser was looking for when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
  Digit(Radix),
  ClosingParen,
  EndOfInput,
}

impl LiteralParseError {
  /// Where in the input the error was detected, if anywhere.
  pub fn offset(&self) -> Option<SourceOffset> {
    match self {
      LiteralParseError::EmptyInput => None,
      LiteralParseError::UnexpectedChar { offset, .. } => Some(*offset),
      LiteralParseError::UnexpectedEof { offset, .. } => Some(*offset),
      LiteralParseError::InvalidDigits { span, .. } => Some(span.start),
    }
  }
}

impl Display for Expected {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Expected::Digit(radix) => write!(f, "{radix} digit"),
      Expected::ClosingParen => write!(f, "')'"),
      Expected::EndOfInput => write!(f, "end of input"),
    }
  }
}
