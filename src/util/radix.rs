
//! The numerical radixes a literal can be written in.

use regex::Regex;
use once_cell::sync::Lazy;

use std::fmt::{self, Display, Formatter};

/// A numerical radix. Digits beyond nine are the Latin letters, in
/// either case.
///
/// Only binary, octal, and hexadecimal have a literal prefix (see
/// [`Radix::prefix`]). Decimal is the radix of an unprefixed literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Radix {
  Binary = 2,
  Octal = 8,
  Decimal = 10,
  Hexadecimal = 16,
}

static BINARY_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[01]+").unwrap());
static OCTAL_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-7]+").unwrap());
static DECIMAL_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+").unwrap());
static HEXADECIMAL_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9a-fA-F]+").unwrap());

impl Radix {
  /// The radixes which can be selected by a literal prefix, in the
  /// order the literal parser tries them.
  pub const PREFIXED: [Radix; 3] = [Radix::Binary, Radix::Octal, Radix::Hexadecimal];

  /// The literal prefix which selects this radix, if any.
  pub fn prefix(self) -> Option<&'static str> {
    match self {
      Radix::Binary => Some("0b"),
      Radix::Octal => Some("0o"),
      Radix::Decimal => None,
      Radix::Hexadecimal => Some("0x"),
    }
  }

  /// Whether literals in this radix may carry a decimal exponent.
  pub fn allows_exponent(self) -> bool {
    self == Radix::Decimal
  }

  /// Regex matching a non-empty run of digits in this radix, anchored
  /// at the start of the input.
  pub fn digit_run_regex(self) -> &'static Regex {
    match self {
      Radix::Binary => &BINARY_DIGITS,
      Radix::Octal => &OCTAL_DIGITS,
      Radix::Decimal => &DECIMAL_DIGITS,
      Radix::Hexadecimal => &HEXADECIMAL_DIGITS,
    }
  }

  pub fn is_digit(self, ch: char) -> bool {
    ch.is_digit(u32::from(self))
  }
}

impl From<Radix> for u8 {
  fn from(radix: Radix) -> Self {
    radix as u8
  }
}

impl From<Radix> for u32 {
  fn from(radix: Radix) -> Self {
    radix as u32
  }
}

impl Display for Radix {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Radix::Binary => write!(f, "binary"),
      Radix::Octal => write!(f, "octal"),
      Radix::Decimal => write!(f, "decimal"),
      Radix::Hexadecimal => write!(f, "hexadecimal"),
    }
  }
}
