
//! Various utility functions.

pub mod radix;
pub mod stricteq;

use num::BigInt;
use num::bigint::Sign as BigSign;

/// The sign written in front of a literal. Unsigned literals are
/// treated as positive, including literal zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
  Negative,
  Positive,
}

impl Sign {
  /// Parses a sign character. Only `+` and `-` are recognized.
  pub fn from_char(ch: char) -> Option<Self> {
    match ch {
      '+' => Some(Self::Positive),
      '-' => Some(Self::Negative),
      _ => None,
    }
  }

  /// Applies this sign to a magnitude.
  pub fn apply(self, value: BigInt) -> BigInt {
    match self {
      Self::Negative => - value,
      Self::Positive => value,
    }
  }
}

impl Default for Sign {
  fn default() -> Self {
    Self::Positive
  }
}

impl From<Sign> for BigSign {
  fn from(sign: Sign) -> Self {
    match sign {
      Sign::Negative => BigSign::Minus,
      Sign::Positive => BigSign::Plus,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_sign_from_char() {
    assert_eq!(Sign::from_char('+'), Some(Sign::Positive));
    assert_eq!(Sign::from_char('-'), Some(Sign::Negative));
    assert_eq!(Sign::from_char('1'), None);
  }

  #[test]
  fn test_sign_apply() {
    assert_eq!(Sign::Positive.apply(BigInt::from(7)), BigInt::from(7));
    assert_eq!(Sign::Negative.apply(BigInt::from(7)), BigInt::from(-7));
    assert_eq!(Sign::Negative.apply(BigInt::from(0)), BigInt::from(0));
  }
}
