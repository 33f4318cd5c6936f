
//! Numeric literals: integers, point numbers with an optional
//! repeating cycle, and fractions of the two, in binary, octal,
//! decimal, or hexadecimal.
//!
//! [`parse_literal`] turns text into a [`Literal`] tree, and
//! [`Literal::evaluate`] turns the tree into an exact
//! [`Rational`](crate::Rational).
//!
//! ```text
//! Root            := FractionNumber | PointNumber | Integer
//! FractionNumber  := (PointNumber | Integer) "/" (PointNumber | Integer)   (denominator unsigned)
//! PointNumber     := Sign? Prefix? Digits "." Digits? ("(" Digits ")")? Exponent?
//! Integer         := Sign? Prefix? Digits Exponent?
//! Exponent        := ("e" | "E") Sign? Digits                               (decimal only)
//! ```

mod error;
mod eval;
mod parser;

pub use error::{LiteralParseError, Expected};
pub use parser::parse_literal;

use crate::util::Sign;
use crate::util::radix::Radix;

use num::{BigInt, BigUint};

/// A parsed literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
  Integer(IntegerLiteral),
  Point(PointLiteral),
  Fraction(FractionLiteral),
}

/// A run of digits in a single radix.
///
/// `length` counts leading zeros, which matter in fractional
/// positions: `010` after the point is not the same as `10`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitSequence {
  pub radix: Radix,
  pub magnitude: BigUint,
  pub length: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegerLiteral {
  pub radix: Radix,
  pub sign: Sign,
  pub magnitude: BigUint,
  /// Power of ten. Always zero outside decimal.
  pub exponent: BigInt,
}

/// A literal with a radix point, such as `1.25`, `0.(3)`, or
/// `0x1.8`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointLiteral {
  pub radix: Radix,
  pub sign: Sign,
  pub integer_part: DigitSequence,
  pub fractional_part: Option<DigitSequence>,
  /// The repeating digits, written in parentheses.
  pub cyclic_part: Option<DigitSequence>,
  pub exponent: BigInt,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FractionLiteral {
  pub numerator: FractionTerm,
  /// Always has a positive sign.
  pub denominator: FractionTerm,
}

/// Either side of a [`FractionLiteral`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FractionTerm {
  Integer(IntegerLiteral),
  Point(PointLiteral),
}

impl Literal {
  pub fn kind(&self) -> &'static str {
    match self {
      Literal::Integer(_) => "integer",
      Literal::Point(_) => "point number",
      Literal::Fraction(_) => "fraction",
    }
  }
}

impl From<FractionTerm> for Literal {
  fn from(term: FractionTerm) -> Literal {
    match term {
      FractionTerm::Integer(lit) => Literal::Integer(lit),
      FractionTerm::Point(lit) => Literal::Point(lit),
    }
  }
}
