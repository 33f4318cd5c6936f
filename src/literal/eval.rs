
//! Evaluation of literal trees into exact rationals.

use super::{Literal, DigitSequence, IntegerLiteral, PointLiteral, FractionLiteral, FractionTerm};
use crate::error::Error;
use crate::rational::Rational;

use num::{BigInt, Zero, One, Signed};
use num::integer::Integer;
use tracing::trace;

impl Literal {
  pub fn evaluate(&self) -> Result<Rational, Error> {
    trace!(kind = self.kind(), "Evaluating literal");
    match self {
      Literal::Integer(lit) => lit.evaluate(),
      Literal::Point(lit) => lit.evaluate(),
      Literal::Fraction(lit) => lit.evaluate(),
    }
  }
}

impl IntegerLiteral {
  pub fn evaluate(&self) -> Result<Rational, Error> {
    let value = Rational::from_integer(BigInt::from_biguint(self.sign.into(), self.magnitude.clone()));
    scale_by_exponent(value, &self.exponent)
  }
}

impl PointLiteral {
  /// For a repeating literal with integer part `I`, fractional part
  /// `F` of `f` digits, and cycle `C` of `c` digits in base `b`, the
  /// value is
  ///
  /// ```text
  /// (I b^(f+c) + F b^c + C - (I b^f + F)) / (b^f (b^c - 1))
  /// ```
  pub fn evaluate(&self) -> Result<Rational, Error> {
    let base = BigInt::from(u32::from(self.radix));
    let integer = BigInt::from(self.integer_part.magnitude.clone());
    let (fraction, fraction_len) = digits_or_zero(self.fractional_part.as_ref());
    let fraction_scale = num::pow(base.clone(), fraction_len);

    let (numer, denom) = match &self.cyclic_part {
      None => (&integer * &fraction_scale + fraction, fraction_scale),
      Some(cyclic) => {
        let cycle = BigInt::from(cyclic.magnitude.clone());
        let cycle_scale = num::pow(base, cyclic.length);
        let prefix = &integer * &fraction_scale + &fraction;
        let numer = &prefix * &cycle_scale + cycle - prefix;
        (numer, fraction_scale * (cycle_scale - BigInt::one()))
      }
    };
    let value = Rational::reduced_unchecked(self.sign.apply(numer), denom);
    scale_by_exponent(value, &self.exponent)
  }
}

impl FractionLiteral {
  pub fn evaluate(&self) -> Result<Rational, Error> {
    let numerator = self.numerator.evaluate()?;
    let denominator = self.denominator.evaluate()?;
    numerator.checked_div(&denominator)
  }
}

impl FractionTerm {
  pub fn evaluate(&self) -> Result<Rational, Error> {
    match self {
      FractionTerm::Integer(lit) => lit.evaluate(),
      FractionTerm::Point(lit) => lit.evaluate(),
    }
  }
}

fn digits_or_zero(digits: Option<&DigitSequence>) -> (BigInt, usize) {
  match digits {
    None => (BigInt::zero(), 0),
    Some(digits) => (BigInt::from(digits.magnitude.clone()), digits.length),
  }
}

/// Multiplies a canonical value by `10^exponent`.
///
/// The result is built already canonical. The scale shares only twos
/// and fives with the other side of the fraction, and those are
/// cancelled directly without taking a gcd.
fn scale_by_exponent(value: Rational, exponent: &BigInt) -> Result<Rational, Error> {
  if exponent.is_zero() || value.is_zero() {
    return Ok(value.into_reduced());
  }
  let power = u32::try_from(exponent.magnitude())
    .map_err(|_| Error::invalid_argument(format!("exponent {exponent} is too large")))?;
  let value = value.into_reduced();
  let (numer, denom) = if exponent.is_negative() {
    let (denom, numer) = scale_coprime(value.denom(), value.numer(), power);
    (numer, denom)
  } else {
    scale_coprime(value.numer(), value.denom(), power)
  };
  Ok(Rational::canonical_unchecked(numer, denom))
}

/// Given coprime `target` and `other`, computes `target * 10^power /
/// other` as a coprime pair, by cancelling the twos and fives of
/// `other` against the scale.
fn scale_coprime(target: &BigInt, other: &BigInt, power: u32) -> (BigInt, BigInt) {
  let (other, twos) = remove_twos(other, power);
  let (other, fives) = remove_fives(other, power);
  let target = target * num::pow(BigInt::from(2), (power - twos) as usize)
    * num::pow(BigInt::from(5), (power - fives) as usize);
  (target, other)
}

/// Divides out up to `limit` factors of two. `value` must be nonzero.
fn remove_twos(value: &BigInt, limit: u32) -> (BigInt, u32) {
  let count = value.trailing_zeros().map_or(0, |n| n.min(u64::from(limit))) as u32;
  (value >> count, count)
}

/// Divides out up to `limit` factors of five. `value` must be nonzero.
fn remove_fives(mut value: BigInt, limit: u32) -> (BigInt, u32) {
  let five = BigInt::from(5);
  let mut count = 0;
  while count < limit {
    let (quotient, remainder) = value.div_rem(&five);
    if !remainder.is_zero() {
      break;
    }
    value = quotient;
    count += 1;
  }
  (value, count)
}
