
//! Integer rounding and fixed-point decimal rendering.

use super::Rational;
use crate::math;

use num::{BigInt, Zero, One, Signed};
use num::integer::Integer;

use std::fmt::{self, Display, Formatter};

/// Number of fractional digits used by [`Rational::to_decimal_default`].
pub const DEFAULT_DECIMAL_DIGITS: usize = 10;

/// A [`Rational`] rendered to a fixed number of decimal places. See
/// [`Rational::decimal`].
#[derive(Debug, Clone, Copy)]
pub struct Decimal<'a> {
  value: &'a Rational,
  digits: usize,
}

impl Rational {
  /// The greatest integer less than or equal to the value.
  pub fn floor(&self) -> BigInt {
    let canonical = self.reduce();
    if canonical.denom.is_one() {
      return canonical.numer.clone();
    }
    let quotient = &canonical.numer / &canonical.denom;
    if canonical.numer.is_positive() { quotient } else { quotient - 1 }
  }

  /// The least integer greater than or equal to the value.
  pub fn ceil(&self) -> BigInt {
    let canonical = self.reduce();
    if canonical.denom.is_one() {
      return canonical.numer.clone();
    }
    let quotient = &canonical.numer / &canonical.denom;
    if canonical.numer.is_positive() { quotient + 1 } else { quotient }
  }

  /// Rounds toward zero.
  pub fn trunc(&self) -> BigInt {
    let canonical = self.reduce();
    &canonical.numer / &canonical.denom
  }

  /// Rounds to the nearest integer. Halves round toward positive
  /// infinity, so `-5/2` rounds to `-2`.
  pub fn round(&self) -> BigInt {
    let canonical = self.reduce();
    let floor = self.floor();
    let remainder = &canonical.numer - &floor * &canonical.denom;
    if remainder * 2 >= canonical.denom {
      floor + 1
    } else {
      floor
    }
  }

  /// Renders the value in base ten with exactly `digits` places after
  /// the point, rounding the last place half away from zero.
  ///
  /// With `digits == 0` the fraction is dropped entirely and the value
  /// is truncated toward zero rather than rounded. A negative value
  /// which rounds to zero keeps its sign, as in `-0.00`.
  pub fn to_decimal(&self, digits: usize) -> String {
    let canonical = self.reduce();
    let sign = if canonical.numer.is_negative() { "-" } else { "" };
    let (mut integer, remainder) = canonical.numer.abs().div_rem(&canonical.denom);
    if digits == 0 {
      return format!("{sign}{integer}");
    }

    let scale = num::pow(BigInt::from(10), digits);
    let mut fraction = if remainder.is_zero() {
      BigInt::zero()
    } else {
      // One guard digit, then round it away.
      let extended = remainder * &scale * 10 / &canonical.denom;
      math::round_to(&extended, 1) / 10
    };
    if fraction >= scale {
      integer += 1;
      fraction -= &scale;
    }
    let fraction = fraction.to_string();
    format!("{sign}{integer}.{fraction:0>digits$}")
  }

  /// [`to_decimal`](Rational::to_decimal) with
  /// [`DEFAULT_DECIMAL_DIGITS`] places.
  pub fn to_decimal_default(&self) -> String {
    self.to_decimal(DEFAULT_DECIMAL_DIGITS)
  }

  /// A [`Display`] adapter which renders like
  /// [`to_decimal`](Rational::to_decimal).
  pub fn decimal(&self, digits: usize) -> Decimal<'_> {
    Decimal { value: self, digits }
  }
}

impl<'a> Display for Decimal<'a> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(&self.value.to_decimal(self.digits))
  }
}
