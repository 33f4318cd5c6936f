
//! Conversions into and out of [`Rational`], and the general-purpose
//! entry points [`rational`] and [`ratio`].

use super::Rational;
use crate::error::Error;
use crate::literal::parse_literal;
use crate::math::is_normal_number;

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use num::{BigInt, BigRational, Zero, FromPrimitive, ToPrimitive};
use tracing::trace;

use std::str::FromStr;

/// Anything [`rational`] accepts.
#[derive(Debug, Clone)]
pub enum RationalInput<'a> {
  Integer(BigInt),
  Float(f64),
  /// Literal text, such as `"-1.2(3)"` or `"1/0xFF"`.
  Literal(&'a str),
  Rational(Rational),
}

/// Values usable as one side of [`ratio`]. Conversion fails unless the
/// value is a whole number.
pub trait IntegerArgument {
  fn into_integer(self) -> Result<BigInt, Error>;
}

/// Converts any supported value into a canonical [`Rational`].
///
/// Floats are converted exactly, so `rational(0.1)` is the nearest
/// double to one tenth and not `1/10`. Strings are parsed as literals.
pub fn rational<'a>(value: impl Into<RationalInput<'a>>) -> Result<Rational, Error> {
  match value.into() {
    RationalInput::Integer(n) => Ok(Rational::from_integer(n)),
    RationalInput::Float(x) => Rational::from_f64(x),
    RationalInput::Literal(text) => Rational::parse(text),
    RationalInput::Rational(r) => Ok(r.into_reduced()),
  }
}

/// The canonical rational `numer / denom`. Each side may be an
/// integer, an integral float, or literal text evaluating to an
/// integer.
pub fn ratio(numer: impl IntegerArgument, denom: impl IntegerArgument) -> Result<Rational, Error> {
  Rational::reduced(numer.into_integer()?, denom.into_integer()?)
}

impl Rational {
  /// The exact value of a finite float. Fails on NaN and infinities.
  pub fn from_f64(value: f64) -> Result<Rational, Error> {
    trace!(value, normal = is_normal_number(value), "Converting float to rational");
    if value.is_nan() {
      return Err(Error::invalid_conversion("NaN cannot be converted to a rational"));
    }
    if value.is_infinite() {
      return Err(Error::invalid_conversion("Infinity cannot be converted to a rational"));
    }
    // Peel off 128 bits of the fraction at a time. Every step is exact
    // in binary floating point, so the loop ends once the mantissa is
    // exhausted.
    let step = 2f64.powi(128);
    let big_step = BigInt::from(1) << 128u32;
    let mut rest = value.abs();
    let mut numer = BigInt::zero();
    let mut denom = BigInt::from(1);
    loop {
      let integer_part = rest.floor();
      let digit = BigInt::from_f64(integer_part)
        .ok_or_else(|| Error::invalid_conversion(format!("{value} cannot be converted to a rational")))?;
      numer = numer * &big_step + digit;
      rest = (rest - integer_part) * step;
      if rest <= 0.0 {
        break;
      }
      denom *= &big_step;
    }
    if value.is_sign_negative() {
      numer = - numer;
    }
    Ok(Rational::reduced_unchecked(numer, denom))
  }

  /// Parses and evaluates literal text.
  pub fn parse(text: &str) -> Result<Rational, Error> {
    parse_literal(text)?.evaluate()
  }

  /// The nearest float, or NaN if the value is out of range.
  pub fn to_f64(&self) -> f64 {
    let canonical = self.reduce();
    BigRational::new_raw(canonical.numer.clone(), canonical.denom.clone())
      .to_f64()
      .unwrap_or(f64::NAN)
  }
}

impl FromStr for Rational {
  type Err = Error;

  fn from_str(s: &str) -> Result<Rational, Error> {
    Rational::parse(s)
  }
}

impl TryFrom<f64> for Rational {
  type Error = Error;

  fn try_from(value: f64) -> Result<Rational, Error> {
    Rational::from_f64(value)
  }
}

impl TryFrom<f32> for Rational {
  type Error = Error;

  fn try_from(value: f32) -> Result<Rational, Error> {
    Rational::from_f64(value.into())
  }
}

impl From<BigInt> for Rational {
  fn from(value: BigInt) -> Rational {
    Rational::from_integer(value)
  }
}

impl From<&Rational> for Rational {
  fn from(value: &Rational) -> Rational {
    value.clone()
  }
}

impl From<BigRational> for Rational {
  fn from(value: BigRational) -> Rational {
    let (numer, denom) = value.into_raw();
    Rational::reduced_unchecked(numer, denom)
  }
}

impl From<Rational> for BigRational {
  fn from(value: Rational) -> BigRational {
    let Rational { numer, denom, .. } = value.into_reduced();
    BigRational::new_raw(numer, denom)
  }
}

impl<'a> From<BigInt> for RationalInput<'a> {
  fn from(value: BigInt) -> Self {
    RationalInput::Integer(value)
  }
}

impl<'a> From<f64> for RationalInput<'a> {
  fn from(value: f64) -> Self {
    RationalInput::Float(value)
  }
}

impl<'a> From<f32> for RationalInput<'a> {
  fn from(value: f32) -> Self {
    RationalInput::Float(value.into())
  }
}

impl<'a> From<&'a str> for RationalInput<'a> {
  fn from(value: &'a str) -> Self {
    RationalInput::Literal(value)
  }
}

impl<'a> From<&'a String> for RationalInput<'a> {
  fn from(value: &'a String) -> Self {
    RationalInput::Literal(value)
  }
}

impl<'a> From<Rational> for RationalInput<'a> {
  fn from(value: Rational) -> Self {
    RationalInput::Rational(value)
  }
}

impl<'a> From<&Rational> for RationalInput<'a> {
  fn from(value: &Rational) -> Self {
    RationalInput::Rational(value.clone())
  }
}

impl IntegerArgument for BigInt {
  fn into_integer(self) -> Result<BigInt, Error> {
    Ok(self)
  }
}

impl IntegerArgument for &BigInt {
  fn into_integer(self) -> Result<BigInt, Error> {
    Ok(self.clone())
  }
}

impl IntegerArgument for bool {
  fn into_integer(self) -> Result<BigInt, Error> {
    Ok(BigInt::from(u8::from(self)))
  }
}

impl IntegerArgument for f64 {
  fn into_integer(self) -> Result<BigInt, Error> {
    if !self.is_finite() || self.fract() != 0.0 {
      return Err(Error::invalid_argument(format!("{self} is not an integer")));
    }
    BigInt::from_f64(self)
      .ok_or_else(|| Error::invalid_argument(format!("{self} is not an integer")))
  }
}

impl IntegerArgument for f32 {
  fn into_integer(self) -> Result<BigInt, Error> {
    f64::from(self).into_integer()
  }
}

impl IntegerArgument for &str {
  fn into_integer(self) -> Result<BigInt, Error> {
    let value = Rational::parse(self)?.into_reduced();
    if !value.is_integer() {
      return Err(Error::invalid_argument(format!("{self} is not an integer")));
    }
    Ok(value.numer)
  }
}

impl IntegerArgument for String {
  fn into_integer(self) -> Result<BigInt, Error> {
    self.as_str().into_integer()
  }
}

macro_rules! impl_from_primitive {
  ($($t:ty),*) => {
    $(
      impl From<$t> for Rational {
        fn from(value: $t) -> Rational {
          Rational::from_integer(value)
        }
      }

      impl<'a> From<$t> for RationalInput<'a> {
        fn from(value: $t) -> Self {
          RationalInput::Integer(BigInt::from(value))
        }
      }

      impl IntegerArgument for $t {
        fn into_integer(self) -> Result<BigInt, Error> {
          Ok(BigInt::from(self))
        }
      }
    )*
  }
}

impl_from_primitive!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl AbsDiffEq for Rational {
  type Epsilon = f64;

  fn default_epsilon() -> f64 {
    <f64 as AbsDiffEq>::default_epsilon()
  }

  fn abs_diff_eq(&self, other: &Rational, epsilon: f64) -> bool {
    self.to_f64().abs_diff_eq(&other.to_f64(), epsilon)
  }
}

impl RelativeEq for Rational {
  fn default_max_relative() -> f64 {
    <f64 as RelativeEq>::default_max_relative()
  }

  fn relative_eq(&self, other: &Rational, epsilon: f64, max_relative: f64) -> bool {
    self.to_f64().relative_eq(&other.to_f64(), epsilon, max_relative)
  }
}

impl UlpsEq for Rational {
  fn default_max_ulps() -> u32 {
    <f64 as UlpsEq>::default_max_ulps()
  }

  fn ulps_eq(&self, other: &Rational, epsilon: f64, max_ulps: u32) -> bool {
    self.to_f64().ulps_eq(&other.to_f64(), epsilon, max_ulps)
  }
}

#[cfg(feature = "serde")]
mod serialization {
  use super::Rational;

  use serde::{Serialize, Serializer, Deserialize, Deserializer};
  use serde::de::Error as _;

  /// Serializes as the canonical `numer/denom` string.
  impl Serialize for Rational {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
      serializer.collect_str(self.reduce())
    }
  }

  /// Deserializes from any literal string.
  impl<'de> Deserialize<'de> for Rational {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Rational, D::Error> {
      let text = String::deserialize(deserializer)?;
      Rational::parse(&text).map_err(D::Error::custom)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::assert_strict_eq;
  use crate::literal::LiteralParseError;

  use approx::{assert_abs_diff_eq, assert_relative_eq};

  fn raw(numer: i64, denom: i64) -> Rational {
    Rational::new(numer, denom).unwrap()
  }

  #[test]
  fn test_rational_from_integers() {
    assert_strict_eq!(rational(5).unwrap(), raw(5, 1));
    assert_strict_eq!(rational(BigInt::from(-7)).unwrap(), raw(-7, 1));
    assert_strict_eq!(rational(0u8).unwrap(), raw(0, 1));
  }

  #[test]
  fn test_rational_from_rational_is_canonical() {
    assert_strict_eq!(rational(raw(6, -4)).unwrap(), raw(-3, 2));
    assert_strict_eq!(rational(&raw(2, 8)).unwrap(), raw(1, 4));
  }

  #[test]
  fn test_rational_from_float() {
    assert_strict_eq!(rational(0.5).unwrap(), raw(1, 2));
    assert_strict_eq!(rational(-2.75).unwrap(), raw(-11, 4));
    assert_strict_eq!(rational(3.0f32).unwrap(), raw(3, 1));
    assert_strict_eq!(rational(0.0).unwrap(), raw(0, 1));
  }

  #[test]
  fn test_rational_from_literal() {
    assert_strict_eq!(rational("-1.2(3)").unwrap(), raw(-37, 30));
    assert_strict_eq!(rational(&String::from("1/0xFF")).unwrap(), raw(1, 255));
    assert!(matches!(rational("1/"), Err(Error::ParseError(_))));
  }

  #[test]
  fn test_from_f64_is_exact() {
    let tenth = Rational::from_f64(0.1).unwrap();
    assert_ne!(tenth, raw(1, 10));
    assert_eq!(tenth.denom(), &(BigInt::from(1) << 55u32));
    assert_eq!(tenth.numer(), &BigInt::from(3602879701896397u64));
    assert_eq!(tenth.to_f64(), 0.1);
  }

  #[test]
  fn test_from_f64_subnormal() {
    let tiny = f64::from_bits(1);
    let value = Rational::from_f64(tiny).unwrap();
    assert_eq!(value.numer(), &BigInt::from(1));
    assert_eq!(value.denom(), &(BigInt::from(1) << 1074u32));
  }

  #[test]
  fn test_from_f64_large() {
    let value = Rational::from_f64(1e300).unwrap();
    assert!(value.is_integer());
    assert_eq!(value.to_f64(), 1e300);
  }

  #[test]
  fn test_from_f64_rejects_non_finite() {
    assert!(matches!(Rational::from_f64(f64::NAN), Err(Error::InvalidConversion(_))));
    assert!(matches!(Rational::from_f64(f64::INFINITY), Err(Error::InvalidConversion(_))));
    assert!(matches!(Rational::try_from(f64::NEG_INFINITY), Err(Error::InvalidConversion(_))));
    assert!(matches!(rational(f32::NAN), Err(Error::InvalidConversion(_))));
  }

  #[test]
  fn test_ratio() {
    assert_strict_eq!(ratio(6, 4).unwrap(), raw(3, 2));
    assert_strict_eq!(ratio(1, -3).unwrap(), raw(-1, 3));
    assert_strict_eq!(ratio(BigInt::from(10), &BigInt::from(4)).unwrap(), raw(5, 2));
    assert_strict_eq!(ratio(true, 2u64).unwrap(), raw(1, 2));
    assert_strict_eq!(ratio(3.0, -6.0).unwrap(), raw(-1, 2));
    assert_strict_eq!(ratio("0xff", "10").unwrap(), raw(51, 2));
    assert_strict_eq!(ratio(String::from("4/2"), 3).unwrap(), raw(2, 3));
  }

  #[test]
  fn test_ratio_rejects_non_integers() {
    assert!(matches!(ratio(1.5, 2), Err(Error::InvalidArgument(_))));
    assert!(matches!(ratio(1, f64::NAN), Err(Error::InvalidArgument(_))));
    assert!(matches!(ratio("0.5", 2), Err(Error::InvalidArgument(_))));
    assert!(matches!(ratio("zzz", 2), Err(Error::ParseError(_))));
  }

  #[test]
  fn test_ratio_rejects_zero_denominator() {
    assert!(matches!(ratio(1, 0), Err(Error::InvalidArgument(_))));
    assert!(matches!(ratio(1, false), Err(Error::InvalidArgument(_))));
  }

  #[test]
  fn test_from_str() {
    let value: Rational = "0b101/0b10.101".parse().unwrap();
    assert_strict_eq!(value, raw(40, 21));
    let err = "".parse::<Rational>().unwrap_err();
    assert_eq!(err, Error::ParseError(LiteralParseError::EmptyInput));
  }

  #[test]
  fn test_to_f64() {
    assert_eq!(raw(1, 4).to_f64(), 0.25);
    assert_eq!(raw(-3, 6).to_f64(), -0.5);
    let huge = Rational::from_integer(BigInt::from(10).pow(400));
    assert!(huge.to_f64().is_infinite() || huge.to_f64().is_nan());
  }

  #[test]
  fn test_big_rational_interop() {
    let big = BigRational::new(BigInt::from(6), BigInt::from(-4));
    let value = Rational::from(big.clone());
    assert_strict_eq!(value, raw(-3, 2));
    assert_eq!(BigRational::from(raw(6, -4)), big);
  }

  #[test]
  fn test_approx() {
    assert_abs_diff_eq!(raw(1, 3), raw(333333, 1000000), epsilon = 1e-6);
    assert_relative_eq!(raw(22, 7), Rational::from_f64(22.0 / 7.0).unwrap());
  }

  #[cfg(feature = "serde")]
  #[test]
  fn test_serde() {
    let json = serde_json::to_string(&raw(6, -4)).unwrap();
    assert_eq!(json, "\"-3/2\"");
    let value: Rational = serde_json::from_str("\"0.(3)\"").unwrap();
    assert_strict_eq!(value, raw(1, 3));
    assert!(serde_json::from_str::<Rational>("\"1/0\"").is_err());
  }
}
