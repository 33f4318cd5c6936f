
//! Integer utilities over arbitrary-precision integers.
//!
//! Everything here is a pure function of its arguments. Signs are
//! handled on the magnitude: the bit operations and rounding look at
//! `|x|` and put the sign back afterward.

use crate::util::radix::Radix;

use num::{BigInt, BigUint, Zero, One, Signed};
use num::bigint::Sign;
use num::integer::Integer;

use std::ops::MulAssign;

pub fn abs(value: &BigInt) -> BigInt {
  value.abs()
}

pub fn is_even(value: &BigInt) -> bool {
  value.is_even()
}

pub fn is_odd(value: &BigInt) -> bool {
  value.is_odd()
}

/// Greatest common divisor by Stein's algorithm. Arbitrary-precision
/// division is far more expensive than shifting and subtracting, which
/// is all this uses.
///
/// The result is never negative, and `gcd(x, 0) == |x|`.
pub fn gcd(lhs: &BigInt, rhs: &BigInt) -> BigInt {
  if lhs.is_zero() {
    return rhs.abs();
  }
  if rhs.is_zero() {
    return lhs.abs();
  }
  if lhs.magnitude().is_one() || rhs.magnitude().is_one() {
    return BigInt::one();
  }
  let mut x = lhs.abs();
  let mut y = rhs.abs();

  // Common factors of two, restored at the end.
  let k = trailing_zeros(&x).min(trailing_zeros(&y));
  x >>= k;
  y >>= k;

  let mut z = if is_odd(&x) { - &y } else { x.clone() };
  while !z.is_zero() {
    let shift = trailing_zeros(&z);
    z >>= shift;
    if z.is_positive() {
      x = z;
    } else {
      y = - z;
    }
    z = &x - &y;
  }

  x << k
}

/// Least common multiple. Always non-negative; zero if either input
/// is zero.
pub fn lcm(lhs: &BigInt, rhs: &BigInt) -> BigInt {
  if lhs.is_zero() || rhs.is_zero() {
    return BigInt::zero();
  }
  (lhs * rhs).abs() / gcd(lhs, rhs)
}

/// Tests the bit at `pos` (0 is least significant) of `|value|`.
pub fn bit_at(value: &BigInt, pos: u64) -> bool {
  value.magnitude().bit(pos)
}

/// Sets the bit at `pos` of `|value|`, keeping the sign of `value`.
pub fn bit_on(value: &BigInt, pos: u64) -> BigInt {
  let mut magnitude = value.magnitude().clone();
  magnitude.set_bit(pos, true);
  with_sign_of(value, magnitude)
}

/// Clears the bit at `pos` of `|value|`, keeping the sign of `value`.
pub fn bit_off(value: &BigInt, pos: u64) -> BigInt {
  let mut magnitude = value.magnitude().clone();
  magnitude.set_bit(pos, false);
  with_sign_of(value, magnitude)
}

/// Rounds `value` to the nearest multiple of `10^exponent`. Ties round
/// away from zero, so `-15` rounds to `-20`.
pub fn round_to(value: &BigInt, exponent: u32) -> BigInt {
  round_to_in(value, exponent, Radix::Decimal)
}

/// Rounds `value` to the nearest multiple of `radix^exponent`. Ties
/// round away from zero.
pub fn round_to_in(value: &BigInt, exponent: u32, radix: Radix) -> BigInt {
  let magnitude = value.abs();
  let divisor = BigInt::from(u32::from(radix)).pow(exponent);
  let remainder = &magnitude % &divisor;
  let rounded = if &remainder * 2u32 >= divisor {
    magnitude - remainder + divisor
  } else {
    magnitude - remainder
  };
  if value.is_negative() { - rounded } else { rounded }
}

/// The number of decimal digits needed to write `|value|`. Zero takes
/// one digit.
pub fn count_digits(value: &BigInt) -> usize {
  count_digits_in(value, Radix::Decimal)
}

pub fn count_digits_in(value: &BigInt, radix: Radix) -> usize {
  if value.is_zero() {
    return 1;
  }
  value.magnitude().to_str_radix(u32::from(radix)).len()
}

/// True for finite, nonzero floats which are not subnormal.
pub fn is_normal_number(value: f64) -> bool {
  value.is_normal()
}

/// Raises `base` to a non-negative integer power. `x^0` is one for
/// every `x`, including zero.
pub fn pow_by_repeated_square<T>(mut base: T, exp: &BigUint) -> T
where T: One + MulAssign + Clone {
  let mut result = T::one();
  let mut exp = exp.clone();
  while !exp.is_zero() {
    if exp.bit(0) {
      result *= base.clone();
    }
    exp >>= 1u32;
    if !exp.is_zero() {
      base *= base.clone();
    }
  }
  result
}

fn trailing_zeros(value: &BigInt) -> u64 {
  value.trailing_zeros().unwrap_or(0)
}

fn with_sign_of(value: &BigInt, magnitude: BigUint) -> BigInt {
  let sign = if value.is_negative() { Sign::Minus } else { Sign::Plus };
  BigInt::from_biguint(sign, magnitude)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn big(n: i64) -> BigInt {
    BigInt::from(n)
  }

  fn pow(base: i64, exp: u32) -> BigInt {
    big(base).pow(exp)
  }

  #[test]
  fn test_abs() {
    assert_eq!(abs(&big(-5)), big(5));
    assert_eq!(abs(&big(5)), big(5));
    assert_eq!(abs(&big(0)), big(0));
  }

  #[test]
  fn test_even_odd() {
    assert!(is_even(&big(2)));
    assert!(is_even(&big(2 * 3 * 5 * 7)));
    assert!(is_even(&big(0)));
    assert!(is_even(&big(-4)));
    assert!(!is_even(&big(3 * 5 * 7)));

    assert!(is_odd(&big(1)));
    assert!(is_odd(&big(3 * 5 * 7)));
    assert!(is_odd(&big(-3)));
    assert!(!is_odd(&big(2 * 3)));
  }

  #[test]
  fn test_gcd_coprime() {
    assert_eq!(gcd(&big(1), &big(24)), big(1));
    assert_eq!(gcd(&big(24), &big(1)), big(1));
    assert_eq!(gcd(&big(3), &big(7)), big(1));
    assert_eq!(gcd(&big(7), &big(3)), big(1));
    assert_eq!(gcd(&pow(2, 5), &pow(3, 5)), big(1));
    assert_eq!(gcd(&pow(3, 5), &pow(2, 5)), big(1));
  }

  #[test]
  fn test_gcd_common_factors() {
    assert_eq!(gcd(&big(7 * 11), &big(7 * 11 * 13)), big(7 * 11));
    assert_eq!(gcd(&big(7 * 11 * 13), &big(7 * 11)), big(7 * 11));
    assert_eq!(gcd(&big(7 * 11), &big(7 * 13)), big(7));
    assert_eq!(gcd(&big(7 * 11 * 13), &big(7 * 11 * 17)), big(7 * 11));
    assert_eq!(
      gcd(&(pow(2, 5) * pow(3, 4)), &(pow(2, 4) * pow(3, 5) * pow(5, 5))),
      pow(2, 4) * pow(3, 4),
    );
    assert_eq!(
      gcd(&(pow(2, 5) * pow(3, 5)), &(pow(2, 5) * pow(3, 5) * pow(5, 5))),
      pow(2, 5) * pow(3, 5),
    );
  }

  #[test]
  fn test_gcd_negative() {
    assert_eq!(gcd(&big(-7 * 11), &big(7 * 11 * 13)), big(7 * 11));
    assert_eq!(gcd(&big(7 * 11 * 13), &big(-7 * 11)), big(7 * 11));
    assert_eq!(gcd(&big(-7 * 13), &big(-7 * 11)), big(7));
  }

  #[test]
  fn test_gcd_with_unit_is_immediate() {
    let huge = pow(10, 200000);
    assert_eq!(gcd(&huge, &big(1)), big(1));
    assert_eq!(gcd(&big(-1), &huge), big(1));
    assert_eq!(gcd(&big(1), &big(0)), big(1));
  }

  #[test]
  fn test_gcd_zero() {
    assert_eq!(gcd(&big(0), &big(12)), big(12));
    assert_eq!(gcd(&big(12), &big(0)), big(12));
    assert_eq!(gcd(&big(0), &big(-12)), big(12));
    assert_eq!(gcd(&big(-12), &big(0)), big(12));
    assert_eq!(gcd(&big(0), &big(0)), big(0));
  }

  #[test]
  fn test_gcd_large() {
    let a = pow(2, 100) * pow(3, 40) * big(1_000_003);
    let b = pow(2, 64) * pow(3, 50) * big(999_983);
    assert_eq!(gcd(&a, &b), pow(2, 64) * pow(3, 40));
  }

  #[test]
  fn test_lcm() {
    assert_eq!(lcm(&big(1), &big(24)), big(24));
    assert_eq!(lcm(&big(3), &big(7)), big(21));
    assert_eq!(lcm(&big(7 * 11), &big(7 * 13)), big(7 * 11 * 13));
    assert_eq!(lcm(&big(7 * 11 * 13), &big(7 * 11 * 17)), big(7 * 11 * 13 * 17));
    assert_eq!(
      lcm(&(pow(2, 5) * pow(3, 4)), &(pow(2, 4) * pow(3, 5) * pow(5, 5))),
      pow(2, 5) * pow(3, 5) * pow(5, 5),
    );
  }

  #[test]
  fn test_lcm_negative_and_zero() {
    assert_eq!(lcm(&big(-7 * 11), &big(7 * 13)), big(7 * 11 * 13));
    assert_eq!(lcm(&big(7 * 13), &big(-7 * 11)), big(7 * 11 * 13));
    assert_eq!(lcm(&big(0), &big(5)), big(0));
  }

  #[test]
  fn test_bit_at() {
    assert!(bit_at(&big(1), 0));
    assert!(bit_at(&big(1 << 1), 1));
    assert!(bit_at(&big(1 << 5), 5));
    assert!(!bit_at(&big(1 << 5), 0));
    assert!(!bit_at(&big(1 << 5), 4));
    assert!(bit_at(&big(-(1 << 5)), 5));
    assert!(!bit_at(&big(5), 200));
  }

  #[test]
  fn test_bit_on() {
    assert_eq!(bit_on(&big(0), 0), big(1));
    assert_eq!(bit_on(&big(0), 3), big(8));
    assert_eq!(bit_on(&big(1), 0), big(1));
    assert_eq!(bit_on(&big(1), 1), big(3));
    assert_eq!(bit_on(&big(7), 2), big(7));
    assert_eq!(bit_on(&big(7), 3), big(15));
    assert_eq!(bit_on(&big(-1), 1), big(-3));
    assert_eq!(bit_on(&big(0), 70), pow(2, 70));
  }

  #[test]
  fn test_bit_off() {
    assert_eq!(bit_off(&big(0), 0), big(0));
    assert_eq!(bit_off(&big(0), 3), big(0));
    assert_eq!(bit_off(&big(1), 0), big(0));
    assert_eq!(bit_off(&big(1), 1), big(1));
    assert_eq!(bit_off(&big(7), 0), big(6));
    assert_eq!(bit_off(&big(7), 1), big(5));
    assert_eq!(bit_off(&big(7), 2), big(3));
    assert_eq!(bit_off(&big(7), 3), big(7));
    assert_eq!(bit_off(&big(-7), 0), big(-6));
  }

  #[test]
  fn test_round_to_positive() {
    assert_eq!(round_to(&big(10), 1), big(10));
    assert_eq!(round_to(&big(11), 1), big(10));
    assert_eq!(round_to(&big(14), 1), big(10));
    assert_eq!(round_to(&big(15), 1), big(20));
    assert_eq!(round_to(&big(16), 1), big(20));
    assert_eq!(round_to(&big(25), 1), big(30));
    assert_eq!(round_to(&big(1349), 2), big(1300));
    assert_eq!(round_to(&big(1350), 2), big(1400));
    assert_eq!(round_to(&big(1400), 2), big(1400));
  }

  #[test]
  fn test_round_to_negative_rounds_ties_away_from_zero() {
    assert_eq!(round_to(&big(-10), 1), big(-10));
    assert_eq!(round_to(&big(-14), 1), big(-10));
    assert_eq!(round_to(&big(-15), 1), big(-20));
    assert_eq!(round_to(&big(-16), 1), big(-20));
    assert_eq!(round_to(&big(-25), 1), big(-30));
    assert_eq!(round_to(&big(-1349), 2), big(-1300));
    assert_eq!(round_to(&big(-1350), 2), big(-1400));
  }

  #[test]
  fn test_round_to_zero_exponent() {
    assert_eq!(round_to(&big(17), 0), big(17));
    assert_eq!(round_to(&big(-17), 0), big(-17));
  }

  #[test]
  fn test_round_to_in_other_radix() {
    assert_eq!(round_to_in(&big(0b1011), 2, Radix::Binary), big(0b1100));
    assert_eq!(round_to_in(&big(0b1001), 2, Radix::Binary), big(0b1000));
    assert_eq!(round_to_in(&big(-0x18), 1, Radix::Hexadecimal), big(-0x20));
  }

  #[test]
  fn test_count_digits() {
    assert_eq!(count_digits(&big(0)), 1);
    assert_eq!(count_digits(&big(9999)), 4);
    assert_eq!(count_digits(&big(10000)), 5);
    assert_eq!(count_digits(&big(10001)), 5);
    assert_eq!(count_digits(&big(999_999_999_999)), 12);
    assert_eq!(count_digits(&big(1_000_000_000_000)), 13);
    assert_eq!(count_digits(&big(-9999)), 4);
    assert_eq!(count_digits(&big(-1_000_000_000_000)), 13);
  }

  #[test]
  fn test_count_digits_hexadecimal() {
    assert_eq!(count_digits_in(&big(0xffff), Radix::Hexadecimal), 4);
    assert_eq!(count_digits_in(&big(0x10000), Radix::Hexadecimal), 5);
    assert_eq!(count_digits_in(&big(0xffff_ffff_ffff), Radix::Hexadecimal), 12);
    assert_eq!(count_digits_in(&big(0x1_0000_0000_0000), Radix::Hexadecimal), 13);
    assert_eq!(count_digits_in(&big(0), Radix::Binary), 1);
  }

  #[test]
  fn test_is_normal_number() {
    assert!(is_normal_number(1.0));
    assert!(is_normal_number(-1.0));
    assert!(is_normal_number(2.2250738585072014e-308));
    assert!(is_normal_number(-2.2250738585072014e-308));
    assert!(!is_normal_number(0.0));
    assert!(!is_normal_number(2.225073858507201e-308));
    assert!(!is_normal_number(f64::NAN));
    assert!(!is_normal_number(f64::INFINITY));
    assert!(!is_normal_number(f64::NEG_INFINITY));
  }

  #[test]
  fn test_pow_by_repeated_square() {
    assert_eq!(pow_by_repeated_square(big(3), &BigUint::from(0u32)), big(1));
    assert_eq!(pow_by_repeated_square(big(0), &BigUint::from(0u32)), big(1));
    assert_eq!(pow_by_repeated_square(big(3), &BigUint::from(1u32)), big(3));
    assert_eq!(pow_by_repeated_square(big(3), &BigUint::from(10u32)), big(59049));
    assert_eq!(pow_by_repeated_square(big(-2), &BigUint::from(7u32)), big(-128));
    assert_eq!(pow_by_repeated_square(big(2), &BigUint::from(100u32)), pow(2, 100));
  }
}
