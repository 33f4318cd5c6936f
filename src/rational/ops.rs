
//! Arithmetic on [`Rational`]. Every result is canonical.

use super::Rational;
use crate::error::Error;
use crate::math;

use num::{BigInt, Zero, One, Signed};

use std::iter::{Sum, Product};
use std::ops;

fn add(left: &Rational, right: &Rational) -> Rational {
  Rational::reduced_unchecked(
    &left.numer * &right.denom + &right.numer * &left.denom,
    &left.denom * &right.denom,
  )
}

fn sub(left: &Rational, right: &Rational) -> Rational {
  Rational::reduced_unchecked(
    &left.numer * &right.denom - &right.numer * &left.denom,
    &left.denom * &right.denom,
  )
}

fn mul(left: &Rational, right: &Rational) -> Rational {
  Rational::reduced_unchecked(
    &left.numer * &right.numer,
    &left.denom * &right.denom,
  )
}

fn div(left: &Rational, right: &Rational) -> Rational {
  match left.checked_div(right) {
    Ok(quotient) => quotient,
    Err(_) => panic!("Division by zero"),
  }
}

impl Rational {
  /// The reciprocal. Fails on zero.
  pub fn inv(&self) -> Result<Rational, Error> {
    if self.is_zero() {
      return Err(Error::DivisionByZero);
    }
    let canonical = self.reduce();
    let (numer, denom) = (canonical.denom.clone(), canonical.numer.clone());
    Ok(if denom.is_negative() {
      Rational::canonical_unchecked(- numer, - denom)
    } else {
      Rational::canonical_unchecked(numer, denom)
    })
  }

  /// Division which reports a zero divisor instead of panicking.
  pub fn checked_div(&self, divisor: &Rational) -> Result<Rational, Error> {
    if divisor.is_zero() {
      return Err(Error::DivisionByZero);
    }
    Ok(Rational::reduced_unchecked(
      &self.numer * &divisor.denom,
      &self.denom * &divisor.numer,
    ))
  }

  /// Raises the value to an integer power. `0^0` is one; a negative
  /// power of zero fails with [`Error::DivisionByZero`].
  pub fn powi(&self, exponent: impl Into<BigInt>) -> Result<Rational, Error> {
    let exponent = exponent.into();
    let base = self.reduce();
    let (numer, denom) = if exponent.is_negative() {
      if base.is_zero() {
        return Err(Error::DivisionByZero);
      }
      (&base.denom, &base.numer)
    } else {
      (&base.numer, &base.denom)
    };
    // Powers of coprime integers are coprime, so no reduction is
    // needed. Only the sign may have moved to the denominator.
    let numer = math::pow_by_repeated_square(numer.clone(), exponent.magnitude());
    let denom = math::pow_by_repeated_square(denom.clone(), exponent.magnitude());
    Ok(if denom.is_negative() {
      Rational::canonical_unchecked(- numer, - denom)
    } else {
      Rational::canonical_unchecked(numer, denom)
    })
  }
}

macro_rules! impl_binop {
  ($imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident, $core:ident) => {
    impl ops::$imp<&Rational> for &Rational {
      type Output = Rational;

      fn $method(self, other: &Rational) -> Rational {
        $core(self, other)
      }
    }

    impl ops::$imp<Rational> for &Rational {
      type Output = Rational;

      fn $method(self, other: Rational) -> Rational {
        $core(self, &other)
      }
    }

    impl ops::$imp<&Rational> for Rational {
      type Output = Rational;

      fn $method(self, other: &Rational) -> Rational {
        $core(&self, other)
      }
    }

    impl ops::$imp<Rational> for Rational {
      type Output = Rational;

      fn $method(self, other: Rational) -> Rational {
        $core(&self, &other)
      }
    }

    impl ops::$imp<BigInt> for Rational {
      type Output = Rational;

      fn $method(self, other: BigInt) -> Rational {
        $core(&self, &Rational::from_integer(other))
      }
    }

    impl ops::$imp<&BigInt> for &Rational {
      type Output = Rational;

      fn $method(self, other: &BigInt) -> Rational {
        $core(self, &Rational::from_integer(other.clone()))
      }
    }

    impl ops::$imp<i64> for Rational {
      type Output = Rational;

      fn $method(self, other: i64) -> Rational {
        $core(&self, &Rational::from_integer(other))
      }
    }

    impl ops::$imp<i64> for &Rational {
      type Output = Rational;

      fn $method(self, other: i64) -> Rational {
        $core(self, &Rational::from_integer(other))
      }
    }

    impl ops::$assign_imp<Rational> for Rational {
      fn $assign_method(&mut self, other: Rational) {
        *self = $core(self, &other);
      }
    }

    impl ops::$assign_imp<&Rational> for Rational {
      fn $assign_method(&mut self, other: &Rational) {
        *self = $core(self, other);
      }
    }
  }
}

impl_binop!(Add, add, AddAssign, add_assign, add);
impl_binop!(Sub, sub, SubAssign, sub_assign, sub);
impl_binop!(Mul, mul, MulAssign, mul_assign, mul);
// Panics on a zero divisor, like the primitive integer types.
impl_binop!(Div, div, DivAssign, div_assign, div);

impl ops::Neg for Rational {
  type Output = Rational;

  fn neg(self) -> Rational {
    self.negated()
  }
}

impl ops::Neg for &Rational {
  type Output = Rational;

  fn neg(self) -> Rational {
    self.negated()
  }
}

impl Zero for Rational {
  fn zero() -> Rational {
    Rational::from_integer(0)
  }

  fn is_zero(&self) -> bool {
    self.numer.is_zero()
  }
}

impl One for Rational {
  fn one() -> Rational {
    Rational::from_integer(1)
  }
}

impl Sum for Rational {
  fn sum<I: Iterator<Item = Rational>>(iter: I) -> Rational {
    iter.fold(Rational::zero(), |acc, x| add(&acc, &x))
  }
}

impl<'a> Sum<&'a Rational> for Rational {
  fn sum<I: Iterator<Item = &'a Rational>>(iter: I) -> Rational {
    iter.fold(Rational::zero(), |acc, x| add(&acc, x))
  }
}

impl Product for Rational {
  fn product<I: Iterator<Item = Rational>>(iter: I) -> Rational {
    iter.fold(Rational::one(), |acc, x| mul(&acc, &x))
  }
}

impl<'a> Product<&'a Rational> for Rational {
  fn product<I: Iterator<Item = &'a Rational>>(iter: I) -> Rational {
    iter.fold(Rational::one(), |acc, x| mul(&acc, x))
  }
}
