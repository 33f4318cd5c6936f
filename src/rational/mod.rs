
//! Exact rational numbers of unbounded precision.
//!
//! A [`Rational`] is a numerator/denominator pair. Values built with
//! [`Rational::new`] keep exactly the fields they were given; the
//! canonical form (lowest terms, positive denominator) is computed
//! the first time something needs it and cached inside the value.
//! Every arithmetic operation produces an already-canonical result.

mod convert;
mod ops;
mod rounding;

pub use convert::{rational, ratio, RationalInput, IntegerArgument};
pub use rounding::{Decimal, DEFAULT_DECIMAL_DIGITS};

use crate::error::Error;
use crate::math;
use crate::util::stricteq::StrictEq;

use num::{BigInt, Zero, One, Signed};
use once_cell::sync::OnceCell;

use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::cmp::Ordering;

/// An arbitrary-precision rational number.
///
/// The denominator is never zero. Equality, ordering, and hashing are
/// by value, so `2/4 == 1/2`; use [`StrictEq`] to compare the stored
/// fields themselves.
///
/// A `Rational` is never mutated after construction. The cached
/// canonical form is a write-once cell, so values can be shared
/// freely across threads.
#[derive(Clone)]
pub struct Rational {
  numer: BigInt,
  denom: BigInt,
  canonical: OnceCell<Canonical>,
}

#[derive(Debug, Clone)]
enum Canonical {
  /// The stored fields are already in lowest terms with a positive
  /// denominator.
  Itself,
  Reduced(Box<Rational>),
}

impl Rational {
  /// Constructs a rational from the given fields, without reducing
  /// them. Fails if `denom` is zero.
  pub fn new(numer: impl Into<BigInt>, denom: impl Into<BigInt>) -> Result<Rational, Error> {
    let denom = denom.into();
    if denom.is_zero() {
      return Err(Error::invalid_argument("denominator must not be zero"));
    }
    Ok(Rational {
      numer: numer.into(),
      denom,
      canonical: OnceCell::new(),
    })
  }

  /// Constructs the canonical rational equal to `numer / denom`. Fails
  /// if `denom` is zero.
  pub fn reduced(numer: impl Into<BigInt>, denom: impl Into<BigInt>) -> Result<Rational, Error> {
    let denom = denom.into();
    if denom.is_zero() {
      return Err(Error::invalid_argument("denominator must not be zero"));
    }
    Ok(Rational::reduced_unchecked(numer.into(), denom))
  }

  /// An integer as a rational with denominator one.
  pub fn from_integer(value: impl Into<BigInt>) -> Rational {
    Rational::canonical_unchecked(value.into(), BigInt::one())
  }

  /// Precondition: `denom != 0`.
  pub(crate) fn reduced_unchecked(numer: BigInt, denom: BigInt) -> Rational {
    let divisor = math::gcd(&numer, &denom);
    let (numer, denom) = if divisor.is_one() {
      (numer, denom)
    } else {
      (numer / &divisor, denom / &divisor)
    };
    if denom.is_negative() {
      Rational::canonical_unchecked(- numer, - denom)
    } else {
      Rational::canonical_unchecked(numer, denom)
    }
  }

  /// Precondition: the fields are coprime and `denom > 0`.
  pub(crate) fn canonical_unchecked(numer: BigInt, denom: BigInt) -> Rational {
    debug_assert!(denom.is_positive());
    Rational {
      numer,
      denom,
      canonical: OnceCell::with_value(Canonical::Itself),
    }
  }

  /// The numerator, exactly as stored.
  pub fn numer(&self) -> &BigInt {
    &self.numer
  }

  /// The denominator, exactly as stored.
  pub fn denom(&self) -> &BigInt {
    &self.denom
  }

  /// The canonical form of this value. Computed on first use and
  /// cached; later calls are free.
  pub fn reduce(&self) -> &Rational {
    let canonical = self.canonical.get_or_init(|| Canonical::of(&self.numer, &self.denom));
    match canonical {
      Canonical::Itself => self,
      Canonical::Reduced(reduced) => reduced,
    }
  }

  /// Consumes the value and returns its canonical form.
  pub fn into_reduced(self) -> Rational {
    self.reduce();
    match self.canonical.into_inner() {
      Some(Canonical::Reduced(reduced)) => *reduced,
      _ => Rational { canonical: OnceCell::with_value(Canonical::Itself), ..self },
    }
  }

  /// Whether the stored fields are already canonical.
  pub fn is_canonical(&self) -> bool {
    matches!(self.canonical.get_or_init(|| Canonical::of(&self.numer, &self.denom)), Canonical::Itself)
  }

  pub fn is_zero(&self) -> bool {
    self.numer.is_zero()
  }

  /// Strictly greater than zero.
  pub fn is_positive(&self) -> bool {
    self.reduce().numer.is_positive()
  }

  /// Strictly less than zero.
  pub fn is_negative(&self) -> bool {
    self.reduce().numer.is_negative()
  }

  pub fn is_integer(&self) -> bool {
    self.reduce().denom.is_one()
  }

  /// `-1`, `0`, or `1` according to the sign of the value.
  pub fn signum(&self) -> i8 {
    match self.reduce().numer.sign() {
      num::bigint::Sign::Minus => -1,
      num::bigint::Sign::NoSign => 0,
      num::bigint::Sign::Plus => 1,
    }
  }

  /// The absolute value.
  pub fn abs(&self) -> Rational {
    if self.is_negative() {
      - self
    } else {
      self.clone()
    }
  }

  /// Negation. Moves the sign onto the numerator unless the stored
  /// denominator is the negative one, and keeps any cached canonical
  /// form.
  fn negated(&self) -> Rational {
    let (numer, denom) = if self.denom.is_negative() {
      (self.numer.clone(), - &self.denom)
    } else {
      (- &self.numer, self.denom.clone())
    };
    let canonical = match self.canonical.get() {
      None => OnceCell::new(),
      Some(Canonical::Itself) => OnceCell::with_value(Canonical::Itself),
      Some(Canonical::Reduced(reduced)) => OnceCell::with_value(Canonical::Reduced(Box::new(reduced.negated()))),
    };
    Rational { numer, denom, canonical }
  }
}

impl Canonical {
  fn of(numer: &BigInt, denom: &BigInt) -> Canonical {
    if denom.is_positive() && math::gcd(numer, denom).is_one() {
      Canonical::Itself
    } else {
      Canonical::Reduced(Box::new(Rational::reduced_unchecked(numer.clone(), denom.clone())))
    }
  }
}

/// The largest of the given values, or `None` if there are none. Ties
/// keep the earliest value.
pub fn max<I>(values: I) -> Option<Rational>
where I: IntoIterator,
      I::Item: Into<Rational> {
  values.into_iter()
    .map(Into::into)
    .reduce(|acc, value| if value > acc { value } else { acc })
    .map(Rational::into_reduced)
}

/// The smallest of the given values, or `None` if there are none. Ties
/// keep the earliest value.
pub fn min<I>(values: I) -> Option<Rational>
where I: IntoIterator,
      I::Item: Into<Rational> {
  values.into_iter()
    .map(Into::into)
    .reduce(|acc, value| if value < acc { value } else { acc })
    .map(Rational::into_reduced)
}

impl Debug for Rational {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.debug_struct("Rational")
      .field("numer", &self.numer)
      .field("denom", &self.denom)
      .finish()
  }
}

/// Prints the stored fields as `numer/denom`. A negative stored
/// denominator is parenthesized, as in `1/(-2)`.
impl Display for Rational {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    if self.denom.is_negative() {
      write!(f, "{}/({})", self.numer, self.denom)
    } else if self.denom.is_zero() {
      write!(f, "{}", self.numer)
    } else {
      write!(f, "{}/{}", self.numer, self.denom)
    }
  }
}

impl PartialEq for Rational {
  fn eq(&self, other: &Rational) -> bool {
    let left = self.reduce();
    let right = other.reduce();
    left.numer == right.numer && left.denom == right.denom
  }
}

impl Eq for Rational {}

impl StrictEq for Rational {
  /// Compares the stored fields, so `1/2` and `2/4` are not strictly
  /// equal.
  fn strict_eq(&self, other: &Rational) -> bool {
    self.numer == other.numer && self.denom == other.denom
  }
}

/// Compares by cross-multiplication, which is valid because canonical
/// denominators are positive.
impl Ord for Rational {
  fn cmp(&self, other: &Rational) -> Ordering {
    let left = self.reduce();
    let right = other.reduce();
    (&left.numer * &right.denom).cmp(&(&right.numer * &left.denom))
  }
}

impl PartialOrd for Rational {
  fn partial_cmp(&self, other: &Rational) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl Hash for Rational {
  fn hash<H: Hasher>(&self, state: &mut H) {
    let canonical = self.reduce();
    canonical.numer.hash(state);
    canonical.denom.hash(state);
  }
}

impl PartialEq<BigInt> for Rational {
  fn eq(&self, other: &BigInt) -> bool {
    let canonical = self.reduce();
    canonical.denom.is_one() && canonical.numer == *other
  }
}

impl PartialOrd<BigInt> for Rational {
  fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
    let canonical = self.reduce();
    Some(canonical.numer.cmp(&(other * &canonical.denom)))
  }
}

impl PartialEq<i64> for Rational {
  fn eq(&self, other: &i64) -> bool {
    *self == BigInt::from(*other)
  }
}

impl PartialOrd<i64> for Rational {
  fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
    self.partial_cmp(&BigInt::from(*other))
  }
}
