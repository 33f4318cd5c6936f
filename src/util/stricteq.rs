
//! Representation-level equality.
//!
//! [`Rational`](crate::Rational) compares by value, so `2/4 == 1/2`.
//! Tests which care whether a value was actually reduced need a
//! stricter relation, which is what [`StrictEq`] provides.

use std::fmt::{self, Debug, Formatter};

/// Trait for defining a stricter notion of equality than the usual
/// [`PartialEq`].
///
/// `a.strict_eq(b)` must imply `a == b`, and the relation must be
/// symmetric and transitive.
pub trait StrictEq: PartialEq {
  fn strict_eq(&self, other: &Self) -> bool;
}

/// Lifts a [`StrictEq`] relation into `PartialEq` for use with macros
/// like `assert_eq!`. Prints exactly like the wrapped value.
pub struct Strictly<'a, T>(pub &'a T);

impl<'a, T: StrictEq> PartialEq for Strictly<'a, T> {
  fn eq(&self, other: &Self) -> bool {
    self.0.strict_eq(other.0)
  }
}

impl<'a, T: Debug> Debug for Strictly<'a, T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{:?}", self.0)
  }
}

impl<T: StrictEq> StrictEq for Option<T> {
  fn strict_eq(&self, other: &Self) -> bool {
    match (self, other) {
      (Some(a), Some(b)) => a.strict_eq(b),
      (None, None) => true,
      _ => false,
    }
  }
}

#[macro_export]
macro_rules! assert_strict_eq {
  ($left:expr, $right:expr $(,)?) => {
    match (&$left, &$right) {
      (left_val, right_val) => {
        assert_eq!(
          $crate::util::stricteq::Strictly(left_val),
          $crate::util::stricteq::Strictly(right_val),
        )
      }
    }
  }
}

#[macro_export]
macro_rules! assert_strict_ne {
  ($left:expr, $right:expr $(,)?) => {
    match (&$left, &$right) {
      (left_val, right_val) => {
        assert_ne!(
          $crate::util::stricteq::Strictly(left_val),
          $crate::util::stricteq::Strictly(right_val),
        )
      }
    }
  }
}
