// src/money.rs

//! Fixed-point money in integer minor units.
//!
//! The cart never computes in floating-point dollars. Amounts are carried as
//! whole cents and rounding happens in exactly one place: when a percentage
//! (e.g. the tax rate) is applied, half-up at two decimals.
//!
//! Arithmetic saturates at the `i64` bounds instead of wrapping, so an
//! absurdly large price or quantity can never flip a total negative.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

/// An amount of money in minor units (cents).
///
/// Serializes transparently as the underlying integer, so a persisted cart
/// line carries e.g. `"unitPrice": 599` for $5.99.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cents(i64);

impl Cents {
  pub const ZERO: Cents = Cents(0);

  pub const fn new(minor_units: i64) -> Self {
    Cents(minor_units)
  }

  pub const fn minor_units(self) -> i64 {
    self.0
  }

  pub const fn is_negative(self) -> bool {
    self.0 < 0
  }

  /// Applies a rate expressed in basis points (1% = 100 bp), rounding
  /// half-up at the cent. Negative amounts round half away from zero.
  pub fn percent_bp(self, basis_points: u32) -> Cents {
    let bp = i64::from(basis_points);
    let magnitude = self
      .0
      .saturating_abs()
      .saturating_mul(bp)
      .saturating_add(5_000)
      / 10_000;
    Cents(magnitude.saturating_mul(self.0.signum()))
  }
}

impl Add for Cents {
  type Output = Cents;

  fn add(self, rhs: Cents) -> Cents {
    Cents(self.0.saturating_add(rhs.0))
  }
}

impl AddAssign for Cents {
  fn add_assign(&mut self, rhs: Cents) {
    self.0 = self.0.saturating_add(rhs.0);
  }
}

impl Sub for Cents {
  type Output = Cents;

  fn sub(self, rhs: Cents) -> Cents {
    Cents(self.0.saturating_sub(rhs.0))
  }
}

impl Mul<i64> for Cents {
  type Output = Cents;

  fn mul(self, rhs: i64) -> Cents {
    Cents(self.0.saturating_mul(rhs))
  }
}

impl Sum for Cents {
  fn sum<I: Iterator<Item = Cents>>(iter: I) -> Cents {
    iter.fold(Cents::ZERO, Add::add)
  }
}

// Display is the only place an amount turns into dollars-and-cents text.
impl fmt::Display for Cents {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let sign = if self.0 < 0 { "-" } else { "" };
    let abs = self.0.abs();
    write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
  }
}
