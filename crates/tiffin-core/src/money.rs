//! # Money Module
//!
//! Monetary values as whole-rupee integers.
//!
//! The menu is priced in whole rupees with no minor units, so an `i64`
//! newtype gives exact sums with none of the floating-point drift a
//! `f64` subtotal would accumulate. Fractional amounts appear only in
//! the display-time tax figures, which [`crate::pricing`] computes
//! from the exact integer subtotal.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

/// A monetary value in whole rupees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole rupees.
    #[inline]
    pub const fn from_rupees(rupees: i64) -> Self {
        Money(rupees)
    }

    /// Returns the value in whole rupees.
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0
    }

    /// Zero rupees.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies a unit price by a line quantity.
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rs. {}", self.0)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rupees() {
        let price = Money::from_rupees(80);
        assert_eq!(price.rupees(), 80);
        assert!(!price.is_zero());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_rupees(15)), "Rs. 15");
        assert_eq!(format!("{}", Money::zero()), "Rs. 0");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_rupees(100);
        let b = Money::from_rupees(40);

        assert_eq!((a + b).rupees(), 140);
        assert_eq!((a - b).rupees(), 60);
        assert_eq!((a * 3).rupees(), 300);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_rupees(15);
        assert_eq!(unit_price.multiply_quantity(2).rupees(), 30);
    }

    #[test]
    fn test_sum() {
        let total: Money = [30, 80, 15].iter().map(|r| Money::from_rupees(*r)).sum();
        assert_eq!(total.rupees(), 125);
    }
}
