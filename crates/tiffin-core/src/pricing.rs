//! # Pricing Module
//!
//! The dual-tax checkout formula: CGST 2.5% + SGST 2.5% on the cart
//! subtotal.
//!
//! ## Why the split between integer and float
//! The subtotal is an exact integer sum of whole-rupee line totals, so
//! no rounding error can accumulate there. The two tax figures and the
//! grand total are display-only values: they are computed from the
//! integer subtotal in one step each (never accumulated line by line)
//! and rounded to two decimals only at render time. Nothing fractional
//! is ever persisted - the ledger stores pre-tax integer line totals.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::{CGST_BPS, SGST_BPS};

// =============================================================================
// Tax Rate
// =============================================================================

/// A tax rate in basis points (250 bps = 2.5%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a fraction (250 bps -> 0.025).
    #[inline]
    pub fn fraction(&self) -> f64 {
        self.0 as f64 / 10_000.0
    }

    /// Returns the rate as a percentage, for display (250 bps -> 2.5).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

// =============================================================================
// Price Breakdown
// =============================================================================

/// The checkout totals derived from a cart subtotal.
///
/// Derived value, recomputed at display/finalize time; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// Exact integer subtotal before tax.
    pub subtotal: Money,
    /// Central GST share.
    pub cgst: f64,
    /// State GST share.
    pub sgst: f64,
    /// Subtotal plus both taxes.
    pub grand_total: f64,
}

// =============================================================================
// Pricing Engine
// =============================================================================

/// Applies the tax formula to a subtotal.
///
/// The single source of the formula: front ends never redeclare the
/// rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pricing {
    cgst: TaxRate,
    sgst: TaxRate,
}

impl Pricing {
    /// The reference deployment's rates: CGST 2.5% + SGST 2.5%.
    pub const fn standard() -> Self {
        Pricing {
            cgst: TaxRate::from_bps(CGST_BPS),
            sgst: TaxRate::from_bps(SGST_BPS),
        }
    }

    /// Creates a pricing engine with explicit rates.
    pub const fn new(cgst: TaxRate, sgst: TaxRate) -> Self {
        Pricing { cgst, sgst }
    }

    /// Computes the full breakdown for a subtotal.
    ///
    /// Each tax figure is derived independently from the integer
    /// subtotal so no drift accumulates across lines.
    pub fn breakdown(&self, subtotal: Money) -> PriceBreakdown {
        let base = subtotal.rupees() as f64;
        let cgst = base * self.cgst.fraction();
        let sgst = base * self.sgst.fraction();

        PriceBreakdown {
            subtotal,
            cgst,
            sgst,
            grand_total: base + cgst + sgst,
        }
    }

    /// The CGST rate.
    pub const fn cgst(&self) -> TaxRate {
        self.cgst
    }

    /// The SGST rate.
    pub const fn sgst(&self) -> TaxRate {
        self.sgst
    }
}

impl Default for Pricing {
    fn default() -> Self {
        Pricing::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_tax_rate() {
        let rate = TaxRate::from_bps(250);
        assert_eq!(rate.bps(), 250);
        assert!((rate.fraction() - 0.025).abs() < EPS);
        assert!((rate.percentage() - 2.5).abs() < EPS);
    }

    #[test]
    fn test_breakdown_of_zero_is_all_zero() {
        let b = Pricing::standard().breakdown(Money::zero());
        assert_eq!(b.subtotal, Money::zero());
        assert_eq!(b.cgst, 0.0);
        assert_eq!(b.sgst, 0.0);
        assert_eq!(b.grand_total, 0.0);
    }

    #[test]
    fn test_reference_breakdown() {
        // Cart [2x Filter Coffee @ 15, 1x Masala Dosa @ 80] -> 110.
        let b = Pricing::standard().breakdown(Money::from_rupees(110));

        assert_eq!(b.subtotal.rupees(), 110);
        assert!((b.cgst - 2.75).abs() < EPS);
        assert!((b.sgst - 2.75).abs() < EPS);
        assert!((b.grand_total - 115.50).abs() < EPS);
    }

    #[test]
    fn test_grand_total_is_five_percent_over_subtotal() {
        let pricing = Pricing::standard();
        for subtotal in [1, 7, 110, 999, 12_345] {
            let b = pricing.breakdown(Money::from_rupees(subtotal));
            let expected = subtotal as f64 * 1.05;
            assert!(
                (b.grand_total - expected).abs() < EPS,
                "subtotal {subtotal}: got {}, want {expected}",
                b.grand_total
            );
        }
    }

    #[test]
    fn test_both_taxes_equal_for_standard_rates() {
        let b = Pricing::standard().breakdown(Money::from_rupees(333));
        assert_eq!(b.cgst, b.sgst);
    }

    #[test]
    fn test_custom_rates() {
        let pricing = Pricing::new(TaxRate::from_bps(900), TaxRate::from_bps(0));
        let b = pricing.breakdown(Money::from_rupees(200));
        assert!((b.cgst - 18.0).abs() < EPS);
        assert_eq!(b.sgst, 0.0);
        assert!((b.grand_total - 218.0).abs() < EPS);
    }
}
