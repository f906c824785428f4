//! # Cart Module
//!
//! In-memory accumulator of selected line items for one ordering
//! session.
//!
//! ## Invariants
//! - Every line has quantity >= 1 (rejected before mutation otherwise)
//! - Lines keep insertion order; duplicates are never merged - two
//!   additions of the same item produce two lines
//! - The subtotal is recomputed from the lines on demand, never stored

use serde::{Deserialize, Serialize};

use crate::error::OrderError;
use crate::money::Money;
use crate::types::LineItem;

/// The shopping cart for a single ordering session.
///
/// Owned by exactly one session; created empty, mutated only by
/// [`Cart::add_line`] and [`Cart::clear`], discarded at session end.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<LineItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Appends a line item.
    ///
    /// Rejects `quantity < 1` with [`OrderError::InvalidQuantity`]
    /// before touching the cart. A repeated item is appended as a new
    /// line, matching the observed behavior of every front end.
    pub fn add_line(
        &mut self,
        name: impl Into<String>,
        unit_price: Money,
        quantity: i64,
    ) -> Result<(), OrderError> {
        if quantity < 1 {
            return Err(OrderError::InvalidQuantity { supplied: quantity });
        }

        self.lines.push(LineItem {
            name: name.into(),
            unit_price,
            quantity,
        });
        Ok(())
    }

    /// Sum of `unit_price * quantity` over all lines; zero when empty.
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(LineItem::line_total).sum()
    }

    /// Read-only view of the lines, in insertion order.
    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    /// Number of lines (not total quantity).
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Checks if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Removes all lines, resetting to the empty state.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cart_subtotal_is_zero() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), Money::zero());
    }

    #[test]
    fn test_subtotal_is_sum_of_line_totals() {
        let mut cart = Cart::new();
        cart.add_line("Filter Coffee", Money::from_rupees(15), 2).unwrap();
        cart.add_line("Masala Dosa", Money::from_rupees(80), 1).unwrap();

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.subtotal().rupees(), 110);
    }

    #[test]
    fn test_subtotal_commutes_over_insertion_order() {
        let lines = [("Idly", 25, 3), ("Vada", 40, 1), ("Tea", 15, 2)];

        let mut forward = Cart::new();
        for (name, price, qty) in lines {
            forward.add_line(name, Money::from_rupees(price), qty).unwrap();
        }

        let mut reverse = Cart::new();
        for (name, price, qty) in lines.iter().rev() {
            reverse.add_line(*name, Money::from_rupees(*price), *qty).unwrap();
        }

        assert_eq!(forward.subtotal(), reverse.subtotal());
        assert_eq!(forward.subtotal().rupees(), 145);
    }

    #[test]
    fn test_duplicate_items_stay_separate_lines() {
        let mut cart = Cart::new();
        cart.add_line("Tea", Money::from_rupees(15), 1).unwrap();
        cart.add_line("Tea", Money::from_rupees(15), 2).unwrap();

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.lines()[0].quantity, 1);
        assert_eq!(cart.lines()[1].quantity, 2);
        assert_eq!(cart.subtotal().rupees(), 45);
    }

    #[test]
    fn test_zero_quantity_rejected_before_mutation() {
        let mut cart = Cart::new();
        cart.add_line("Tea", Money::from_rupees(15), 1).unwrap();

        let err = cart.add_line("Tea", Money::from_rupees(15), 0).unwrap_err();
        assert!(matches!(err, OrderError::InvalidQuantity { supplied: 0 }));

        // The cart is exactly as it was before the rejected call.
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.subtotal().rupees(), 15);
    }

    #[test]
    fn test_negative_quantity_rejected() {
        let mut cart = Cart::new();
        let err = cart.add_line("Tea", Money::from_rupees(15), -3).unwrap_err();
        assert!(matches!(err, OrderError::InvalidQuantity { supplied: -3 }));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear_resets_to_empty() {
        let mut cart = Cart::new();
        cart.add_line("Tea", Money::from_rupees(15), 1).unwrap();
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), Money::zero());
    }

    #[test]
    fn test_lines_reflect_insertion_order() {
        let mut cart = Cart::new();
        cart.add_line("Vada", Money::from_rupees(40), 1).unwrap();
        cart.add_line("Idly", Money::from_rupees(25), 1).unwrap();

        let names: Vec<&str> = cart.lines().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["Vada", "Idly"]);
    }
}
