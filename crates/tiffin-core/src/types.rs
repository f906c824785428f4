//! # Domain Types
//!
//! Core domain types shared across the catalog, the cart, and the
//! order ledger.
//!
//! ## Type Flow
//! ```text
//! MenuItem (catalog) ──select──► LineItem (cart) ──finalize──► OrderRecord (write)
//!                                                                   │
//!                                              LedgerEntry (read) ◄─┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Menu Item
// =============================================================================

/// An item on the menu, sourced entirely from the Catalog Provider.
///
/// Immutable in the core: the ordering flow never creates or mutates
/// menu items, it only reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Category this item belongs to (lowercase identifier).
    pub category: String,

    /// Serial number, unique within the category, starting at 1.
    pub id: i64,

    /// Display name shown to the customer and on the order.
    pub name: String,

    /// Unit price in whole rupees.
    pub price: Money,
}

// =============================================================================
// Line Item
// =============================================================================

/// One confirmed selection in a cart.
///
/// Created when the customer confirms an item and quantity; immutable
/// afterwards. Two selections of the same menu item stay two separate
/// lines - quantities are never merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Item name at selection time.
    pub name: String,

    /// Unit price at selection time.
    pub unit_price: Money,

    /// Quantity, always >= 1.
    pub quantity: i64,
}

impl LineItem {
    /// Pre-tax line total (unit price x quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Order Record (ledger write model)
// =============================================================================

/// One row submitted to the order ledger at finalization.
///
/// The ledger assigns the id and timestamp; `line_total` is the
/// pre-tax amount - tax is computed for display at checkout and never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub item_name: String,
    pub unit_price: Money,
    pub quantity: i64,
    pub line_total: Money,
}

impl From<&LineItem> for OrderRecord {
    fn from(line: &LineItem) -> Self {
        OrderRecord {
            item_name: line.name.clone(),
            unit_price: line.unit_price,
            quantity: line.quantity,
            line_total: line.line_total(),
        }
    }
}

// =============================================================================
// Ledger Entry (ledger read model)
// =============================================================================

/// A persisted order row read back from the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Ledger-assigned identifier.
    pub id: i64,
    pub item_name: String,
    pub unit_price: Money,
    pub quantity: i64,
    pub line_total: Money,
    /// Ledger-assigned write timestamp.
    pub ordered_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        let line = LineItem {
            name: "Masala Dosa".to_string(),
            unit_price: Money::from_rupees(80),
            quantity: 3,
        };
        assert_eq!(line.line_total().rupees(), 240);
    }

    #[test]
    fn test_order_record_from_line() {
        let line = LineItem {
            name: "Filter Coffee".to_string(),
            unit_price: Money::from_rupees(15),
            quantity: 2,
        };
        let record = OrderRecord::from(&line);

        assert_eq!(record.item_name, "Filter Coffee");
        assert_eq!(record.unit_price.rupees(), 15);
        assert_eq!(record.quantity, 2);
        assert_eq!(record.line_total.rupees(), 30);
    }
}
