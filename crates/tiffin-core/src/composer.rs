//! # Order Composer
//!
//! The ordering state machine. Every front end drives the same flow
//! through the same narrow command set:
//!
//! ```text
//! SelectingCategory ──select_category──► SelectingItem
//!        ▲  ▲                              │      │
//!        │  └────────abandon_item──────────┘      │ select_item
//!        │                                        ▼
//!        └──────────enter_quantity──────── EnteringQuantity
//!
//! SelectingCategory ──checkout──► Reviewing ──confirm──► Committed
//!                       │             │
//!                       │ empty cart  └──cancel──► Aborted
//!                       ▼
//!                    Aborted
//! ```
//!
//! Recoverable errors (unknown category, unknown item, bad quantity)
//! leave the state machine exactly where it was: the caller re-prompts
//! and no selection already made is lost. Only a ledger write failure
//! escapes `confirm`, and it leaves the cart intact for a retry.

use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::error::OrderError;
use crate::ledger::Ledger;
use crate::pricing::{PriceBreakdown, Pricing};
use crate::types::{LineItem, MenuItem, OrderRecord};

// =============================================================================
// Stage
// =============================================================================

/// Where the composer is in the ordering flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    /// Waiting for a category name, or the checkout signal.
    SelectingCategory,

    /// A category was chosen; waiting for an item id (or 0 to go back).
    SelectingItem { category: String },

    /// An item was chosen; waiting for a quantity. The item is held
    /// here so a rejected quantity never forgets the selection.
    EnteringQuantity { item: MenuItem },

    /// The cart and totals were presented; waiting for confirm/cancel.
    Reviewing,

    /// The order was written to the ledger. Terminal.
    Committed,

    /// The session ended without an order. Terminal.
    Aborted,
}

impl Stage {
    /// Short name for error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Stage::SelectingCategory => "selecting a category",
            Stage::SelectingItem { .. } => "selecting an item",
            Stage::EnteringQuantity { .. } => "entering a quantity",
            Stage::Reviewing => "reviewing the order",
            Stage::Committed => "committed",
            Stage::Aborted => "aborted",
        }
    }

    /// True once no further commands are accepted.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Stage::Committed | Stage::Aborted)
    }
}

// =============================================================================
// Summary and Receipt
// =============================================================================

/// What the customer reviews before confirming: the cart lines and the
/// tax breakdown over their subtotal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub lines: Vec<LineItem>,
    pub breakdown: PriceBreakdown,
}

/// What a successful finalize returns: the records that were written
/// and the breakdown that was displayed at checkout. The breakdown's
/// tax figures are display-only and are not in the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub records: Vec<OrderRecord>,
    pub breakdown: PriceBreakdown,
}

// =============================================================================
// Order Composer
// =============================================================================

/// Drives one ordering session from category selection to commit.
///
/// Owns the session's [`Cart`]; talks to storage only through the
/// injected [`Catalog`] and [`Ledger`]. One composer per session,
/// never shared.
#[derive(Debug)]
pub struct OrderComposer<C, L> {
    catalog: C,
    ledger: L,
    pricing: Pricing,
    cart: Cart,
    stage: Stage,
}

impl<C: Catalog, L: Ledger> OrderComposer<C, L> {
    /// Creates a composer for a fresh session with an empty cart.
    pub fn new(catalog: C, ledger: L, pricing: Pricing) -> Self {
        OrderComposer {
            catalog,
            ledger,
            pricing,
            cart: Cart::new(),
            stage: Stage::SelectingCategory,
        }
    }

    /// The current stage.
    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    /// Read-only view of the session cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The cart lines and tax breakdown as of now.
    pub fn summary(&self) -> OrderSummary {
        OrderSummary {
            lines: self.cart.lines().to_vec(),
            breakdown: self.pricing.breakdown(self.cart.subtotal()),
        }
    }

    /// Lists the catalog's categories, for display before selection.
    pub async fn categories(&self) -> Result<Vec<String>, OrderError> {
        Ok(self.catalog.categories().await?)
    }

    /// Chooses a category and moves to item selection.
    ///
    /// Valid only while selecting a category. An unknown name is
    /// recoverable: the error surfaces and the stage is unchanged.
    pub async fn select_category(&mut self, name: &str) -> Result<Vec<MenuItem>, OrderError> {
        if !matches!(self.stage, Stage::SelectingCategory) {
            return Err(self.out_of_turn("select_category"));
        }

        let items = self.catalog.items(name).await?;
        self.stage = Stage::SelectingItem {
            category: name.to_string(),
        };
        Ok(items)
    }

    /// Chooses an item by id and moves to quantity entry.
    ///
    /// Valid only while selecting an item. An unknown id is
    /// recoverable: the stage and cart are untouched and the caller
    /// re-prompts in the same category.
    pub async fn select_item(&mut self, id: i64) -> Result<MenuItem, OrderError> {
        let category = match &self.stage {
            Stage::SelectingItem { category } => category.clone(),
            _ => return Err(self.out_of_turn("select_item")),
        };

        let item = self.catalog.item(&category, id).await?;
        self.stage = Stage::EnteringQuantity { item: item.clone() };
        Ok(item)
    }

    /// Leaves item selection without adding anything to the cart.
    pub fn abandon_item(&mut self) -> Result<(), OrderError> {
        if !matches!(self.stage, Stage::SelectingItem { .. }) {
            return Err(self.out_of_turn("abandon_item"));
        }
        self.stage = Stage::SelectingCategory;
        Ok(())
    }

    /// Supplies the quantity for the selected item and adds the line.
    ///
    /// A non-positive quantity is recoverable: the selected item stays
    /// selected and the caller re-prompts. On success the line is in
    /// the cart and the composer is back at category selection.
    pub fn enter_quantity(&mut self, quantity: i64) -> Result<LineItem, OrderError> {
        let item = match &self.stage {
            Stage::EnteringQuantity { item } => item.clone(),
            _ => return Err(self.out_of_turn("enter_quantity")),
        };

        // Cart::add_line rejects quantity < 1 before mutating, which
        // leaves the stage (and the chosen item) unchanged.
        self.cart.add_line(item.name.clone(), item.price, quantity)?;
        self.stage = Stage::SelectingCategory;

        Ok(LineItem {
            name: item.name,
            unit_price: item.price,
            quantity,
        })
    }

    /// Signals the end of selection and moves to review.
    ///
    /// An empty cart makes the whole session a terminal no-op: the
    /// ledger sees zero writes and `None` is returned. Otherwise the
    /// summary to present is returned and the composer waits for
    /// [`confirm`](Self::confirm) or [`cancel`](Self::cancel).
    pub fn checkout(&mut self) -> Result<Option<OrderSummary>, OrderError> {
        if !matches!(self.stage, Stage::SelectingCategory) {
            return Err(self.out_of_turn("checkout"));
        }

        if self.cart.is_empty() {
            self.stage = Stage::Aborted;
            return Ok(None);
        }

        self.stage = Stage::Reviewing;
        Ok(Some(self.summary()))
    }

    /// Commits the cart to the ledger as one atomic batch.
    ///
    /// One [`OrderRecord`] per cart line, each carrying the pre-tax
    /// line total. If the batch write fails, the error surfaces, the
    /// stage stays at review, and the cart is intact for a retry; the
    /// ledger guarantees no partial batch is visible. A confirm after
    /// a successful commit finds an empty cart and writes nothing.
    pub async fn confirm(&mut self) -> Result<OrderReceipt, OrderError> {
        match self.stage {
            Stage::Reviewing | Stage::Committed => {}
            _ => return Err(self.out_of_turn("confirm")),
        }

        let records: Vec<OrderRecord> = self.cart.lines().iter().map(OrderRecord::from).collect();
        let breakdown = self.pricing.breakdown(self.cart.subtotal());

        if !records.is_empty() {
            self.ledger.append(&records).await?;
        }

        self.cart.clear();
        self.stage = Stage::Committed;
        Ok(OrderReceipt { records, breakdown })
    }

    /// Abandons the order at review: the cart is discarded and the
    /// ledger is never touched.
    pub fn cancel(&mut self) -> Result<(), OrderError> {
        if !matches!(self.stage, Stage::Reviewing) {
            return Err(self.out_of_turn("cancel"));
        }
        self.cart.clear();
        self.stage = Stage::Aborted;
        Ok(())
    }

    fn out_of_turn(&self, command: &'static str) -> OrderError {
        OrderError::CommandOutOfTurn {
            stage: self.stage.name(),
            command,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
