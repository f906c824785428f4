//! # tiffin-core: Pure Business Logic for Tiffin
//!
//! This crate is the heart of the ordering system. It turns a sequence
//! of user selections into a validated cart, prices it, and commits it
//! to the order ledger as one atomic batch.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                   Front ends (console, ...)                     │
//! │   select_category ─► select_item ─► enter_quantity ─► confirm   │
//! └───────────────────────────────┬─────────────────────────────────┘
//!                                 │ composer command interface
//! ┌───────────────────────────────▼─────────────────────────────────┐
//! │                 ★ tiffin-core (THIS CRATE) ★                    │
//! │                                                                 │
//! │   ┌─────────┐  ┌────────┐  ┌─────────┐  ┌──────────────────┐   │
//! │   │  money  │  │  cart  │  │ pricing │  │     composer     │   │
//! │   │  Money  │  │  Cart  │  │ TaxRate │  │  OrderComposer   │   │
//! │   └─────────┘  └────────┘  └─────────┘  └──────────────────┘   │
//! │                                                                 │
//! │   NO I/O - storage reached only via Catalog / Ledger traits     │
//! └───────────────────────────────┬─────────────────────────────────┘
//!                                 │
//! ┌───────────────────────────────▼─────────────────────────────────┐
//! │              tiffin-db (SQLite catalog + ledger)                │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Whole-rupee integer money type
//! - [`types`] - Domain types (MenuItem, LineItem, OrderRecord, ...)
//! - [`cart`] - In-memory line-item accumulator
//! - [`pricing`] - Dual-tax (CGST + SGST) breakdown
//! - [`catalog`] - Catalog Provider trait and its errors
//! - [`ledger`] - Order Ledger trait and its errors
//! - [`composer`] - The ordering state machine
//! - [`validation`] - Catalog admin input validation
//! - [`auth`] - Injected admin credential policy
//!
//! ## Design Principles
//!
//! 1. Same input, same output: every function here is deterministic
//! 2. No I/O: database and terminal access are forbidden in this crate
//! 3. Integer money: menu prices are whole rupees, summed exactly;
//!    only the display-time tax figures carry fractions
//! 4. Typed errors everywhere, never strings or panics

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod composer;
pub mod error;
pub mod ledger;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

pub use auth::{AdminPolicy, StaticCredentials};
pub use cart::Cart;
pub use catalog::{Catalog, CatalogError};
pub use composer::{OrderComposer, OrderReceipt, OrderSummary, Stage};
pub use error::{OrderError, ValidationError};
pub use ledger::{Ledger, LedgerError};
pub use money::Money;
pub use pricing::{Pricing, PriceBreakdown, TaxRate};
pub use types::{LedgerEntry, LineItem, MenuItem, OrderRecord};

/// CGST rate in basis points (2.5%).
pub const CGST_BPS: u32 = 250;

/// SGST rate in basis points (2.5%).
pub const SGST_BPS: u32 = 250;
