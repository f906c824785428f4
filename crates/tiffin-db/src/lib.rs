//! # tiffin-db: Storage Layer for Tiffin
//!
//! SQLite storage behind the contracts `tiffin-core` defines: the
//! menu catalog and the append-only order ledger.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │           tiffin-core (Catalog / Ledger traits)                 │
//! └───────────────────────────────┬─────────────────────────────────┘
//!                                 │ implemented by
//! ┌───────────────────────────────▼─────────────────────────────────┐
//! │                  ★ tiffin-db (THIS CRATE) ★                     │
//! │                                                                 │
//! │   ┌───────────────┐   ┌──────────────────┐   ┌──────────────┐  │
//! │   │   Database    │   │   Repositories   │   │  Migrations  │  │
//! │   │   (pool.rs)   │◄──│ catalog / ledger │   │  (embedded)  │  │
//! │   └───────────────┘   └──────────────────┘   └──────────────┘  │
//! │                                                                 │
//! └───────────────────────────────┬─────────────────────────────────┘
//!                                 │
//!                          SQLite database file
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and explicit lifecycle
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Storage error types
//! - [`repository`] - Catalog and ledger repositories
//! - [`seed`] - The reference menu and idempotent provisioning
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tiffin_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("./tiffin.db")).await?;
//! let categories = db.catalog().categories().await?;
//! // ...
//! db.close().await;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod seed;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::catalog::CatalogRepository;
pub use repository::ledger::LedgerRepository;
