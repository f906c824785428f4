//! # Order Ledger Contract
//!
//! The append-only order log. The composer writes through this trait
//! at finalization; the reporting views (recent orders, admin panel)
//! read through it. Implemented by `tiffin-db` against SQLite and by
//! in-memory fakes in tests.
//!
//! The ledger owns its identifiers and timestamps: callers submit
//! [`OrderRecord`]s without either, and read back [`LedgerEntry`]s
//! with both assigned.

use thiserror::Error;

use crate::money::Money;
use crate::types::{LedgerEntry, OrderRecord};

/// Errors from ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The batch could not be written. The implementation guarantees
    /// the failed batch left no rows behind.
    #[error("Ledger write failed: {0}")]
    WriteFailed(String),

    /// The backing store could not be reached.
    #[error("Ledger unavailable: {0}")]
    Unavailable(String),
}

/// The order ledger: batch append plus the reporting read surface.
///
/// `append` is all-or-nothing: either every record in the batch is
/// persisted or none is. Records within a batch share one logical
/// write, so a partial order is never visible to readers.
pub trait Ledger {
    /// Appends a batch of order records atomically.
    ///
    /// An empty batch is a no-op and must not touch the store.
    fn append(
        &self,
        records: &[OrderRecord],
    ) -> impl std::future::Future<Output = Result<(), LedgerError>> + Send;

    /// The most recent entries, newest first, up to `limit`.
    fn recent(
        &self,
        limit: u32,
    ) -> impl std::future::Future<Output = Result<Vec<LedgerEntry>, LedgerError>> + Send;

    /// Total number of entries ever written.
    fn count(&self) -> impl std::future::Future<Output = Result<i64, LedgerError>> + Send;

    /// Sum of all pre-tax line totals.
    fn revenue(&self) -> impl std::future::Future<Output = Result<Money, LedgerError>> + Send;

    /// Entries written during the current UTC day, newest first.
    fn today(&self)
        -> impl std::future::Future<Output = Result<Vec<LedgerEntry>, LedgerError>> + Send;

    /// Sum of pre-tax line totals for the current UTC day.
    fn revenue_today(&self) -> impl std::future::Future<Output = Result<Money, LedgerError>> + Send;
}
