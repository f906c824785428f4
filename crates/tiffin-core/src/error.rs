//! # Error Types
//!
//! Domain error types for the ordering core.
//!
//! ## Error Hierarchy
//! ```text
//! tiffin-core errors (this file)
//! ├── OrderError       - ordering flow errors
//! └── ValidationError  - catalog admin input validation
//!
//! tiffin-db errors (separate crate)
//! └── StoreError       - SQLite operation failures
//!
//! Flow: StoreError → CatalogError/LedgerError → OrderError → shell
//! ```
//!
//! Recoverability is part of the contract: lookup and quantity errors
//! are handled at the state they occur in and re-prompt; only
//! persistence failures escape to the session boundary.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::ledger::LedgerError;

// =============================================================================
// Order Error
// =============================================================================

/// Errors surfaced by the ordering flow.
#[derive(Debug, Error)]
pub enum OrderError {
    /// The named category does not exist in the catalog.
    #[error("Unknown category: {0}")]
    CategoryNotFound(String),

    /// No item with this id exists in the category.
    #[error("No item {id} in category '{category}'")]
    ItemNotFound { category: String, id: i64 },

    /// Quantity was zero or negative. The selected item is kept so the
    /// caller can re-prompt without losing the selection.
    #[error("Quantity must be at least 1, got {supplied}")]
    InvalidQuantity { supplied: i64 },

    /// The finalize batch could not be written. The transaction rolled
    /// back, the cart is intact, and the caller may retry.
    #[error("Order could not be written to the ledger: {0}")]
    LedgerWriteFailed(String),

    /// The store is unreachable. Fatal to the whole session.
    #[error("Store unavailable: {0}")]
    ConnectionUnavailable(String),

    /// A composer command was issued in a state that does not accept
    /// it. Indicates a driver bug, not bad user input.
    #[error("Command '{command}' is not valid while {stage}")]
    CommandOutOfTurn {
        stage: &'static str,
        command: &'static str,
    },
}

impl OrderError {
    /// True for errors the caller handles by re-prompting in the same
    /// state; false for errors that end the finalize attempt or the
    /// session.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            OrderError::CategoryNotFound(_)
                | OrderError::ItemNotFound { .. }
                | OrderError::InvalidQuantity { .. }
        )
    }
}

impl From<CatalogError> for OrderError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::CategoryNotFound(name) => OrderError::CategoryNotFound(name),
            CatalogError::ItemNotFound { category, id } => {
                OrderError::ItemNotFound { category, id }
            }
            CatalogError::Unavailable(msg) => OrderError::ConnectionUnavailable(msg),
        }
    }
}

impl From<LedgerError> for OrderError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::WriteFailed(msg) => OrderError::LedgerWriteFailed(msg),
            LedgerError::Unavailable(msg) => OrderError::ConnectionUnavailable(msg),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors for the catalog admin surface.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is below its minimum.
    #[error("{field} must be at least {min}")]
    TooSmall { field: String, min: i64 },
}

/// Convenience alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = OrderError::ItemNotFound {
            category: "soup".to_string(),
            id: 99,
        };
        assert_eq!(err.to_string(), "No item 99 in category 'soup'");

        let err = OrderError::InvalidQuantity { supplied: 0 };
        assert_eq!(err.to_string(), "Quantity must be at least 1, got 0");
    }

    #[test]
    fn test_recoverability() {
        assert!(OrderError::CategoryNotFound("snacks".into()).is_recoverable());
        assert!(OrderError::InvalidQuantity { supplied: -1 }.is_recoverable());
        assert!(!OrderError::LedgerWriteFailed("disk full".into()).is_recoverable());
        assert!(!OrderError::ConnectionUnavailable("no db".into()).is_recoverable());
    }

    #[test]
    fn test_catalog_error_conversion() {
        let err: OrderError = CatalogError::CategoryNotFound("snacks".into()).into();
        assert!(matches!(err, OrderError::CategoryNotFound(_)));

        let err: OrderError = CatalogError::Unavailable("gone".into()).into();
        assert!(matches!(err, OrderError::ConnectionUnavailable(_)));
    }

    #[test]
    fn test_ledger_error_conversion() {
        let err: OrderError = LedgerError::WriteFailed("constraint".into()).into();
        assert!(matches!(err, OrderError::LedgerWriteFailed(_)));
    }
}
