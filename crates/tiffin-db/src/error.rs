//! # Storage Error Types
//!
//! ## Error Flow
//! ```text
//! SQLite error (sqlx::Error)
//!      │
//!      ▼
//! StoreError (this module) - adds context and categorization
//!      │
//!      ▼
//! CatalogError / LedgerError - mapped at the repository boundary
//!      │
//!      ▼
//! OrderError - what the shell handles
//! ```
//!
//! The mapping at the repository boundary is where recoverability is
//! decided: a missing row becomes a recoverable lookup error, while a
//! dead pool becomes the session-fatal `Unavailable`.

use thiserror::Error;

/// Storage operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A row the operation required does not exist.
    #[error("{entity} not found: {key}")]
    NotFound { entity: String, key: String },

    /// The database could not be opened or reached.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// A migration could not be applied.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// A CHECK, UNIQUE, or FOREIGN KEY constraint rejected the write.
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// All pool connections are in use.
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Anything sqlx reports that fits no category above.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl StoreError {
    /// Creates a NotFound error for an entity and its lookup key.
    pub fn not_found(entity: impl Into<String>, key: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            key: key.into(),
        }
    }

    /// True when the store itself is unreachable, as opposed to a
    /// single statement failing.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            StoreError::ConnectionFailed(_) | StoreError::PoolExhausted
        )
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StoreError::NotFound {
                entity: "Record".to_string(),
                key: "unknown".to_string(),
            },

            sqlx::Error::Database(db_err) => {
                let msg = db_err.message().to_string();
                if msg.contains("constraint failed") {
                    StoreError::ConstraintViolation(msg)
                } else {
                    StoreError::QueryFailed(msg)
                }
            }

            sqlx::Error::PoolTimedOut => StoreError::PoolExhausted,

            sqlx::Error::PoolClosed => StoreError::ConnectionFailed("Pool is closed".to_string()),

            _ => StoreError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for StoreError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        StoreError::MigrationFailed(err.to_string())
    }
}

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;
