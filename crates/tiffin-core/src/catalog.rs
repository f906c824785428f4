//! # Catalog Provider Contract
//!
//! The core never talks SQL: it reaches the menu through this trait,
//! implemented by `tiffin-db` against SQLite and by in-memory fakes in
//! tests.

use thiserror::Error;

use crate::types::MenuItem;

/// Errors from catalog lookups.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The named category does not exist.
    #[error("Unknown category: {0}")]
    CategoryNotFound(String),

    /// The category exists but holds no item with this id.
    #[error("No item {id} in category '{category}'")]
    ItemNotFound { category: String, id: i64 },

    /// The backing store could not be reached.
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),
}

/// Read access to the menu catalog.
///
/// Categories and item lists are ordered: categories by their stored
/// position, items by id ascending.
pub trait Catalog {
    /// Lists all category names, in catalog order.
    fn categories(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<String>, CatalogError>> + Send;

    /// Lists the items of one category, ordered by id ascending.
    fn items(
        &self,
        category: &str,
    ) -> impl std::future::Future<Output = Result<Vec<MenuItem>, CatalogError>> + Send;

    /// Point lookup of one item by `(category, id)`.
    fn item(
        &self,
        category: &str,
        id: i64,
    ) -> impl std::future::Future<Output = Result<MenuItem, CatalogError>> + Send;
}
