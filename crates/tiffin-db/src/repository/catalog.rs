//! # Catalog Repository
//!
//! Menu reads for the ordering flow plus the admin CRUD surface.
//!
//! The ordering flow only ever reads: categories in stored order,
//! items by category ordered by serial, point lookups by
//! `(category, serial)`. Writes happen solely through the admin
//! commands, which hand out serial numbers per category the way the
//! menu has always numbered them (next free serial, starting at 1).

use sqlx::SqlitePool;
use tracing::debug;

use tiffin_core::{Catalog, CatalogError, MenuItem, Money};

use crate::error::{StoreError, StoreResult};

/// Repository for menu catalog operations.
#[derive(Debug, Clone)]
pub struct CatalogRepository {
    pool: SqlitePool,
}

/// Row shape of the `menu_items` table.
#[derive(Debug, sqlx::FromRow)]
struct MenuItemRow {
    category: String,
    sl: i64,
    name: String,
    price: i64,
}

impl From<MenuItemRow> for MenuItem {
    fn from(row: MenuItemRow) -> Self {
        MenuItem {
            category: row.category,
            id: row.sl,
            name: row.name,
            price: Money::from_rupees(row.price),
        }
    }
}

impl CatalogRepository {
    /// Creates a new CatalogRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CatalogRepository { pool }
    }

    /// Errors with `CategoryNotFound` unless the category exists.
    async fn require_category(&self, category: &str) -> Result<(), CatalogError> {
        let found: Option<i64> = sqlx::query_scalar("SELECT 1 FROM categories WHERE name = ?1")
            .bind(category)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| CatalogError::Unavailable(e.to_string()))?;

        if found.is_none() {
            return Err(CatalogError::CategoryNotFound(category.to_string()));
        }
        Ok(())
    }

    // =========================================================================
    // Admin CRUD surface
    // =========================================================================

    /// Adds an item to a category, assigning the next free serial.
    pub async fn add_item(&self, category: &str, name: &str, price: Money) -> StoreResult<MenuItem> {
        debug!(category, name, price = price.rupees(), "Adding menu item");

        let mut tx = self.pool.begin().await?;

        let exists: Option<i64> = sqlx::query_scalar("SELECT 1 FROM categories WHERE name = ?1")
            .bind(category)
            .fetch_optional(&mut *tx)
            .await?;
        if exists.is_none() {
            return Err(StoreError::not_found("Category", category));
        }

        let next_sl: i64 =
            sqlx::query_scalar("SELECT COALESCE(MAX(sl), 0) + 1 FROM menu_items WHERE category = ?1")
                .bind(category)
                .fetch_one(&mut *tx)
                .await?;

        sqlx::query("INSERT INTO menu_items (category, sl, name, price) VALUES (?1, ?2, ?3, ?4)")
            .bind(category)
            .bind(next_sl)
            .bind(name)
            .bind(price.rupees())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(MenuItem {
            category: category.to_string(),
            id: next_sl,
            name: name.to_string(),
            price,
        })
    }

    /// Updates an item's name and price.
    pub async fn update_item(
        &self,
        category: &str,
        id: i64,
        name: &str,
        price: Money,
    ) -> StoreResult<()> {
        debug!(category, id, name, "Updating menu item");

        let result =
            sqlx::query("UPDATE menu_items SET name = ?3, price = ?4 WHERE category = ?1 AND sl = ?2")
                .bind(category)
                .bind(id)
                .bind(name)
                .bind(price.rupees())
                .execute(&self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found(
                "Menu item",
                format!("{category}/{id}"),
            ));
        }

        Ok(())
    }

    /// Removes an item from its category.
    pub async fn delete_item(&self, category: &str, id: i64) -> StoreResult<()> {
        debug!(category, id, "Deleting menu item");

        let result = sqlx::query("DELETE FROM menu_items WHERE category = ?1 AND sl = ?2")
            .bind(category)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found(
                "Menu item",
                format!("{category}/{id}"),
            ));
        }

        Ok(())
    }
}

// =============================================================================
// Catalog contract
// =============================================================================

impl Catalog for CatalogRepository {
    async fn categories(&self) -> Result<Vec<String>, CatalogError> {
        sqlx::query_scalar("SELECT name FROM categories ORDER BY position")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| CatalogError::Unavailable(e.to_string()))
    }

    async fn items(&self, category: &str) -> Result<Vec<MenuItem>, CatalogError> {
        self.require_category(category).await?;

        let rows = sqlx::query_as::<_, MenuItemRow>(
            "SELECT category, sl, name, price FROM menu_items WHERE category = ?1 ORDER BY sl",
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CatalogError::Unavailable(e.to_string()))?;

        Ok(rows.into_iter().map(MenuItem::from).collect())
    }

    async fn item(&self, category: &str, id: i64) -> Result<MenuItem, CatalogError> {
        self.require_category(category).await?;

        let row = sqlx::query_as::<_, MenuItemRow>(
            "SELECT category, sl, name, price FROM menu_items WHERE category = ?1 AND sl = ?2",
        )
        .bind(category)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CatalogError::Unavailable(e.to_string()))?;

        row.map(MenuItem::from).ok_or(CatalogError::ItemNotFound {
            category: category.to_string(),
            id,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use crate::seed;

    async fn seeded_db() -> Database {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        seed::seed(&db).await.unwrap();
        db
    }

    #[tokio::test]
    async fn test_categories_in_stored_order() {
        let db = seeded_db().await;

        let categories = db.catalog().categories().await.unwrap();
        assert_eq!(categories.len(), 14);
        assert_eq!(categories[0], "beverages");
        assert_eq!(categories[13], "mealcombo");
    }

    #[tokio::test]
    async fn test_items_ordered_by_serial() {
        let db = seeded_db().await;

        let items = db.catalog().items("soup").await.unwrap();
        assert_eq!(items.len(), 5);
        let serials: Vec<i64> = items.iter().map(|i| i.id).collect();
        assert_eq!(serials, [1, 2, 3, 4, 5]);
        assert_eq!(items[0].name, "Tomato Soup");
        assert_eq!(items[0].price.rupees(), 50);
    }

    #[tokio::test]
    async fn test_unknown_category() {
        let db = seeded_db().await;

        let err = db.catalog().items("burgers").await.unwrap_err();
        assert!(matches!(err, CatalogError::CategoryNotFound(_)));
    }

    #[tokio::test]
    async fn test_point_lookup() {
        let db = seeded_db().await;

        let item = db.catalog().item("dosaitem", 2).await.unwrap();
        assert_eq!(item.name, "Masala Dosa");
        assert_eq!(item.price.rupees(), 80);
    }

    #[tokio::test]
    async fn test_missing_item_in_known_category() {
        let db = seeded_db().await;

        let err = db.catalog().item("soup", 99).await.unwrap_err();
        assert!(matches!(
            err,
            CatalogError::ItemNotFound { ref category, id: 99 } if category == "soup"
        ));
    }

    #[tokio::test]
    async fn test_add_item_assigns_next_serial() {
        let db = seeded_db().await;
        let catalog = db.catalog();

        // soup has serials 1..=5, so the next is 6.
        let added = catalog
            .add_item("soup", "Lemon Coriander Soup", Money::from_rupees(75))
            .await
            .unwrap();
        assert_eq!(added.id, 6);

        let items = catalog.items("soup").await.unwrap();
        assert_eq!(items.len(), 6);
        assert_eq!(items[5].name, "Lemon Coriander Soup");
    }

    #[tokio::test]
    async fn test_add_item_unknown_category() {
        let db = seeded_db().await;

        let err = db
            .catalog()
            .add_item("burgers", "Veg Burger", Money::from_rupees(90))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_item() {
        let db = seeded_db().await;
        let catalog = db.catalog();

        catalog
            .update_item("sweets", 1, "Gulab Jamun (2 pcs)", Money::from_rupees(30))
            .await
            .unwrap();

        let item = catalog.item("sweets", 1).await.unwrap();
        assert_eq!(item.name, "Gulab Jamun (2 pcs)");
        assert_eq!(item.price.rupees(), 30);

        let err = catalog
            .update_item("sweets", 99, "Nothing", Money::zero())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_item() {
        let db = seeded_db().await;
        let catalog = db.catalog();

        catalog.delete_item("icecreams", 8).await.unwrap();

        let items = catalog.items("icecreams").await.unwrap();
        assert_eq!(items.len(), 7);

        let err = catalog.delete_item("icecreams", 8).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }
}
