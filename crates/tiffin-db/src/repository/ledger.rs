//! # Ledger Repository
//!
//! The append-only order log.
//!
//! ## Batch Commit
//! ```text
//! confirm
//!    │
//!    ▼
//! BEGIN ── INSERT line 1 ── INSERT line 2 ── ... ── COMMIT
//!                │
//!                └── any failure → ROLLBACK, zero rows visible
//! ```
//!
//! The ledger assigns `order_id` (AUTOINCREMENT) and `ordered_at`
//! (write-time UTC); every row in one batch shares the same timestamp.
//! Stored totals are pre-tax: tax exists only in the checkout display.

use chrono::{DateTime, Duration, NaiveTime, Utc};
use sqlx::SqlitePool;
use tracing::{debug, info};

use tiffin_core::{Ledger, LedgerEntry, LedgerError, Money, OrderRecord};

use crate::error::{StoreError, StoreResult};

/// Repository for order ledger operations.
#[derive(Debug, Clone)]
pub struct LedgerRepository {
    pool: SqlitePool,
}

/// Row shape of the `orders` table.
#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    order_id: i64,
    item_name: String,
    unit_price: i64,
    quantity: i64,
    line_total: i64,
    ordered_at: DateTime<Utc>,
}

impl From<OrderRow> for LedgerEntry {
    fn from(row: OrderRow) -> Self {
        LedgerEntry {
            id: row.order_id,
            item_name: row.item_name,
            unit_price: Money::from_rupees(row.unit_price),
            quantity: row.quantity,
            line_total: Money::from_rupees(row.line_total),
            ordered_at: row.ordered_at,
        }
    }
}

impl LedgerRepository {
    /// Creates a new LedgerRepository.
    pub fn new(pool: SqlitePool) -> Self {
        LedgerRepository { pool }
    }

    /// Writes a batch of records inside one transaction.
    ///
    /// All-or-nothing: a failed insert drops the transaction and no
    /// row of the batch survives. An empty batch never opens one.
    pub async fn append_batch(&self, records: &[OrderRecord]) -> StoreResult<()> {
        if records.is_empty() {
            return Ok(());
        }

        debug!(lines = records.len(), "Writing order batch");

        let mut tx = self.pool.begin().await?;
        let ordered_at = Utc::now();

        for record in records {
            sqlx::query(
                "INSERT INTO orders (item_name, unit_price, quantity, line_total, ordered_at) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )
            .bind(&record.item_name)
            .bind(record.unit_price.rupees())
            .bind(record.quantity)
            .bind(record.line_total.rupees())
            .bind(ordered_at)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        info!(lines = records.len(), "Order committed");
        Ok(())
    }

    /// UTC bounds of the current day: `[start, next_start)`.
    fn today_bounds() -> (DateTime<Utc>, DateTime<Utc>) {
        let start = Utc::now().date_naive().and_time(NaiveTime::MIN).and_utc();
        (start, start + Duration::days(1))
    }

    fn read_err(err: StoreError) -> LedgerError {
        LedgerError::Unavailable(err.to_string())
    }

    fn write_err(err: StoreError) -> LedgerError {
        if err.is_unavailable() {
            LedgerError::Unavailable(err.to_string())
        } else {
            LedgerError::WriteFailed(err.to_string())
        }
    }
}

// =============================================================================
// Ledger contract
// =============================================================================

impl Ledger for LedgerRepository {
    async fn append(&self, records: &[OrderRecord]) -> Result<(), LedgerError> {
        self.append_batch(records).await.map_err(Self::write_err)
    }

    async fn recent(&self, limit: u32) -> Result<Vec<LedgerEntry>, LedgerError> {
        let rows = sqlx::query_as::<_, OrderRow>(
            "SELECT order_id, item_name, unit_price, quantity, line_total, ordered_at \
             FROM orders ORDER BY ordered_at DESC, order_id DESC LIMIT ?1",
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| Self::read_err(e.into()))?;

        Ok(rows.into_iter().map(LedgerEntry::from).collect())
    }

    async fn count(&self) -> Result<i64, LedgerError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| Self::read_err(e.into()))
    }

    async fn revenue(&self) -> Result<Money, LedgerError> {
        let total: i64 = sqlx::query_scalar("SELECT COALESCE(SUM(line_total), 0) FROM orders")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| Self::read_err(e.into()))?;

        Ok(Money::from_rupees(total))
    }

    async fn today(&self) -> Result<Vec<LedgerEntry>, LedgerError> {
        let (start, end) = Self::today_bounds();

        let rows = sqlx::query_as::<_, OrderRow>(
            "SELECT order_id, item_name, unit_price, quantity, line_total, ordered_at \
             FROM orders WHERE ordered_at >= ?1 AND ordered_at < ?2 \
             ORDER BY ordered_at DESC, order_id DESC",
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| Self::read_err(e.into()))?;

        Ok(rows.into_iter().map(LedgerEntry::from).collect())
    }

    async fn revenue_today(&self) -> Result<Money, LedgerError> {
        let (start, end) = Self::today_bounds();

        let total: i64 = sqlx::query_scalar(
            "SELECT COALESCE(SUM(line_total), 0) FROM orders \
             WHERE ordered_at >= ?1 AND ordered_at < ?2",
        )
        .bind(start)
        .bind(end)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| Self::read_err(e.into()))?;

        Ok(Money::from_rupees(total))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    fn record(name: &str, price: i64, quantity: i64) -> OrderRecord {
        OrderRecord {
            item_name: name.to_string(),
            unit_price: Money::from_rupees(price),
            quantity,
            line_total: Money::from_rupees(price * quantity),
        }
    }

    async fn db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_append_and_read_back() {
        let db = db().await;
        let ledger = db.ledger();

        ledger
            .append(&[record("Filter Coffee", 15, 2), record("Masala Dosa", 80, 1)])
            .await
            .unwrap();

        assert_eq!(ledger.count().await.unwrap(), 2);
        assert_eq!(ledger.revenue().await.unwrap().rupees(), 110);

        let entries = ledger.recent(10).await.unwrap();
        assert_eq!(entries.len(), 2);
        // Newest first; ids break the tie within one batch.
        assert_eq!(entries[0].item_name, "Masala Dosa");
        assert_eq!(entries[0].line_total.rupees(), 80);
        assert_eq!(entries[1].item_name, "Filter Coffee");
        assert_eq!(entries[1].line_total.rupees(), 30);
    }

    #[tokio::test]
    async fn test_empty_batch_is_a_no_op() {
        let db = db().await;
        let ledger = db.ledger();

        ledger.append(&[]).await.unwrap();
        assert_eq!(ledger.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_failed_batch_leaves_no_rows() {
        let db = db().await;
        let ledger = db.ledger();

        // The second record violates the quantity >= 1 check, so the
        // whole batch must roll back.
        let batch = [
            record("Tea", 15, 1),
            OrderRecord {
                item_name: "Tea".to_string(),
                unit_price: Money::from_rupees(15),
                quantity: 0,
                line_total: Money::zero(),
            },
        ];

        let err = ledger.append(&batch).await.unwrap_err();
        assert!(matches!(err, LedgerError::WriteFailed(_)));
        assert_eq!(ledger.count().await.unwrap(), 0);
        assert_eq!(ledger.revenue().await.unwrap(), Money::zero());
    }

    #[tokio::test]
    async fn test_recent_respects_limit() {
        let db = db().await;
        let ledger = db.ledger();

        ledger.append(&[record("Idly", 25, 1)]).await.unwrap();
        ledger.append(&[record("Vada", 40, 1)]).await.unwrap();
        ledger.append(&[record("Tea", 15, 1)]).await.unwrap();

        let entries = ledger.recent(2).await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].item_name, "Tea");
        assert_eq!(entries[1].item_name, "Vada");
    }

    #[tokio::test]
    async fn test_today_covers_fresh_writes() {
        let db = db().await;
        let ledger = db.ledger();

        ledger
            .append(&[record("Pav Bhaji", 90, 2)])
            .await
            .unwrap();

        let entries = ledger.today().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(ledger.revenue_today().await.unwrap().rupees(), 180);
    }

    #[tokio::test]
    async fn test_batch_shares_one_timestamp() {
        let db = db().await;
        let ledger = db.ledger();

        ledger
            .append(&[record("Roti", 25, 4), record("Dal", 140, 1)])
            .await
            .unwrap();

        let entries = ledger.recent(10).await.unwrap();
        assert_eq!(entries[0].ordered_at, entries[1].ordered_at);
    }
}
