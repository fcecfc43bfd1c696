//! # Sale Repository
//!
//! Database operations for the sales ledger.
//!
//! ## Sale Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Sale Lifecycle                                    │
//! │                                                                         │
//! │  1. APPEND                                                             │
//! │     └── append() → Sale { id, created_at }                             │
//! │                                                                         │
//! │  2. READ                                                               │
//! │     └── list() / reports                                               │
//! │                                                                         │
//! │  There is no step 3. UPDATE and DELETE on `sales` abort inside SQLite  │
//! │  (triggers `sales_no_update` / `sales_no_delete`).                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use loja_core::{NewSale, Sale};

/// Repository for sale database operations.
#[derive(Debug, Clone)]
pub struct SaleRepository {
    pool: SqlitePool,
}

impl SaleRepository {
    /// Creates a new SaleRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SaleRepository { pool }
    }

    /// Appends a sale to the ledger.
    ///
    /// Customer and product names are stored verbatim; they are not checked
    /// against the `customers` or `products` tables.
    pub async fn append(&self, sale: &NewSale) -> DbResult<Sale> {
        let sale = sqlx::query_as::<_, Sale>(
            r#"
            INSERT INTO sales (customer_name, product_name, quantity, value_cents, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING id, customer_name, product_name, quantity, value_cents, created_at
            "#,
        )
        .bind(&sale.customer_name)
        .bind(&sale.product_name)
        .bind(sale.quantity)
        .bind(sale.value.cents())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        debug!(id = sale.id, product = %sale.product_name, "Appended sale");
        Ok(sale)
    }

    /// Every sale in append order.
    pub async fn list(&self) -> DbResult<Vec<Sale>> {
        let sales = sqlx::query_as::<_, Sale>(
            r#"
            SELECT id, customer_name, product_name, quantity, value_cents, created_at
            FROM sales
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(sales)
    }

    /// Counts sales.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sales")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DbError;
    use crate::{Database, DbConfig};
    use loja_core::Money;

    #[tokio::test]
    async fn test_append_and_list() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.sales();

        let first = repo
            .append(&NewSale::new("Ana", "Café", 2, Money::from_cents(1850)))
            .await
            .unwrap();
        let second = repo
            .append(&NewSale::new("Bia", "Pão", -1, Money::from_cents(-50)))
            .await
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);

        let all = repo.list().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].customer_name, "Ana");
        assert_eq!(all[1].quantity, -1);
        assert_eq!(all[1].value_cents, -50);
        assert_eq!(all[0].created_at, first.created_at);
    }

    #[tokio::test]
    async fn test_update_is_rejected() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.sales()
            .append(&NewSale::new("Ana", "Café", 2, Money::from_cents(1850)))
            .await
            .unwrap();

        let err: DbError = sqlx::query("UPDATE sales SET quantity = 99 WHERE id = 1")
            .execute(db.pool())
            .await
            .unwrap_err()
            .into();
        assert!(matches!(err, DbError::AppendOnly));

        assert_eq!(db.sales().list().await.unwrap()[0].quantity, 2);
    }

    #[tokio::test]
    async fn test_delete_is_rejected() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.sales()
            .append(&NewSale::new("Ana", "Café", 2, Money::from_cents(1850)))
            .await
            .unwrap();

        let err: DbError = sqlx::query("DELETE FROM sales")
            .execute(db.pool())
            .await
            .unwrap_err()
            .into();
        assert!(matches!(err, DbError::AppendOnly));
        assert_eq!(db.sales().count().await.unwrap(), 1);
    }
}
