//! # Report Repository
//!
//! The four report aggregates as SQL.
//!
//! Each query returns exactly what `loja_core::report` computes in memory
//! over the same rows, tie-breaks included. Names compare with SQLite's
//! default BINARY collation, the same byte order Rust uses for `str`.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  top_selling     GROUP BY product_name  ORDER BY SUM DESC, name  LIMIT │
//! │  customer_reach  GROUP BY product_name  ORDER BY COUNT DESC, name      │
//! │  consumption     SUM(value_cents), COUNT(DISTINCT customer_name)       │
//! │  lowest_stock    products               ORDER BY stock, id       LIMIT │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use loja_core::{ConsumptionTotals, Money, ProductReach, ProductSales, StockLevel};

/// SQLite takes LIMIT as a signed 64-bit integer.
fn sql_limit(limit: usize) -> i64 {
    i64::try_from(limit).unwrap_or(i64::MAX)
}

/// Repository for the aggregate report queries.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    pool: SqlitePool,
}

impl ReportRepository {
    /// Creates a new ReportRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ReportRepository { pool }
    }

    /// Products by summed quantity, highest first.
    pub async fn top_selling(&self, limit: usize) -> DbResult<Vec<ProductSales>> {
        let rows = sqlx::query_as::<_, ProductSales>(
            r#"
            SELECT product_name, SUM(quantity) AS total_quantity
            FROM sales
            GROUP BY product_name
            ORDER BY total_quantity DESC, product_name ASC
            LIMIT ?1
            "#,
        )
        .bind(sql_limit(limit))
        .fetch_all(&self.pool)
        .await?;

        debug!(rows = rows.len(), limit, "Top sellers query");
        Ok(rows)
    }

    /// Distinct customers per product, every product ever sold.
    pub async fn customer_reach(&self) -> DbResult<Vec<ProductReach>> {
        let rows = sqlx::query_as::<_, ProductReach>(
            r#"
            SELECT product_name, COUNT(DISTINCT customer_name) AS customer_count
            FROM sales
            GROUP BY product_name
            ORDER BY customer_count DESC, product_name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(rows = rows.len(), "Customer reach query");
        Ok(rows)
    }

    /// Total sale value and distinct customer count over the whole ledger.
    pub async fn consumption_totals(&self) -> DbResult<ConsumptionTotals> {
        let (total_cents, distinct_customers): (i64, i64) = sqlx::query_as(
            r#"
            SELECT COALESCE(SUM(value_cents), 0), COUNT(DISTINCT customer_name)
            FROM sales
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(ConsumptionTotals {
            total_value: Money::from_cents(total_cents),
            distinct_customers,
        })
    }

    /// Products with the smallest stock, ascending.
    pub async fn lowest_stock(&self, limit: usize) -> DbResult<Vec<StockLevel>> {
        let rows = sqlx::query_as::<_, StockLevel>(
            r#"
            SELECT name, stock_quantity
            FROM products
            ORDER BY stock_quantity ASC, id ASC
            LIMIT ?1
            "#,
        )
        .bind(sql_limit(limit))
        .fetch_all(&self.pool)
        .await?;

        debug!(rows = rows.len(), limit, "Low stock query");
        Ok(rows)
    }
}
