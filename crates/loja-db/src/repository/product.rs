//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Key Operations
//! - CRUD operations
//! - Listing in id order (the low-stock tie-break)
//!
//! Stock has no floor here: the API stores whatever quantity it is given,
//! negative values included.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use loja_core::{NewProduct, Product};

/// Repository for product database operations.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Lists every product in id order.
    pub async fn list(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, stock_quantity, price_cents FROM products ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Inserts a product and returns it with its assigned id.
    pub async fn insert(&self, product: &NewProduct) -> DbResult<Product> {
        debug!(
            name = %product.name,
            stock = product.stock_quantity,
            price = %product.price,
            "Inserting product"
        );

        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, stock_quantity, price_cents)
            VALUES (?1, ?2, ?3)
            RETURNING id, name, stock_quantity, price_cents
            "#,
        )
        .bind(&product.name)
        .bind(product.stock_quantity)
        .bind(product.price.cents())
        .fetch_one(&self.pool)
        .await?;

        Ok(product)
    }

    /// Replaces every field of an existing product.
    ///
    /// Renaming a product does not rename its past sales.
    pub async fn update(&self, id: i64, product: &NewProduct) -> DbResult<()> {
        debug!(id, name = %product.name, "Updating product");

        let result = sqlx::query(
            r#"
            UPDATE products SET
                name = ?2,
                stock_quantity = ?3,
                price_cents = ?4
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(&product.name)
        .bind(product.stock_quantity)
        .bind(product.price.cents())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Deletes a product.
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Counts products.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
