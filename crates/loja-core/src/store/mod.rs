//! # Record Store Port
//!
//! The persistence contract the ledger and the reporting engine depend on.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        RecordStore                                      │
//! │                                                                         │
//! │  insert          append_sale(NewSale) ──► Sale (id assigned)           │
//! │                                                                         │
//! │  selectAll       all_sales()    ──► Vec<Sale>                          │
//! │                  all_products() ──► Vec<Product>                       │
//! │                                                                         │
//! │  selectAggregated                                                       │
//! │                  top_selling(limit)   ─┐ default: load rows and run    │
//! │                  customer_reach()      │ crate::report in memory        │
//! │                  consumption_totals()  │                                │
//! │                  lowest_stock(limit)  ─┘ SQLite: GROUP BY pushdown      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Any failure is a [`StoreError`]; callers never retry.

pub mod memory;

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::report;
use crate::types::{ConsumptionTotals, NewSale, Product, ProductReach, ProductSales, Sale, StockLevel};

pub use memory::MemoryStore;

/// Storage backend for sales and products.
///
/// Implementations must be safe to share between concurrent requests.
/// Reads only need read-committed visibility: a report may observe part of a
/// burst of concurrent appends.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Durably appends a sale and returns it with its store-assigned id.
    async fn append_sale(&self, sale: NewSale) -> StoreResult<Sale>;

    /// Every sale in append order.
    async fn all_sales(&self) -> StoreResult<Vec<Sale>>;

    /// Every product in id order.
    async fn all_products(&self) -> StoreResult<Vec<Product>>;

    async fn top_selling(&self, limit: usize) -> StoreResult<Vec<ProductSales>> {
        let sales = self.all_sales().await?;
        report::top_selling(&sales, limit)
    }

    async fn customer_reach(&self) -> StoreResult<Vec<ProductReach>> {
        let sales = self.all_sales().await?;
        Ok(report::customer_reach(&sales))
    }

    async fn consumption_totals(&self) -> StoreResult<ConsumptionTotals> {
        let sales = self.all_sales().await?;
        report::consumption_totals(&sales)
    }

    async fn lowest_stock(&self, limit: usize) -> StoreResult<Vec<StockLevel>> {
        let products = self.all_products().await?;
        Ok(report::lowest_stock(&products, limit))
    }
}
