//! # Reporting Engine
//!
//! The four read-only business reports over the full sales history.
//!
//! ## Reports
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  top_selling_products()       SUM(quantity) per product, top 3         │
//! │  product_customer_reach()     distinct customers per product, ALL rows │
//! │  average_customer_consumption SUM(value) / distinct customers          │
//! │  low_stock_products()         3 products with the lowest stock         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Reach is deliberately unbounded while the other lists are capped at 3.
//! None of the reports take parameters or mutate state.

use std::sync::Arc;

use tracing::debug;

use crate::error::CoreResult;
use crate::store::RecordStore;
use crate::types::{AverageConsumption, ProductReach, ProductSales, StockLevel};
use crate::{LOW_STOCK_LIMIT, TOP_SELLERS_LIMIT};

/// Read side of the sales history.
#[derive(Clone)]
pub struct ReportingEngine {
    store: Arc<dyn RecordStore>,
}

impl ReportingEngine {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        ReportingEngine { store }
    }

    /// Products ordered by total units sold, at most [`TOP_SELLERS_LIMIT`].
    ///
    /// Equal totals are ordered by product name so the result is stable.
    pub async fn top_selling_products(&self) -> CoreResult<Vec<ProductSales>> {
        let rows = self.store.top_selling(TOP_SELLERS_LIMIT).await?;
        debug!(rows = rows.len(), "Top sellers computed");
        Ok(rows)
    }

    /// Distinct customer count per product, every product that was ever sold.
    pub async fn product_customer_reach(&self) -> CoreResult<Vec<ProductReach>> {
        let rows = self.store.customer_reach().await?;
        debug!(rows = rows.len(), "Customer reach computed");
        Ok(rows)
    }

    /// Total sales value divided by the number of distinct customers.
    ///
    /// With an empty ledger the result carries `acc: None` ("no data").
    pub async fn average_customer_consumption(&self) -> CoreResult<AverageConsumption> {
        let totals = self.store.consumption_totals().await?;
        let avg = AverageConsumption::from_totals(totals);

        if avg.is_no_data() {
            debug!("No sales recorded, ACC has no data");
        } else {
            debug!(
                total = %avg.total_value,
                customers = avg.distinct_customers,
                "ACC computed"
            );
        }
        Ok(avg)
    }

    /// The [`LOW_STOCK_LIMIT`] products with the smallest stock, ascending.
    pub async fn low_stock_products(&self) -> CoreResult<Vec<StockLevel>> {
        let rows = self.store.lowest_stock(LOW_STOCK_LIMIT).await?;
        debug!(rows = rows.len(), "Low stock computed");
        Ok(rows)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
