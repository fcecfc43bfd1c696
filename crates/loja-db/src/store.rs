//! # SQLite Record Store
//!
//! Plugs [`Database`] into the core as a [`RecordStore`].
//!
//! Plain reads and the append go through the repositories; the four
//! aggregates are overridden so SQLite does the grouping instead of the
//! core loading the whole ledger.

use async_trait::async_trait;
use loja_core::{
    ConsumptionTotals, NewSale, Product, ProductReach, ProductSales, RecordStore, Sale,
    StockLevel, StoreResult,
};

use crate::pool::Database;

#[async_trait]
impl RecordStore for Database {
    async fn append_sale(&self, sale: NewSale) -> StoreResult<Sale> {
        Ok(self.sales().append(&sale).await?)
    }

    async fn all_sales(&self) -> StoreResult<Vec<Sale>> {
        Ok(self.sales().list().await?)
    }

    async fn all_products(&self) -> StoreResult<Vec<Product>> {
        Ok(self.products().list().await?)
    }

    async fn top_selling(&self, limit: usize) -> StoreResult<Vec<ProductSales>> {
        Ok(self.reports().top_selling(limit).await?)
    }

    async fn customer_reach(&self) -> StoreResult<Vec<ProductReach>> {
        Ok(self.reports().customer_reach().await?)
    }

    async fn consumption_totals(&self) -> StoreResult<ConsumptionTotals> {
        Ok(self.reports().consumption_totals().await?)
    }

    async fn lowest_stock(&self, limit: usize) -> StoreResult<Vec<StockLevel>> {
        Ok(self.reports().lowest_stock(limit).await?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::DbConfig;
    use loja_core::{CoreError, Money, ReportingEngine, SalesLedger, StoreError};

    #[tokio::test]
    async fn test_ledger_and_engine_over_sqlite() {
        let db = Arc::new(Database::new(DbConfig::in_memory()).await.unwrap());
        let ledger = SalesLedger::new(db.clone());
        let engine = ReportingEngine::new(db);

        ledger
            .record_sale(NewSale::new("Ana", "Café", 3, Money::from_cents(1500)))
            .await
            .unwrap();

        let top = engine.top_selling_products().await.unwrap();
        assert_eq!(top[0].product_name, "Café");
        assert_eq!(top[0].total_quantity, 3);
    }

    #[tokio::test]
    async fn test_closed_pool_surfaces_as_store_unavailable() {
        let db = Arc::new(Database::new(DbConfig::in_memory()).await.unwrap());
        db.close().await;

        let engine = ReportingEngine::new(db);
        let err = engine.low_stock_products().await.unwrap_err();
        assert!(matches!(err, CoreError::Store(StoreError::Unavailable(_))));
    }
}
