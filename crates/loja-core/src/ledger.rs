//! # Sales Ledger
//!
//! The append-only record of sales.
//!
//! ## Rules
//! - A sale names its customer and product by string; neither has to exist.
//! - Quantity and value are stored as given (zero and negatives included).
//! - There is no update or delete: once appended, a sale is final.

use std::sync::Arc;

use tracing::{debug, info};

use crate::error::CoreResult;
use crate::store::RecordStore;
use crate::types::{NewSale, Sale};

/// Write side of the sales history.
#[derive(Clone)]
pub struct SalesLedger {
    store: Arc<dyn RecordStore>,
}

impl SalesLedger {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        SalesLedger { store }
    }

    /// Appends one sale and returns it with its store-assigned id.
    ///
    /// The sale is visible to every report as soon as this returns.
    pub async fn record_sale(&self, sale: NewSale) -> CoreResult<Sale> {
        debug!(
            customer = %sale.customer_name,
            product = %sale.product_name,
            quantity = sale.quantity,
            value = %sale.value,
            "Recording sale"
        );

        let sale = self.store.append_sale(sale).await?;

        info!(sale_id = sale.id, product = %sale.product_name, "Sale recorded");
        Ok(sale)
    }

    /// Every recorded sale in append order.
    pub async fn history(&self) -> CoreResult<Vec<Sale>> {
        Ok(self.store.all_sales().await?)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::store::MemoryStore;

    fn ledger() -> SalesLedger {
        SalesLedger::new(Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn test_record_sale_keeps_fields() {
        let ledger = ledger();
        let sale = ledger
            .record_sale(NewSale::new("Ana", "Café", 2, Money::from_cents(1850)))
            .await
            .unwrap();

        assert_eq!(sale.id, 1);
        assert_eq!(sale.customer_name, "Ana");
        assert_eq!(sale.product_name, "Café");
        assert_eq!(sale.quantity, 2);
        assert_eq!(sale.value(), Money::from_cents(1850));
    }

    #[tokio::test]
    async fn test_record_sale_does_not_require_known_names() {
        // No customer or product was ever registered.
        let ledger = ledger();
        let sale = ledger
            .record_sale(NewSale::new("Nobody", "Nothing", 1, Money::from_cents(100)))
            .await;
        assert!(sale.is_ok());
    }

    #[tokio::test]
    async fn test_record_sale_accepts_non_positive_amounts() {
        let ledger = ledger();
        ledger
            .record_sale(NewSale::new("Ana", "Café", 0, Money::zero()))
            .await
            .unwrap();
        ledger
            .record_sale(NewSale::new("Ana", "Café", -1, Money::from_cents(-500)))
            .await
            .unwrap();

        assert_eq!(ledger.history().await.unwrap().len(), 2);
    }
}
