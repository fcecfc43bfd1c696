//! In-memory [`RecordStore`] used by tests and embedders.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use tracing::debug;

use super::RecordStore;
use crate::error::StoreResult;
use crate::types::{NewProduct, NewSale, Product, Sale};

#[derive(Debug, Default)]
struct Tables {
    products: Vec<Product>,
    sales: Vec<Sale>,
    next_product_id: i64,
    next_sale_id: i64,
}

/// A `RecordStore` holding products and sales in process memory.
///
/// Ids start at 1 and grow by one per insert, like SQLite's rowid.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a product and returns it with its assigned id.
    pub fn insert_product(&self, product: NewProduct) -> Product {
        let mut tables = self.tables.write();
        tables.next_product_id += 1;

        let product = Product {
            id: tables.next_product_id,
            name: product.name,
            stock_quantity: product.stock_quantity,
            price_cents: product.price.cents(),
        };
        tables.products.push(product.clone());
        product
    }

    /// Renames a product in place. Sales keep the old name.
    pub fn rename_product(&self, id: i64, name: impl Into<String>) -> bool {
        let mut tables = self.tables.write();
        match tables.products.iter_mut().find(|p| p.id == id) {
            Some(product) => {
                product.name = name.into();
                true
            }
            None => false,
        }
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn append_sale(&self, sale: NewSale) -> StoreResult<Sale> {
        let mut tables = self.tables.write();
        tables.next_sale_id += 1;

        let sale = Sale {
            id: tables.next_sale_id,
            customer_name: sale.customer_name,
            product_name: sale.product_name,
            quantity: sale.quantity,
            value_cents: sale.value.cents(),
            created_at: Utc::now(),
        };
        debug!(id = sale.id, product = %sale.product_name, "Appended sale in memory");

        tables.sales.push(sale.clone());
        Ok(sale)
    }

    async fn all_sales(&self) -> StoreResult<Vec<Sale>> {
        Ok(self.tables.read().sales.clone())
    }

    async fn all_products(&self) -> StoreResult<Vec<Product>> {
        Ok(self.tables.read().products.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    #[tokio::test]
    async fn test_ids_are_sequential() {
        let store = MemoryStore::new();
        let a = store
            .append_sale(NewSale::new("Ana", "Arroz", 1, Money::from_cents(500)))
            .await
            .unwrap();
        let b = store
            .append_sale(NewSale::new("Bia", "Arroz", 1, Money::from_cents(500)))
            .await
            .unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(store.all_sales().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_rename_product_leaves_sales_untouched() {
        let store = MemoryStore::new();
        let product = store.insert_product(NewProduct {
            name: "Arroz".to_string(),
            stock_quantity: 10,
            price: Money::from_cents(899),
        });
        store
            .append_sale(NewSale::new("Ana", "Arroz", 1, Money::from_cents(899)))
            .await
            .unwrap();

        assert!(store.rename_product(product.id, "Arroz Integral"));
        assert!(!store.rename_product(999, "Ghost"));

        let sales = store.all_sales().await.unwrap();
        assert_eq!(sales[0].product_name, "Arroz");
        assert_eq!(store.all_products().await.unwrap()[0].name, "Arroz Integral");
    }
}
