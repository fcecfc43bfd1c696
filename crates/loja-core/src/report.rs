//! # Report Aggregations
//!
//! Pure aggregation rules behind the four reports. Every [`RecordStore`]
//! must produce exactly what these functions produce for the same rows; the
//! SQLite store pushes the same rules down into `GROUP BY` queries.
//!
//! ## Ordering Rules
//! ```text
//! ┌──────────────────────┬──────────────────────────┬──────────────────────┐
//! │ Report               │ Primary order            │ Tie-break            │
//! ├──────────────────────┼──────────────────────────┼──────────────────────┤
//! │ top_selling          │ SUM(quantity) DESC       │ product_name ASC     │
//! │ customer_reach       │ COUNT(DISTINCT cust) DESC│ product_name ASC     │
//! │ lowest_stock         │ stock_quantity ASC       │ id ASC               │
//! └──────────────────────┴──────────────────────────┴──────────────────────┘
//! ```
//! Names compare byte-wise, which matches SQLite's default BINARY collation.
//!
//! Sums are checked. A total that leaves the `i64` range is a store error,
//! the same outcome SQLite reports for `SUM` overflow.
//!
//! [`RecordStore`]: crate::store::RecordStore

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{StoreError, StoreResult};
use crate::money::Money;
use crate::types::{ConsumptionTotals, Product, ProductReach, ProductSales, Sale, StockLevel};

fn overflow() -> StoreError {
    StoreError::unavailable("integer overflow")
}

/// Groups sales by product name and returns the `limit` largest quantity sums.
pub fn top_selling(sales: &[Sale], limit: usize) -> StoreResult<Vec<ProductSales>> {
    let mut totals: BTreeMap<&str, i64> = BTreeMap::new();
    for sale in sales {
        let total = totals.entry(sale.product_name.as_str()).or_insert(0);
        *total = total.checked_add(sale.quantity).ok_or_else(overflow)?;
    }

    let mut rows: Vec<ProductSales> = totals
        .into_iter()
        .map(|(product_name, total_quantity)| ProductSales {
            product_name: product_name.to_string(),
            total_quantity,
        })
        .collect();

    // BTreeMap already yields names ascending; a stable sort keeps that as the tie-break.
    rows.sort_by(|a, b| b.total_quantity.cmp(&a.total_quantity));
    rows.truncate(limit);
    Ok(rows)
}

/// Counts distinct customer names per product. Unbounded.
pub fn customer_reach(sales: &[Sale]) -> Vec<ProductReach> {
    let mut buyers: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for sale in sales {
        buyers
            .entry(sale.product_name.as_str())
            .or_default()
            .insert(sale.customer_name.as_str());
    }

    let mut rows: Vec<ProductReach> = buyers
        .into_iter()
        .map(|(product_name, customers)| ProductReach {
            product_name: product_name.to_string(),
            customer_count: customers.len() as i64,
        })
        .collect();

    rows.sort_by(|a, b| b.customer_count.cmp(&a.customer_count));
    rows
}

/// Sums sale values and counts distinct customers across the whole ledger.
pub fn consumption_totals(sales: &[Sale]) -> StoreResult<ConsumptionTotals> {
    let total_value = sales
        .iter()
        .try_fold(Money::zero(), |acc, sale| acc.checked_add(sale.value()))
        .ok_or_else(overflow)?;
    let customers: BTreeSet<&str> = sales.iter().map(|s| s.customer_name.as_str()).collect();

    Ok(ConsumptionTotals {
        total_value,
        distinct_customers: customers.len() as i64,
    })
}

/// Returns the `limit` products with the smallest stock, ascending.
pub fn lowest_stock(products: &[Product], limit: usize) -> Vec<StockLevel> {
    let mut sorted: Vec<&Product> = products.iter().collect();
    sorted.sort_by_key(|p| (p.stock_quantity, p.id));

    sorted
        .into_iter()
        .take(limit)
        .map(|p| StockLevel {
            name: p.name.clone(),
            stock_quantity: p.stock_quantity,
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sale(id: i64, customer: &str, product: &str, quantity: i64, value_cents: i64) -> Sale {
        Sale {
            id,
            customer_name: customer.to_string(),
            product_name: product.to_string(),
            quantity,
            value_cents,
            created_at: Utc::now(),
        }
    }

    fn product(id: i64, name: &str, stock_quantity: i64) -> Product {
        Product {
            id,
            name: name.to_string(),
            stock_quantity,
            price_cents: 100,
        }
    }

    #[test]
    fn test_top_selling_sums_and_caps() {
        let sales = vec![
            sale(1, "A", "Arroz", 2, 0),
            sale(2, "B", "Feijão", 5, 0),
            sale(3, "C", "Arroz", 4, 0),
            sale(4, "A", "Leite", 1, 0),
            sale(5, "A", "Café", 3, 0),
        ];

        let rows = top_selling(&sales, 3).unwrap();
        assert_eq!(
            rows,
            vec![
                ProductSales { product_name: "Arroz".into(), total_quantity: 6 },
                ProductSales { product_name: "Feijão".into(), total_quantity: 5 },
                ProductSales { product_name: "Café".into(), total_quantity: 3 },
            ]
        );
    }

    #[test]
    fn test_top_selling_ties_break_by_name() {
        let sales = vec![
            sale(1, "A", "Zebra", 3, 0),
            sale(2, "A", "Alpha", 3, 0),
            sale(3, "A", "Mango", 3, 0),
            sale(4, "A", "Beta", 3, 0),
        ];

        let names: Vec<String> = top_selling(&sales, 3).unwrap().into_iter().map(|r| r.product_name).collect();
        assert_eq!(names, vec!["Alpha", "Beta", "Mango"]);
    }

    #[test]
    fn test_top_selling_empty() {
        assert!(top_selling(&[], 3).unwrap().is_empty());
    }

    #[test]
    fn test_customer_reach_counts_distinct_customers() {
        let sales = vec![
            sale(1, "Ana", "Arroz", 1, 0),
            sale(2, "Ana", "Arroz", 1, 0),
            sale(3, "Bia", "Arroz", 1, 0),
            sale(4, "Ana", "Café", 9, 0),
        ];

        let rows = customer_reach(&sales);
        assert_eq!(
            rows,
            vec![
                ProductReach { product_name: "Arroz".into(), customer_count: 2 },
                ProductReach { product_name: "Café".into(), customer_count: 1 },
            ]
        );
    }

    #[test]
    fn test_customer_reach_same_customer_twice_counts_once() {
        let sales = vec![sale(1, "Ana", "Arroz", 1, 0), sale(2, "Ana", "Arroz", 7, 0)];
        assert_eq!(customer_reach(&sales)[0].customer_count, 1);
    }

    #[test]
    fn test_customer_reach_is_unbounded() {
        let sales: Vec<Sale> = (0..10)
            .map(|i| sale(i, "Ana", &format!("P{i}"), 1, 0))
            .collect();
        assert_eq!(customer_reach(&sales).len(), 10);
    }

    #[test]
    fn test_customer_reach_names_are_case_sensitive() {
        let sales = vec![sale(1, "ana", "Arroz", 1, 0), sale(2, "Ana", "Arroz", 1, 0)];
        assert_eq!(customer_reach(&sales)[0].customer_count, 2);
    }

    #[test]
    fn test_consumption_totals() {
        let sales = vec![
            sale(1, "A", "X", 1, 1000),
            sale(2, "A", "Y", 1, 2000),
            sale(3, "B", "X", 1, 3000),
        ];

        let totals = consumption_totals(&sales).unwrap();
        assert_eq!(totals.total_value, Money::from_cents(6000));
        assert_eq!(totals.distinct_customers, 2);
    }

    #[test]
    fn test_consumption_totals_empty() {
        assert_eq!(consumption_totals(&[]).unwrap(), ConsumptionTotals::default());
    }

    #[test]
    fn test_top_selling_overflow_is_a_store_error() {
        let sales = vec![sale(1, "A", "Arroz", i64::MAX, 0), sale(2, "B", "Arroz", 1, 0)];
        assert_eq!(top_selling(&sales, 3), Err(StoreError::unavailable("integer overflow")));

        // Separate products never share an accumulator.
        let sales = vec![sale(1, "A", "Arroz", i64::MAX, 0), sale(2, "B", "Café", i64::MAX, 0)];
        assert_eq!(top_selling(&sales, 3).unwrap().len(), 2);
    }

    #[test]
    fn test_consumption_totals_overflow_is_a_store_error() {
        let sales = vec![sale(1, "A", "X", 1, i64::MAX), sale(2, "B", "X", 1, 1)];
        assert_eq!(consumption_totals(&sales), Err(StoreError::unavailable("integer overflow")));

        let sales = vec![sale(1, "A", "X", 1, i64::MIN), sale(2, "B", "X", 1, -1)];
        assert!(consumption_totals(&sales).is_err());
    }

    #[test]
    fn test_lowest_stock_orders_negatives_first() {
        let products = vec![
            product(1, "P1", 5),
            product(2, "P2", -3),
            product(3, "P3", 100),
            product(4, "P4", 2),
        ];

        let rows = lowest_stock(&products, 3);
        assert_eq!(
            rows,
            vec![
                StockLevel { name: "P2".into(), stock_quantity: -3 },
                StockLevel { name: "P4".into(), stock_quantity: 2 },
                StockLevel { name: "P1".into(), stock_quantity: 5 },
            ]
        );
    }

    #[test]
    fn test_lowest_stock_fewer_than_limit() {
        let products = vec![product(1, "Only", 7)];
        assert_eq!(lowest_stock(&products, 3).len(), 1);
        assert!(lowest_stock(&[], 3).is_empty());
    }

    #[test]
    fn test_lowest_stock_ties_break_by_id() {
        let products = vec![product(9, "Late", 0), product(2, "Early", 0)];
        let names: Vec<String> = lowest_stock(&products, 3).into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Early", "Late"]);
    }
}
