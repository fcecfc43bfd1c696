//! # Domain Types
//!
//! Core domain types used throughout Loja.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Customer     │   │    Product      │   │      Sale       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (i64)       │   │  id (i64)       │   │  id (i64)       │       │
//! │  │  name           │   │  name           │   │  customer_name ─┼─┐     │
//! │  │  email          │   │  stock_quantity │   │  product_name ──┼─┤     │
//! │  │  phone          │   │  price_cents    │   │  quantity       │ │     │
//! │  └─────────────────┘   └─────────────────┘   │  value_cents    │ │     │
//! │          ▲                     ▲             └─────────────────┘ │     │
//! │          └─────────────────────┴──── matched by NAME, not id ────┘     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Name-Based References
//! A sale stores the customer and product *names* as they were at sale time.
//! Renaming or deleting a customer/product later does not touch the ledger,
//! and reports keep grouping by the stored string.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Customer
// =============================================================================

/// A registered customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Customer {
    /// Store-assigned identifier.
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Fields of a customer before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub phone: String,
}

// =============================================================================
// Product
// =============================================================================

/// A product held in stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Product {
    /// Store-assigned identifier.
    pub id: i64,

    /// Display name. Sales reference products by this string.
    pub name: String,

    /// Units on hand. No floor is enforced; may be negative.
    pub stock_quantity: i64,

    /// Unit price in cents.
    pub price_cents: i64,
}

impl Product {
    /// Returns the unit price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

/// Fields of a product before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub stock_quantity: i64,
    pub price: Money,
}

// =============================================================================
// Sale
// =============================================================================

/// An entry of the append-only sales ledger.
///
/// Once stored a sale is never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Sale {
    /// Store-assigned identifier.
    pub id: i64,

    /// Customer name at sale time (not a foreign key).
    pub customer_name: String,

    /// Product name at sale time (not a foreign key).
    pub product_name: String,

    /// Units sold.
    pub quantity: i64,

    /// Total value of the sale in cents (not the unit price).
    pub value_cents: i64,

    /// When the sale was appended.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Sale {
    /// Returns the total sale value as Money.
    #[inline]
    pub fn value(&self) -> Money {
        Money::from_cents(self.value_cents)
    }
}

/// The four fields a caller supplies when recording a sale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSale {
    pub customer_name: String,
    pub product_name: String,
    pub quantity: i64,
    pub value: Money,
}

impl NewSale {
    pub fn new(
        customer_name: impl Into<String>,
        product_name: impl Into<String>,
        quantity: i64,
        value: Money,
    ) -> Self {
        NewSale {
            customer_name: customer_name.into(),
            product_name: product_name.into(),
            quantity,
            value,
        }
    }
}

// =============================================================================
// Report Rows
// =============================================================================

/// One row of the top-sellers report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct ProductSales {
    pub product_name: String,
    /// Sum of `quantity` over every sale of this product.
    pub total_quantity: i64,
}

/// One row of the customer-reach report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct ProductReach {
    pub product_name: String,
    /// Number of distinct customer names that bought this product.
    pub customer_count: i64,
}

/// Raw inputs of the ACC computation, as returned by a Record Store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConsumptionTotals {
    pub total_value: Money,
    pub distinct_customers: i64,
}

/// Result of the Average Customer Consumption report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AverageConsumption {
    /// `total_value / distinct_customers`, or `None` when no sale exists.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[ts(as = "Option<f64>")]
    pub acc: Option<Decimal>,
    pub total_value: Money,
    pub distinct_customers: i64,
}

impl AverageConsumption {
    /// Derives the average from store totals. Zero customers means no data.
    pub fn from_totals(totals: ConsumptionTotals) -> Self {
        AverageConsumption {
            acc: totals.total_value.average_over(totals.distinct_customers),
            total_value: totals.total_value,
            distinct_customers: totals.distinct_customers,
        }
    }

    /// True when there were no sales to average over.
    pub fn is_no_data(&self) -> bool {
        self.acc.is_none()
    }
}

/// One row of the low-stock report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct StockLevel {
    pub name: String,
    pub stock_quantity: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================
