//! # loja-core: Pure Business Logic for Loja
//!
//! This crate is the **heart** of Loja. It defines the data model, the
//! append-only Sales Ledger and the Reporting Engine, with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Loja Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/api (axum)                              │   │
//! │  │    /adicionando_venda  /prodmaisvendidos  /cmc  ...             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ loja-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  ledger   │  │ reporting │  │  report   │  │   │
//! │  │   │ Customer  │  │SalesLedger│  │ Reporting │  │ pure      │  │   │
//! │  │   │ Product   │  │           │  │ Engine    │  │ aggregates│  │   │
//! │  │   │ Sale      │  └─────┬─────┘  └─────┬─────┘  └───────────┘  │   │
//! │  │   └───────────┘        └──────┬───────┘                        │   │
//! │  │                        RecordStore (trait)                      │   │
//! │  └───────────────────────────────┬─────────────────────────────────┘   │
//! │                                  │                                      │
//! │  ┌───────────────────────────────▼─────────────────────────────────┐   │
//! │  │          loja-db (SQLite)   or   store::MemoryStore             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Customer, Product, Sale, report rows)
//! - [`money`] - Money type with integer arithmetic
//! - [`error`] - Domain error types
//! - [`validation`] - Boundary validation
//! - [`report`] - Pure aggregation rules
//! - [`store`] - The `RecordStore` port and the in-memory store
//! - [`ledger`] - The append-only Sales Ledger
//! - [`reporting`] - The Reporting Engine
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use loja_core::{Money, NewSale, ReportingEngine, SalesLedger, store::MemoryStore};
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let store = Arc::new(MemoryStore::new());
//! let ledger = SalesLedger::new(store.clone());
//! let engine = ReportingEngine::new(store);
//!
//! ledger.record_sale(NewSale::new("Ana", "Café", 2, Money::from_cents(1850))).await.unwrap();
//!
//! let top = engine.top_selling_products().await.unwrap();
//! assert_eq!(top[0].total_quantity, 2);
//! # });
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod ledger;
pub mod money;
pub mod report;
pub mod reporting;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, StoreError, StoreResult, ValidationError};
pub use ledger::SalesLedger;
pub use money::Money;
pub use reporting::ReportingEngine;
pub use store::RecordStore;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum rows returned by the top-sellers report.
pub const TOP_SELLERS_LIMIT: usize = 3;

/// Maximum rows returned by the low-stock report.
pub const LOW_STOCK_LIMIT: usize = 3;

/// Maximum length of a customer or product name, in characters.
pub const MAX_NAME_LENGTH: usize = 200;
