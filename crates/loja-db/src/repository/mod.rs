//! # Repository Module
//!
//! Database repository implementations for Loja.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  HTTP handler                                                          │
//! │       │                                                                 │
//! │       │  db.customers().update(id, &customer)                          │
//! │       ▼                                                                 │
//! │  CustomerRepository / ProductRepository   (CRUD, pass-through)         │
//! │  SaleRepository                           (append + list, no update)   │
//! │  ReportRepository                         (GROUP BY aggregates)        │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`CustomerRepository`](customer::CustomerRepository) - Customer CRUD
//! - [`ProductRepository`](product::ProductRepository) - Product CRUD
//! - [`SaleRepository`](sale::SaleRepository) - Ledger append and listing
//! - [`ReportRepository`](report::ReportRepository) - Report aggregates

pub mod customer;
pub mod product;
pub mod report;
pub mod sale;
