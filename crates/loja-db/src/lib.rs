//! # loja-db: SQLite Record Store for Loja
//!
//! This crate provides database access for Loja.
//! It uses SQLite for storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Loja Data Flow                                   │
//! │                                                                         │
//! │  HTTP handler (apps/api)                                               │
//! │       │                                                                 │
//! │       ├── CRUD ─────────────────┐                                      │
//! │       ▼                         │                                      │
//! │  SalesLedger / ReportingEngine  │                                      │
//! │       │ (RecordStore)           │                                      │
//! │       ▼                         ▼                                      │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     loja-db (THIS CRATE)                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │               │    │  (embedded)  │  │   │
//! │  │   │               │    │ CustomerRepo  │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│ ProductRepo   │    │ 001_initial  │  │   │
//! │  │   │ RecordStore   │    │ SaleRepo      │    │ _schema.sql  │  │   │
//! │  │   │ (store.rs)    │    │ ReportRepo    │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                SQLite Database (lojaDB.sqlite)                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations
//! - `store` - `RecordStore` implementation for [`Database`]
//!
//! ## Usage
//!
//! ```rust,no_run
//! use loja_db::{Database, DbConfig};
//!
//! # async fn demo() -> Result<(), loja_db::DbError> {
//! let db = Database::new(DbConfig::new("lojaDB.sqlite")).await?;
//!
//! let top = db.reports().top_selling(3).await?;
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::customer::CustomerRepository;
pub use repository::product::ProductRepository;
pub use repository::report::ReportRepository;
pub use repository::sale::SaleRepository;
