//! # Loja API
//!
//! HTTP server for the Loja sales ledger and reports.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         API Server                                      │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Layers: TraceLayer ─► CorsLayer (any origin)                     │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ┌────────────────┐  ┌────────────────┐  ┌────────────────────────────┐│
//! │  │  sales         │  │  reports       │  │  customers / products      ││
//! │  │                │  │                │  │                            ││
//! │  │ • record sale  │  │ • top sellers  │  │ • list / register          ││
//! │  │                │  │ • reach        │  │ • update / delete          ││
//! │  │                │  │ • ACC          │  │                            ││
//! │  │                │  │ • low stock    │  │                            ││
//! │  └───────┬────────┘  └───────┬────────┘  └─────────────┬──────────────┘│
//! │          ▼                   ▼                         │               │
//! │     SalesLedger       ReportingEngine                  │               │
//! │          └─────────┬─────────┘                         │               │
//! │                    ▼                                   ▼               │
//! │              ┌───────────────────────────────────────────────┐         │
//! │              │          loja_db::Database (SQLite)           │         │
//! │              └───────────────────────────────────────────────┘         │
//! │                                                                         │
//! │  Unmatched paths fall back to STATIC_DIR when configured.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use std::path::Path;

use axum::http::{header, Method};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

// Re-exports
pub use config::{ApiConfig, ConfigError};
pub use error::{ApiError, ApiResult, ErrorCode};
pub use state::AppState;

/// Builds the full router with middleware.
pub fn build_router(state: AppState, static_dir: Option<&Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::PUT, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    let mut router = Router::new()
        .merge(routes::sales::router())
        .merge(routes::reports::router())
        .merge(routes::customers::router())
        .merge(routes::products::router())
        .merge(routes::health::router());

    if let Some(dir) = static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
