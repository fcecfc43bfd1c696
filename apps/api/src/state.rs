//! Shared application state.

use std::sync::Arc;

use loja_core::{ReportingEngine, SalesLedger};
use loja_db::Database;

/// State handed to every handler.
///
/// The ledger and the reporting engine both run on the same database, seen
/// through the `RecordStore` port. CRUD handlers use the repositories
/// directly.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub ledger: SalesLedger,
    pub reports: ReportingEngine,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        let db = Arc::new(db);
        AppState {
            ledger: SalesLedger::new(db.clone()),
            reports: ReportingEngine::new(db.clone()),
            db,
        }
    }
}
