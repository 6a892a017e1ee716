//! Shared application state injected into every Axum handler.

use std::sync::Arc;

use crate::config::Config;
use crate::entities::Store;

/// State shared across all HTTP handlers.
///
/// The ledger is an explicitly constructed instance owned by `main`,
/// not a module-level global.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Server configuration (env-derived).
    pub config: Arc<Config>,
    /// The validation ledger (in-memory or SQLite, per configuration).
    pub store: Arc<Store>,
}
