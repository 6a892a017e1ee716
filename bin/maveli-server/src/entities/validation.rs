use std::future::Future;

use crate::config::Config;
use crate::entities::memory::MemoryStore;
use crate::entities::sqlite::SqliteStore;
use crate::entities::{NameValidation, NewValidation, StoreError};

/// Capability interface for the name-validation ledger.
///
/// Implement this trait to add another backend without touching any
/// handler code.
pub trait ValidationStore: Send + Sync + 'static {
    /// Case-insensitive exact match against stored names.
    fn find_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<NameValidation>, StoreError>> + Send;

    /// Allocate an id and timestamp, store the record, return it.
    ///
    /// Performs no duplicate check; the request orchestration looks up
    /// by name first (check-then-create, best-effort deduplication).
    fn create(
        &self,
        new: NewValidation,
    ) -> impl Future<Output = Result<NameValidation, StoreError>> + Send;

    /// All records created under `session_id`, in insertion order.
    /// Empty vec for an unknown session.
    fn list_by_session(
        &self,
        session_id: &str,
    ) -> impl Future<Output = Result<Vec<NameValidation>, StoreError>> + Send;
}

/// The ledger backend selected at startup.
///
/// Constructed once in `main` and shared through
/// [`crate::state::AppState`]; the variant is fixed for the process
/// lifetime, never inspected per request.
#[derive(Debug)]
pub enum Store {
    Memory(MemoryStore),
    Sqlite(SqliteStore),
}

impl Store {
    /// Pick the backend from configuration: a configured database URL
    /// means the durable SQLite ledger, otherwise the in-memory one.
    pub async fn connect(cfg: &Config) -> Result<Self, StoreError> {
        match &cfg.database_url {
            Some(url) => Ok(Store::Sqlite(SqliteStore::connect(url).await?)),
            None => Ok(Store::Memory(MemoryStore::new())),
        }
    }

    /// Human-readable backend name for startup logging.
    pub fn backend_name(&self) -> &'static str {
        match self {
            Store::Memory(_) => "memory",
            Store::Sqlite(_) => "sqlite",
        }
    }
}

impl ValidationStore for Store {
    async fn find_by_name(&self, name: &str) -> Result<Option<NameValidation>, StoreError> {
        match self {
            Store::Memory(s) => s.find_by_name(name).await,
            Store::Sqlite(s) => s.find_by_name(name).await,
        }
    }

    async fn create(&self, new: NewValidation) -> Result<NameValidation, StoreError> {
        match self {
            Store::Memory(s) => s.create(new).await,
            Store::Sqlite(s) => s.create(new).await,
        }
    }

    async fn list_by_session(&self, session_id: &str) -> Result<Vec<NameValidation>, StoreError> {
        match self {
            Store::Memory(s) => s.list_by_session(session_id).await,
            Store::Sqlite(s) => s.list_by_session(session_id).await,
        }
    }
}
