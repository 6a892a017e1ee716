//! Volatile in-memory implementation of [`ValidationStore`].
//!
//! A plain `Mutex<Vec<_>>`: the ledger is append-only, small, and
//! insertion order doubles as session-history order. The lock is never
//! held across an await point.

use std::sync::Mutex;

use crate::entities::{NameValidation, NewValidation, StoreError, ValidationStore};

#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<NameValidation>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ValidationStore for MemoryStore {
    async fn find_by_name(&self, name: &str) -> Result<Option<NameValidation>, StoreError> {
        let rows = self.rows.lock().map_err(|_| StoreError::Poisoned)?;
        let needle = name.to_lowercase();
        Ok(rows
            .iter()
            .find(|r| r.name.to_lowercase() == needle)
            .cloned())
    }

    async fn create(&self, new: NewValidation) -> Result<NameValidation, StoreError> {
        let record = new.into_record();
        let mut rows = self.rows.lock().map_err(|_| StoreError::Poisoned)?;
        rows.push(record.clone());
        Ok(record)
    }

    async fn list_by_session(&self, session_id: &str) -> Result<Vec<NameValidation>, StoreError> {
        let rows = self.rows.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(rows
            .iter()
            .filter(|r| r.session_id.as_deref() == Some(session_id))
            .cloned()
            .collect())
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
