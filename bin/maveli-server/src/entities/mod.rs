//! Ledger abstraction layer.
//!
//! [`ValidationStore`] defines the interface for the name-validation
//! ledger. Two implementations exist behind it: [`memory::MemoryStore`]
//! (volatile, resets on restart) and [`sqlite::SqliteStore`] (durable,
//! sqlx/SQLite). [`validation::Store`] wraps both and is chosen at
//! startup from configuration; handlers only ever see the trait.
//!
//! All trait methods use `impl Future` in their signatures (stable since
//! Rust 1.75) so no extra `async-trait` crate is required.

pub mod dao;
pub mod memory;
pub mod sqlite;
pub mod validation;

pub use dao::{NameValidation, NewValidation};
pub use validation::{Store, ValidationStore};

use thiserror::Error;

/// Failures in the ledger's read or write path.
///
/// Distinct from "record not found", which is an `Ok(None)` / empty-vec
/// result, never an error.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The durable backend's connection, query, or migration failed.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The in-memory backend's lock was poisoned by a panicking writer.
    #[error("in-memory store unavailable: lock poisoned")]
    Poisoned,
}
