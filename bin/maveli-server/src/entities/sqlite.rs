//! SQLite implementation of [`ValidationStore`].
//!
//! Uses [`sqlx`] with the `sqlite` feature. Migrations are run
//! automatically on startup via [`SqliteStore::connect`].
//!
//! # Migrations path
//!
//! `sqlx::migrate!("./migrations")` resolves the path **at compile time**
//! relative to `CARGO_MANIFEST_DIR` (the crate root), so the directory is
//! embedded into the binary. The database file location is determined at
//! runtime by `MAVELI_DATABASE_URL` and is **not** related to the current
//! working directory at runtime.
//!
//! # Queries
//!
//! The `sqlx::query` (runtime-verified) form is used deliberately so that
//! no `DATABASE_URL` environment variable is needed at compile time.

use sqlx::SqlitePool;

use crate::entities::{NameValidation, NewValidation, StoreError, ValidationStore};

/// SQLite-backed validation ledger.
#[derive(Clone, Debug)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (or create) the SQLite database at `url` and run pending
    /// migrations.
    ///
    /// `url` should be a sqlx-compatible SQLite URL, e.g.
    /// `"sqlite://maveli.db"` or `"sqlite::memory:"` for tests.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let pool = SqlitePool::connect(url).await?;
        // Path is resolved relative to CARGO_MANIFEST_DIR at compile time.
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(sqlx::Error::from)?;
        Ok(Self { pool })
    }
}

type Row = (String, String, bool, String, Option<String>, String);

fn from_row((id, name, is_real, comment, session_id, created_at): Row) -> NameValidation {
    NameValidation {
        id,
        name,
        is_real,
        comment,
        session_id,
        created_at: created_at.parse().unwrap_or_else(|e: chrono::ParseError| {
            tracing::warn!(raw = %created_at, error = %e, "failed to parse created_at; using now");
            chrono::Utc::now()
        }),
    }
}

impl ValidationStore for SqliteStore {
    async fn find_by_name(&self, name: &str) -> Result<Option<NameValidation>, StoreError> {
        let row: Option<Row> = sqlx::query_as(
            "SELECT id, name, is_real, comment, session_id, created_at \
             FROM name_validations WHERE LOWER(name) = LOWER(?1)",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(from_row))
    }

    async fn create(&self, new: NewValidation) -> Result<NameValidation, StoreError> {
        let record = new.into_record();
        let created_at = record.created_at.to_rfc3339();
        sqlx::query(
            "INSERT INTO name_validations (id, name, is_real, comment, session_id, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .bind(&record.id)
        .bind(&record.name)
        .bind(record.is_real)
        .bind(&record.comment)
        .bind(&record.session_id)
        .bind(&created_at)
        .execute(&self.pool)
        .await?;
        Ok(record)
    }

    async fn list_by_session(&self, session_id: &str) -> Result<Vec<NameValidation>, StoreError> {
        let rows: Vec<Row> = sqlx::query_as(
            "SELECT id, name, is_real, comment, session_id, created_at \
             FROM name_validations WHERE session_id = ?1 ORDER BY created_at ASC",
        )
        .bind(session_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(from_row).collect())
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;

    async fn store() -> SqliteStore {
        SqliteStore::connect("sqlite::memory:").await.unwrap()
    }

    fn new_validation(name: &str, session: Option<&str>) -> NewValidation {
        NewValidation {
            name: name.to_owned(),
            is_real: false,
            comment: format!("hm, {name}"),
            session_id: session.map(str::to_owned),
        }
    }

    #[tokio::test]
    async fn create_then_find_is_case_insensitive() {
        let store = store().await;
        let created = store.create(new_validation("Sneha", None)).await.unwrap();

        let found = store.find_by_name("sNEHa").await.unwrap().unwrap();
        assert_eq!(found.id, created.id);
        assert_eq!(found.name, "Sneha");
        assert!(!found.is_real);
        assert_eq!(found.comment, created.comment);
    }

    #[tokio::test]
    async fn find_misses_unknown_names() {
        let store = store().await;
        assert!(store.find_by_name("Raj").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_by_session_returns_only_that_session() {
        let store = store().await;
        store.create(new_validation("Raj", Some("s-1"))).await.unwrap();
        store.create(new_validation("Priya", Some("s-2"))).await.unwrap();
        store.create(new_validation("Maya", Some("s-1"))).await.unwrap();
        store.create(new_validation("Karan", None)).await.unwrap();

        let history = store.list_by_session("s-1").await.unwrap();
        assert_eq!(history.len(), 2);
        assert!(history.iter().all(|r| r.session_id.as_deref() == Some("s-1")));

        assert!(store.list_by_session("s-9").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn closed_pool_surfaces_a_storage_error() {
        let store = store().await;
        store.pool.close().await;
        let err = store.find_by_name("Raj").await.unwrap_err();
        assert!(matches!(err, StoreError::Database(_)));
    }

    #[tokio::test]
    async fn created_at_round_trips() {
        let store = store().await;
        let created = store.create(new_validation("Tara", None)).await.unwrap();
        let found = store.find_by_name("Tara").await.unwrap().unwrap();
        assert_eq!(found.created_at, created.created_at);
    }
}
