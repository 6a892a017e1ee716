use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A row in the `name_validations` table.
///
/// `is_real` and `comment` are fixed at creation time and never
/// recomputed; rows are never updated or deleted.
#[derive(Debug, Clone)]
pub struct NameValidation {
    pub id: String,
    /// Trimmed, original-case form of the submitted name.
    pub name: String,
    pub is_real: bool,
    pub comment: String,
    /// Session of the first submitter; never overwritten by later
    /// submissions of the same name.
    pub session_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Fields the orchestration layer supplies; id and timestamp are
/// allocated by the store on insert.
#[derive(Debug, Clone)]
pub struct NewValidation {
    pub name: String,
    pub is_real: bool,
    pub comment: String,
    pub session_id: Option<String>,
}

impl NewValidation {
    /// Allocate a fresh identifier and creation timestamp.
    pub fn into_record(self) -> NameValidation {
        NameValidation {
            id: Uuid::new_v4().to_string(),
            name: self.name,
            is_real: self.is_real,
            comment: self.comment,
            session_id: self.session_id,
            created_at: Utc::now(),
        }
    }
}
