//! Wire types for the validation endpoints. The browser client speaks
//! camelCase, so everything here is renamed on the way through serde.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::NameValidation;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidateNameRequest {
    /// Submitted name; missing or blank is rejected as too short.
    pub name: Option<String>,
    /// Client-supplied session token; the server never mints its own.
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidateNameResponse {
    pub name: String,
    pub is_real: bool,
    pub comment: String,
    /// `true` when served from a pre-existing ledger record.
    pub cached: bool,
}

/// Full ledger record, as returned by the session-history endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRecordResponse {
    pub id: String,
    pub name: String,
    pub is_real: bool,
    pub comment: String,
    pub session_id: Option<String>,
    pub created_at: String,
}

impl NameValidation {
    pub fn to_response(&self, cached: bool) -> ValidateNameResponse {
        ValidateNameResponse {
            name: self.name.clone(),
            is_real: self.is_real,
            comment: self.comment.clone(),
            cached,
        }
    }

    pub fn to_record_response(&self) -> ValidationRecordResponse {
        ValidationRecordResponse {
            id: self.id.clone(),
            name: self.name.clone(),
            is_real: self.is_real,
            comment: self.comment.clone(),
            session_id: self.session_id.clone(),
            created_at: self.created_at.to_rfc3339(),
        }
    }
}
