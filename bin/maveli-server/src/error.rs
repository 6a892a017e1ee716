//! Unified server error type.
//!
//! Every handler returns `Result<T, ServerError>`, which implements
//! [`axum::response::IntoResponse`] so errors are automatically converted
//! to a JSON-body HTTP response with an appropriate status code.
//!
//! **Security note:** Internal errors (Storage, Internal) are logged with
//! full detail but only a generic message is returned to the caller so
//! that file paths, SQL, or other implementation details never leak to
//! clients. In particular a storage failure is reported as a 500, never
//! misreported as "not found".

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::entities::StoreError;

/// All errors that can occur in the maveli-server request lifecycle.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Propagated from the ledger (in-memory or SQLite).
    #[error("storage error: {0}")]
    Storage(#[from] StoreError),

    /// The caller sent an invalid or malformed request.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// An unclassified internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, client_message) = match &self {
            // Client-facing errors: expose the message directly.
            ServerError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),

            // Internal errors: log the full detail, return a generic message.
            ServerError::Storage(e) => {
                error!(error = %e, "ledger error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_owned(),
                )
            }
            ServerError::Internal(m) => {
                error!(message = %m, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_owned(),
                )
            }
        };
        (status, Json(json!({ "error": client_message }))).into_response()
    }
}

impl From<anyhow::Error> for ServerError {
    fn from(e: anyhow::Error) -> Self {
        // Log the full error chain before discarding it so that diagnostic
        // detail is preserved in the server logs even though clients only
        // see a generic message.
        error!(error = ?e, "converting anyhow error to ServerError::Internal");
        ServerError::Internal(e.to_string())
    }
}
