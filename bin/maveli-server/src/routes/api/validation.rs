//! Name validation endpoints: submit a name for a verdict, and retrieve
//! a session's validation history.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::entities::{NewValidation, ValidationStore};
use crate::error::ServerError;
use crate::schemas::api::validation::{
    ValidateNameRequest, ValidateNameResponse, ValidationRecordResponse,
};
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(validate_name, list_session_validations),
    components(schemas(
        ValidateNameRequest,
        ValidateNameResponse,
        ValidationRecordResponse
    ))
)]
pub struct ValidationApi;

/// Register validation routes.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/validate-name", post(validate_name))
        .route("/session/{session_id}/validations", get(list_session_validations))
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// Submit a name for validation.
///
/// The ledger is checked first (case-insensitive exact match): a hit is
/// returned as-is with `cached = true` – no reclassification, and the
/// stored record keeps its original session association even when this
/// request carries a different session id. Only on a miss does the
/// classifier run and a new record get created.
#[utoipa::path(
    post,
    path = "/api/validate-name",
    tag = "validation",
    request_body = ValidateNameRequest,
    responses(
        (status = 200, description = "Verdict and remark", body = ValidateNameResponse),
        (status = 400, description = "Name missing or shorter than 2 characters"),
        (status = 500, description = "Ledger unavailable"),
    )
)]
pub async fn validate_name(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ValidateNameRequest>,
) -> Result<Json<ValidateNameResponse>, ServerError> {
    let trimmed = req.name.as_deref().unwrap_or("").trim();
    if trimmed.chars().count() < 2 {
        return Err(ServerError::BadRequest(
            "Name must be at least 2 characters long".to_owned(),
        ));
    }

    if let Some(existing) = state.store.find_by_name(trimmed).await? {
        return Ok(Json(existing.to_response(true)));
    }

    let is_real = maveli_core::is_plausible_name(trimmed);
    let comment = maveli_core::comment_for(trimmed, is_real, &mut rand::rng());
    let created = state
        .store
        .create(NewValidation {
            name: trimmed.to_owned(),
            is_real,
            comment,
            session_id: req.session_id,
        })
        .await?;

    Ok(Json(created.to_response(false)))
}

/// Retrieve all validations recorded under a session.
///
/// An unknown session is not an error; it yields an empty list.
#[utoipa::path(
    get,
    path = "/api/session/{session_id}/validations",
    tag = "validation",
    params(("session_id" = String, Path, description = "Client session token")),
    responses(
        (status = 200, description = "Validation history", body = Vec<ValidationRecordResponse>),
        (status = 500, description = "Ledger unavailable"),
    )
)]
pub async fn list_session_validations(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> Result<Json<Vec<ValidationRecordResponse>>, ServerError> {
    let validations = state.store.list_by_session(&session_id).await?;
    Ok(Json(
        validations.iter().map(|v| v.to_record_response()).collect(),
    ))
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::Config;
    use crate::entities::Store;
    use crate::entities::memory::MemoryStore;

    fn test_state() -> Arc<AppState> {
        Arc::new(AppState {
            config: Arc::new(Config::from_env()),
            store: Arc::new(Store::Memory(MemoryStore::new())),
        })
    }

    fn request(name: &str, session: Option<&str>) -> Json<ValidateNameRequest> {
        Json(ValidateNameRequest {
            name: Some(name.to_owned()),
            session_id: session.map(str::to_owned),
        })
    }

    #[tokio::test]
    async fn real_name_gets_a_real_verdict_and_remark() {
        let state = test_state();
        let Json(res) = validate_name(State(state), request("Raj", None))
            .await
            .unwrap();
        assert_eq!(res.name, "Raj");
        assert!(res.is_real);
        assert!(!res.cached);
        assert!(maveli_core::comment_pool("Raj", true).contains(&res.comment));
    }

    #[tokio::test]
    async fn fabricated_name_gets_a_fabricated_remark() {
        let state = test_state();
        let Json(res) = validate_name(State(state), request("test123", None))
            .await
            .unwrap();
        assert!(!res.is_real);
        assert!(maveli_core::comment_pool("test123", false).contains(&res.comment));
    }

    #[tokio::test]
    async fn resubmission_is_served_from_the_ledger() {
        let state = test_state();
        let Json(first) = validate_name(State(state.clone()), request("Raj", Some("s-1")))
            .await
            .unwrap();
        // Different case and surrounding whitespace, different session.
        let Json(second) = validate_name(State(state), request("  raj ", Some("s-2")))
            .await
            .unwrap();
        assert!(second.cached);
        assert_eq!(second.name, "Raj");
        assert_eq!(second.is_real, first.is_real);
        assert_eq!(second.comment, first.comment);
    }

    #[tokio::test]
    async fn too_short_names_are_rejected_without_a_record() {
        let state = test_state();
        let err = validate_name(State(state.clone()), request("a", Some("s-1")))
            .await
            .unwrap_err();
        assert!(matches!(err, ServerError::BadRequest(_)));

        let missing = validate_name(
            State(state.clone()),
            Json(ValidateNameRequest { name: None, session_id: None }),
        )
        .await;
        assert!(matches!(missing, Err(ServerError::BadRequest(_))));

        let Json(history) = list_session_validations(State(state), Path("s-1".to_owned()))
            .await
            .unwrap();
        assert!(history.is_empty());
    }

    #[tokio::test]
    async fn repeated_character_names_are_fabricated() {
        let state = test_state();
        let Json(res) = validate_name(State(state), request("xxxxxxx", None))
            .await
            .unwrap();
        assert!(!res.is_real);
    }

    #[tokio::test]
    async fn session_history_lists_first_time_submissions() {
        let state = test_state();
        for name in ["Raj", "Priya", "Maya"] {
            validate_name(State(state.clone()), request(name, Some("s-1")))
                .await
                .unwrap();
        }
        let Json(history) = list_session_validations(State(state), Path("s-1".to_owned()))
            .await
            .unwrap();
        assert_eq!(history.len(), 3);
        assert!(history.iter().all(|r| r.session_id.as_deref() == Some("s-1")));
    }

    // The first submitter of a name owns its session association; a later
    // submitter under another session does not see the name in their own
    // history. Documented quirk of check-then-create, preserved on purpose.
    #[tokio::test]
    async fn cached_hits_never_join_the_second_session() {
        let state = test_state();
        validate_name(State(state.clone()), request("Raj", Some("s-1")))
            .await
            .unwrap();
        validate_name(State(state.clone()), request("raj", Some("s-2")))
            .await
            .unwrap();

        let Json(first) = list_session_validations(State(state.clone()), Path("s-1".to_owned()))
            .await
            .unwrap();
        let Json(second) = list_session_validations(State(state), Path("s-2".to_owned()))
            .await
            .unwrap();
        assert_eq!(first.len(), 1);
        assert!(second.is_empty());
    }

    #[tokio::test]
    async fn unknown_session_history_is_empty_not_an_error() {
        let state = test_state();
        let Json(history) = list_session_validations(State(state), Path("ghost".to_owned()))
            .await
            .unwrap();
        assert!(history.is_empty());
    }
}
