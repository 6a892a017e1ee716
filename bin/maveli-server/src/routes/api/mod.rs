pub mod validation;

use std::sync::Arc;

use axum::Router;
use utoipa::OpenApi;

use crate::state::AppState;

/// Routes nested under `/api` (consumed by the festival page).
pub fn router() -> Router<Arc<AppState>> {
    Router::new().merge(validation::router())
}

#[derive(OpenApi)]
#[openapi()]
pub struct FestivalApi;

pub fn api_docs() -> utoipa::openapi::OpenApi {
    let mut spec = FestivalApi::openapi();
    spec.merge(validation::ValidationApi::openapi());
    spec
}
