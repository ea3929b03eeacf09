//! Batch model resolution endpoint

use axum::{extract::State, http::StatusCode};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{
    Json, ResolveModelsRequest, ResolveModelsResponse, MISSING_NAMES_MESSAGE,
};
use crate::domain::normalize_names;

/// POST /v1/models/resolve
///
/// Normalizes the submitted names, fans them out to the resolver, and
/// wraps the ordered per-query results into the batch envelope. An empty
/// normalized list is a request-level failure and never reaches the
/// resolver.
pub async fn resolve_models(
    State(state): State<AppState>,
    Json(request): Json<ResolveModelsRequest>,
) -> (StatusCode, Json<ResolveModelsResponse>) {
    let names = normalize_names(&request.names);
    if names.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ResolveModelsResponse::validation_failure(
                MISSING_NAMES_MESSAGE,
            )),
        );
    }

    debug!(batch_size = names.len(), "Resolving model batch");
    let results = state.resolver.resolve_batch(&names).await;

    (StatusCode::OK, Json(ResolveModelsResponse::success(results)))
}
