//! v1 API endpoints

pub mod models;

use axum::routing::post;
use axum::Router;

use super::state::AppState;

pub fn create_v1_router() -> Router<AppState> {
    Router::new().route("/models/resolve", post(models::resolve_models))
}
