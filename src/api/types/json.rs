//! Custom JSON extractor that returns parse failures as the batch envelope

use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json as AxumJson,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::resolution::{ResolveModelsResponse, INVALID_REQUEST_MESSAGE};

/// Custom JSON extractor wrapping `axum::Json`.
///
/// A body that cannot be parsed is a request-level validation failure: the
/// rejection is HTTP 400 carrying `{ "error": ..., "results": [] }`, the
/// same envelope the resolution endpoint uses, so no unhandled fault ever
/// surfaces from payload parsing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> std::ops::Deref for Json<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// JSON rejection error returning the batch validation envelope
#[derive(Debug)]
pub struct JsonRejection {
    detail: String,
}

impl IntoResponse for JsonRejection {
    fn into_response(self) -> Response {
        debug!(detail = %self.detail, "Rejecting unparsable request body");

        let response = ResolveModelsResponse::validation_failure(INVALID_REQUEST_MESSAGE);
        (StatusCode::BAD_REQUEST, AxumJson(response)).into_response()
    }
}

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = JsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match AxumJson::<T>::from_request(req, state).await {
            Ok(AxumJson(value)) => Ok(Json(value)),
            Err(rejection) => Err(JsonRejection {
                detail: rejection.body_text(),
            }),
        }
    }
}

impl<T> IntoResponse for Json<T>
where
    T: serde::Serialize,
{
    fn into_response(self) -> Response {
        AxumJson(self.0).into_response()
    }
}
