//! Wire types for the batch model resolution endpoint

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::QueryResult;

/// Message returned when the normalized name list comes out empty.
pub const MISSING_NAMES_MESSAGE: &str = "Missing organism names";

/// Message returned when the request body cannot be parsed at all.
pub const INVALID_REQUEST_MESSAGE: &str = "Invalid request";

/// Batch resolution request.
///
/// `names` is deliberately untyped: only a JSON array of strings is
/// meaningful, and anything else normalizes to zero names instead of
/// being rejected by deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct ResolveModelsRequest {
    #[serde(default)]
    pub names: Value,
}

/// Batch resolution response envelope.
///
/// `error` is set only for request-level validation failures; per-query
/// failures live inside the individual results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveModelsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub results: Vec<QueryResult>,
}

impl ResolveModelsResponse {
    pub fn success(results: Vec<QueryResult>) -> Self {
        Self {
            error: None,
            results,
        }
    }

    pub fn validation_failure(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            results: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_accepts_any_names_value() {
        let request: ResolveModelsRequest =
            serde_json::from_value(json!({"names": {"not": "a list"}})).unwrap();
        assert!(request.names.is_object());

        let request: ResolveModelsRequest = serde_json::from_value(json!({})).unwrap();
        assert!(request.names.is_null());
    }

    #[test]
    fn test_success_envelope_omits_error() {
        let response = ResolveModelsResponse::success(vec![QueryResult::resolved(
            "E. coli",
            Vec::new(),
        )]);
        let json = serde_json::to_value(response).unwrap();

        assert!(json.get("error").is_none());
        assert_eq!(json["results"][0]["query"], "E. coli");
    }

    #[test]
    fn test_validation_failure_envelope() {
        let response = ResolveModelsResponse::validation_failure(MISSING_NAMES_MESSAGE);
        let json = serde_json::to_value(response).unwrap();

        assert_eq!(json["error"], MISSING_NAMES_MESSAGE);
        assert_eq!(json["results"], json!([]));
    }
}
