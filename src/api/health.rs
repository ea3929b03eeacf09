//! Health check endpoints for Kubernetes probes

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use super::state::AppState;

/// Detailed health response with component status
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<Vec<HealthCheck>>,
}

/// Health check status
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// Individual component health check
#[derive(Serialize)]
pub struct HealthCheck {
    pub name: String,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Simple health check - returns 200 if the service is running
pub async fn health_check() -> impl IntoResponse {
    let response = HealthResponse {
        status: HealthStatus::Healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: None,
    };

    (StatusCode::OK, Json(response))
}

/// Readiness check - verifies the upstream configuration is usable.
/// Does not ping the VMH store itself; a down upstream degrades per-query
/// results rather than taking the whole service out of rotation.
pub async fn ready_check(State(state): State<AppState>) -> impl IntoResponse {
    let checks = vec![
        check_url("vmh_api_base_url", &state.vmh_config.api_base_url),
        check_url("vmh_mat_base_url", &state.vmh_config.mat_base_url),
        check_url("vmh_sbml_base_url", &state.vmh_config.sbml_base_url),
    ];

    let overall_status = if checks.iter().all(|c| c.status == HealthStatus::Healthy) {
        HealthStatus::Healthy
    } else {
        HealthStatus::Unhealthy
    };

    let response = HealthResponse {
        status: overall_status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: Some(checks),
    };

    let status_code = match overall_status {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status_code, Json(response))
}

/// Liveness check - bare 200 for crash detection
pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}

fn check_url(name: &str, url: &str) -> HealthCheck {
    match reqwest::Url::parse(url) {
        Ok(_) => HealthCheck {
            name: name.to_string(),
            status: HealthStatus::Healthy,
            message: None,
        },
        Err(e) => HealthCheck {
            name: name.to_string(),
            status: HealthStatus::Unhealthy,
            message: Some(e.to_string()),
        },
    }
}
