//! Health check handlers.

use axum::{Json, extract::State};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::{Value, json};

use crate::api::state::AppState;
use crate::domain::registry;

/// Liveness probe - always returns 200 if the service is running.
pub async fn health() -> Json<Value> {
    Json(json!({
        "code": 0,
        "message": "success",
        "data": {
            "status": "healthy",
            "version": env!("CARGO_PKG_VERSION")
        }
    }))
}

/// Readiness probe.
///
/// The generator has no external dependencies; readiness reports the size of
/// the compiled-in profile registry.
pub async fn ready() -> Json<Value> {
    Json(json!({
        "code": 0,
        "message": "success",
        "data": {
            "ready": true,
            "profiles": registry().len()
        }
    }))
}

/// Prometheus metrics endpoint.
pub async fn metrics(State(state): State<AppState>) -> String {
    state
        .metrics_handle
        .as_ref()
        .map(PrometheusHandle::render)
        .unwrap_or_default()
}
