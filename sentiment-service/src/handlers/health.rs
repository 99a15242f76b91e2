//! Liveness and readiness endpoints.

use crate::startup::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// `GET /health`
///
/// Reports the configured model. Deliberately does not probe the model
/// server: `/analyze` is where upstream failures surface.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "OK",
            "model": state.config.inference.model
        })),
    )
}

/// `GET /ready`. The service has no hard dependencies to wait on.
pub async fn readiness_check() -> StatusCode {
    StatusCode::OK
}
