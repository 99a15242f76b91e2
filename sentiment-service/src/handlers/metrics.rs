//! Prometheus exposition endpoint.

use crate::services::metrics;
use axum::http::header;
use axum::response::IntoResponse;

/// `GET /metrics`
pub async fn metrics_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        metrics::get_metrics(),
    )
}
