//! Review analysis endpoint.

use crate::dtos::{AnalysisRequest, AnalysisResult};
use crate::services::metrics;
use crate::startup::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use service_core::error::AppError;

/// `POST /analyze`
///
/// Any body that does not deserialize into an [`AnalysisRequest`], whether
/// missing, malformed, or lacking the `review` field, is answered with the
/// same 400 response. Upstream failures surface as a generic 500; the cause
/// is only logged.
pub async fn analyze_review(
    State(state): State<AppState>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection, "Rejected analyze payload");
        metrics::record_analyze_request("invalid_input");
        AppError::BadRequest(anyhow::anyhow!("No review provided"))
    })?;

    match state.analyzer.analyze(&request.review).await {
        Ok(result) => {
            metrics::record_analyze_request("ok");
            Ok(Json(result))
        }
        Err(e) => {
            tracing::error!(error = %e, "Inference request failed");
            metrics::record_analyze_request("failed");
            Err(AppError::InternalError(anyhow::anyhow!("Analysis failed")))
        }
    }
}
