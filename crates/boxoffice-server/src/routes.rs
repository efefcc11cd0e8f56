//! Request handlers.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::Uri;
use axum::response::Html;
use axum::Json;
use boxoffice_core::errors::{BoxofficeErrorCode, PredictionError};
use boxoffice_core::models::PredictionResult;
use boxoffice_observability::HealthReport;
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::app::AppState;
use crate::error::ApiError;

const INDEX_HTML: &str = include_str!("../static/index.html");

/// `GET /`
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    Json(HealthReport::from_model(state.engine.model_name()))
}

/// `POST /predict`
///
/// Model availability is checked before the body is read, so an unavailable
/// model yields 500 whatever the payload.
pub async fn predict(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PredictionResult>, ApiError> {
    if !state.engine.is_ready() {
        let err = PredictionError::ModelUnavailable;
        error!(
            code = err.error_code(),
            reason = state.engine.unavailable_reason().unwrap_or_default(),
            "prediction requested without a loaded model"
        );
        return Err(err.into());
    }

    let raw: Value = serde_json::from_slice(&body).map_err(|e| {
        let err = PredictionError::invalid_input(format!("malformed JSON body: {e}"));
        warn!(code = err.error_code(), error = %err, "rejected request body");
        err
    })?;
    debug!(payload = %raw, "received data for prediction");

    // Inference may block on the model's session lock.
    let engine = state.engine.clone();
    let result = tokio::task::spawn_blocking(move || engine.predict(&raw))
        .await
        .map_err(|e| {
            error!(error = %e, "prediction task failed");
            ApiError::internal("prediction task failed")
        })??;

    Ok(Json(result))
}

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::not_found(uri.path())
}
