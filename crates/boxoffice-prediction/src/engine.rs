//! PredictionEngine — request → feature row → model → forecast → result.

use boxoffice_core::constants::{BUDGET_COLUMN, DEFAULT_BUDGET};
use boxoffice_core::errors::{BoxofficeErrorCode, PredictionError};
use boxoffice_core::models::{Forecast, PredictionRequest, PredictionResult};
use boxoffice_observability::prediction_span;
use serde_json::Value;
use tracing::{debug, warn};

use crate::state::ModelState;

/// Stateless per call; cheap to clone and share across request handlers.
#[derive(Debug, Clone)]
pub struct PredictionEngine {
    model: ModelState,
}

impl PredictionEngine {
    pub fn new(model: ModelState) -> Self {
        Self { model }
    }

    pub fn is_ready(&self) -> bool {
        self.model.model().is_some()
    }

    pub fn model_name(&self) -> Option<&str> {
        self.model.model().map(|m| m.name())
    }

    /// Why the model is unavailable, if it is.
    pub fn unavailable_reason(&self) -> Option<&str> {
        match &self.model {
            ModelState::Unavailable { reason } => Some(reason),
            ModelState::Ready(_) => None,
        }
    }

    /// Predict and format for transmission.
    ///
    /// # Errors
    /// `ModelUnavailable` if no model was loaded; `InvalidInput` if the
    /// attributes cannot be mapped onto the schema or the model rejects them.
    pub fn predict(&self, raw: &Value) -> Result<PredictionResult, PredictionError> {
        self.forecast(raw).map(|f| f.to_result())
    }

    /// Predict without formatting.
    pub fn forecast(&self, raw: &Value) -> Result<Forecast, PredictionError> {
        let model = self.model.model().ok_or(PredictionError::ModelUnavailable)?;
        let _span = prediction_span!(model.name()).entered();

        let result =
            PredictionRequest::from_json(raw).and_then(|request| self.forecast_request(&request));
        if let Err(e) = &result {
            warn!(code = e.error_code(), error = %e, "prediction failed");
        }
        result
    }

    /// Predict from an already-parsed request.
    pub fn forecast_request(&self, request: &PredictionRequest) -> Result<Forecast, PredictionError> {
        let model = self.model.model().ok_or(PredictionError::ModelUnavailable)?;

        let row = request.to_feature_row()?;
        let predicted_revenue = model.predict(&row)?;
        if !predicted_revenue.is_finite() {
            return Err(PredictionError::invalid_input(format!(
                "model produced a non-finite prediction ({predicted_revenue})"
            )));
        }

        let budget = row.number(BUDGET_COLUMN).unwrap_or(DEFAULT_BUDGET);
        let forecast = Forecast::new(predicted_revenue, budget);
        debug!(
            predicted_revenue,
            budget,
            status = %forecast.status,
            "prediction complete"
        );
        Ok(forecast)
    }
}
