use super::error_code::{self, BoxofficeErrorCode};
use super::ModelError;

/// Per-request prediction failures.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PredictionError {
    /// The revenue model failed to load at startup. Persists until restart.
    #[error("The machine learning model is not loaded. Please check the server logs.")]
    ModelUnavailable,

    /// The payload could not be mapped onto the feature schema, or the model
    /// rejected it.
    #[error("invalid input: {cause}")]
    InvalidInput { cause: String },
}

impl PredictionError {
    pub fn invalid_input(cause: impl Into<String>) -> Self {
        PredictionError::InvalidInput {
            cause: cause.into(),
        }
    }

    /// Whether the failure is the client's (true) or the server's (false).
    pub fn is_client_error(&self) -> bool {
        matches!(self, PredictionError::InvalidInput { .. })
    }
}

impl From<ModelError> for PredictionError {
    fn from(err: ModelError) -> Self {
        PredictionError::invalid_input(err.to_string())
    }
}

impl BoxofficeErrorCode for PredictionError {
    fn error_code(&self) -> &'static str {
        match self {
            PredictionError::ModelUnavailable => error_code::MODEL_UNAVAILABLE,
            PredictionError::InvalidInput { .. } => error_code::INVALID_INPUT,
        }
    }
}
