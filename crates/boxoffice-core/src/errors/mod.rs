//! Error types for the prediction service.
//!
//! `PredictionError` is the per-request taxonomy surfaced to HTTP clients.
//! `ModelError` covers loading and invoking the revenue model.
//! `ConfigError` covers startup configuration.

pub mod config_error;
pub mod error_code;
pub mod model_error;
pub mod prediction_error;

pub use config_error::ConfigError;
pub use error_code::BoxofficeErrorCode;
pub use model_error::ModelError;
pub use prediction_error::PredictionError;

/// Umbrella error for the service.
#[derive(Debug, thiserror::Error)]
pub enum BoxofficeError {
    #[error(transparent)]
    Prediction(#[from] PredictionError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BoxofficeErrorCode for BoxofficeError {
    fn error_code(&self) -> &'static str {
        match self {
            BoxofficeError::Prediction(e) => e.error_code(),
            BoxofficeError::Model(e) => e.error_code(),
            BoxofficeError::Config(e) => e.error_code(),
            BoxofficeError::Io(_) => error_code::IO_ERROR,
        }
    }
}

pub type BoxofficeResult<T> = Result<T, BoxofficeError>;
