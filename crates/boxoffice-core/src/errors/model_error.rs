use super::error_code::{self, BoxofficeErrorCode};

/// Revenue model errors, at load time and at inference time.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    #[error("model load failed: {path}: {reason}")]
    LoadFailed { path: String, reason: String },

    #[error("invalid model manifest {path}: {reason}")]
    ManifestInvalid { path: String, reason: String },

    #[error("feature schema mismatch: model expects [{expected}], service provides [{actual}]")]
    SchemaMismatch { expected: String, actual: String },

    #[error("unknown category {value:?} for column {column}")]
    UnknownCategory { column: String, value: String },

    #[error("missing value for column {column}")]
    MissingValue { column: String },

    #[error("inference failed: {reason}")]
    InferenceFailed { reason: String },
}

impl BoxofficeErrorCode for ModelError {
    fn error_code(&self) -> &'static str {
        error_code::MODEL_ERROR
    }
}
