//! Stable error codes for logs and error bodies.

/// Every error enum implements this to provide a structured code string.
pub trait BoxofficeErrorCode {
    /// Returns the error code (e.g., "INVALID_INPUT").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const MODEL_UNAVAILABLE: &str = "MODEL_UNAVAILABLE";
pub const INVALID_INPUT: &str = "INVALID_INPUT";
pub const MODEL_ERROR: &str = "MODEL_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const IO_ERROR: &str = "IO_ERROR";
