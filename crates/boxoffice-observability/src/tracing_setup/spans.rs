//! Span definitions per operation: prediction, model load.

/// Create a prediction span.
#[macro_export]
macro_rules! prediction_span {
    ($model:expr) => {
        tracing::info_span!("boxoffice.prediction", model = %$model)
    };
}

/// Create a model load span.
#[macro_export]
macro_rules! model_load_span {
    ($path:expr) => {
        tracing::info_span!("boxoffice.model_load", path = %$path)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const PREDICTION: &str = "boxoffice.prediction";
    pub const MODEL_LOAD: &str = "boxoffice.model_load";
}
