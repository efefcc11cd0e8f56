//! # boxoffice-observability
//!
//! Tracing subscriber setup, span macros for prediction and model loading,
//! and the health report served by the HTTP layer.

pub mod health;
pub mod tracing_setup;

pub use health::{HealthReport, HealthStatus};
pub use tracing_setup::{init_tracing, init_tracing_with_filter};
