//! # boxoffice-core
//!
//! Foundation crate for the box-office prediction service.
//! Defines the feature schema, request/result types, errors, config,
//! revenue formatting, and the `IRevenueModel` trait.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod format;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::BoxofficeConfig;
pub use errors::{BoxofficeError, BoxofficeResult, ModelError, PredictionError};
pub use models::{FeatureRow, FeatureValue, PredictionRequest, PredictionResult, ProfitStatus};
pub use traits::IRevenueModel;
