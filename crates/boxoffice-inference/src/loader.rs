//! Startup loading of the configured revenue model.

use std::path::Path;

use boxoffice_core::config::ModelConfig;
use boxoffice_core::errors::ModelError;
use boxoffice_core::traits::IRevenueModel;
use tracing::{error, info};

use crate::onnx_model::OnnxRevenueModel;

/// Load the model named by `config`.
///
/// Failures are logged here and returned; callers decide whether to keep
/// serving without a model.
pub fn load_model(config: &ModelConfig) -> Result<OnnxRevenueModel, ModelError> {
    let manifest_path = config.manifest_path();
    let result = OnnxRevenueModel::load(
        Path::new(&config.path),
        &manifest_path,
        config.intra_threads,
    );

    match &result {
        Ok(model) => {
            info!(
                model = %model.name(),
                path = %config.path,
                manifest = %manifest_path.display(),
                "revenue model loaded"
            );
        }
        Err(e) => error!(path = %config.path, error = %e, "revenue model failed to load"),
    }
    result
}
