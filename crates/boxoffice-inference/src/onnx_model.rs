//! ONNX Runtime revenue model.
//!
//! Loads a regression model exported to ONNX via the `ort` crate (v2). The
//! model takes one `f32` tensor of shape `[1, width]` and yields a single
//! revenue value.

use std::path::Path;
use std::sync::Mutex;

use boxoffice_core::errors::ModelError;
use boxoffice_core::models::FeatureRow;
use boxoffice_core::traits::IRevenueModel;
use ort::session::Session;
use ort::value::Tensor;
use tracing::debug;

use crate::encoder::FeatureEncoder;
use crate::manifest::ModelManifest;

/// ONNX-based revenue model.
pub struct OnnxRevenueModel {
    /// `Session::run` takes `&mut self`, so calls are serialized.
    session: Mutex<Session>,
    encoder: FeatureEncoder,
    model_name: String,
}

impl OnnxRevenueModel {
    /// Load the model and its manifest.
    ///
    /// # Errors
    /// `LoadFailed` if the model file is absent or ONNX Runtime rejects it;
    /// manifest errors as returned by [`ModelManifest::load`].
    pub fn load(
        model_path: &Path,
        manifest_path: &Path,
        intra_threads: usize,
    ) -> Result<Self, ModelError> {
        let display = model_path.display().to_string();
        if !model_path.exists() {
            return Err(ModelError::LoadFailed {
                path: display,
                reason: "model file not found".to_string(),
            });
        }

        let manifest = ModelManifest::load(manifest_path)?;
        let encoder = FeatureEncoder::new(&manifest);

        let session = Session::builder()
            .map_err(load_failed(&display))?
            .with_intra_threads(intra_threads)
            .map_err(load_failed(&display))?
            .commit_from_file(model_path)
            .map_err(load_failed(&display))?;

        let model_name = manifest.name.clone().unwrap_or_else(|| {
            model_path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("onnx-model")
                .to_string()
        });

        debug!(model = %model_name, width = encoder.width(), "ONNX model loaded");

        Ok(Self {
            session: Mutex::new(session),
            encoder,
            model_name,
        })
    }

    /// Run the session on one encoded row.
    fn infer(&self, features: Vec<f32>) -> Result<f64, ModelError> {
        let width = features.len();
        let input = Tensor::from_array((vec![1i64, width as i64], features)).map_err(|e| {
            ModelError::InferenceFailed {
                reason: format!("tensor creation error: {e}"),
            }
        })?;

        let mut session = self.session.lock().map_err(|e| ModelError::InferenceFailed {
            reason: format!("session lock poisoned: {e}"),
        })?;

        let outputs = session
            .run(ort::inputs![input])
            .map_err(|e| ModelError::InferenceFailed {
                reason: e.to_string(),
            })?;

        // Regressors export a single `[1, 1]` output.
        let (_name, output) = outputs.iter().next().ok_or_else(|| ModelError::InferenceFailed {
            reason: "no output tensor".to_string(),
        })?;

        let first = match output.try_extract_tensor::<f32>() {
            Ok((_, data)) => data.first().map(|&v| v as f64),
            Err(_) => {
                let (_, data) =
                    output
                        .try_extract_tensor::<f64>()
                        .map_err(|e| ModelError::InferenceFailed {
                            reason: format!("tensor extraction failed: {e}"),
                        })?;
                data.first().copied()
            }
        };

        first.ok_or_else(|| ModelError::InferenceFailed {
            reason: "empty output tensor".to_string(),
        })
    }
}

fn load_failed<E: std::fmt::Display>(path: &str) -> impl Fn(E) -> ModelError + '_ {
    move |e| ModelError::LoadFailed {
        path: path.to_string(),
        reason: e.to_string(),
    }
}

impl IRevenueModel for OnnxRevenueModel {
    fn predict(&self, row: &FeatureRow) -> Result<f64, ModelError> {
        let features = self.encoder.encode(row)?;
        self.infer(features)
    }

    fn name(&self) -> &str {
        &self.model_name
    }
}
