//! Model manifest: the contract between the training process and this service.

use std::collections::HashSet;
use std::path::Path;

use boxoffice_core::constants::{FEATURE_COLUMNS, GENRE_COLUMN};
use boxoffice_core::errors::ModelError;
use serde::{Deserialize, Serialize};

/// JSON sidecar describing how the model was fit.
///
/// ```json
/// {
///   "name": "movie_revenue_predictor",
///   "columns": ["year", "rating", "genres", "run_time_minutes", "budget"],
///   "genre_categories": ["Action", "Comedy", "Drama"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelManifest {
    /// Display name. Defaults to the model file stem.
    #[serde(default)]
    pub name: Option<String>,
    /// Trained feature columns, in training order.
    pub columns: Vec<String>,
    /// Genre labels seen during training, in one-hot order.
    pub genre_categories: Vec<String>,
}

impl ModelManifest {
    /// Read and validate a manifest file.
    ///
    /// # Errors
    /// `ManifestInvalid` if unreadable or malformed, `SchemaMismatch` if the
    /// columns differ from the service's feature schema.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let content = std::fs::read_to_string(path).map_err(|e| ModelError::ManifestInvalid {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let manifest = Self::from_json(&content).map_err(|e| match e {
            ModelError::ManifestInvalid { reason, .. } => ModelError::ManifestInvalid {
                path: path.display().to_string(),
                reason,
            },
            other => other,
        })?;
        Ok(manifest)
    }

    /// Parse and validate a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let manifest: Self =
            serde_json::from_str(json).map_err(|e| ModelError::ManifestInvalid {
                path: "<string>".to_string(),
                reason: e.to_string(),
            })?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Check the manifest against the service's feature schema.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.columns.iter().map(String::as_str).ne(FEATURE_COLUMNS.iter().copied()) {
            return Err(ModelError::SchemaMismatch {
                expected: self.columns.join(", "),
                actual: FEATURE_COLUMNS.join(", "),
            });
        }
        if self.genre_categories.is_empty() {
            return Err(ModelError::ManifestInvalid {
                path: "<manifest>".to_string(),
                reason: format!("no categories for column {GENRE_COLUMN}"),
            });
        }
        let mut seen = HashSet::new();
        if let Some(dup) = self.genre_categories.iter().find(|c| !seen.insert(c.as_str())) {
            return Err(ModelError::ManifestInvalid {
                path: "<manifest>".to_string(),
                reason: format!("duplicate category {dup:?} for column {GENRE_COLUMN}"),
            });
        }
        Ok(())
    }
}
