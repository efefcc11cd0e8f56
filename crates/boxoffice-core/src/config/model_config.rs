use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Revenue model artifact configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Path to the ONNX model file.
    pub path: String,
    /// Path to the model manifest. Defaults to `<stem>.json` beside the model.
    pub manifest_path: Option<String>,
    /// ONNX Runtime intra-op threads.
    pub intra_threads: usize,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: defaults::DEFAULT_MODEL_PATH.to_string(),
            manifest_path: None,
            intra_threads: defaults::DEFAULT_INTRA_THREADS,
        }
    }
}

impl ModelConfig {
    /// Resolved manifest location.
    pub fn manifest_path(&self) -> PathBuf {
        match self.manifest_path.as_deref().filter(|p| !p.is_empty()) {
            Some(path) => PathBuf::from(path),
            None => PathBuf::from(&self.path).with_extension("json"),
        }
    }
}
