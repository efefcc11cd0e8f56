//! Test fixtures for the box-office prediction service.
//!
//! Provides stub revenue models that stand in for the ONNX artifact, and
//! typed loading of the golden request/response files under `test-fixtures/`.

pub mod models;

use std::collections::HashMap;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Deserialize;

pub use models::{FailingModel, FixedRevenueModel, GenreRevenueModel};

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("golden").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    files.sort();
    files
}

/// One golden request/response case.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenPrediction {
    pub description: String,
    /// Revenue the stub model returns per genre.
    pub revenue_by_genre: HashMap<String, f64>,
    /// Raw request body.
    pub request: serde_json::Value,
    /// Expected HTTP status.
    pub http_status: u16,
    /// Exact success body, for 200 cases.
    #[serde(default)]
    pub expected: Option<serde_json::Value>,
    /// Substring of the `error` field, for failure cases.
    #[serde(default)]
    pub error_contains: Option<String>,
}

impl GoldenPrediction {
    /// Stub model answering this case.
    pub fn model(&self) -> GenreRevenueModel {
        GenreRevenueModel::new(self.revenue_by_genre.clone())
    }
}

/// Load every golden prediction case.
pub fn golden_predictions() -> Vec<(String, GoldenPrediction)> {
    list_fixtures("golden/predictions")
        .into_iter()
        .map(|path| {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let case = load_fixture(&format!("golden/predictions/{name}"));
            (name, case)
        })
        .collect()
}
