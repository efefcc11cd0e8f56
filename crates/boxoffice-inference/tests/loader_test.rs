use std::io::Write;

use boxoffice_core::config::ModelConfig;
use boxoffice_core::errors::ModelError;
use boxoffice_inference::{load_model, ModelManifest};

const MANIFEST: &str = r#"{
    "columns": ["year", "rating", "genres", "run_time_minutes", "budget"],
    "genre_categories": ["Action", "Drama"]
}"#;

#[test]
fn missing_model_file_fails_with_load_failed() {
    let dir = tempfile::tempdir().unwrap();
    let config = ModelConfig {
        path: dir.path().join("movie_revenue_predictor.onnx").display().to_string(),
        ..Default::default()
    };
    match load_model(&config) {
        Err(ModelError::LoadFailed { reason, .. }) => assert_eq!(reason, "model file not found"),
        Err(other) => panic!("expected LoadFailed, got {other:?}"),
        Ok(_) => panic!("expected LoadFailed, got a model"),
    }
}

#[test]
fn missing_manifest_fails_before_runtime_init() {
    let dir = tempfile::tempdir().unwrap();
    let model_path = dir.path().join("model.onnx");
    std::fs::write(&model_path, b"not really onnx").unwrap();

    let config = ModelConfig {
        path: model_path.display().to_string(),
        ..Default::default()
    };
    assert!(matches!(
        load_model(&config),
        Err(ModelError::ManifestInvalid { .. })
    ));
}

#[test]
fn mismatched_manifest_fails_with_schema_mismatch() {
    let dir = tempfile::tempdir().unwrap();
    let model_path = dir.path().join("model.onnx");
    std::fs::write(&model_path, b"not really onnx").unwrap();
    let mut manifest = std::fs::File::create(dir.path().join("model.json")).unwrap();
    manifest
        .write_all(MANIFEST.replace("\"genres\"", "\"genre\"").as_bytes())
        .unwrap();

    let config = ModelConfig {
        path: model_path.display().to_string(),
        ..Default::default()
    };
    assert!(matches!(
        load_model(&config),
        Err(ModelError::SchemaMismatch { .. })
    ));
}

#[test]
fn manifest_load_reports_file_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{").unwrap();
    match ModelManifest::load(&path) {
        Err(ModelError::ManifestInvalid { path: reported, .. }) => {
            assert!(reported.ends_with("broken.json"))
        }
        other => panic!("expected ManifestInvalid, got {other:?}"),
    }
}

#[test]
fn manifest_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.json");
    std::fs::write(&path, MANIFEST).unwrap();
    let manifest = ModelManifest::load(&path).unwrap();
    assert_eq!(manifest.genre_categories, vec!["Action", "Drama"]);
    assert!(manifest.name.is_none());
}
