//! Startup path: a missing artifact leaves the server up with `/predict` disabled.

use boxoffice_core::config::ModelConfig;
use boxoffice_inference::load_model;
use boxoffice_prediction::{ModelState, PredictionEngine};
use boxoffice_server::{build_router, serve};
use reqwest::StatusCode;
use serde_json::json;
use tokio::net::TcpListener;

#[tokio::test]
async fn missing_artifact_serves_500_on_predict() {
    let dir = tempfile::tempdir().unwrap();
    let config = ModelConfig {
        path: dir.path().join("movie_revenue_predictor.onnx").display().to_string(),
        ..Default::default()
    };
    let state = ModelState::from_load(load_model(&config));
    assert!(matches!(state, ModelState::Unavailable { .. }));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = tokio::sync::oneshot::channel::<()>();
    let server = tokio::spawn(serve(
        listener,
        build_router(PredictionEngine::new(state)),
        async move {
            let _ = rx.await;
        },
    ));

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/predict"))
        .json(&json!({"year": 2015, "rating": 7.2, "genre": "Action", "run_time": 118, "budget": 1}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    tx.send(()).unwrap();
    server.await.unwrap().unwrap();
}
