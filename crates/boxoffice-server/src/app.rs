//! Router assembly and the serve loop.

use std::future::Future;

use axum::routing::{get, post};
use axum::Router;
use boxoffice_prediction::PredictionEngine;
use tokio::net::TcpListener;

use crate::routes;

/// Shared handler state. The engine holds the read-only model handle.
#[derive(Debug, Clone)]
pub struct AppState {
    pub engine: PredictionEngine,
}

/// Build the service router around `engine`.
pub fn build_router(engine: PredictionEngine) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/predict", post(routes::predict))
        .route("/health", get(routes::health))
        .fallback(routes::not_found)
        .with_state(AppState { engine })
}

/// Serve `router` on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
}
