use anyhow::Context;
use boxoffice_core::config::BoxofficeConfig;
use boxoffice_inference::load_model;
use boxoffice_observability::{init_tracing, model_load_span};
use boxoffice_prediction::{ModelState, PredictionEngine};
use boxoffice_server::{build_router, serve};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = BoxofficeConfig::load().context("loading configuration")?;
    init_tracing(&config.observability);

    let state = {
        let _span = model_load_span!(config.model.path).entered();
        ModelState::from_load(load_model(&config.model))
    };
    if let ModelState::Unavailable { reason } = &state {
        warn!(%reason, "serving without a model; /predict will answer 500");
    }
    let engine = PredictionEngine::new(state);

    let address = config.server.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("binding {address}"))?;
    info!(
        address = %listener.local_addr()?,
        production = config.server.production,
        "listening"
    );

    serve(listener, build_router(engine), shutdown_signal()).await?;
    info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "could not listen for ctrl-c; shutting down");
    }
}
