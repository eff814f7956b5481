mod config;
mod labels;
mod pipeline;
mod providers;
mod server;
mod webhook;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use pipeline::LabelPipeline;
use server::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load config
    let config = config::load_config()?;

    // Wire the pipeline into the router
    let state = AppState {
        pipeline: Arc::new(LabelPipeline::from_config(&config)),
    };
    let app = server::build_router(state);

    // Serve
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(%addr, "Listening for webhooks");

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
