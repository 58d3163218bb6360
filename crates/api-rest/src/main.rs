//! Participant registry API server.

use anyhow::Context;
use participant_registry_api_rest::{create_app, ApiConfig};
use participant_registry_common::telemetry::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::from_env()?;
    init_tracing(false, &config.log_level)?;

    let address = config.server_address();
    let app = create_app(config);

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;

    tracing::info!(%address, "Participant registry API listening");

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
