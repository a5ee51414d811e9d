use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tenant_rights_backend::config::{API_KEY_VAR, Settings};
use tenant_rights_backend::routes;
use tenant_rights_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Settings::from_env().context("invalid configuration")?;
    if settings.gemini.api_key.is_none() {
        warn!("{API_KEY_VAR} is not set; chat requests will fail until it is configured");
    }

    let state = Arc::new(AppState::from_settings(&settings).context("failed to build Gemini client")?);
    let app = routes::create_router().with_state(state);

    let listener = tokio::net::TcpListener::bind(settings.bind_target())
        .await
        .with_context(|| format!("failed to bind {}:{}", settings.host, settings.port))?;
    let addr = listener.local_addr()?;

    info!(model = %settings.gemini.model, "{} running at http://{addr}", routes::SERVICE_NAME);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {e}");
    }
    info!("shutting down");
}
