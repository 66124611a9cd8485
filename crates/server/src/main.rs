use std::sync::Arc;

use anyhow::Context;
use campus_server::api::{AppState, create_app};
use campus_server::config::ServerConfig;
use campus_server::db;
use tracing::info;
use tracing_subscriber::EnvFilter;

const CONFIG_PATH_ENV: &str = "CAMPUS_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "campus.toml";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let config_path =
        std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    info!(path = %config_path, "loading server config");
    let config = ServerConfig::load_or_default(&config_path)
        .with_context(|| format!("failed to load server config from {config_path}"))?;

    let database_url = config.database_url()?;
    let db = db::init_pool_and_migrate(&database_url, config.max_connections)
        .await
        .context("failed to initialize database")?;

    let state = Arc::new(AppState::new(db, config.announcement_poster.clone()));
    let app = create_app(state, config.cors_layer()?);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!(addr = %config.bind_addr, "campus server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received, stopping server");
    }
}

fn init_tracing() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    Ok(())
}
