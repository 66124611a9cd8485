use std::path::Path;

use anyhow::{Context, anyhow};
use axum::http::HeaderValue;
use serde::Deserialize;
use tower_http::cors::{AllowOrigin, CorsLayer};

type Result<T> = anyhow::Result<T>;

pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// Overridden by the `DATABASE_URL` environment variable when set.
    #[serde(default)]
    pub database_url: Option<String>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Empty means any origin is allowed.
    #[serde(default)]
    pub cors_allowed_origins: Vec<String>,
    #[serde(default = "default_announcement_poster")]
    pub announcement_poster: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            database_url: None,
            max_connections: default_max_connections(),
            cors_allowed_origins: Vec::new(),
            announcement_poster: default_announcement_poster(),
        }
    }
}

impl ServerConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Like [`ServerConfig::from_file`], but a missing file yields the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("failed to deserialize server config")
    }

    pub fn database_url(&self) -> Result<String> {
        std::env::var(DATABASE_URL_ENV)
            .ok()
            .or_else(|| self.database_url.clone())
            .ok_or_else(|| anyhow!("{DATABASE_URL_ENV} is not set and no database_url is configured"))
    }

    pub fn cors_layer(&self) -> Result<CorsLayer> {
        if self.cors_allowed_origins.is_empty() {
            return Ok(CorsLayer::permissive());
        }

        let origins = self
            .cors_allowed_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin)
                    .with_context(|| format!("invalid CORS origin: {origin}"))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(tower_http::cors::Any)
            .allow_headers(tower_http::cors::Any))
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_max_connections() -> u32 {
    10
}

fn default_announcement_poster() -> String {
    "Admin".to_string()
}
