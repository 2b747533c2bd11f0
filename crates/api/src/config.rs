//! Environment configuration, read once at startup.

use tracing::warn;

const DEFAULT_DATABASE_URL: &str = "sqlite://telemetry.db";
const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";

/// Process configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Database connection string (`DATABASE_URL`).
    pub database_url: String,
    /// Listen address (`BIND_ADDRESS`).
    pub bind_address: String,
}

impl Config {
    /// Read configuration from the environment, falling back to local
    /// development defaults.
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
            warn!("DATABASE_URL not set, using {}", DEFAULT_DATABASE_URL);
            DEFAULT_DATABASE_URL.to_string()
        });

        let bind_address = std::env::var("BIND_ADDRESS")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());

        Self {
            database_url,
            bind_address,
        }
    }
}
