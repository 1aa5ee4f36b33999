//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Viewer server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// Postgres connection string for the upstream row store.
    pub database_url: String,
    /// RabbitMQ broker URL.
    pub amqp_url: String,
    /// RabbitMQ queue name for fetch events.
    pub amqp_queue: String,
    /// RabbitMQ channel prefetch.
    pub amqp_prefetch: u16,
    /// Directory the browser viewer is served from.
    pub static_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `VIEWER_ADDR` | Server bind address | `0.0.0.0:5000` |
    /// | `POSTGRES_CONNECTION_STRING` | Row-store URL | (required) |
    /// | `RABBITMQ_URL` | Broker URL | (required) |
    /// | `RABBITMQ_QUEUE` | Fetch-event queue name | `default_quorum_queue` |
    /// | `RABBITMQ_PREFETCH` | Channel prefetch | `10` |
    /// | `STATIC_DIR` | Viewer assets directory | `static` |
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = env::var("VIEWER_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:5000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        let database_url = env::var("POSTGRES_CONNECTION_STRING")
            .map_err(|_| ConfigError::MissingDatabaseUrl)?;

        let amqp_url = env::var("RABBITMQ_URL").map_err(|_| ConfigError::MissingAmqpUrl)?;

        let amqp_queue = env::var("RABBITMQ_QUEUE")
            .unwrap_or_else(|_| "default_quorum_queue".to_string());

        let amqp_prefetch = match env::var("RABBITMQ_PREFETCH") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidPrefetch)?,
            Err(_) => 10,
        };

        let static_dir = env::var("STATIC_DIR")
            .unwrap_or_else(|_| "static".to_string())
            .into();

        Ok(Self {
            addr,
            database_url,
            amqp_url,
            amqp_queue,
            amqp_prefetch,
            static_dir,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid VIEWER_ADDR format")]
    InvalidAddr,

    #[error("POSTGRES_CONNECTION_STRING environment variable is required")]
    MissingDatabaseUrl,

    #[error("RABBITMQ_URL environment variable is required")]
    MissingAmqpUrl,

    #[error("Invalid RABBITMQ_PREFETCH value")]
    InvalidPrefetch,
}
