//! Code-protected viewer for archived chat conversations.
//!
//! Serves a static browser viewer plus the JSON API it consumes. A
//! shared link carries a contact name, phone number, and a numeric
//! access code derived from the name; the API validates the code,
//! reads the conversation from the upstream Postgres store, and
//! reports each fetch to RabbitMQ on a best-effort basis.

mod config;
mod error;
mod routes;
mod service;
mod state;

use std::sync::Arc;

use database::Database;
use queue_notifier::{QueueConfig, QueueNotifier};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::config::Config;
use crate::service::ChatService;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;
    info!(addr = %config.addr, "Starting chat viewer server");

    // Connect to the row store
    let db = Database::connect(&config.database_url).await?;

    // Queue channel is best-effort: a failed first connect logs and
    // retries in the background without blocking startup.
    let notifier = QueueNotifier::new(QueueConfig {
        url: config.amqp_url.clone(),
        queue: config.amqp_queue.clone(),
        prefetch: config.amqp_prefetch,
    });
    notifier.ensure_connected().await;

    // Build application state
    let service = ChatService::new(Arc::new(db), notifier);
    let state = AppState::new(service);

    // Build router
    let app = routes::router(&config.static_dir)
        .layer(CorsLayer::permissive())
        .with_state(state);

    // Start server
    info!(addr = %config.addr, "Chat viewer listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
