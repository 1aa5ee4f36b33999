//! Route handlers for the chat viewer.

pub mod chat;
pub mod health;

use std::path::Path;

use axum::routing::get;
use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

use crate::state::AppState;

/// Build the router with all routes.
///
/// The three-segment wildcard serves the viewer page unconditionally;
/// access control happens in the browser via the API call. Everything
/// else falls through to the static assets directory.
pub fn router(static_dir: &Path) -> Router<AppState> {
    Router::new()
        // API
        .route(
            "/api/chat/:name/:phone_number/:code/messages",
            get(chat::messages),
        )
        // Health check
        .route("/health", get(health::health))
        // Viewer page for shared links
        .route_service(
            "/:name/:phone_number/:code",
            ServeFile::new(static_dir.join("index.html")),
        )
        // Viewer assets (js/css)
        .fallback_service(ServeDir::new(static_dir))
}
