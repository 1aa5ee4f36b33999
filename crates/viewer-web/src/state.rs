//! Application state shared across handlers.

use crate::service::ChatService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Conversation lookup service.
    pub service: ChatService,
}

impl AppState {
    /// Create new application state.
    pub fn new(service: ChatService) -> Self {
        Self { service }
    }
}
