//! Error types for the viewer API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Errors a conversation fetch can produce.
///
/// The response bodies are part of the viewer's contract and stay in
/// Portuguese, matching the audience of the shared links.
#[derive(Debug, Error)]
pub enum ChatError {
    /// Supplied code does not match the one derived from the name.
    #[error("access code mismatch")]
    AccessDenied,

    /// No instance exists for the requested name.
    #[error("no instance for name")]
    NotFound,

    /// Row-store failure.
    #[error("database error: {0}")]
    Database(#[from] database::DatabaseError),
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ChatError::AccessDenied => (StatusCode::FORBIDDEN, "Acesso negado"),
            ChatError::NotFound => (StatusCode::NOT_FOUND, "Conversa não encontrada"),
            ChatError::Database(err) => {
                tracing::error!("Database error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Erro interno do servidor")
            }
        };

        let body = serde_json::json!({
            "message": message
        });

        (status, Json(body)).into_response()
    }
}

/// Result type for viewer operations.
pub type Result<T> = std::result::Result<T, ChatError>;
