//! Conversation API routes.

use axum::extract::{Path, State};
use axum::Json;
use chat_core::DisplayMessage;
use serde::Serialize;

use crate::error::Result;
use crate::state::AppState;

/// Response body for a conversation fetch.
#[derive(Serialize)]
pub struct MessagesResponse {
    pub messages: Vec<DisplayMessage>,
}

/// Return the display messages for a shared conversation link.
pub async fn messages(
    State(state): State<AppState>,
    Path((name, phone_number, code)): Path<(String, String, String)>,
) -> Result<Json<MessagesResponse>> {
    let messages = state
        .service
        .fetch_messages(&name, &phone_number, &code)
        .await?;

    Ok(Json(MessagesResponse { messages }))
}
