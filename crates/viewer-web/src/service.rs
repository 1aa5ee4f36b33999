//! Conversation lookup orchestration.
//!
//! The service validates the access code, resolves the owning
//! instance, loads the stored messages for the contact, reshapes each
//! row for display, and reports the fetch to the queue. The row store
//! sits behind a trait so the HTTP surface is testable without
//! Postgres.

use std::sync::Arc;

use async_trait::async_trait;
use chat_core::{access, contact, transform, DisplayMessage};
use database::{instance, message, Database, DatabaseError, Instance, StoredMessage};
use queue_notifier::{FetchEvent, QueueNotifier};
use tracing::{info, warn};

use crate::error::{ChatError, Result};

/// Read access to the conversation row store.
#[async_trait]
pub trait ConversationStore: Send + Sync {
    /// Resolve an instance by exact display name.
    async fn instance_by_name(
        &self,
        name: &str,
    ) -> std::result::Result<Option<Instance>, DatabaseError>;

    /// Load every message between an instance and a contact, newest
    /// first.
    async fn messages_for_contact(
        &self,
        instance_id: &str,
        remote_jid: &str,
    ) -> std::result::Result<Vec<StoredMessage>, DatabaseError>;
}

#[async_trait]
impl ConversationStore for Database {
    async fn instance_by_name(
        &self,
        name: &str,
    ) -> std::result::Result<Option<Instance>, DatabaseError> {
        instance::find_by_name(self.pool(), name).await
    }

    async fn messages_for_contact(
        &self,
        instance_id: &str,
        remote_jid: &str,
    ) -> std::result::Result<Vec<StoredMessage>, DatabaseError> {
        message::list_for_contact(self.pool(), instance_id, remote_jid).await
    }
}

/// Conversation lookup service.
#[derive(Clone)]
pub struct ChatService {
    store: Arc<dyn ConversationStore>,
    notifier: QueueNotifier,
}

impl ChatService {
    /// Create a service over a store and a queue notifier.
    pub fn new(store: Arc<dyn ConversationStore>, notifier: QueueNotifier) -> Self {
        Self { store, notifier }
    }

    /// Fetch the display messages for a shared conversation link.
    ///
    /// The supplied code is checked twice: against the requested name
    /// before any store access, and against the canonical stored name
    /// after the instance resolves, so normalization drift between the
    /// link and the store cannot widen access. Messages come back in
    /// store order (newest first); the service never re-sorts.
    pub async fn fetch_messages(
        &self,
        name: &str,
        phone_number: &str,
        code: &str,
    ) -> Result<Vec<DisplayMessage>> {
        info!(name, "Validating access code");
        if !access::validate_code(name, code) {
            warn!(name, "Invalid access code supplied");
            return Err(ChatError::AccessDenied);
        }

        let instance = self
            .store
            .instance_by_name(name)
            .await?
            .ok_or(ChatError::NotFound)?;

        if !access::validate_code(&instance.name, code) {
            warn!(name, "Access code does not match canonical name");
            return Err(ChatError::AccessDenied);
        }

        let remote_jid = contact::contact_address(phone_number);
        let rows = self
            .store
            .messages_for_contact(&instance.id, &remote_jid)
            .await?;

        if rows.is_empty() {
            warn!(
                instance_id = %instance.id,
                remote_jid = %remote_jid,
                "No messages found for contact"
            );
        }

        let messages: Vec<DisplayMessage> = rows.into_iter().map(display_message).collect();
        info!(name, count = messages.len(), "Conversation fetched");

        self.notify_fetch(name, phone_number, messages.len()).await;

        Ok(messages)
    }

    /// Report a completed fetch to the queue. Best effort: failures
    /// are logged and never surface to the request.
    async fn notify_fetch(&self, name: &str, phone_number: &str, message_count: usize) {
        if !self.notifier.is_connected().await {
            warn!("Queue channel down before publish; attempting reconnect");
            self.notifier.ensure_connected().await;
        }

        let event = FetchEvent::messages_fetched(name, phone_number, message_count);
        if let Err(err) = self.notifier.publish(&event).await {
            warn!(error = %err, "Fetch event publish failed");
        }
    }
}

/// Shape one stored row for display: strip tracking parameters,
/// normalize by type, convert the timestamp to milliseconds.
fn display_message(row: StoredMessage) -> DisplayMessage {
    let from_me = row.from_me();
    let content = transform::normalize(
        &row.message_type,
        row.message.map(transform::strip_tracking_params),
    );

    DisplayMessage {
        message_timestamp: row.message_timestamp * 1000,
        from_me,
        message_type: row.message_type,
        content,
    }
}
