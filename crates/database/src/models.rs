//! Row types read from the upstream schema.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

/// An owner/tenant record a conversation belongs to.
///
/// Created by the upstream messaging system at instance registration;
/// read-only here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Instance {
    /// Opaque instance identifier.
    pub id: String,
    /// Owner contact identifier (JID).
    pub owner_jid: String,
    /// Display name the shared link is addressed by.
    pub name: String,
}

/// One stored message row, as written by the upstream system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct StoredMessage {
    /// Second-precision timestamp.
    pub message_timestamp: i64,
    /// Routing key object; carries at least `remoteJid` and `fromMe`.
    pub key: Value,
    /// Vendor payload; may be NULL for bookkeeping rows.
    pub message: Option<Value>,
    /// Vendor type tag, e.g. `conversation`, `locationMessage`.
    pub message_type: String,
}

impl StoredMessage {
    /// Whether the conversation owner sent this message. Missing or
    /// non-boolean `fromMe` reads as false.
    pub fn from_me(&self) -> bool {
        self.key
            .get("fromMe")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_me_defaults_to_false() {
        let row = StoredMessage {
            message_timestamp: 0,
            key: json!({"remoteJid": "x@s.whatsapp.net"}),
            message: None,
            message_type: "conversation".to_string(),
        };
        assert!(!row.from_me());

        let row = StoredMessage {
            key: json!({"fromMe": "yes"}),
            ..row
        };
        assert!(!row.from_me());
    }

    #[test]
    fn from_me_reads_boolean() {
        let row = StoredMessage {
            message_timestamp: 0,
            key: json!({"fromMe": true}),
            message: None,
            message_type: "conversation".to_string(),
        };
        assert!(row.from_me());
    }
}
