//! Core logic for the archived chat viewer.
//!
//! This crate is pure: the access-code scheme that gates a shared
//! conversation link, the payload transformer that reshapes vendor
//! message JSON for display, and the contact-address builder. No I/O,
//! no async — everything here is directly unit-testable.

pub mod access;
pub mod contact;
pub mod transform;

use serde::Serialize;
use serde_json::Value;

/// The client-facing representation of one stored message.
///
/// Built fresh per response; `content` is the stored payload after
/// tracking-parameter stripping and per-type normalization, and may be
/// `null` when the stored row had no payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayMessage {
    /// Timestamp in milliseconds (stored rows carry seconds).
    pub message_timestamp: i64,
    /// Whether the conversation owner sent this message.
    pub from_me: bool,
    /// Vendor type tag, e.g. `conversation`, `imageMessage`.
    pub message_type: String,
    /// Normalized payload; the viewer switches on `message_type` to
    /// pick a presentation template.
    pub content: Option<Value>,
}
