//! Message Data Structure
//!
//! Messages are immutable once stored. Their canonical order is newest
//! first: `created_at` descending, then `id` descending. Ids are
//! time-ordered UUIDv7, so the tie-break within one timestamp follows
//! insertion order.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::user::UserProfile;

/// Maximum message content length, counted in characters
pub const MAX_MESSAGE_LENGTH: usize = 5000;

/// Message type used when the sender does not specify one
pub const DEFAULT_MESSAGE_TYPE: &str = "text";

/// A message stored in a room
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub id: Uuid,
    pub room_id: Uuid,
    pub sender_id: Uuid,
    pub content: String,
    /// Free-form type tag, defaults to `"text"`
    pub message_type: String,
    /// Opaque payload attached by the sender
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Sender profile, populated when the message is returned from a send
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender: Option<UserProfile>,
}

impl Message {
    /// Build a new message ready for storage
    pub fn compose(
        room_id: Uuid,
        sender_id: Uuid,
        content: String,
        message_type: Option<String>,
        metadata: Option<serde_json::Value>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            room_id,
            sender_id,
            content,
            message_type: message_type.unwrap_or_else(|| DEFAULT_MESSAGE_TYPE.to_string()),
            metadata,
            created_at: now,
            updated_at: now,
            sender: None,
        }
    }
}

/// Request to send a new message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessageRequest {
    pub content: String,
    pub message_type: Option<String>,
    pub metadata: Option<serde_json::Value>,
}
