//! Delivery Event Types
//!
//! Events published on per-room delivery channels. Subscribers receive
//! them as they are broadcast; delivery is fire-and-forget and ordering
//! across rooms is best-effort.
use serde::{Deserialize, Serialize};

use crate::shared::message::Message;

/// Event name for a newly stored message
pub const MESSAGE_SENT: &str = "message.sent";

/// An event broadcast to the subscribers of a room channel
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoomEvent {
    /// Channel the event was published on, e.g. `room.<room_id>`
    pub channel: String,
    /// Event name, e.g. `message.sent`
    pub event: String,
    /// Event payload (JSON-serializable data)
    pub payload: serde_json::Value,
    /// Timestamp when the event was published
    pub timestamp: String,
}

impl RoomEvent {
    /// Create a new event
    pub fn new(channel: String, event: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            channel,
            event: event.into(),
            payload,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Create a `message.sent` event carrying the stored message
    pub fn message_sent(channel: String, message: &Message) -> Self {
        let payload = serde_json::to_value(message).unwrap_or(serde_json::Value::Null);
        Self::new(channel, MESSAGE_SENT, payload)
    }
}
