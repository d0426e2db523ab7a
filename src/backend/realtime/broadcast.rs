//! Per-room broadcast channels
//!
//! Each room gets its own `tokio::sync::broadcast` channel, created
//! lazily on first use. Senders are cached in a shared map so that
//! publishers and subscribers always meet on the same channel.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::broadcast;
use uuid::Uuid;

use crate::shared::RoomEvent;

/// Buffered events per room channel before slow receivers start lagging
const CHANNEL_CAPACITY: usize = 100;

/// Registry of per-room broadcast senders
///
/// Cloning is cheap; all clones share the same underlying map. A room's
/// channel exists from the first `sender` or `publish` call until
/// `cleanup_inactive_channels` removes it.
#[derive(Clone, Default)]
pub struct RoomBroadcasts {
    channels: Arc<Mutex<HashMap<Uuid, broadcast::Sender<RoomEvent>>>>,
}

impl RoomBroadcasts {
    pub fn new() -> Self {
        Self {
            channels: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Get or create the broadcast sender for a room
    pub fn sender(&self, room_id: Uuid) -> broadcast::Sender<RoomEvent> {
        let mut channels = self.channels.lock().unwrap();
        channels
            .entry(room_id)
            .or_insert_with(|| broadcast::channel(CHANNEL_CAPACITY).0)
            .clone()
    }

    /// Publish an event to a room's subscribers
    ///
    /// Returns the number of receivers the event reached. A publish with
    /// no subscribers is not an error; the event is simply dropped.
    pub fn publish(&self, room_id: Uuid, event: RoomEvent) -> usize {
        let sender = self.sender(room_id);
        match sender.send(event) {
            Ok(receiver_count) => receiver_count,
            Err(_) => 0,
        }
    }

    /// Drop channels that no longer have any receivers
    pub fn cleanup_inactive_channels(&self) {
        let mut channels = self.channels.lock().unwrap();
        channels.retain(|_, sender| sender.receiver_count() > 0);
    }

    /// Number of active subscribers on a room's channel
    pub fn subscriber_count(&self, room_id: Uuid) -> usize {
        let channels = self.channels.lock().unwrap();
        channels
            .get(&room_id)
            .map(|sender| sender.receiver_count())
            .unwrap_or(0)
    }
}
