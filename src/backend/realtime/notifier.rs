//! Delivery notifier
//!
//! Bridges the message service and the broadcast layer. Knows the
//! channel naming convention and the subscription authorization rule;
//! everything else is delegated.

use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::realtime::broadcast::RoomBroadcasts;
use crate::backend::rooms::store as room_store;
use crate::shared::{Message, RoomEvent};

/// Broadcast channel name for a room
pub fn channel_name(room_id: Uuid) -> String {
    format!("room.{}", room_id)
}

/// Whether a user may subscribe to a room's event channel
///
/// Only recorded members may listen. Public visibility grants join
/// rights, not listen rights, so the membership row is checked directly.
pub async fn authorize_subscribe(
    pool: &SqlitePool,
    room_id: Uuid,
    user_id: Uuid,
) -> Result<bool, sqlx::Error> {
    room_store::is_member(pool, room_id, user_id).await
}

/// Publish a stored message to the room's subscribers
///
/// Fire-and-forget: the caller has already committed, so a delivery
/// failure never affects the send outcome.
pub fn notify(broadcasts: &RoomBroadcasts, message: &Message) {
    let event = RoomEvent::message_sent(channel_name(message.room_id), message);
    let delivered = broadcasts.publish(message.room_id, event);
    tracing::debug!(
        "Delivered message {} to {} subscribers on {}",
        message.id,
        delivered,
        channel_name(message.room_id)
    );
}
