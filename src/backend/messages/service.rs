//! Send and List Operations
//!
//! The message service validates input, enforces membership, maintains
//! the per-member read cursor, and hands stored messages to the delivery
//! notifier after commit.

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::error::ApiError;
use crate::backend::messages::store;
use crate::backend::realtime::broadcast::RoomBroadcasts;
use crate::backend::realtime::notifier;
use crate::backend::rooms::store as room_store;
use crate::backend::users::store as user_store;
use crate::shared::message::MAX_MESSAGE_LENGTH;
use crate::shared::pagination::MESSAGES_PER_PAGE;
use crate::shared::{ChatError, Message, Page, PageParams, SendMessageRequest};

fn validate_content(content: &str) -> Result<(), ChatError> {
    if content.trim().is_empty() {
        return Err(ChatError::invalid_input(
            "content",
            "Message content cannot be empty",
        ));
    }
    if content.chars().count() > MAX_MESSAGE_LENGTH {
        return Err(ChatError::invalid_input(
            "content",
            format!("Message content cannot exceed {} characters", MAX_MESSAGE_LENGTH),
        ));
    }
    Ok(())
}

/// Send a message into a room
///
/// The message row and the sender's read cursor advance in one
/// transaction. Delivery notification happens after commit and is
/// fire-and-forget: a publish with no subscribers never fails the send.
pub async fn send_message(
    pool: &SqlitePool,
    broadcasts: &RoomBroadcasts,
    room_id: Uuid,
    sender_id: Uuid,
    request: SendMessageRequest,
) -> Result<Message, ApiError> {
    room_store::get_room(pool, room_id)
        .await?
        .ok_or(ChatError::NotFound)?;

    if !room_store::is_member(pool, room_id, sender_id).await? {
        return Err(ChatError::Unauthorized.into());
    }

    validate_content(&request.content)?;

    let mut message = Message::compose(
        room_id,
        sender_id,
        request.content,
        request.message_type,
        request.metadata,
    );

    let mut tx = pool.begin().await?;
    store::insert_message(&mut tx, &message).await?;
    // Sending implies having read up to your own message
    room_store::mark_read_tx(&mut tx, room_id, sender_id, message.created_at).await?;
    tx.commit().await?;

    message.sender = user_store::get_user_by_id(pool, sender_id).await?;

    notifier::notify(broadcasts, &message);

    tracing::info!("Message {} stored in room {}", message.id, room_id);
    Ok(message)
}

/// List messages for a room, newest first
///
/// Members only. Reading a page advances the caller's read cursor after
/// the fetch.
pub async fn list_messages(
    pool: &SqlitePool,
    room_id: Uuid,
    user_id: Uuid,
    params: PageParams,
) -> Result<Page<Message>, ApiError> {
    room_store::get_room(pool, room_id)
        .await?
        .ok_or(ChatError::NotFound)?;

    if !room_store::is_member(pool, room_id, user_id).await? {
        return Err(ChatError::Unauthorized.into());
    }

    let request = params.normalize(MESSAGES_PER_PAGE);
    let messages = store::list_messages(pool, room_id, request.limit(), request.offset()).await?;

    room_store::mark_read(pool, room_id, user_id, Utc::now()).await?;

    Ok(Page::new(messages, request))
}
