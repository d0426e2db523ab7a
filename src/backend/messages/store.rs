//! Database operations for messages
//!
//! Messages are append-only; there is no update path. Metadata is stored
//! as JSON text and parsed back on read.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, Sqlite, SqlitePool, Transaction};
use uuid::Uuid;

use crate::shared::Message;

fn message_from_row(row: &SqliteRow) -> Message {
    let metadata = row
        .get::<Option<String>, _>("metadata")
        .and_then(|raw| serde_json::from_str(&raw).ok());

    Message {
        id: row.get("id"),
        room_id: row.get("room_id"),
        sender_id: row.get("sender_id"),
        content: row.get("content"),
        message_type: row.get("message_type"),
        metadata,
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
        sender: None,
    }
}

/// Insert a message row
pub async fn insert_message(
    tx: &mut Transaction<'_, Sqlite>,
    message: &Message,
) -> Result<(), sqlx::Error> {
    let metadata = message
        .metadata
        .as_ref()
        .map(|value| value.to_string());

    sqlx::query(
        r#"
        INSERT INTO messages (id, room_id, sender_id, content, message_type, metadata, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(message.id)
    .bind(message.room_id)
    .bind(message.sender_id)
    .bind(&message.content)
    .bind(&message.message_type)
    .bind(metadata)
    .bind(message.created_at)
    .bind(message.updated_at)
    .execute(&mut **tx)
    .await?;

    Ok(())
}

/// List messages for a room, newest first
pub async fn list_messages(
    pool: &SqlitePool,
    room_id: Uuid,
    limit: i64,
    offset: i64,
) -> Result<Vec<Message>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT id, room_id, sender_id, content, message_type, metadata, created_at, updated_at
        FROM messages
        WHERE room_id = ?
        ORDER BY created_at DESC, id DESC
        LIMIT ? OFFSET ?
        "#,
    )
    .bind(room_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(message_from_row).collect())
}

/// Count the messages stored for a room
pub async fn count_messages(pool: &SqlitePool, room_id: Uuid) -> Result<i64, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT COUNT(*) as count
        FROM messages
        WHERE room_id = ?
        "#,
    )
    .bind(room_id)
    .fetch_one(pool)
    .await?;

    Ok(row.get("count"))
}
