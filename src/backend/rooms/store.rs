//! Database operations for rooms and memberships
//!
//! All writes that must be atomic take a transaction handle; reads and
//! single-statement writes take the pool. Domain mapping of database
//! errors (unique violations in particular) happens in the service layer.

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, Sqlite, SqlitePool, Transaction};
use uuid::Uuid;

use crate::shared::{Role, Room, RoomMember, RoomMemberProfile, UserProfile, Visibility};

fn room_from_row(row: &SqliteRow) -> Room {
    Room {
        id: row.get("id"),
        name: row.get("name"),
        description: row.get("description"),
        slug: row.get("slug"),
        // The schema CHECK constraint keeps this parseable; fail closed
        visibility: Visibility::parse(row.get::<String, _>("visibility").as_str())
            .unwrap_or(Visibility::Private),
        created_by: row.get("created_by"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

fn member_from_row(row: &SqliteRow) -> RoomMember {
    RoomMember {
        room_id: row.get("room_id"),
        user_id: row.get("user_id"),
        role: Role::parse(row.get::<String, _>("role").as_str()).unwrap_or(Role::Member),
        joined_at: row.get("joined_at"),
        last_read_at: row.get("last_read_at"),
    }
}

/// Insert a room row
pub async fn insert_room(
    tx: &mut Transaction<'_, Sqlite>,
    room: &Room,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO rooms (id, name, description, slug, visibility, created_by, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(room.id)
    .bind(&room.name)
    .bind(&room.description)
    .bind(&room.slug)
    .bind(room.visibility.as_str())
    .bind(room.created_by)
    .bind(room.created_at)
    .bind(room.updated_at)
    .execute(&mut **tx)
    .await?;

    Ok(())
}

/// Insert a membership row
///
/// The composite primary key on (room_id, user_id) makes the second of
/// two concurrent inserts fail with a unique violation.
pub async fn insert_member(
    tx: &mut Transaction<'_, Sqlite>,
    member: &RoomMember,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO room_members (room_id, user_id, role, joined_at, last_read_at)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(member.room_id)
    .bind(member.user_id)
    .bind(member.role.as_str())
    .bind(member.joined_at)
    .bind(member.last_read_at)
    .execute(&mut **tx)
    .await?;

    Ok(())
}

/// Get a room by ID
pub async fn get_room(pool: &SqlitePool, room_id: Uuid) -> Result<Option<Room>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT id, name, description, slug, visibility, created_by, created_at, updated_at
        FROM rooms
        WHERE id = ?
        "#,
    )
    .bind(room_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| room_from_row(&r)))
}

/// Get a room by slug
pub async fn get_room_by_slug(pool: &SqlitePool, slug: &str) -> Result<Option<Room>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT id, name, description, slug, visibility, created_by, created_at, updated_at
        FROM rooms
        WHERE slug = ?
        "#,
    )
    .bind(slug)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| room_from_row(&r)))
}

/// Delete a room
///
/// Memberships and messages cascade at the schema level. Returns whether
/// a row was deleted.
pub async fn delete_room(pool: &SqlitePool, room_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM rooms WHERE id = ?")
        .bind(room_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Remove a membership row, returning whether it existed
pub async fn remove_member(
    pool: &SqlitePool,
    room_id: Uuid,
    user_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM room_members WHERE room_id = ? AND user_id = ?")
        .bind(room_id)
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Check if a user is a member of a room
pub async fn is_member(
    pool: &SqlitePool,
    room_id: Uuid,
    user_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT COUNT(*) as count
        FROM room_members
        WHERE room_id = ? AND user_id = ?
        "#,
    )
    .bind(room_id)
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    let count: i64 = row.get("count");
    Ok(count > 0)
}

/// Get a user's membership in a room
pub async fn get_membership(
    pool: &SqlitePool,
    room_id: Uuid,
    user_id: Uuid,
) -> Result<Option<RoomMember>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT room_id, user_id, role, joined_at, last_read_at
        FROM room_members
        WHERE room_id = ? AND user_id = ?
        "#,
    )
    .bind(room_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| member_from_row(&r)))
}

/// List the members of a room joined with their profiles
pub async fn list_members(
    pool: &SqlitePool,
    room_id: Uuid,
) -> Result<Vec<RoomMemberProfile>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT m.user_id, m.role, m.joined_at, m.last_read_at, u.username
        FROM room_members m
        JOIN users u ON u.id = m.user_id
        WHERE m.room_id = ?
        ORDER BY m.joined_at ASC
        "#,
    )
    .bind(room_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| RoomMemberProfile {
            user: UserProfile {
                id: row.get("user_id"),
                username: row.get("username"),
            },
            role: Role::parse(row.get::<String, _>("role").as_str()).unwrap_or(Role::Member),
            joined_at: row.get("joined_at"),
            last_read_at: row.get("last_read_at"),
        })
        .collect())
}

/// List public rooms, newest first
pub async fn list_public_rooms(
    pool: &SqlitePool,
    limit: i64,
    offset: i64,
) -> Result<Vec<Room>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT id, name, description, slug, visibility, created_by, created_at, updated_at
        FROM rooms
        WHERE visibility = 'public'
        ORDER BY created_at DESC, id DESC
        LIMIT ? OFFSET ?
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(room_from_row).collect())
}

/// List the rooms a user belongs to, newest first
pub async fn list_member_rooms(
    pool: &SqlitePool,
    user_id: Uuid,
    limit: i64,
    offset: i64,
) -> Result<Vec<Room>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT r.id, r.name, r.description, r.slug, r.visibility, r.created_by, r.created_at, r.updated_at
        FROM rooms r
        JOIN room_members m ON m.room_id = r.id
        WHERE m.user_id = ?
        ORDER BY r.created_at DESC, r.id DESC
        LIMIT ? OFFSET ?
        "#,
    )
    .bind(user_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(room_from_row).collect())
}

/// Advance a member's read cursor
pub async fn mark_read(
    pool: &SqlitePool,
    room_id: Uuid,
    user_id: Uuid,
    at: DateTime<Utc>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE room_members
        SET last_read_at = ?
        WHERE room_id = ? AND user_id = ?
        "#,
    )
    .bind(at)
    .bind(room_id)
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Advance a member's read cursor inside a transaction
pub async fn mark_read_tx(
    tx: &mut Transaction<'_, Sqlite>,
    room_id: Uuid,
    user_id: Uuid,
    at: DateTime<Utc>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE room_members
        SET last_read_at = ?
        WHERE room_id = ? AND user_id = ?
        "#,
    )
    .bind(at)
    .bind(room_id)
    .bind(user_id)
    .execute(&mut **tx)
    .await?;

    Ok(())
}
