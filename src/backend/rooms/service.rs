//! Room Lifecycle and Membership Operations
//!
//! Service layer between the HTTP handlers and the store. Loads the room
//! and the caller's membership, consults the policy predicates, and maps
//! store failures onto the domain error taxonomy.

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::error::{is_unique_violation, ApiError};
use crate::backend::rooms::{policy, store};
use crate::shared::pagination::ROOMS_PER_PAGE;
use crate::shared::{
    ChatError, CreateRoomRequest, Page, PageParams, Role, Room, RoomMember, RoomMemberProfile,
};

/// Maximum room name length
pub const MAX_ROOM_NAME_LENGTH: usize = 255;

/// Derive a URL-safe slug from a room name
///
/// Lowercases ASCII alphanumerics and collapses everything else into
/// single hyphens, trimming them from both ends.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(ch.to_ascii_lowercase());
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }
    slug
}

fn validate_name(name: &str) -> Result<(), ChatError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ChatError::invalid_input("name", "Room name cannot be empty"));
    }
    if trimmed.chars().count() > MAX_ROOM_NAME_LENGTH {
        return Err(ChatError::invalid_input(
            "name",
            format!("Room name cannot exceed {} characters", MAX_ROOM_NAME_LENGTH),
        ));
    }
    Ok(())
}

/// Create a room with the creator admitted as admin
///
/// The room row and the creator's admin membership are inserted in one
/// transaction, so there is no observable state where the room exists
/// without its creator.
pub async fn create_room(
    pool: &SqlitePool,
    creator_id: Uuid,
    request: CreateRoomRequest,
) -> Result<Room, ApiError> {
    validate_name(&request.name)?;
    let name = request.name.trim().to_string();

    let slug = slugify(&name);
    if slug.is_empty() {
        return Err(ChatError::invalid_input(
            "name",
            "Room name must contain at least one alphanumeric character",
        )
        .into());
    }

    let now = Utc::now();
    let room = Room {
        id: Uuid::new_v4(),
        name,
        description: request.description,
        slug,
        visibility: request.visibility,
        created_by: creator_id,
        created_at: now,
        updated_at: now,
    };
    let creator = RoomMember {
        room_id: room.id,
        user_id: creator_id,
        role: Role::Admin,
        joined_at: now,
        last_read_at: None,
    };

    let mut tx = pool.begin().await?;
    if let Err(err) = store::insert_room(&mut tx, &room).await {
        if is_unique_violation(&err) {
            return Err(ChatError::invalid_input("slug", "slug already in use").into());
        }
        return Err(err.into());
    }
    store::insert_member(&mut tx, &creator).await?;
    tx.commit().await?;

    tracing::info!("Room {} created by {}", room.id, creator_id);
    Ok(room)
}

/// Delete a room, creator only
pub async fn delete_room(
    pool: &SqlitePool,
    caller_id: Uuid,
    room_id: Uuid,
) -> Result<(), ApiError> {
    let room = store::get_room(pool, room_id)
        .await?
        .ok_or(ChatError::NotFound)?;

    if !policy::can_delete(caller_id, &room) {
        return Err(ChatError::Unauthorized.into());
    }

    store::delete_room(pool, room_id).await?;
    tracing::info!("Room {} deleted by {}", room_id, caller_id);
    Ok(())
}

/// Join a room as a regular member
pub async fn join_room(
    pool: &SqlitePool,
    user_id: Uuid,
    room_id: Uuid,
) -> Result<RoomMember, ApiError> {
    let room = store::get_room(pool, room_id)
        .await?
        .ok_or(ChatError::NotFound)?;

    // Membership is checked before visibility so that members of private
    // rooms get AlreadyMember rather than Unauthorized.
    let membership = store::get_membership(pool, room_id, user_id).await?;
    if membership.is_some() {
        return Err(ChatError::AlreadyMember.into());
    }
    if !policy::can_join(&room, membership.as_ref()) {
        return Err(ChatError::Unauthorized.into());
    }

    let member = RoomMember {
        room_id,
        user_id,
        role: Role::Member,
        joined_at: Utc::now(),
        last_read_at: None,
    };

    let mut tx = pool.begin().await?;
    if let Err(err) = store::insert_member(&mut tx, &member).await {
        // Lost a concurrent join race
        if is_unique_violation(&err) {
            return Err(ChatError::AlreadyMember.into());
        }
        return Err(err.into());
    }
    tx.commit().await?;

    tracing::info!("User {} joined room {}", user_id, room_id);
    Ok(member)
}

/// Leave a room
pub async fn leave_room(pool: &SqlitePool, user_id: Uuid, room_id: Uuid) -> Result<(), ApiError> {
    let room = store::get_room(pool, room_id)
        .await?
        .ok_or(ChatError::NotFound)?;

    let membership = store::get_membership(pool, room_id, user_id).await?;
    if !policy::can_leave(user_id, &room, membership.as_ref()) {
        if room.created_by == user_id {
            return Err(ChatError::conflict(
                "Room creators cannot leave their room; delete the room instead",
            )
            .into());
        }
        return Err(ChatError::NotAMember.into());
    }

    let removed = store::remove_member(pool, room_id, user_id).await?;
    if !removed {
        return Err(ChatError::NotAMember.into());
    }

    tracing::info!("User {} left room {}", user_id, room_id);
    Ok(())
}

/// Get a room the caller is allowed to view
pub async fn get_room(pool: &SqlitePool, user_id: Uuid, room_id: Uuid) -> Result<Room, ApiError> {
    let room = store::get_room(pool, room_id)
        .await?
        .ok_or(ChatError::NotFound)?;

    let membership = store::get_membership(pool, room_id, user_id).await?;
    if !policy::can_view(&room, membership.as_ref()) {
        return Err(ChatError::Unauthorized.into());
    }

    Ok(room)
}

/// List rooms, newest first
///
/// With `mine` set, lists the rooms the caller belongs to; otherwise the
/// public directory.
pub async fn list_rooms(
    pool: &SqlitePool,
    user_id: Uuid,
    params: PageParams,
    mine: bool,
) -> Result<Page<Room>, ApiError> {
    let request = params.normalize(ROOMS_PER_PAGE);
    let rooms = if mine {
        store::list_member_rooms(pool, user_id, request.limit(), request.offset()).await?
    } else {
        store::list_public_rooms(pool, request.limit(), request.offset()).await?
    };

    Ok(Page::new(rooms, request))
}

/// List the members of a room the caller is allowed to view
pub async fn list_members(
    pool: &SqlitePool,
    user_id: Uuid,
    room_id: Uuid,
) -> Result<Vec<RoomMemberProfile>, ApiError> {
    let room = store::get_room(pool, room_id)
        .await?
        .ok_or(ChatError::NotFound)?;

    let membership = store::get_membership(pool, room_id, user_id).await?;
    if !policy::can_view(&room, membership.as_ref()) {
        return Err(ChatError::Unauthorized.into());
    }

    Ok(store::list_members(pool, room_id).await?)
}
