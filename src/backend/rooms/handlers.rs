//! HTTP handlers for the room surface
//!
//! Thin adapters between Axum and the room service. Authorization
//! identity comes from the `CurrentUser` extractor; everything else is
//! delegated to the service layer.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::backend::error::ApiError;
use crate::backend::middleware::CurrentUser;
use crate::backend::rooms::service;
use crate::backend::server::state::AppState;
use crate::shared::{
    CreateRoomRequest, Page, PageParams, Room, RoomMember, RoomMemberProfile,
};

/// Query parameters for room listings
#[derive(Debug, Default, Deserialize)]
pub struct ListRoomsParams {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    /// List only rooms the caller belongs to
    #[serde(default)]
    pub mine: bool,
}

/// GET /api/rooms
pub async fn list_rooms(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(params): Query<ListRoomsParams>,
) -> Result<Json<Page<Room>>, ApiError> {
    let page = PageParams {
        page: params.page,
        per_page: params.per_page,
    };
    let rooms = service::list_rooms(&state.db_pool, user.id, page, params.mine).await?;
    Ok(Json(rooms))
}

/// POST /api/rooms
pub async fn create_room(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(request): Json<CreateRoomRequest>,
) -> Result<(StatusCode, Json<Room>), ApiError> {
    let room = service::create_room(&state.db_pool, user.id, request).await?;
    Ok((StatusCode::CREATED, Json(room)))
}

/// GET /api/rooms/{room_id}
pub async fn get_room(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(room_id): Path<Uuid>,
) -> Result<Json<Room>, ApiError> {
    let room = service::get_room(&state.db_pool, user.id, room_id).await?;
    Ok(Json(room))
}

/// DELETE /api/rooms/{room_id}
pub async fn delete_room(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(room_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    service::delete_room(&state.db_pool, user.id, room_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/rooms/{room_id}/join
pub async fn join_room(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(room_id): Path<Uuid>,
) -> Result<(StatusCode, Json<RoomMember>), ApiError> {
    let member = service::join_room(&state.db_pool, user.id, room_id).await?;
    Ok((StatusCode::CREATED, Json(member)))
}

/// POST /api/rooms/{room_id}/leave
pub async fn leave_room(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(room_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    service::leave_room(&state.db_pool, user.id, room_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/rooms/{room_id}/members
pub async fn list_members(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(room_id): Path<Uuid>,
) -> Result<Json<Vec<RoomMemberProfile>>, ApiError> {
    let members = service::list_members(&state.db_pool, user.id, room_id).await?;
    Ok(Json(members))
}
