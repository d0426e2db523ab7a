//! HTTP handlers for the message surface

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::backend::error::ApiError;
use crate::backend::messages::service;
use crate::backend::middleware::CurrentUser;
use crate::backend::server::state::AppState;
use crate::shared::{Message, Page, PageParams, SendMessageRequest};

/// Query parameters for message listings
#[derive(Debug, Default, Deserialize)]
pub struct ListMessagesParams {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

/// GET /api/rooms/{room_id}/messages
pub async fn list_messages(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(room_id): Path<Uuid>,
    Query(params): Query<ListMessagesParams>,
) -> Result<Json<Page<Message>>, ApiError> {
    let page = PageParams {
        page: params.page,
        per_page: params.per_page,
    };
    let messages = service::list_messages(&state.db_pool, room_id, user.id, page).await?;
    Ok(Json(messages))
}

/// POST /api/rooms/{room_id}/messages
pub async fn send_message(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(room_id): Path<Uuid>,
    Json(request): Json<SendMessageRequest>,
) -> Result<(StatusCode, Json<Message>), ApiError> {
    let message =
        service::send_message(&state.db_pool, &state.broadcasts, room_id, user.id, request).await?;
    Ok((StatusCode::CREATED, Json(message)))
}
