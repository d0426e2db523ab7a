//! API route configuration
//!
//! All room, membership, message, and subscription endpoints live under
//! `/api`. Every route requires a bearer token; identity extraction
//! happens in the `CurrentUser` extractor, authorization in the
//! services.

use axum::routing::{get, post};
use axum::Router;

use crate::backend::messages::handlers as message_handlers;
use crate::backend::realtime::subscription::subscribe_room;
use crate::backend::rooms::handlers as room_handlers;
use crate::backend::server::state::AppState;

/// Add the API routes to the router
///
/// - `GET /api/rooms` - list rooms (public, or own with `?mine=true`)
/// - `POST /api/rooms` - create a room
/// - `GET /api/rooms/{room_id}` - fetch one room
/// - `DELETE /api/rooms/{room_id}` - delete a room (creator only)
/// - `POST /api/rooms/{room_id}/join` - join
/// - `POST /api/rooms/{room_id}/leave` - leave
/// - `GET /api/rooms/{room_id}/members` - member roster
/// - `GET /api/rooms/{room_id}/messages` - message history
/// - `POST /api/rooms/{room_id}/messages` - send a message
/// - `GET /api/rooms/{room_id}/subscribe` - SSE delivery stream
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route(
            "/api/rooms",
            get(room_handlers::list_rooms).post(room_handlers::create_room),
        )
        .route(
            "/api/rooms/{room_id}",
            get(room_handlers::get_room).delete(room_handlers::delete_room),
        )
        .route("/api/rooms/{room_id}/join", post(room_handlers::join_room))
        .route("/api/rooms/{room_id}/leave", post(room_handlers::leave_room))
        .route(
            "/api/rooms/{room_id}/members",
            get(room_handlers::list_members),
        )
        .route(
            "/api/rooms/{room_id}/messages",
            get(message_handlers::list_messages).post(message_handlers::send_message),
        )
        .route("/api/rooms/{room_id}/subscribe", get(subscribe_room))
}
