//! SSE subscription handler
//!
//! GET /api/rooms/{room_id}/subscribe upgrades to a Server-Sent Events
//! stream carrying the room's delivery channel. Authorization happens
//! once, at subscription time, against the recorded membership.

use std::convert::Infallible;
use std::time::Duration;

use axum::{
    extract::{Path, State},
    response::sse::{Event, KeepAlive, Sse},
};
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::{Stream, StreamExt};
use uuid::Uuid;

use crate::backend::error::ApiError;
use crate::backend::middleware::CurrentUser;
use crate::backend::realtime::notifier;
use crate::backend::rooms::store as room_store;
use crate::backend::server::state::AppState;
use crate::shared::ChatError;

/// GET /api/rooms/{room_id}/subscribe
///
/// Members only. Lagged receivers skip ahead rather than disconnect;
/// the keep-alive comment holds the connection open through quiet
/// periods.
pub async fn subscribe_room(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(room_id): Path<Uuid>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, ApiError> {
    room_store::get_room(&state.db_pool, room_id)
        .await?
        .ok_or(ChatError::NotFound)?;

    if !notifier::authorize_subscribe(&state.db_pool, room_id, user.id).await? {
        return Err(ChatError::Unauthorized.into());
    }

    let receiver = state.broadcasts.sender(room_id).subscribe();
    tracing::info!("User {} subscribed to room {}", user.id, room_id);

    let stream = BroadcastStream::new(receiver).filter_map(|result| match result {
        Ok(event) => match serde_json::to_string(&event) {
            Ok(data) => Some(Ok(Event::default().event(event.event.clone()).data(data))),
            Err(err) => {
                tracing::error!("Failed to serialize room event: {}", err);
                None
            }
        },
        Err(BroadcastStreamRecvError::Lagged(skipped)) => {
            tracing::warn!("Subscriber lagged, skipped {} events", skipped);
            None
        }
    });

    Ok(Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(30))
            .text("keep-alive"),
    ))
}
