//! Application state
//!
//! `AppState` is the central state container shared across all request
//! handlers. The `FromRef` implementations let handlers extract just the
//! piece they need instead of the whole state.

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::realtime::broadcast::RoomBroadcasts;
use crate::backend::server::config::ServerConfig;

/// Shared server state
///
/// Cloning is cheap: the pool and the broadcast registry are both
/// reference-counted handles.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: SqlitePool,

    /// Per-room broadcast channels for realtime delivery
    pub broadcasts: RoomBroadcasts,

    /// Runtime configuration the server was started with
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(db_pool: SqlitePool, config: ServerConfig) -> Self {
        Self {
            db_pool,
            broadcasts: RoomBroadcasts::new(),
            config,
        }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for RoomBroadcasts {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.broadcasts.clone()
    }
}
