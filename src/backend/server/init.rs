//! Server initialization
//!
//! Wires configuration, the database pool, the broadcast registry, and
//! the router together into a runnable Axum application.

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{connect_database, ServerConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// Reads configuration from the environment, connects the database and
/// runs migrations, then assembles the router. A background task prunes
/// room broadcast channels that have lost all their subscribers.
pub async fn create_app() -> Result<Router, sqlx::Error> {
    tracing::info!("Initializing roomcast server");

    let config = ServerConfig::from_env();
    let db_pool = connect_database(&config.database_url).await?;
    let app_state = AppState::new(db_pool, config);

    let cleanup = app_state.broadcasts.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(300));
        loop {
            interval.tick().await;
            cleanup.cleanup_inactive_channels();
            tracing::debug!("Pruned inactive room channels");
        }
    });

    tracing::info!("Router configured");
    Ok(create_router(app_state))
}
