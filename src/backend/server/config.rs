//! Server configuration
//!
//! Configuration comes from environment variables with local-development
//! defaults. The database is required; a connection failure is a startup
//! failure, not a degraded mode.

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// Runtime configuration loaded from the environment
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// SQLite connection string, `DATABASE_URL`
    pub database_url: String,
    /// HTTP listen port, `SERVER_PORT`
    pub port: u16,
}

impl ServerConfig {
    /// Read configuration from the environment
    ///
    /// Defaults to a local `roomcast.db` file (created on first run) and
    /// port 3000.
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:roomcast.db?mode=rwc".to_string());

        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(3000);

        Self { database_url, port }
    }
}

/// Open the connection pool and bring the schema up to date
pub async fn connect_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database");

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    tracing::info!("Running database migrations");
    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}
