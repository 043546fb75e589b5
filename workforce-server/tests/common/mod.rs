//! Shared test fixtures: in-memory database + server state

use std::str::FromStr;
use std::sync::Arc;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use workforce_server::auth::JwtService;
use workforce_server::{Config, ServerState};

/// In-memory SQLite pool with migrations applied.
///
/// Single connection: every pooled connection to `:memory:` would
/// otherwise get its own empty database.
pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("Failed to parse connection string")
        .pragma("foreign_keys", "ON");

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .expect("Failed to open in-memory database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to apply migrations");

    pool
}

/// Full server state over an in-memory database
pub async fn test_state() -> ServerState {
    let pool = test_pool().await;
    let config = Config::from_env();
    let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
    ServerState::new(config, pool, jwt_service)
}
