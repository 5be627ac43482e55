#[cfg(test)]
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

/// In-memory SQLite pool with migrations applied.
///
/// A single connection that never expires, since each in-memory connection
/// owns its own database.
#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");

    crate::core::database::run_migrations(&pool)
        .await
        .expect("failed to run migrations");

    pool
}
