//! SQLite connection pool setup and schema bootstrap.

use log::info;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use crate::config::Config;

/// Open the connection pool described by the configuration.
pub async fn connect(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    info!(
        "Opening database pool (max {} connections, lifetime {:?})",
        config.db_max_connections, config.db_max_lifetime
    );

    SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .min_connections(config.db_min_connections)
        .max_lifetime(config.db_max_lifetime)
        .acquire_timeout(config.db_acquire_timeout)
        .connect(&config.database_url)
        .await
}

/// Create the books table if it does not exist yet.
///
/// `isbn` is the primary key, so storage rejects a second row with the same
/// ISBN even when two creates pass the existence check concurrently.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS books (
            isbn TEXT PRIMARY KEY NOT NULL,
            title TEXT NOT NULL,
            author TEXT NOT NULL,
            price REAL NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

#[cfg(test)]
pub(crate) async fn memory_pool() -> SqlitePool {
    // A single connection keeps every query on the same in-memory database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");
    ensure_schema(&pool)
        .await
        .expect("Failed to create schema");
    pool
}
