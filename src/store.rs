//! SQLite connection setup. Every pooled connection enforces foreign keys.

use crate::config::DatabaseConfig;
use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

fn connect_options(database_url: &str) -> Result<SqliteConnectOptions, AppError> {
    let opts = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);
    Ok(opts)
}

/// Create the directory holding a file database so SQLite can create the file itself.
/// No-op for in-memory databases.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    if database_url.contains(":memory:") || database_url.contains("mode=memory") {
        return Ok(());
    }
    let opts = connect_options(database_url)?;
    if let Some(dir) = opts.get_filename().parent() {
        if !dir.as_os_str().is_empty() {
            tokio::fs::create_dir_all(dir).await.map_err(sqlx::Error::Io)?;
        }
    }
    Ok(())
}

/// Open a pool for the configured database. In-memory databases get a single connection
/// that is never reaped, since closing it discards the data.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, AppError> {
    let opts = connect_options(&config.url)?;
    let pool_opts = if config.is_in_memory() {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(config.max_connections.max(1))
    };
    let pool = pool_opts.connect_with(opts).await?;
    tracing::debug!(url = %config.url, "connected to store");
    Ok(pool)
}
