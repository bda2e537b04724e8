use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, DbKind};
use crate::error::AppError;

/// Idle timeout and max lifetime for the in-memory connection (~100 years).
const MEMORY_CONN_LIFETIME: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

/// Connect the shared database pool for the given engine.
///
/// Called once at startup. This function does NOT create any tables.
pub async fn connect_db(kind: DbKind) -> Result<DatabaseConnection, AppError> {
    let database_url = db_url(kind)?;
    connect_url(kind, &database_url).await
}

/// Pool settings for `kind`.
fn connect_options(kind: DbKind, database_url: &str) -> ConnectOptions {
    let mut opts = ConnectOptions::new(database_url.to_owned());
    opts.connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(true)
        .sqlx_logging_level(log::LevelFilter::Debug);

    // Every pooled connection to `sqlite::memory:` is a separate database, and
    // closing the last one drops it. Keep exactly one open for the process.
    if kind == DbKind::SqliteMemory {
        opts.max_connections(1)
            .min_connections(1)
            .idle_timeout(MEMORY_CONN_LIFETIME)
            .max_lifetime(MEMORY_CONN_LIFETIME);
    }
    opts
}

/// Connect to an explicit URL, applying the pool settings for `kind`.
pub async fn connect_url(kind: DbKind, database_url: &str) -> Result<DatabaseConnection, AppError> {
    let conn = Database::connect(connect_options(kind, database_url))
        .await
        .map_err(|e| {
            AppError::config(format!("failed to connect to {} database: {e}", engine(kind)))
        })?;

    info!(engine = engine(kind), "database connected");
    Ok(conn)
}

/// Database engine name for logging
fn engine(kind: DbKind) -> &'static str {
    match kind {
        DbKind::Postgres => "postgresql",
        DbKind::SqliteFile | DbKind::SqliteMemory => "sqlite",
    }
}
