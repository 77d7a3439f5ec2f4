pub mod conversation;
pub mod query;
pub mod stats;

use crate::configuration::DatabaseSettings;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use tracing::Instrument;

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS conversations (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        platform VARCHAR(50) NOT NULL,
        user_id VARCHAR(255),
        user_message TEXT NOT NULL,
        ai_response TEXT NOT NULL,
        metadata TEXT,
        created_at DATETIME DEFAULT CURRENT_TIMESTAMP
    )
"#;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to create database directory for {path}: {source}")]
    Directory {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to open database {path}: {source}")]
    Connect { path: String, source: sqlx::Error },
    #[error("failed to create schema: {0}")]
    Schema(#[source] sqlx::Error),
}

/// Opens the SQLite file, creating it (and its parent directory) when missing.
///
/// The rollback journal stays in `DELETE` mode so the database file on disk is
/// always complete and can be handed out by `/download-db` as is.
pub async fn connect(settings: &DatabaseSettings) -> Result<SqlitePool, StorageError> {
    if let Some(parent) = Path::new(&settings.path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| StorageError::Directory {
                path: settings.path.clone(),
                source,
            })?;
        }
    }

    let options = SqliteConnectOptions::new()
        .filename(&settings.path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Delete);

    SqlitePoolOptions::new()
        .max_connections(settings.max_connections)
        .connect_with(options)
        .await
        .map_err(|source| StorageError::Connect {
            path: settings.path.clone(),
            source,
        })
}

/// Creates the `conversations` table if it does not exist yet. Safe to call on every start.
pub async fn initialize(pool: &SqlitePool) -> Result<(), StorageError> {
    let query_span = tracing::info_span!("Creating conversations schema");
    sqlx::query(SCHEMA)
        .execute(pool)
        .instrument(query_span)
        .await
        .map(|_| tracing::info!("Database schema is ready"))
        .map_err(StorageError::Schema)
}

#[cfg(test)]
pub(crate) async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory SQLite pool");

    initialize(&pool).await.expect("Failed to create schema");
    pool
}
