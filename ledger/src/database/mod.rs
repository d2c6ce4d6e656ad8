//! Database module
//!
//! This module provides all database functionality including:
//! - Schema and migrations
//! - Model definitions
//! - One repository per entity for CRUD operations

pub mod budgets;
pub mod models;
pub mod records;
pub mod reminders;
pub mod repository;
pub mod schema;
pub mod users;

pub use budgets::BudgetRepository;
pub use models::*;
pub use records::RecordRepository;
pub use reminders::ReminderRepository;
pub use repository::Repository;
pub use schema::initialize_database;
pub use users::UserRepository;

use crate::error::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;

/// True for `sqlite::memory:` and `?mode=memory` style connection strings.
pub fn is_memory_url(db_url: &str) -> bool {
    db_url.contains(":memory:") || db_url.contains("mode=memory")
}

/// Build connection options from a `sqlite:` URL or a bare file path.
fn connect_options(db_url: &str) -> std::result::Result<SqliteConnectOptions, sqlx::Error> {
    let opts = if db_url.starts_with("sqlite:") {
        SqliteConnectOptions::from_str(db_url)?
    } else {
        SqliteConnectOptions::new().filename(db_url)
    };

    let opts = opts
        .create_if_missing(true)
        .busy_timeout(Duration::from_secs(5))
        .foreign_keys(true);

    if is_memory_url(db_url) {
        Ok(opts)
    } else {
        Ok(opts.journal_mode(SqliteJournalMode::Wal))
    }
}

/// Create and initialize a database connection pool.
///
/// File databases run migrations on a dedicated single-connection pool that
/// is closed before the command pool is opened. In-memory databases live only
/// as long as their one connection, so they get a single pinned connection
/// that is migrated in place.
pub async fn create_pool(db_url: &str) -> Result<SqlitePool> {
    tracing::debug!("Opening database: {}", db_url);

    let options = connect_options(db_url)?;

    if is_memory_url(db_url) {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        initialize_database(&pool).await?;
        return Ok(pool);
    }

    if let Some(parent) = options.get_filename().parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let migration_pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options.clone())
        .await?;

    initialize_database(&migration_pool).await?;
    migration_pool.close().await;

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::debug!("Database pool ready");

    Ok(pool)
}
