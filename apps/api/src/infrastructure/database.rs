//! SQLite connection bootstrap
//!
//! Opens the shared connection pool once and applies the embedded schema
//! migrations before handing the pool out.

use std::str::FromStr;

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use thiserror::Error;

use crate::config::Config;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Errors raised while opening the database
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("failed to open database: {0}")]
    Connect(#[from] sqlx::Error),

    #[error("failed to apply migrations: {0}")]
    Migrate(#[from] MigrateError),
}

/// Opens the database described by `config` and ensures the schema exists
pub async fn connect(config: &Config) -> Result<SqlitePool, DatabaseError> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;
    tracing::info!(url = %config.database_url, "Database connection established");

    MIGRATOR.run(&pool).await?;
    tracing::info!("Database migrations applied");

    Ok(pool)
}

/// Opens a private in-memory database with the schema applied
///
/// The pool holds exactly one connection that is never recycled, since every
/// SQLite in-memory connection is its own database.
pub async fn connect_in_memory() -> Result<SqlitePool, DatabaseError> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    MIGRATOR.run(&pool).await?;

    Ok(pool)
}
