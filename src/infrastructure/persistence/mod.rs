//! Storage backends.
//!
//! Concrete implementations of the domain storage traits.
//!
//! - [`PgUrlRepository`] - PostgreSQL via SQLx
//! - [`MemoryUrlRepository`] - In-process map, for local runs and tests

pub mod memory_url_repository;
pub mod pg_url_repository;

pub use memory_url_repository::MemoryUrlRepository;
pub use pg_url_repository::PgUrlRepository;

use crate::config::Config;
use anyhow::{Context, Result};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;

/// Opens a PostgreSQL pool with the configured limits.
///
/// # Errors
///
/// Returns an error if no database URL is configured or the first connection
/// cannot be established.
pub async fn connect_pool(config: &Config) -> Result<PgPool> {
    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL is not configured")?;

    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(database_url)
        .await
        .context("Failed to connect to database")
}

/// Applies the embedded migrations in `migrations/`.
///
/// # Errors
///
/// Returns an error if a migration fails or was modified after being applied.
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to apply migrations")
}
