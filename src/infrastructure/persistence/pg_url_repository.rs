//! PostgreSQL implementation of the URL storage capabilities.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;
use tracing::debug;

use crate::domain::repositories::{StorageError, UrlGetter, UrlSaver};

/// Name of the unique constraint on `url.alias` (see `migrations/`).
const ALIAS_UNIQUE_CONSTRAINT: &str = "url_alias_key";

/// PostgreSQL repository for URL mappings.
///
/// Both operations are single parameterized statements, so a save that is
/// cancelled mid-flight either commits one row or none.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlSaver for PgUrlRepository {
    async fn save_url(&self, url: &str, alias: &str) -> Result<i64, StorageError> {
        const OP: &str = "PgUrlRepository::save_url";

        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO url (url, alias) VALUES ($1, $2) RETURNING id",
        )
        .bind(url)
        .bind(alias)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_alias_unique_violation(&e) {
                StorageError::AliasExists { op: OP }
            } else {
                StorageError::database(OP, e)
            }
        })?;

        debug!(id, alias, "inserted url mapping");
        Ok(id)
    }
}

#[async_trait]
impl UrlGetter for PgUrlRepository {
    async fn get_url(&self, alias: &str) -> Result<String, StorageError> {
        const OP: &str = "PgUrlRepository::get_url";

        sqlx::query_scalar::<_, String>("SELECT url FROM url WHERE alias = $1")
            .bind(alias)
            .fetch_optional(self.pool.as_ref())
            .await
            .map_err(|e| StorageError::database(OP, e))?
            .ok_or(StorageError::NotFound { op: OP })
    }
}

/// Returns true if `e` is a unique violation raised by the alias constraint.
///
/// A violation without a constraint name also counts as an alias conflict.
fn is_alias_unique_violation(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(ALIAS_UNIQUE_CONSTRAINT) | None)
}
