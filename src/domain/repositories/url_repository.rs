//! Storage capabilities for URL mappings.
//!
//! Handlers never see a concrete backend. They depend on the two narrow
//! capabilities below, which lets tests swap in mocks or the in-memory store.

use super::storage_error::StorageError;
use async_trait::async_trait;

/// Something that can persist a new alias → URL mapping.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemoryUrlRepository`] - in-process
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlSaver: Send + Sync {
    /// Inserts a mapping and returns the identifier assigned by the store.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::AliasExists`] if the alias is taken. Uniqueness is
    /// decided by the store at insert time, never by a separate lookup.
    ///
    /// Returns [`StorageError::Database`] on any other failure.
    async fn save_url(&self, url: &str, alias: &str) -> Result<i64, StorageError>;
}

/// Something that can resolve an alias to its URL.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlGetter: Send + Sync {
    /// Looks up the URL stored under `alias` (exact match).
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if no mapping matches.
    /// Returns [`StorageError::Database`] on any other failure.
    async fn get_url(&self, alias: &str) -> Result<String, StorageError>;
}
