//! URL mapping creation and resolution service.

use std::sync::Arc;
use tracing::warn;

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::{StorageError, UrlGetter, UrlSaver};
use crate::utils::alias_generator::{DEFAULT_ALIAS_LENGTH, generate_alias};

/// Default number of attempts for a generated alias before giving up.
pub const DEFAULT_MAX_ALIAS_ATTEMPTS: usize = 3;

/// Service for creating and resolving URL mappings.
///
/// Holds the two storage capabilities behind trait objects so any backend
/// (PostgreSQL, memory, mocks) can be injected at construction.
pub struct UrlService {
    saver: Arc<dyn UrlSaver>,
    getter: Arc<dyn UrlGetter>,
    alias_length: usize,
    max_alias_attempts: usize,
}

impl UrlService {
    /// Creates a service backed by a single repository providing both capabilities.
    pub fn new<R>(repository: Arc<R>) -> Self
    where
        R: UrlSaver + UrlGetter + 'static,
    {
        Self::from_parts(repository.clone(), repository)
    }

    /// Creates a service from separate save and lookup capabilities.
    pub fn from_parts(saver: Arc<dyn UrlSaver>, getter: Arc<dyn UrlGetter>) -> Self {
        Self {
            saver,
            getter,
            alias_length: DEFAULT_ALIAS_LENGTH,
            max_alias_attempts: DEFAULT_MAX_ALIAS_ATTEMPTS,
        }
    }

    /// Sets the length of generated aliases.
    pub fn with_alias_length(mut self, alias_length: usize) -> Self {
        self.alias_length = alias_length;
        self
    }

    /// Sets how many generated aliases are tried before a collision is reported.
    ///
    /// Values below 1 are treated as 1.
    pub fn with_max_alias_attempts(mut self, attempts: usize) -> Self {
        self.max_alias_attempts = attempts.max(1);
        self
    }

    /// Persists `url` under `alias`, or under a generated alias when `alias`
    /// is absent or empty.
    ///
    /// # Alias collisions
    ///
    /// - A client-supplied alias that is already taken fails immediately with
    ///   [`StorageError::AliasExists`].
    /// - A generated alias that collides is regenerated, up to the configured
    ///   number of attempts in total.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::AliasExists`] or [`StorageError::Database`] from
    /// the underlying store.
    pub async fn save_url(
        &self,
        url: String,
        alias: Option<String>,
    ) -> Result<UrlMapping, StorageError> {
        match alias.filter(|a| !a.is_empty()) {
            Some(alias) => {
                let id = self.saver.save_url(&url, &alias).await?;
                Ok(UrlMapping::new(id, url, alias))
            }
            None => self.save_with_generated_alias(url).await,
        }
    }

    /// Resolves `alias` to its stored URL.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] for unknown aliases and
    /// [`StorageError::Database`] on storage failures.
    pub async fn get_url(&self, alias: &str) -> Result<String, StorageError> {
        self.getter.get_url(alias).await
    }

    async fn save_with_generated_alias(&self, url: String) -> Result<UrlMapping, StorageError> {
        let mut attempt = 1;

        loop {
            let alias = generate_alias(self.alias_length);

            match self.saver.save_url(&url, &alias).await {
                Ok(id) => return Ok(UrlMapping::new(id, url, alias)),
                Err(e) if e.is_alias_exists() && attempt < self.max_alias_attempts => {
                    warn!(attempt, %alias, "generated alias collided, regenerating");
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
