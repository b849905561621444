//! In-process implementation of the URL storage capabilities.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::{StorageError, UrlGetter, UrlSaver};

#[derive(Debug, Default)]
struct Inner {
    last_id: i64,
    by_alias: HashMap<String, UrlMapping>,
}

/// Memory-backed repository with the same contract as the PostgreSQL one.
///
/// The uniqueness check and the insert happen under a single write lock, so
/// two concurrent saves of the same alias cannot both succeed. Contents live
/// as long as the process.
#[derive(Debug, Default)]
pub struct MemoryUrlRepository {
    inner: RwLock<Inner>,
}

impl MemoryUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored mappings.
    pub async fn len(&self) -> usize {
        self.inner.read().await.by_alias.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl UrlSaver for MemoryUrlRepository {
    async fn save_url(&self, url: &str, alias: &str) -> Result<i64, StorageError> {
        let mut inner = self.inner.write().await;

        if inner.by_alias.contains_key(alias) {
            return Err(StorageError::AliasExists {
                op: "MemoryUrlRepository::save_url",
            });
        }

        inner.last_id += 1;
        let id = inner.last_id;
        inner.by_alias.insert(
            alias.to_owned(),
            UrlMapping::new(id, url.to_owned(), alias.to_owned()),
        );

        Ok(id)
    }
}

#[async_trait]
impl UrlGetter for MemoryUrlRepository {
    async fn get_url(&self, alias: &str) -> Result<String, StorageError> {
        self.inner
            .read()
            .await
            .by_alias
            .get(alias)
            .map(|mapping| mapping.url.clone())
            .ok_or(StorageError::NotFound {
                op: "MemoryUrlRepository::get_url",
            })
    }
}
