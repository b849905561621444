//! Errors reported by storage backends.

use thiserror::Error;

/// Boxed driver error carried by [`StorageError::Database`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure of a storage operation.
///
/// Every variant records the operation (`op`) that produced it, e.g.
/// `PgUrlRepository::save_url`.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The alias uniqueness constraint rejected an insert.
    #[error("{op}: alias already exists")]
    AliasExists { op: &'static str },

    /// No mapping exists for the requested alias.
    #[error("{op}: url not found")]
    NotFound { op: &'static str },

    /// Any other persistence failure (connection loss, bad statement, ...).
    #[error("{op}: {source}")]
    Database {
        op: &'static str,
        #[source]
        source: BoxError,
    },
}

impl StorageError {
    pub fn database(op: &'static str, source: impl Into<BoxError>) -> Self {
        Self::Database {
            op,
            source: source.into(),
        }
    }

    pub fn is_alias_exists(&self) -> bool {
        matches!(self, Self::AliasExists { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
