//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for testing.

pub mod storage_error;
pub mod url_repository;

pub use storage_error::{BoxError, StorageError};
pub use url_repository::{UrlGetter, UrlSaver};

#[cfg(test)]
pub use url_repository::{MockUrlGetter, MockUrlSaver};
