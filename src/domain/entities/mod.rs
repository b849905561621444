//! Core domain entities.
//!
//! The service persists exactly one kind of record, [`UrlMapping`].

pub mod url_mapping;

pub use url_mapping::UrlMapping;
