//! Domain layer: entities and storage contracts.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Storage capability traits and their error type
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.

pub mod entities;
pub mod repositories;
