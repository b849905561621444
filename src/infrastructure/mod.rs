//! Infrastructure layer: concrete storage implementations.
//!
//! - [`persistence`] - PostgreSQL and in-memory repositories

pub mod persistence;
