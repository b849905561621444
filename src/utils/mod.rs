//! Utility functions used across the application.
//!
//! - [`alias_generator`] - Random alias generation

pub mod alias_generator;
