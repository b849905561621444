//! Application layer services.
//!
//! Services consume the storage capability traits and give HTTP handlers
//! a small API to call.
//!
//! - [`services::url_service::UrlService`] - Alias assignment and URL resolution

pub mod services;
