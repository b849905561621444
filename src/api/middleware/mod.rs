//! HTTP middleware for request processing.
//!
//! Provides request id tagging and observability middleware.

pub mod request_id;
pub mod trace;
