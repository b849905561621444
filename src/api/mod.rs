//! HTTP API layer.
//!
//! Translates HTTP requests into service calls and formats responses.
//!
//! # Modules
//!
//! - [`dto`] - Request/response bodies
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request id and tracing middleware

pub mod dto;
pub mod handlers;
pub mod middleware;
