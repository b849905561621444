//! HTTP request handlers for API endpoints.

pub mod redirect;
pub mod save;

pub use redirect::{empty_alias_handler, redirect_handler};
pub use save::save_handler;
