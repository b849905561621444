//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::UrlService;

/// State cloned into every request.
///
/// The service owns the storage handles; nothing here is a global.
#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService>,
}

impl AppState {
    pub fn new(url_service: Arc<UrlService>) -> Self {
        Self { url_service }
    }
}
