#![allow(dead_code)]

use alias_shortener::application::services::UrlService;
use alias_shortener::domain::repositories::{UrlGetter, UrlSaver};
use alias_shortener::infrastructure::persistence::MemoryUrlRepository;
use alias_shortener::routes::{app_router, router};
use alias_shortener::state::AppState;
use axum::Router;
use axum_test::TestServer;
use std::sync::Arc;
use std::time::Duration;
use tower_http::normalize_path::NormalizePath;

pub const TEST_TIMEOUT: Duration = Duration::from_secs(5);

pub fn create_test_state() -> (AppState, Arc<MemoryUrlRepository>) {
    let repo = Arc::new(MemoryUrlRepository::new());
    let url_service = Arc::new(UrlService::new(repo.clone()));

    (AppState::new(url_service), repo)
}

pub fn create_test_app() -> (Router, Arc<MemoryUrlRepository>) {
    let (state, repo) = create_test_state();

    (router(state, TEST_TIMEOUT), repo)
}

pub fn create_test_server() -> (TestServer, Arc<MemoryUrlRepository>) {
    let (app, repo) = create_test_app();

    (TestServer::new(app).unwrap(), repo)
}

/// The full service as served, path normalization included, over any storage.
pub fn create_served_app<R>(repo: Arc<R>, request_timeout: Duration) -> NormalizePath<Router>
where
    R: UrlSaver + UrlGetter + 'static,
{
    let state = AppState::new(Arc::new(UrlService::new(repo)));

    app_router(state, request_timeout)
}
