//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /`         - Save a URL under an alias
//! - `GET  /`         - Empty alias (answered with an error)
//! - `GET  /{alias}`  - Redirect to the stored URL
//!
//! # Middleware (outermost first)
//!
//! - **Request id** - `x-request-id` assigned and echoed on the response
//! - **Tracing** - Request span carrying the request id, response logging
//! - **Panic recovery** - A panicking handler yields 500 instead of a dropped connection
//! - **Timeout** - The handler future (and any storage call in it) is dropped on deadline, answering 408
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{empty_alias_handler, redirect_handler, save_handler};
use crate::api::middleware::{request_id, trace};
use crate::state::AppState;
use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use std::time::Duration;
use tower::Layer;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::timeout::TimeoutLayer;

/// Handler routes without middleware.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(empty_alias_handler).post(save_handler))
        .route("/{alias}", get(redirect_handler))
}

/// Routes with state and the middleware stack applied.
pub fn router(state: AppState, request_timeout: Duration) -> Router {
    routes()
        .with_state(state)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(CatchPanicLayer::new())
        .layer(trace::layer())
        .layer(request_id::propagate_layer())
        .layer(request_id::set_layer())
}

/// Constructs the application service served by [`crate::server::run`].
pub fn app_router(state: AppState, request_timeout: Duration) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, request_timeout))
}
