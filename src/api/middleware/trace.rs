//! HTTP request/response tracing middleware.

use axum::extract::Request;
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::{Level, Span};

use super::request_id::REQUEST_ID_HEADER;

/// Tracing layer with a request span built by [`make_span`].
pub type HttpTraceLayer = TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    fn(&Request) -> Span,
    DefaultOnRequest,
    DefaultOnResponse,
>;

/// Creates a tracing middleware for HTTP requests.
///
/// # Logging Behavior
///
/// **On Request:** opens an `INFO` span with method, URI, HTTP version and
/// the request id assigned by [`super::request_id::set_layer`]. Handler log
/// lines are emitted inside this span.
///
/// **On Response:** logs status code and latency in milliseconds.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=POST uri=/ version=HTTP/1.1 request_id=4b0f...}: url added id=1 alias=aB3xZ9
/// INFO request{method=POST uri=/ version=HTTP/1.1 request_id=4b0f...}: finished processing request latency=3 ms status=200
/// ```
pub fn layer() -> HttpTraceLayer {
    TraceLayer::new_for_http()
        .make_span_with(make_span as fn(&Request) -> Span)
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}

fn make_span(request: &Request) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");

    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        version = ?request.version(),
        request_id = %request_id,
    )
}
