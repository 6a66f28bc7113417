//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

/// Creates a tracing middleware for HTTP requests.
///
/// # Logging Behavior
///
/// **On Request:**
/// - Logs at `DEBUG` level
/// - Creates a span at `INFO` level with:
///   - HTTP method
///   - URI path
///   - HTTP version
///
/// **On Response:**
/// - Logs at `INFO` level with:
///   - Status code
///   - Latency in milliseconds
///
/// **On Failure (5xx):**
/// - Logs at `WARN` level with the classified failure and latency
///
/// # Example Logs
///
/// ```text
/// DEBUG request{method=POST uri=/ingest version=HTTP/1.1}: started processing request
/// INFO request{method=POST uri=/ingest version=HTTP/1.1}: finished processing request latency=3 ms status=200
/// ```
///
/// # Integration
///
/// [`crate::routes::build_router`] applies this layer to the whole app. To
/// trace a single route group:
///
/// ```rust
/// use axum::Router;
/// use link_ingestor::api::{middleware::tracing, routes::read_routes};
/// use link_ingestor::state::AppState;
///
/// let state = AppState::in_memory(50, None);
/// let app: Router = read_routes().with_state(state).layer(tracing::layer());
/// ```
pub fn layer()
-> TraceLayer<tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>>
{
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::WARN)
                .latency_unit(LatencyUnit::Millis),
        )
}
