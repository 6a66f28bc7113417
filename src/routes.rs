//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`                     - Dashboard (HTML)
//! - `GET  /health`               - Health check with store fill level
//! - `GET|POST /ingest`           - Push endpoint (shared secret when configured)
//! - `GET  /api/ingests[/latest]` - Stored history as JSON
//! - `GET  /download/latest.csv`  - Newest batch as CSV
//! - `POST /upload`, `/ui/upload` - File upload form target
//! - `POST /manual`, `/ui/paste`  - Paste form target
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Permissive, the scraper posts from a browser userscript
//! - **Rate limiting** - Per-IP token bucket on producer routes (optional)
//! - **Body limit** - Caps upload and push bodies
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Default cap on request bodies (5 MiB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 5 * 1024 * 1024;

/// Knobs for [`build_router`] that come from configuration.
#[derive(Debug, Clone)]
pub struct RouterOptions {
    /// Apply per-IP rate limiting to producer routes. Requires the server to
    /// be started with connect info.
    pub rate_limit: bool,
    /// Maximum accepted request body size in bytes.
    pub max_body_bytes: usize,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            rate_limit: false,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

/// Constructs the router with all routes and middleware, without path
/// normalization.
pub fn build_router(state: AppState, options: &RouterOptions) -> Router {
    let producers = api::routes::push_routes(state.clone()).merge(web::routes::producer_routes());
    let producers = if options.rate_limit {
        producers.layer(rate_limit::layer())
    } else {
        producers
    };

    Router::new()
        .merge(producers)
        .merge(api::routes::read_routes())
        .merge(web::routes::page_routes())
        .with_state(state)
        .layer(DefaultBodyLimit::max(options.max_body_bytes))
        .layer(CorsLayer::permissive())
        .layer(tracing::layer())
}

/// Constructs the application router with trailing-slash normalization.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `options` - rate limiting and body limit settings
pub fn app_router(state: AppState, options: &RouterOptions) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state, options))
}
