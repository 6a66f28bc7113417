//! API route configuration.

use crate::api::handlers::{
    health_handler, ingest_handler, ingest_help_handler, ingest_list_handler,
    latest_csv_handler, latest_ingest_handler,
};
use crate::api::middleware::ingest_gate;
use crate::state::AppState;
use axum::{
    Router, middleware,
    routing::{get, post},
};

/// Routes that add records to the history.
///
/// Only the `POST` is gated; the `GET` explains the endpoint to a browser.
///
/// # Endpoints
///
/// - `GET  /ingest` - Usage help (plain text)
/// - `POST /ingest` - Push a batch (shared secret required when configured)
pub fn push_routes(state: AppState) -> Router<AppState> {
    let gated_push = post(ingest_handler).route_layer(middleware::from_fn_with_state(
        state,
        ingest_gate::layer,
    ));

    Router::new().route("/ingest", get(ingest_help_handler).merge(gated_push))
}

/// Read-only routes over the stored history.
///
/// # Endpoints
///
/// - `GET /health`              - Liveness and store fill level
/// - `GET /api/ingests`         - Stored records as JSON (optional `limit`)
/// - `GET /api/ingests/latest`  - Newest record
/// - `GET /download/latest.csv` - Newest record's items as CSV
pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/ingests", get(ingest_list_handler))
        .route("/api/ingests/latest", get(latest_ingest_handler))
        .route("/download/latest.csv", get(latest_csv_handler))
}
