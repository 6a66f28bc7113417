//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service liveness with a summary of the history store.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// ```json
/// {
///   "ok": true,
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "store": {
///       "status": "ok",
///       "message": "3/50 ingests stored"
///     }
///   }
/// }
/// ```
///
/// The store has no failure mode, so this endpoint always answers 200.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let store = check_store(&state).await;

    Json(HealthResponse {
        ok: true,
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { store },
    })
}

/// Reports how full the history store is.
async fn check_store(state: &AppState) -> CheckStatus {
    let stored = state.ingest_service.count().await;
    let capacity = state.ingest_service.capacity();

    CheckStatus {
        status: "ok".to_string(),
        message: Some(format!("{stored}/{capacity} ingests stored")),
    }
}
