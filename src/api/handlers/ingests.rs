//! Handlers for reading the stored history.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::ingest::{IngestListResponse, ListParams};
use crate::domain::entities::IngestRecord;
use crate::error::AppError;
use crate::state::AppState;

/// Dumps the stored history as JSON.
///
/// # Endpoint
///
/// `GET /api/ingests`
///
/// # Query Parameters
///
/// - `limit` (optional): Maximum number of records to return (default: all)
///
/// # Response
///
/// ```json
/// {
///   "count": 2,
///   "max": 50,
///   "items": [ { "received_at": "...", "platform": "x", "count": 3, "items": [...] } ]
/// }
/// ```
///
/// `count` is the number of stored records, independent of `limit`.
pub async fn ingest_list_handler(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<IngestListResponse> {
    let service = &state.ingest_service;
    let (items, count) = service.snapshot(params.limit).await;

    Json(IngestListResponse {
        count,
        max: service.capacity(),
        items,
    })
}

/// Returns the newest stored record.
///
/// # Endpoint
///
/// `GET /api/ingests/latest`
///
/// # Errors
///
/// Returns 404 Not Found if nothing has been ingested yet.
pub async fn latest_ingest_handler(
    State(state): State<AppState>,
) -> Result<Json<IngestRecord>, AppError> {
    let record = state.ingest_service.latest().await?;
    Ok(Json(record))
}
