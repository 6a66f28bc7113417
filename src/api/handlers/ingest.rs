//! Handlers for the push endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};

use crate::api::dto::ingest::IngestAccepted;
use crate::domain::entities::{IngestPayload, Submission};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_addr::ClientAddr;

const INGEST_HELP: &str = "This is the ingest API endpoint.\n\n\
Use POST /ingest with a JSON payload from the scraper.\n\
Open / (homepage) to see the UI dashboard.\n";

/// Stores one batch pushed by the scraper.
///
/// # Endpoint
///
/// `POST /ingest`
///
/// Guarded by [`crate::api::middleware::ingest_gate`]: when a shared secret is
/// configured the request must carry it in `X-Ingest-Secret`.
///
/// # Request Body
///
/// ```json
/// {
///   "source": "orangemonkey",
///   "page": "https://x.com/someone",
///   "platform": "x",
///   "startDate": "2026-02-01",
///   "endDate": "2026-02-13",
///   "items": [
///     {
///       "platform": "x",
///       "dateISO": "2026-02-13T12:00:00Z",  // optional
///       "url": "https://x.com/someone/status/1",
///       "text": "caption"                   // optional
///     }
///   ]
/// }
/// ```
///
/// # Response
///
/// ```json
/// { "status": "ok", "count": 1 }
/// ```
///
/// # Errors
///
/// - 400 `validation_error` if a field is missing or an item URL is not absolute
/// - 400 `parse_error` if the body is not JSON
/// - 401 `unauthorized` if the shared secret is missing or wrong
pub async fn ingest_handler(
    State(state): State<AppState>,
    ClientAddr(client): ClientAddr,
    payload: Result<Json<IngestPayload>, JsonRejection>,
) -> Result<Json<IngestAccepted>, AppError> {
    let Json(payload) = payload?;

    let record = state
        .ingest_service
        .submit(Submission::Payload { payload, client })
        .await?;

    Ok(Json(IngestAccepted::ok(record.count())))
}

/// Explains the push endpoint to someone opening it in a browser.
///
/// # Endpoint
///
/// `GET /ingest`
pub async fn ingest_help_handler() -> &'static str {
    INGEST_HELP
}
