//! Handler for the CSV export.

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Downloads the newest batch's items as CSV.
///
/// # Endpoint
///
/// `GET /download/latest.csv`
///
/// # Response
///
/// `text/csv` attachment named `latest.csv` with the header row
/// `platform,dateISO,url,text` followed by one row per item.
///
/// # Errors
///
/// Returns 404 Not Found if nothing has been ingested yet.
pub async fn latest_csv_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let csv = state.ingest_service.latest_csv().await?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"latest.csv\"",
            ),
        ],
        csv,
    ))
}
