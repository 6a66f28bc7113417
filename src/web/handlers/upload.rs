//! File upload handler.

use axum::extract::{Multipart, State};
use serde_json::json;

use super::message::{MessageTemplate, PageError};
use crate::domain::entities::{Submission, UploadDocument};
use crate::error::AppError;
use crate::state::AppState;

/// Multipart field the dashboard form uses for the file.
const FILE_FIELD: &str = "file";

/// Accepts a JSON file from the dashboard.
///
/// # Endpoint
///
/// `POST /upload` and `POST /ui/upload`
///
/// The field named `file` is used; otherwise the first part that carries a
/// file name. The content may be a canonical batch or a generic export.
///
/// # Errors
///
/// - `400 Bad Request` - No file part, unreadable multipart body, invalid JSON
///   or unrecognized shape
pub async fn upload_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<MessageTemplate, PageError> {
    let mut contents = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        AppError::bad_request("Invalid multipart body", json!({ "reason": e.body_text() }))
    })? {
        let is_file = field.name() == Some(FILE_FIELD) || field.file_name().is_some();
        if !is_file {
            continue;
        }

        let bytes = field.bytes().await.map_err(|e| {
            AppError::bad_request(
                "Failed to read uploaded file",
                json!({ "reason": e.body_text() }),
            )
        })?;
        contents = Some(bytes);
        break;
    }

    let bytes = contents.ok_or_else(|| {
        AppError::bad_request("No file uploaded", json!({ "field": FILE_FIELD }))
    })?;

    let document = UploadDocument::parse(&bytes).map_err(AppError::from)?;
    let record = state
        .ingest_service
        .submit(Submission::Upload(document))
        .await?;

    Ok(MessageTemplate::success(format!(
        "Stored {} links for {}.",
        record.count(),
        record.platform
    )))
}
