//! Manual paste handler.

use axum::extract::{Form, State, rejection::FormRejection};
use serde::Deserialize;
use serde_json::json;

use super::message::{MessageTemplate, PageError};
use crate::domain::entities::{ManualPaste, Submission};
use crate::error::AppError;
use crate::state::AppState;

/// Urlencoded body of the paste form.
///
/// Older pages post the textarea as `links`, the dashboard posts `urls`.
#[derive(Debug, Deserialize)]
pub struct PasteForm {
    pub platform: String,
    #[serde(rename = "dateISO", default)]
    pub date_iso: Option<String>,
    #[serde(default)]
    pub urls: Option<String>,
    #[serde(default)]
    pub links: Option<String>,
}

impl TryFrom<PasteForm> for ManualPaste {
    type Error = AppError;

    /// Requires a `urls` or `links` field; an empty value is accepted.
    fn try_from(form: PasteForm) -> Result<Self, Self::Error> {
        let links = form.urls.or(form.links).ok_or_else(|| {
            AppError::bad_request("Missing urls", json!({ "field": "urls" }))
        })?;

        Ok(Self {
            platform: form.platform,
            date_iso: form.date_iso,
            links,
        })
    }
}

/// Stores links pasted into the dashboard, one per line.
///
/// # Endpoint
///
/// `POST /manual` and `POST /ui/paste`
///
/// Blank lines are dropped. URLs are stored as typed.
///
/// # Errors
///
/// - `400 Bad Request` - Body is not a valid form, or `platform` or the
///   links field is missing
pub async fn paste_handler(
    State(state): State<AppState>,
    form: Result<Form<PasteForm>, FormRejection>,
) -> Result<MessageTemplate, PageError> {
    let Form(form) = form.map_err(|e| {
        AppError::bad_request("Invalid form submission", json!({ "reason": e.body_text() }))
    })?;

    let record = state
        .ingest_service
        .submit(Submission::Manual(ManualPaste::try_from(form)?))
        .await?;

    Ok(MessageTemplate::success(format!(
        "Stored {} links for {}.",
        record.count(),
        record.platform
    )))
}
