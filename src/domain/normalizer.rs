//! Conversion of producer input into the canonical [`NewIngest`] shape.
//!
//! All three producer paths end here. The API path validates every item URL;
//! manual pastes and export-shaped uploads keep their links as free text,
//! since those are typed or exported by an operator rather than a scraper.

use serde::Deserialize;
use validator::Validate;

use crate::domain::entities::{
    ExportDocument, IngestPayload, Item, ManualPaste, NewIngest, Submission, UploadDocument,
};

/// Source and client tag recorded for uploaded files.
pub const SOURCE_UPLOAD: &str = "upload";
/// Source and client tag recorded for manual pastes.
pub const SOURCE_MANUAL: &str = "manual";

/// Page recorded for manual pastes.
pub const MANUAL_PAGE: &str = "manual-input";
/// Page recorded for export uploads without one.
pub const UPLOAD_PAGE: &str = "uploaded-file";
/// Platform recorded when nothing in an export names one.
pub const UNKNOWN_PLATFORM: &str = "unknown";

/// Errors that can occur while normalizing a submission.
#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Unrecognized upload format: {0}")]
    UnrecognizedShape(String),

    #[error("Invalid payload: {0}")]
    Invalid(#[from] validator::ValidationErrors),
}

impl UploadDocument {
    /// Parses an uploaded file.
    ///
    /// Tries the canonical batch shape first, then the generic export shape.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError::InvalidJson`] if the bytes are not JSON and
    /// [`NormalizeError::UnrecognizedShape`] if neither shape matches.
    pub fn parse(bytes: &[u8]) -> Result<Self, NormalizeError> {
        let value: serde_json::Value = serde_json::from_slice(bytes)
            .map_err(|e| NormalizeError::InvalidJson(e.to_string()))?;

        if let Ok(payload) = IngestPayload::deserialize(&value) {
            return Ok(Self::Canonical(payload));
        }

        ExportDocument::deserialize(&value)
            .map(Self::Export)
            .map_err(|e| NormalizeError::UnrecognizedShape(e.to_string()))
    }
}

/// Normalizes any submission into a batch ready for storage.
///
/// # Errors
///
/// Returns [`NormalizeError::Invalid`] if a canonical batch has an item whose
/// URL is not absolute.
pub fn normalize(submission: Submission) -> Result<NewIngest, NormalizeError> {
    match submission {
        Submission::Payload { payload, client } => from_payload(payload, client),
        Submission::Upload(UploadDocument::Canonical(payload)) => {
            let mut new = from_payload(payload, Some(SOURCE_UPLOAD.to_string()))?;
            new.source = SOURCE_UPLOAD.to_string();
            Ok(new)
        }
        Submission::Upload(UploadDocument::Export(doc)) => Ok(from_export(doc)),
        Submission::Manual(paste) => Ok(from_manual(paste)),
    }
}

fn from_payload(
    payload: IngestPayload,
    client: Option<String>,
) -> Result<NewIngest, NormalizeError> {
    payload.validate()?;

    let items = payload
        .items
        .into_iter()
        .map(|it| Item::new(it.platform, it.date_iso, it.url, it.text))
        .collect();

    Ok(NewIngest {
        source: payload.source,
        page: payload.page,
        platform: payload.platform,
        start_date: payload.start_date,
        end_date: payload.end_date,
        items,
        client,
    })
}

fn from_export(doc: ExportDocument) -> NewIngest {
    let platform = non_empty(doc.platform)
        .or_else(|| non_empty(doc.source_platform))
        .or_else(|| doc.items.first().and_then(|it| non_empty(it.platform.clone())))
        .unwrap_or_else(|| UNKNOWN_PLATFORM.to_string());

    let items = doc
        .items
        .into_iter()
        .map(|it| {
            Item::new(
                it.platform.unwrap_or_else(|| platform.clone()),
                it.date_iso,
                it.url.unwrap_or_default(),
                it.text,
            )
        })
        .collect();

    NewIngest {
        source: SOURCE_UPLOAD.to_string(),
        page: non_empty(doc.page).unwrap_or_else(|| UPLOAD_PAGE.to_string()),
        platform,
        start_date: doc.start_date.unwrap_or_default(),
        end_date: doc.end_date.unwrap_or_default(),
        items,
        client: Some(SOURCE_UPLOAD.to_string()),
    }
}

fn from_manual(paste: ManualPaste) -> NewIngest {
    let date_iso = non_empty(paste.date_iso.map(|d| d.trim().to_string()));

    let items = paste
        .links
        .split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| Item::new(paste.platform.clone(), date_iso.clone(), line, None))
        .collect();

    NewIngest {
        source: SOURCE_MANUAL.to_string(),
        page: MANUAL_PAGE.to_string(),
        platform: paste.platform,
        start_date: String::new(),
        end_date: String::new(),
        items,
        client: Some(SOURCE_MANUAL.to_string()),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
