//! Raw input shapes accepted by the producer paths.
//!
//! Each producer (API push, file upload, manual paste) hands the normalizer
//! one of these shapes. They are deliberately a closed set: anything that
//! does not parse into one of them is rejected.

use serde::Deserialize;
use url::Url;
use validator::{Validate, ValidationError};

/// Canonical batch pushed to `POST /ingest` by the scraper.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct IngestPayload {
    pub source: String,
    pub page: String,
    pub platform: String,
    pub start_date: String,
    pub end_date: String,
    #[validate(nested)]
    pub items: Vec<ItemPayload>,
}

/// One link inside a canonical batch.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ItemPayload {
    pub platform: String,

    #[serde(rename = "dateISO", default)]
    pub date_iso: Option<String>,

    /// Must be an absolute http(s) URL with a host.
    #[validate(
        url(message = "Invalid URL format"),
        custom(function = "http_url", message = "URL must use http or https")
    )]
    pub url: String,

    #[serde(default)]
    pub text: Option<String>,
}

/// Accepts only `http`/`https` URLs that name a host.
fn http_url(value: &str) -> Result<(), ValidationError> {
    let parsed = Url::parse(value).map_err(|_| ValidationError::new("url"))?;

    match parsed.scheme() {
        "http" | "https" if parsed.host().is_some() => Ok(()),
        _ => Err(ValidationError::new("http_url")),
    }
}

/// Generic "Export JSON" file written by the scraper UI.
///
/// Only `items` is required; every other field falls back to a default
/// during normalization.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub source_platform: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    pub items: Vec<ExportItem>,
}

/// One link inside an export file. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportItem {
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(rename = "dateISO", default)]
    pub date_iso: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

/// An uploaded JSON file, parsed into exactly one of the accepted shapes.
#[derive(Debug, Clone)]
pub enum UploadDocument {
    /// The file holds a canonical batch, as pushed to `POST /ingest`.
    Canonical(IngestPayload),
    /// The file holds a generic export.
    Export(ExportDocument),
}

/// Links pasted by an operator into the dashboard form.
#[derive(Debug, Clone)]
pub struct ManualPaste {
    pub platform: String,
    pub date_iso: Option<String>,
    /// Raw text, one URL per line.
    pub links: String,
}

/// Everything a producer can submit.
#[derive(Debug, Clone)]
pub enum Submission {
    Payload {
        payload: IngestPayload,
        client: Option<String>,
    },
    Upload(UploadDocument),
    Manual(ManualPaste),
}
