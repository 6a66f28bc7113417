//! DTOs for the push and history endpoints.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::domain::entities::IngestRecord;

/// Acknowledgement returned by `POST /ingest`.
#[derive(Debug, Serialize)]
pub struct IngestAccepted {
    pub status: &'static str,
    pub count: usize,
}

impl IngestAccepted {
    pub fn ok(count: usize) -> Self {
        Self {
            status: "ok",
            count,
        }
    }
}

/// Dump of the stored history.
#[derive(Debug, Serialize)]
pub struct IngestListResponse {
    /// Number of records currently stored.
    pub count: usize,
    /// Maximum number of records kept.
    pub max: usize,
    /// Records, newest first.
    pub items: Vec<IngestRecord>,
}

/// Query parameters for `GET /api/ingests`.
///
/// Uses `serde_with` to parse the limit from the query string.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub limit: Option<usize>,
}
