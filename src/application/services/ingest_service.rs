//! Ingest submission and history retrieval service.

use std::sync::Arc;

use crate::domain::entities::{IngestRecord, Submission};
use crate::domain::normalizer::{NormalizeError, normalize};
use crate::domain::repositories::IngestRepository;
use crate::error::AppError;
use crate::utils::csv_export::encode_items;
use serde_json::json;
use tracing::{info, warn};

/// Service tying producers to the history store.
///
/// Every producer path goes through [`IngestService::submit`], which
/// normalizes the input and only touches the store once normalization has
/// succeeded. Rejected submissions leave the history unchanged.
pub struct IngestService<R: IngestRepository> {
    repository: Arc<R>,
}

impl<R: IngestRepository> IngestService<R> {
    /// Creates a new ingest service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Normalizes and stores one submission.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a canonical batch holds an item
    /// whose URL is not absolute.
    pub async fn submit(&self, submission: Submission) -> Result<IngestRecord, AppError> {
        let new = normalize(submission).map_err(|e| {
            let reason = match &e {
                NormalizeError::Invalid(_) => "validation",
                _ => "parse",
            };
            warn!(reason, error = %e, "Rejected ingest");
            metrics::counter!("ingest_rejected_total", "reason" => reason).increment(1);
            AppError::from(e)
        })?;

        let record = self.repository.insert(new).await;

        info!(
            event = "ingest",
            platform = %record.platform,
            source = %record.source,
            count = record.count(),
            received_at = %record.received_at.to_rfc3339(),
            "Ingest stored"
        );
        metrics::counter!("ingest_accepted_total", "source" => record.source.clone()).increment(1);

        Ok(record)
    }

    /// Returns the newest record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if nothing has been ingested yet.
    pub async fn latest(&self) -> Result<IngestRecord, AppError> {
        self.repository
            .latest()
            .await
            .ok_or_else(|| AppError::not_found("No ingests received yet", json!({})))
    }

    /// Number of stored records.
    pub async fn count(&self) -> usize {
        self.repository.count().await
    }

    /// Returns up to `limit` records and the total stored count from one
    /// consistent view of the history.
    pub async fn snapshot(&self, limit: Option<usize>) -> (Vec<IngestRecord>, usize) {
        self.repository.snapshot(limit).await
    }

    /// Maximum number of stored records.
    pub fn capacity(&self) -> usize {
        self.repository.capacity()
    }

    /// Encodes the newest record's items as CSV.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if nothing has been ingested yet.
    pub async fn latest_csv(&self) -> Result<String, AppError> {
        let record = self.latest().await?;
        Ok(encode_items(&record.items))
    }
}
