//! Repository trait for the ingest history.

use crate::domain::entities::{IngestRecord, NewIngest};
use async_trait::async_trait;

/// Bounded, newest-first history of accepted batches.
///
/// Storage is append-only: a record leaves the history only when newer
/// inserts push it past capacity. Returned records are owned copies, so
/// callers can never alter what is stored.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::InMemoryIngestRepository`] - process-local storage
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IngestRepository: Send + Sync {
    /// Stamps the batch with the current UTC time, stores it as the newest
    /// record and evicts the oldest records beyond capacity.
    ///
    /// Always succeeds. Returns the stored record.
    async fn insert(&self, new: NewIngest) -> IngestRecord;

    /// Returns the newest record, or `None` if nothing has been stored.
    async fn latest(&self) -> Option<IngestRecord>;

    /// Number of stored records.
    async fn count(&self) -> usize;

    /// Returns up to `limit` records, newest first (`None` returns all),
    /// together with the total stored count. Both come from the same state
    /// of the history.
    async fn snapshot(&self, limit: Option<usize>) -> (Vec<IngestRecord>, usize);

    /// Maximum number of records kept.
    fn capacity(&self) -> usize;
}
