//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AccessGate, IngestService};
use crate::infrastructure::memory::InMemoryIngestRepository;

/// Ingest service backed by the in-memory history.
pub type MemoryIngestService = IngestService<InMemoryIngestRepository>;

/// State shared by all request handlers.
///
/// Constructed once at startup; clones share the same history store.
#[derive(Clone)]
pub struct AppState {
    pub ingest_service: Arc<MemoryIngestService>,
    pub access_gate: AccessGate,
    /// When true, the caller address is read from `X-Forwarded-For` / `X-Real-IP`.
    pub behind_proxy: bool,
}

impl AppState {
    /// Creates state around an ingest service and gate.
    pub fn new(ingest_service: Arc<MemoryIngestService>, access_gate: AccessGate) -> Self {
        Self {
            ingest_service,
            access_gate,
            behind_proxy: false,
        }
    }

    /// Creates state with a fresh, empty history of the given capacity.
    pub fn in_memory(capacity: usize, secret: Option<String>) -> Self {
        let repository = Arc::new(InMemoryIngestRepository::new(capacity));
        Self::new(
            Arc::new(IngestService::new(repository)),
            AccessGate::new(secret),
        )
    }

    /// Sets whether proxy headers are trusted for the caller address.
    pub fn with_behind_proxy(mut self, behind_proxy: bool) -> Self {
        self.behind_proxy = behind_proxy;
        self
    }
}
