//! In-memory repository implementations.
//!
//! History lives for as long as the process does; nothing is persisted.
//!
//! # Repositories
//!
//! - [`InMemoryIngestRepository`] - Bounded ingest history

pub mod memory_ingest_repository;

pub use memory_ingest_repository::{DEFAULT_CAPACITY, InMemoryIngestRepository};
