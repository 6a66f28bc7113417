//! Repository trait definitions for the domain layer.
//!
//! The history store is reached only through [`IngestRepository`], so
//! services and handlers never depend on how records are kept.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure`
//! - Mock implementations are auto-generated via `mockall` for testing

pub mod ingest_repository;

pub use ingest_repository::IngestRepository;

#[cfg(test)]
pub use ingest_repository::MockIngestRepository;
