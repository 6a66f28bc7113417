//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::ingest_service::IngestService`] - Normalization, storage and export of batches
//! - [`services::access_gate::AccessGate`] - Shared-secret check for the push endpoint

pub mod services;
