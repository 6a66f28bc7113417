//! Business logic services for the application layer.

pub mod access_gate;
pub mod ingest_service;

pub use access_gate::AccessGate;
pub use ingest_service::IngestService;
