//! Data Transfer Objects for API requests and responses.
//!
//! Request bodies for the push endpoint are the domain's
//! [`crate::domain::entities::IngestPayload`]; this module holds the
//! response shapes and query parameters.

pub mod health;
pub mod ingest;
