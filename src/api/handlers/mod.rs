//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod download;
pub mod health;
pub mod ingest;
pub mod ingests;

pub use download::latest_csv_handler;
pub use health::health_handler;
pub use ingest::{ingest_handler, ingest_help_handler};
pub use ingests::{ingest_list_handler, latest_ingest_handler};
