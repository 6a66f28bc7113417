//! Utility functions used across the application.
//!
//! - [`csv_export`] - CSV encoding of ingest items
//! - [`client_addr`] - Caller address extraction from requests

pub mod client_addr;
pub mod csv_export;
