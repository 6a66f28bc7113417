//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into ingest operations and formats
//! responses as JSON or CSV.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Shared-secret gate, rate limiting and tracing
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
