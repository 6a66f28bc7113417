//! HTTP middleware for request processing and protection.
//!
//! Provides the push-endpoint gate, rate limiting, and observability middleware.

pub mod ingest_gate;
pub mod rate_limit;
pub mod tracing;
