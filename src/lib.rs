//! # Link Ingestor
//!
//! A small collector for links scraped from social-media pages, built with Axum.
//! Batches arrive from a browser userscript, a file upload or a manual paste,
//! are normalized into one record shape and kept in a bounded in-memory
//! history. The newest batch can be read back as JSON, HTML or CSV.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Records, producer inputs, normalizer and repository trait
//! - **Application Layer** ([`application`]) - Ingest service and shared-secret gate
//! - **Infrastructure Layer** ([`infrastructure`]) - Bounded in-memory history store
//! - **API Layer** ([`api`]) - JSON/CSV handlers, DTOs and middleware
//! - **Web Layer** ([`web`]) - HTML dashboard with upload and paste forms
//!
//! ## Features
//!
//! - Three producer paths converging on one normalized record
//! - Oldest-first eviction once the history is full
//! - Optional shared secret on the push endpoint
//! - CSV export of the newest batch
//! - Rate limiting and observability
//!
//! ## Quick Start
//!
//! ```bash
//! export INGEST_SECRET="change-me"   # Optional
//! export MAX_INGESTS=100             # Optional
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AccessGate, IngestService};
    pub use crate::domain::entities::{IngestRecord, Item, NewIngest, Submission};
    pub use crate::error::AppError;
    pub use crate::routes::{RouterOptions, app_router, build_router};
    pub use crate::state::AppState;
}
