//! Domain layer containing the ingest entities and normalization rules.
//!
//! # Architecture
//!
//! - [`entities`] - Stored records and raw producer input shapes
//! - [`repositories`] - History store trait definition
//! - [`normalizer`] - Conversion of every producer input into one record shape
//!
//! # Ingest Flow
//!
//! 1. A producer submits a [`entities::Submission`]
//! 2. [`normalizer::normalize`] turns it into a [`entities::NewIngest`]
//! 3. [`repositories::IngestRepository::insert`] stamps and stores it

pub mod entities;
pub mod normalizer;
pub mod repositories;
