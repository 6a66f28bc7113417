//! Core domain entities representing the ingest data model.
//!
//! # Entity Types
//!
//! - [`IngestRecord`] - A stored batch of links
//! - [`Item`] - A single link inside a batch
//! - [`Submission`] - Raw producer input before normalization
//!
//! # Design Pattern
//!
//! Stored records have a separate creation struct, [`NewIngest`], which
//! carries everything except the receive timestamp assigned by the store.

pub mod ingest;
pub mod submission;

pub use ingest::{IngestRecord, Item, NewIngest};
pub use submission::{
    ExportDocument, ExportItem, IngestPayload, ItemPayload, ManualPaste, Submission,
    UploadDocument,
};
