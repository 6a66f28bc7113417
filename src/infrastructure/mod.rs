//! Infrastructure layer implementing the domain's storage interfaces.
//!
//! # Modules
//!
//! - [`memory`] - Process-local repository implementations

pub mod memory;
