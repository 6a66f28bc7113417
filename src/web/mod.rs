//! Web dashboard layer for browser-based UI.
//!
//! Provides the dashboard page and the upload and paste forms. Uses Askama
//! templates for server-side rendering, so every interpolated value is
//! HTML-escaped.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering and form handlers
//! - [`routes`] - Dashboard route configuration

pub mod handlers;
pub mod routes;
