//! Web dashboard route configuration.

use crate::state::AppState;
use crate::web::handlers::{dashboard_handler, paste_handler, upload_handler};
use axum::{
    Router,
    routing::{get, post},
};

/// Dashboard pages.
///
/// # Endpoints
///
/// - `GET /` - Dashboard home with recent ingests and producer forms
pub fn page_routes() -> Router<AppState> {
    Router::new().route("/", get(dashboard_handler))
}

/// Form targets that add records to the history.
///
/// Each form is reachable under two paths kept for older bookmarks.
///
/// # Endpoints
///
/// - `POST /upload`, `POST /ui/upload` - Multipart JSON file upload
/// - `POST /manual`, `POST /ui/paste`  - Urlencoded link paste
pub fn producer_routes() -> Router<AppState> {
    Router::new()
        .route("/upload", post(upload_handler))
        .route("/ui/upload", post(upload_handler))
        .route("/manual", post(paste_handler))
        .route("/ui/paste", post(paste_handler))
}
