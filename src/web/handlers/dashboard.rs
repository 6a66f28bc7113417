//! Dashboard home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use chrono::Utc;

use crate::domain::entities::IngestRecord;
use crate::state::AppState;

/// Number of records listed on the dashboard.
const RECENT_LIMIT: usize = 10;

/// Platforms offered in the manual paste form.
const PLATFORMS: [&str; 4] = ["x", "instagram", "facebook", "tiktok"];

/// One line of the "Recent ingests" table.
pub struct DashboardRow {
    pub index: usize,
    pub received_at: String,
    pub platform: String,
    pub source: String,
    pub count: usize,
    pub page: String,
}

impl DashboardRow {
    fn new(index: usize, record: &IngestRecord) -> Self {
        Self {
            index,
            received_at: record.received_at_display(),
            platform: record.platform.clone(),
            source: record.source.clone(),
            count: record.count(),
            page: record.page.clone(),
        }
    }
}

/// Template for the dashboard home page.
///
/// Renders `templates/dashboard.html` with:
/// - Service time and store fill level
/// - The most recent ingests
/// - Upload and manual paste forms
///
/// Every record field is HTML-escaped by Askama.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub service_time: String,
    pub stored: usize,
    pub capacity: usize,
    pub rows: Vec<DashboardRow>,
    pub platforms: &'static [&'static str],
}

/// Renders the dashboard home page.
///
/// # Endpoint
///
/// `GET /`
pub async fn dashboard_handler(State(state): State<AppState>) -> impl IntoResponse {
    let service = &state.ingest_service;
    let (recent, stored) = service.snapshot(Some(RECENT_LIMIT)).await;

    DashboardTemplate {
        service_time: Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        stored,
        capacity: service.capacity(),
        rows: recent
            .iter()
            .enumerate()
            .map(|(i, record)| DashboardRow::new(i + 1, record))
            .collect(),
        platforms: &PLATFORMS,
    }
}
