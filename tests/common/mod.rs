#![allow(dead_code)]

use axum_test::TestServer;
use link_ingestor::routes::{RouterOptions, build_router};
use link_ingestor::state::AppState;
use serde_json::{Value, json};

pub const SECRET: &str = "test-secret-value";

pub fn create_test_state(capacity: usize) -> AppState {
    AppState::in_memory(capacity, None)
}

pub fn create_gated_state(capacity: usize) -> AppState {
    AppState::in_memory(capacity, Some(SECRET.to_string()))
}

/// Full router with rate limiting off, since the test transport carries no
/// peer address.
pub fn make_server(state: AppState) -> TestServer {
    let app = build_router(state, &RouterOptions::default());
    TestServer::new(app).unwrap()
}

pub fn sample_payload(platform: &str, urls: &[&str]) -> Value {
    let items: Vec<Value> = urls
        .iter()
        .map(|url| {
            json!({
                "platform": platform,
                "dateISO": "2024-05-01",
                "url": url,
                "text": "caption"
            })
        })
        .collect();

    json!({
        "source": "userscript",
        "page": "https://x.com/someone",
        "platform": platform,
        "startDate": "2024-05-01",
        "endDate": "2024-05-07",
        "items": items
    })
}

pub async fn push(server: &TestServer, payload: &Value) {
    server.post("/ingest").json(payload).await.assert_status_ok();
}
