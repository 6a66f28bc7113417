mod common;

use axum::body::Bytes;
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::json;

fn secret_header() -> HeaderName {
    HeaderName::from_static("x-ingest-secret")
}

async fn stored_count(server: &TestServer) -> u64 {
    let json = server.get("/api/ingests").await.json::<serde_json::Value>();
    json["count"].as_u64().unwrap()
}

// ─── ACCEPT ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_ingest_accepts_canonical_payload() {
    let server = common::make_server(common::create_test_state(10));

    let payload = common::sample_payload("x", &["https://x.com/a/status/1", "https://x.com/a/status/2"]);
    let response = server.post("/ingest").json(&payload).await;

    response.assert_status_ok();
    response.assert_json(&json!({ "status": "ok", "count": 2 }));
    assert_eq!(stored_count(&server).await, 1);
}

#[tokio::test]
async fn test_ingest_stores_normalized_record() {
    let server = common::make_server(common::create_test_state(10));

    let payload = common::sample_payload("instagram", &["https://instagram.com/p/abc"]);
    common::push(&server, &payload).await;

    let latest = server.get("/api/ingests/latest").await.json::<serde_json::Value>();
    assert_eq!(latest["platform"], "instagram");
    assert_eq!(latest["source"], "userscript");
    assert_eq!(latest["startDate"], "2024-05-01");
    assert_eq!(latest["count"], 1);
    assert_eq!(latest["items"][0]["dateISO"], "2024-05-01");
    assert!(latest["received_at"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn test_ingest_accepts_empty_items() {
    let server = common::make_server(common::create_test_state(10));

    let payload = common::sample_payload("x", &[]);
    let response = server.post("/ingest").json(&payload).await;

    response.assert_status_ok();
    response.assert_json(&json!({ "status": "ok", "count": 0 }));
}

// ─── REJECT ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_ingest_rejects_relative_url() {
    let server = common::make_server(common::create_test_state(10));
    common::push(&server, &common::sample_payload("x", &["https://x.com/ok"])).await;

    let payload = common::sample_payload("x", &["https://x.com/ok", "not-a-url"]);
    let response = server.post("/ingest").json(&payload).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(stored_count(&server).await, 1);
}

#[tokio::test]
async fn test_ingest_rejects_non_web_schemes() {
    let server = common::make_server(common::create_test_state(10));

    for url in [
        "javascript:alert(1)",
        "mailto:someone@example.com",
        "foo:bar",
        "file:///etc/passwd",
    ] {
        let payload = common::sample_payload("x", &[url]);
        let response = server.post("/ingest").json(&payload).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let json = response.json::<serde_json::Value>();
        assert_eq!(json["error"]["code"], "validation_error");
    }

    assert_eq!(stored_count(&server).await, 0);
}

#[tokio::test]
async fn test_ingest_rejects_malformed_json() {
    let server = common::make_server(common::create_test_state(10));

    let response = server
        .post("/ingest")
        .bytes(Bytes::from_static(b"{ not json"))
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "parse_error");
    assert_eq!(stored_count(&server).await, 0);
}

#[tokio::test]
async fn test_ingest_rejects_missing_fields() {
    let server = common::make_server(common::create_test_state(10));

    let response = server.post("/ingest").json(&json!({ "platform": "x" })).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(stored_count(&server).await, 0);
}

// ─── GATE ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_gate_rejects_missing_secret() {
    let server = common::make_server(common::create_gated_state(10));

    let payload = common::sample_payload("x", &["https://x.com/a/status/1"]);
    let response = server.post("/ingest").json(&payload).await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "unauthorized");
    assert_eq!(stored_count(&server).await, 0);
}

#[tokio::test]
async fn test_gate_rejects_wrong_secret() {
    let server = common::make_server(common::create_gated_state(10));

    let payload = common::sample_payload("x", &["https://x.com/a/status/1"]);
    let response = server
        .post("/ingest")
        .add_header(secret_header(), HeaderValue::from_static("wrong"))
        .json(&payload)
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(stored_count(&server).await, 0);
}

#[tokio::test]
async fn test_gate_accepts_matching_secret() {
    let server = common::make_server(common::create_gated_state(10));

    let payload = common::sample_payload("x", &["https://x.com/a/status/1"]);
    let response = server
        .post("/ingest")
        .add_header(secret_header(), HeaderValue::from_static(common::SECRET))
        .json(&payload)
        .await;

    response.assert_status_ok();
    assert_eq!(stored_count(&server).await, 1);
}

#[tokio::test]
async fn test_gate_leaves_help_open() {
    let server = common::make_server(common::create_gated_state(10));

    let response = server.get("/ingest").await;

    response.assert_status_ok();
    assert!(response.text().contains("POST /ingest"));
}

#[tokio::test]
async fn test_gate_does_not_cover_upload_forms() {
    let server = common::make_server(common::create_gated_state(10));

    let response = server
        .post("/manual")
        .form(&vec![("platform", "x"), ("urls", "https://x.com/1")])
        .await;

    response.assert_status_ok();
    assert_eq!(stored_count(&server).await, 1);
}
