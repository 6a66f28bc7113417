mod common;

use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};
use serde_json::{Value, json};

fn file_form(field: &str, body: &Value) -> MultipartForm {
    let part = Part::bytes(body.to_string().into_bytes())
        .file_name("export.json")
        .mime_type("application/json");
    MultipartForm::new().add_part(field, part)
}

async fn latest(server: &axum_test::TestServer) -> Value {
    server.get("/api/ingests/latest").await.json::<Value>()
}

// ─── CANONICAL ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_upload_canonical_file() {
    let server = common::make_server(common::create_test_state(10));

    let body = common::sample_payload("x", &["https://x.com/1", "https://x.com/2"]);
    let response = server.post("/upload").multipart(file_form("file", &body)).await;

    response.assert_status_ok();
    assert!(response.text().contains("Stored 2 links"));

    let record = latest(&server).await;
    assert_eq!(record["source"], "upload");
    assert_eq!(record["client"], "upload");
    assert_eq!(record["platform"], "x");
}

#[tokio::test]
async fn test_upload_canonical_with_bad_url() {
    let server = common::make_server(common::create_test_state(10));

    let body = common::sample_payload("x", &["nope"]);
    let response = server.post("/upload").multipart(file_form("file", &body)).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    server.get("/api/ingests/latest").await.assert_status_not_found();
}

// ─── EXPORT ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_upload_export_file() {
    let server = common::make_server(common::create_test_state(10));

    let body = json!({
        "sourcePlatform": "instagram",
        "items": [
            { "url": "https://instagram.com/p/1", "dateISO": "2024-05-01" },
            { "url": "https://instagram.com/p/2", "platform": "facebook" }
        ]
    });
    let response = server.post("/ui/upload").multipart(file_form("file", &body)).await;

    response.assert_status_ok();

    let record = latest(&server).await;
    assert_eq!(record["platform"], "instagram");
    assert_eq!(record["page"], "uploaded-file");
    assert_eq!(record["source"], "upload");
    assert_eq!(record["items"][0]["platform"], "instagram");
    assert_eq!(record["items"][1]["platform"], "facebook");
}

#[tokio::test]
async fn test_upload_export_platform_from_first_item() {
    let server = common::make_server(common::create_test_state(10));

    let body = json!({
        "items": [{ "url": "https://tiktok.com/v/1", "platform": "tiktok" }]
    });
    server
        .post("/upload")
        .multipart(file_form("file", &body))
        .await
        .assert_status_ok();

    assert_eq!(latest(&server).await["platform"], "tiktok");
}

#[tokio::test]
async fn test_upload_accepts_other_file_field_name() {
    let server = common::make_server(common::create_test_state(10));

    let body = json!({ "items": [] });
    let response = server.post("/upload").multipart(file_form("export", &body)).await;

    response.assert_status_ok();
    assert_eq!(latest(&server).await["platform"], "unknown");
}

// ─── ERRORS ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_upload_invalid_json() {
    let server = common::make_server(common::create_test_state(10));

    let part = Part::text("{ definitely not json").file_name("broken.json");
    let response = server
        .post("/upload")
        .multipart(MultipartForm::new().add_part("file", part))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.text().contains("Invalid JSON file"));
    server.get("/api/ingests/latest").await.assert_status_not_found();
}

#[tokio::test]
async fn test_upload_unrecognized_shape() {
    let server = common::make_server(common::create_test_state(10));

    let body = json!({ "hello": "world" });
    let response = server.post("/upload").multipart(file_form("file", &body)).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.text().contains("Unrecognized upload format"));
}

#[tokio::test]
async fn test_upload_without_file() {
    let server = common::make_server(common::create_test_state(10));

    let response = server
        .post("/upload")
        .multipart(MultipartForm::new().add_text("note", "no file here"))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.text().contains("No file uploaded"));
}
