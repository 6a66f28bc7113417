mod common;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use link_ingestor::routes::{RouterOptions, app_router};
use tower::ServiceExt;

#[tokio::test]
async fn test_trailing_slash_is_normalized() {
    let app = app_router(common::create_test_state(5), &RouterOptions::default());

    let response = app
        .oneshot(Request::builder().uri("/health/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_dashboard_renders() {
    let app = app_router(common::create_test_state(5), &RouterOptions::default());

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("0 / 5 ingests stored"));
    assert!(html.contains("Nothing ingested yet."));
}

#[tokio::test]
async fn test_cors_preflight_allowed() {
    let app = app_router(common::create_test_state(5), &RouterOptions::default());

    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/ingest")
                .header("origin", "https://x.com")
                .header("access-control-request-method", "POST")
                .header("access-control-request-headers", "content-type,x-ingest-secret")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("access-control-allow-origin"));
}

#[tokio::test]
async fn test_body_limit_rejects_oversized_push() {
    let options = RouterOptions {
        max_body_bytes: 64,
        ..RouterOptions::default()
    };
    let app = app_router(common::create_test_state(5), &options);

    let payload = common::sample_payload("x", &["https://x.com/a/status/1"; 4]);
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/ingest")
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}
