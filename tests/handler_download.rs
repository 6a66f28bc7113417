mod common;

use serde_json::json;

#[tokio::test]
async fn test_download_empty_store() {
    let server = common::make_server(common::create_test_state(5));

    let response = server.get("/download/latest.csv").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_download_headers() {
    let server = common::make_server(common::create_test_state(5));
    common::push(&server, &common::sample_payload("x", &["https://x.com/1"])).await;

    let response = server.get("/download/latest.csv").await;

    response.assert_status_ok();
    assert_eq!(response.header("content-type"), "text/csv; charset=utf-8");
    assert_eq!(
        response.header("content-disposition"),
        "attachment; filename=\"latest.csv\""
    );
}

#[tokio::test]
async fn test_download_latest_batch_only() {
    let server = common::make_server(common::create_test_state(5));
    common::push(&server, &common::sample_payload("x", &["https://x.com/old"])).await;
    common::push(&server, &common::sample_payload("x", &["https://x.com/new"])).await;

    let body = server.get("/download/latest.csv").await.text();

    assert!(body.starts_with("platform,dateISO,url,text\r\n"));
    assert!(body.contains("https://x.com/new"));
    assert!(!body.contains("https://x.com/old"));
}

#[tokio::test]
async fn test_download_quotes_caption() {
    let server = common::make_server(common::create_test_state(5));

    let payload = json!({
        "source": "userscript",
        "page": "https://x.com/someone",
        "platform": "x",
        "startDate": "2024-05-01",
        "endDate": "2024-05-07",
        "items": [{
            "platform": "x",
            "dateISO": "2024-05-01",
            "url": "https://x.com/a/status/1",
            "text": "Hello, \"world\"\nsecond line"
        }]
    });
    common::push(&server, &payload).await;

    let body = server.get("/download/latest.csv").await.text();

    assert_eq!(
        body,
        "platform,dateISO,url,text\r\nx,2024-05-01,https://x.com/a/status/1,\"Hello, \"\"world\"\" second line\"\r\n"
    );
}
