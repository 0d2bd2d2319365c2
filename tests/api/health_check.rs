//! tests/api/health_check.rs

use crate::helpers::spawn_app;

#[tokio::test]
async fn ping_works() {
    let test_app = spawn_app().await;

    let response = test_app.get_page("/ping").await;

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("Failed to parse body.");
    assert_eq!(body["status"], "alive");
}

#[tokio::test]
async fn ping_sets_permissive_cors_headers() {
    let test_app = spawn_app().await;

    let response = test_app.get_page("/ping").await;

    let headers = response.headers();
    assert_eq!(headers["Access-Control-Allow-Origin"], "*");
    assert_eq!(headers["Access-Control-Allow-Methods"], "GET, POST, OPTIONS");
    assert_eq!(headers["Access-Control-Allow-Headers"], "Content-Type");
}

#[tokio::test]
async fn ping_is_idempotent() {
    let test_app = spawn_app().await;

    for _ in 0..3 {
        let response = test_app.get_page("/ping").await;
        let body: serde_json::Value = response.json().await.expect("Failed to parse body.");
        assert_eq!(body["status"], "alive");
    }
}
