mod common;

use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn health_check_works() {
    let app = TestApp::spawn().await;

    let response = app.get("/health").await;

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "OK");
    assert_eq!(body["service"], "Analytics Service");
}

#[tokio::test]
async fn health_check_ignores_store_state() {
    let app = TestApp::spawn_empty().await;

    for _ in 0..3 {
        app.post_json(
            "/analytics/sales",
            &json!({ "product": "Пионы", "quantity": 5, "amount": 3000 }),
        )
        .await;
    }

    let response = app.get("/health").await;
    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["service"], "Analytics Service");
}

#[tokio::test]
async fn readiness_check_works() {
    let app = TestApp::spawn().await;

    let response = app.get("/ready").await;

    assert!(response.status().is_success());
}

#[tokio::test]
async fn responses_carry_request_id() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(format!("{}/health", app.address))
        .header("x-request-id", "req-42")
        .send()
        .await
        .unwrap();
    assert_eq!(response.headers()["x-request-id"], "req-42");

    let response = app.get("/health").await;
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(format!("{}/analytics/sales", app.address))
        .header("origin", "http://shop.example")
        .send()
        .await
        .unwrap();

    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}
