mod common;

use axum::{Router, http::StatusCode, routing::post};
use axum_test::TestServer;
use serde_json::json;
use offerforge::api::handlers::checkout_handler;

fn test_server() -> TestServer {
    let app = Router::new()
        .route("/api/checkout", post(checkout_handler))
        .with_state(common::create_test_state());

    TestServer::new(app).unwrap()
}

fn valid_payload() -> serde_json::Value {
    json!({
        "offer_id": "offer-demo-1",
        "title": "The 'Life OS' Template Club",
        "price": 19.0,
        "currency": "USD",
        "creator_slug": "demo-creator",
        "offer_slug": "life-os-template-club"
    })
}

#[tokio::test]
async fn test_checkout_forbidden_without_gateway() {
    let server = test_server();

    let response = server.post("/api/checkout").json(&valid_payload()).await;

    response.assert_status(StatusCode::FORBIDDEN);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "forbidden");
}

#[tokio::test]
async fn test_checkout_validates_before_gateway_check() {
    let server = test_server();

    let mut payload = valid_payload();
    payload["title"] = json!("");

    let response = server.post("/api/checkout").json(&payload).await;

    response.assert_status_bad_request();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_checkout_rejects_non_positive_price() {
    let server = test_server();

    let mut payload = valid_payload();
    payload["price"] = json!(-1.0);

    let response = server.post("/api/checkout").json(&payload).await;

    response.assert_status_bad_request();
}
