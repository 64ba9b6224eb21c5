mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use offerforge::api::handlers::offer_page_handler;

fn test_server() -> TestServer {
    let app = Router::new()
        .route(
            "/api/offers/{creator_slug}/{offer_slug}",
            get(offer_page_handler),
        )
        .with_state(common::create_test_state());

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_seeded_page_resolves() {
    let server = test_server();

    let response = server
        .get("/api/offers/demo-creator/life-os-template-club")
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["creator"]["name"], "Sarah (Productivity Expert)");
    assert_eq!(body["creator"]["slug"], "demo-creator");
    assert_eq!(body["offer"]["title"], "The 'Life OS' Template Club");
    assert_eq!(body["offer"]["price"], 19.0);
    assert_eq!(body["offer"]["currency"], "USD");
    assert_eq!(
        body["page"]["headline"],
        "Stop Building Systems. Start Getting Things Done."
    );
}

#[tokio::test]
async fn test_unknown_creator_404s() {
    let server = test_server();

    let response = server
        .get("/api/offers/nobody/life-os-template-club")
        .await;

    response.assert_status_not_found();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_unknown_offer_slug_404s() {
    let server = test_server();

    let response = server.get("/api/offers/demo-creator/ghost-offer").await;

    response.assert_status_not_found();
}
