mod common;

use axum::{
    Router,
    routing::{get, post},
};
use axum_test::TestServer;
use serde_json::json;
use shortr::api::handlers::{redirect_handler, shorten_handler, stats_handler};

#[tokio::test]
async fn test_stats_empty_store() {
    let (state, _repository) = common::create_test_state();
    let app = Router::new()
        .route("/api/stats", get(stats_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/api/stats").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["total_urls"], 0);
    assert_eq!(json["total_clicks"], 0);
}

#[tokio::test]
async fn test_stats_counts_urls_and_clicks() {
    let (state, repository) = common::create_test_state();
    let app = Router::new()
        .route("/api/stats", get(stats_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    common::create_test_link(&repository, "first1", "https://example.com/1").await;
    common::create_test_link(&repository, "second", "https://example.com/2").await;
    common::create_test_link(&repository, "third1", "https://example.com/3").await;

    assert_eq!(server.get("/first1").await.status_code(), 302);
    assert_eq!(server.get("/first1").await.status_code(), 302);
    assert_eq!(server.get("/second").await.status_code(), 302);

    let response = server.get("/api/stats").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["total_urls"], 3);
    assert_eq!(json["total_clicks"], 3);
}

#[tokio::test]
async fn test_shorten_redirect_stats_flow() {
    let (state, _repository) = common::create_test_state();
    let app = Router::new()
        .route("/api/shorten", post(shorten_handler))
        .route("/api/stats", get(stats_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let created = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com/page" }))
        .await;

    created.assert_status_ok();

    let created_json = created.json::<serde_json::Value>();
    let code = created_json["short_code"].as_str().unwrap().to_string();
    assert_eq!(code.len(), 6);

    let redirect = server.get(&format!("/{}", code)).await;

    assert_eq!(redirect.status_code(), 302);
    assert_eq!(redirect.header("location"), "https://example.com/page");

    let stats = server.get("/api/stats").await;

    stats.assert_status_ok();

    let stats_json = stats.json::<serde_json::Value>();
    assert_eq!(stats_json["total_urls"], 1);
    assert_eq!(stats_json["total_clicks"], 1);
}

#[tokio::test]
async fn test_stats_reflects_shortened_urls() {
    let (state, _repository) = common::create_test_state();
    let app = Router::new()
        .route("/api/shorten", post(shorten_handler))
        .route("/api/stats", get(stats_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com/a" }))
        .await
        .assert_status_ok();
    server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com/b" }))
        .await
        .assert_status_ok();

    let response = server.get("/api/stats").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["total_urls"], 2);
    assert_eq!(json["total_clicks"], 0);
}
