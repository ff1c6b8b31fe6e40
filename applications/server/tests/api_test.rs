//! API integration tests
//!
//! Drives the router in-process with `tower::ServiceExt::oneshot`.
//! The chapters endpoint is pointed at an unroutable upstream so the
//! failure mapping can be asserted without network access.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tome_chapters::ChapterExtractor;
use tome_server::{config::ServerConfig, create_router, state::AppState};
use tower::ServiceExt;

fn test_state() -> AppState {
    let mut config = ServerConfig::default();
    config.media.title = "Test Book".to_string();
    config.media.author = "Test Author".to_string();
    // port 1 refuses connections; extraction fails upstream
    config.media.audio_url = "http://127.0.0.1:1/book.m4b".to_string();
    config.media.art_url = "http://127.0.0.1:1/art.jpeg".to_string();

    AppState::new(
        Arc::new(config),
        Arc::new(ChapterExtractor::new(Duration::from_secs(2))),
    )
}

async fn get(path: &str) -> (StatusCode, Value) {
    let app = create_router(test_state());
    let response = app
        .oneshot(Request::get(path).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = get("/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn media_returns_the_configured_descriptor() {
    let (status, body) = get("/api/media").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Test Book");
    assert_eq!(body["author"], "Test Author");
    assert_eq!(body["audioUrl"], "http://127.0.0.1:1/book.m4b");
    assert_eq!(body["artUrl"], "http://127.0.0.1:1/art.jpeg");

    // the injected fallback list ships with the descriptor
    let fallback = body["fallbackChapters"].as_array().unwrap();
    assert_eq!(fallback.len(), 1);
    assert_eq!(fallback[0]["title"], "Start");
    assert_eq!(fallback[0]["startSeconds"], 0.0);
}

#[tokio::test]
async fn chapters_maps_upstream_failure_to_502() {
    let (status, body) = get("/api/chapters").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "Failed to fetch audio");
}

#[tokio::test]
async fn unknown_api_path_is_not_found() {
    let (status, _body) = get("/api/nonexistent").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
