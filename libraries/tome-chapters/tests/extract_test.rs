//! Integration tests for the chapter extractor
//!
//! Runs the extractor against a local HTTP server to exercise the
//! failure taxonomy without touching the network: upstream status
//! errors, empty bodies, unparseable payloads, transport failures,
//! and the wall-clock budget.

use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::time::Duration;
use tome_chapters::{ChapterError, ChapterExtractor};

async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn non_success_status_is_an_upstream_error() {
    let addr = serve(Router::new()).await;
    let extractor = ChapterExtractor::new(Duration::from_secs(5));

    let err = extractor
        .extract(&format!("http://{addr}/missing.m4b"))
        .await
        .unwrap_err();

    assert!(matches!(err, ChapterError::UpstreamStatus(404)));
    assert!(err.is_upstream());
    assert_eq!(err.upstream_status(), Some(404));
}

#[tokio::test]
async fn empty_body_is_an_upstream_error() {
    let router = Router::new().route("/empty.m4b", get(|| async { "" }));
    let addr = serve(router).await;
    let extractor = ChapterExtractor::new(Duration::from_secs(5));

    let err = extractor
        .extract(&format!("http://{addr}/empty.m4b"))
        .await
        .unwrap_err();

    assert!(matches!(err, ChapterError::EmptyBody));
    assert!(err.is_upstream());
}

#[tokio::test]
async fn unparseable_payload_is_a_parse_error() {
    let router = Router::new().route(
        "/garbage.m4b",
        get(|| async { "this is not an audio container" }),
    );
    let addr = serve(router).await;
    let extractor = ChapterExtractor::new(Duration::from_secs(5));

    let err = extractor
        .extract(&format!("http://{addr}/garbage.m4b"))
        .await
        .unwrap_err();

    assert!(matches!(err, ChapterError::Parse(_)));
    assert!(!err.is_upstream());
}

#[tokio::test]
async fn connection_refused_is_a_transport_error() {
    let extractor = ChapterExtractor::new(Duration::from_secs(5));

    let err = extractor
        .extract("http://127.0.0.1:1/book.m4b")
        .await
        .unwrap_err();

    assert!(matches!(err, ChapterError::Transport(_)));
    assert!(err.is_upstream());
    assert_eq!(err.upstream_status(), None);
}

#[tokio::test]
async fn stalled_upstream_hits_the_wall_clock_budget() {
    let router = Router::new().route(
        "/slow.m4b",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            ""
        }),
    );
    let addr = serve(router).await;
    let extractor = ChapterExtractor::new(Duration::from_millis(200));

    let err = extractor
        .extract(&format!("http://{addr}/slow.m4b"))
        .await
        .unwrap_err();

    assert!(matches!(err, ChapterError::Timeout(_)));
}
