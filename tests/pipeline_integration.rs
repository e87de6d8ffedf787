//! Integration tests for the article pipeline and the arXiv client.
//!
//! These tests run the full extract → metadata → verify → content sequence
//! against mock HTTP servers.

mod support;

use std::time::Duration;

use arxiv_fetch_core::fetch::{ArxivClient, FetchConfig, FetchError};
use arxiv_fetch_core::{ArticlePipeline, ErrorKind, PipelineError, extract_article_id};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use support::{client_for, mount_abstract, mount_article};

#[tokio::test]
async fn test_pipeline_returns_title_and_content() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/abs/1706.03762"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<title>[1706.03762] Attention Is All You Need</title>"),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/pdf/1706.03762"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"%PDF-FAKE".to_vec()))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let article = ArticlePipeline::new(&client)
        .run("1706.03762")
        .await
        .expect("pipeline should succeed");

    assert_eq!(article.id.as_str(), "1706.03762");
    assert_eq!(article.title, "Attention Is All You Need");
    assert_eq!(article.content, b"%PDF-FAKE");
}

#[tokio::test]
async fn test_pipeline_accepts_url_input() {
    let server = MockServer::start().await;
    mount_article(
        &server,
        "2301.01234",
        "A Paper",
        b"%PDF-1.7",
        Duration::ZERO,
    )
    .await;

    let client = client_for(&server);
    let article = ArticlePipeline::new(&client)
        .run("https://arxiv.org/abs/2301.01234v2")
        .await
        .expect("pipeline should succeed");

    assert_eq!(article.id.as_str(), "2301.01234");
    assert_eq!(article.title, "A Paper");
}

#[tokio::test]
async fn test_pipeline_identity_mismatch_never_fetches_content() {
    let server = MockServer::start().await;
    mount_abstract(
        &server,
        "1706.03762",
        "1706.99999",
        "Some Other Paper",
        Duration::ZERO,
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/pdf/1706.03762"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"%PDF".to_vec()))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = ArticlePipeline::new(&client).run("1706.03762").await;

    match result {
        Err(PipelineError::IdentityMismatch {
            requested,
            reported,
        }) => {
            assert_eq!(requested, "1706.03762");
            assert_eq!(reported, "1706.99999");
        }
        other => panic!("Expected IdentityMismatch, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_pipeline_malformed_input_makes_no_requests() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = ArticlePipeline::new(&client)
        .run("attention is all you need")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::MalformedInput);
}

#[tokio::test]
async fn test_pipeline_abstract_error_status_is_upstream_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/abs/1706.03762"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/pdf/1706.03762"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = ArticlePipeline::new(&client)
        .run("1706.03762")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::UpstreamUnavailable);
    match err {
        PipelineError::Fetch(FetchError::UpstreamUnavailable { status, url }) => {
            assert_eq!(status, 503);
            assert!(url.ends_with("/abs/1706.03762"), "url: {url}");
        }
        other => panic!("Expected UpstreamUnavailable(503), got: {other:?}"),
    }
}

#[tokio::test]
async fn test_pipeline_pdf_error_status_is_upstream_unavailable() {
    let server = MockServer::start().await;
    mount_abstract(
        &server,
        "1706.03762",
        "1706.03762",
        "Attention Is All You Need",
        Duration::ZERO,
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/pdf/1706.03762"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = ArticlePipeline::new(&client)
        .run("1706.03762")
        .await
        .unwrap_err();

    match err {
        PipelineError::Fetch(FetchError::UpstreamUnavailable { status, url }) => {
            assert_eq!(status, 404);
            assert!(url.ends_with("/pdf/1706.03762"), "url: {url}");
        }
        other => panic!("Expected UpstreamUnavailable(404), got: {other:?}"),
    }
}

#[tokio::test]
async fn test_pipeline_page_without_title_is_unparsable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/abs/1706.03762"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = ArticlePipeline::new(&client)
        .run("1706.03762")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::UnparsableResponse);
}

#[tokio::test]
async fn test_metadata_fetch_is_idempotent() {
    let server = MockServer::start().await;
    mount_abstract(
        &server,
        "1706.03762",
        "1706.03762",
        "Attention Is All You Need",
        Duration::ZERO,
    )
    .await;

    let client = client_for(&server);
    let id = extract_article_id("1706.03762").unwrap();

    let first = client.fetch_metadata(&id).await.unwrap();
    let second = client.fetch_metadata(&id).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(id, first.reported_id);
    assert_eq!(id, second.reported_id);
    assert_eq!(first.title, "Attention Is All You Need");
}

/// Serves one connection with a fixed raw HTTP response, then hangs up.
async fn serve_raw_once(response: &'static [u8]) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = [0u8; 4096];
        let _ = socket.read(&mut request).await;
        socket.write_all(response).await.unwrap();
        socket.shutdown().await.ok();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn test_fetch_content_oversized_content_length_is_fetch_error() {
    let base = serve_raw_once(
        b"HTTP/1.1 200 OK\r\nContent-Length: 9223372036854775807\r\nConnection: close\r\n\r\n%PDF",
    )
    .await;
    let config =
        FetchConfig::with_base_urls(&format!("{base}/abs/"), &format!("{base}/pdf/")).unwrap();
    let client = ArxivClient::new(config).unwrap();
    let id = extract_article_id("1706.03762").unwrap();

    let err = client.fetch_content(&id).await.unwrap_err();

    assert!(
        err.is_upstream_unavailable(),
        "truncated body should surface as a transport failure, got: {err:?}"
    );
}
