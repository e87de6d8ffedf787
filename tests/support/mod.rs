//! Shared helpers for integration tests: mock arXiv endpoints and a
//! recording sink.

#![allow(dead_code)]

use std::sync::Mutex;
use std::time::Duration;

use arxiv_fetch_core::{Article, ArticleSink, ArxivClient, FetchConfig, SinkError};
use async_trait::async_trait;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Builds a client pointed at `server`'s `/abs/` and `/pdf/` endpoints.
pub fn client_for(server: &MockServer) -> ArxivClient {
    let config = FetchConfig::with_base_urls(
        &format!("{}/abs/", server.uri()),
        &format!("{}/pdf/", server.uri()),
    )
    .expect("mock server URLs are valid base URLs");
    ArxivClient::new(config).expect("client builds")
}

/// Abstract page body in the shape arXiv serves.
pub fn abstract_page(reported_id: &str, title: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n  <meta charset=\"utf-8\">\n  \
         <title>[{reported_id}] {title}</title>\n</head>\n<body>\n  <h1 class=\"title\">{title}</h1>\n</body>\n</html>\n"
    )
}

/// Mounts an abstract page for `id` reporting `reported_id`, delayed by `delay`.
pub async fn mount_abstract(
    server: &MockServer,
    id: &str,
    reported_id: &str,
    title: &str,
    delay: Duration,
) {
    Mock::given(method("GET"))
        .and(path(format!("/abs/{id}")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(abstract_page(reported_id, title))
                .set_delay(delay),
        )
        .mount(server)
        .await;
}

/// Mounts a PDF body for `id`.
pub async fn mount_pdf(server: &MockServer, id: &str, content: &[u8]) {
    Mock::given(method("GET"))
        .and(path(format!("/pdf/{id}")))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(content.to_vec()))
        .mount(server)
        .await;
}

/// Mounts a consistent abstract page and PDF for `id`.
pub async fn mount_article(
    server: &MockServer,
    id: &str,
    title: &str,
    content: &[u8],
    delay: Duration,
) {
    mount_abstract(server, id, id, title, delay).await;
    mount_pdf(server, id, content).await;
}

/// Sink that records every article it receives, in arrival order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    seen: Mutex<Vec<(String, String, Vec<u8>)>>,
}

impl RecordingSink {
    /// `(id, title, content)` triples in the order they arrived.
    pub fn seen(&self) -> Vec<(String, String, Vec<u8>)> {
        self.seen.lock().expect("sink lock").clone()
    }
}

#[async_trait]
impl ArticleSink for RecordingSink {
    async fn accept(&self, article: &Article) -> Result<(), SinkError> {
        self.seen.lock().expect("sink lock").push((
            article.id.to_string(),
            article.title.clone(),
            article.content.clone(),
        ));
        Ok(())
    }
}
