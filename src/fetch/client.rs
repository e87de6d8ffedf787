//! The shared arXiv HTTP session.

use futures_util::StreamExt;
use reqwest::Client;
use tracing::{debug, instrument};

use super::config::FetchConfig;
use super::error::FetchError;
use super::http::build_client;
use super::title::{ArticleMetadata, parse_title_element};
use crate::parser::ArticleId;

/// Upper bound on the buffer reserved up front for a PDF body (16 MiB).
///
/// `Content-Length` is only a hint; larger bodies still grow the buffer as
/// chunks arrive.
pub(crate) const MAX_PREALLOC_BYTES: usize = 16 * 1024 * 1024;

/// HTTP session for the arXiv abstract and PDF endpoints.
///
/// Create one per batch and share it by reference: the inner
/// [`reqwest::Client`] pools connections and is safe to use from many
/// concurrent requests.
#[derive(Debug, Clone)]
pub struct ArxivClient {
    client: Client,
    config: FetchConfig,
}

impl ArxivClient {
    /// Creates a client for the given endpoints and timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::ClientBuild`] if the HTTP client cannot be built.
    pub fn new(config: FetchConfig) -> Result<Self, FetchError> {
        let client = build_client(config.connect_timeout(), config.read_timeout())?;
        debug!(
            abs_base = config.abs_base_url(),
            pdf_base = config.pdf_base_url(),
            "created arXiv client"
        );
        Ok(Self { client, config })
    }

    /// Returns the endpoint configuration.
    #[must_use]
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// URL of the abstract page for `id`.
    #[must_use]
    pub fn abstract_url(&self, id: &ArticleId) -> String {
        format!("{}{id}", self.config.abs_base_url())
    }

    /// URL of the PDF for `id`.
    #[must_use]
    pub fn pdf_url(&self, id: &ArticleId) -> String {
        format!("{}{id}", self.config.pdf_base_url())
    }

    /// Fetches the abstract page for `id` and extracts the embedded
    /// identifier and title.
    ///
    /// The returned [`ArticleMetadata::reported_id`] is whatever the page
    /// says; callers must compare it with `id` themselves.
    ///
    /// # Errors
    ///
    /// - [`FetchError::UpstreamUnavailable`] on a non-success status
    /// - [`FetchError::Network`] / [`FetchError::Timeout`] on transport failure
    /// - [`FetchError::UnparsableResponse`] if the page has no `<title>[id] ...</title>`
    #[instrument(skip(self), fields(id = %id))]
    pub async fn fetch_metadata(&self, id: &ArticleId) -> Result<ArticleMetadata, FetchError> {
        let url = self.abstract_url(id);
        debug!(url = %url, "requesting abstract");
        let response = self.get(&url).await?;
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::from_transport(&url, e))?;

        parse_title_element(&body).ok_or_else(|| {
            FetchError::unparsable(&url, "no <title>[id] title</title> element in abstract page")
        })
    }

    /// Fetches the full PDF body for `id`.
    ///
    /// # Errors
    ///
    /// - [`FetchError::UpstreamUnavailable`] on a non-success status
    /// - [`FetchError::Network`] / [`FetchError::Timeout`] on transport failure
    #[instrument(skip(self), fields(id = %id))]
    pub async fn fetch_content(&self, id: &ArticleId) -> Result<Vec<u8>, FetchError> {
        let url = self.pdf_url(id);
        debug!(url = %url, "requesting PDF");
        let response = self.get(&url).await?;

        let mut content = Vec::with_capacity(initial_capacity(response.content_length()));
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| FetchError::from_transport(&url, e))?;
            content.extend_from_slice(&chunk);
        }

        debug!(url = %url, bytes = content.len(), "PDF received");
        Ok(content)
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::from_transport(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::upstream_unavailable(url, status.as_u16()));
        }
        Ok(response)
    }
}

fn initial_capacity(content_length: Option<u64>) -> usize {
    content_length.map_or(0, |len| {
        usize::try_from(len).map_or(MAX_PREALLOC_BYTES, |len| len.min(MAX_PREALLOC_BYTES))
    })
}
