//! Per-line article pipeline: extract → metadata → verify → content.

mod error;

pub use error::{ErrorKind, PipelineError};

use tracing::{info, instrument};

use crate::fetch::ArxivClient;
use crate::parser::{ArticleId, extract_article_id};

/// A fetched article, ready for post-processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    /// Canonical identifier, verified against the abstract page.
    pub id: ArticleId,
    /// Title as reported by arXiv.
    pub title: String,
    /// PDF bytes.
    pub content: Vec<u8>,
}

/// Runs the fetch steps for one input line against a shared client.
#[derive(Debug, Clone, Copy)]
pub struct ArticlePipeline<'a> {
    client: &'a ArxivClient,
}

impl<'a> ArticlePipeline<'a> {
    /// Creates a pipeline borrowing the batch's HTTP session.
    #[must_use]
    pub fn new(client: &'a ArxivClient) -> Self {
        Self { client }
    }

    /// Fetches the article referenced by `line`.
    ///
    /// Steps run strictly in order. The PDF is only requested after the
    /// abstract page has confirmed the identifier, so a mismatched or bogus
    /// identifier never costs a PDF transfer.
    ///
    /// # Errors
    ///
    /// - [`PipelineError::MalformedInput`] if `line` has no identifier
    /// - [`PipelineError::Fetch`] if either request fails or the abstract page is unparsable
    /// - [`PipelineError::IdentityMismatch`] if the abstract page reports another identifier
    #[instrument(skip(self), fields(line = %line))]
    pub async fn run(&self, line: &str) -> Result<Article, PipelineError> {
        let id = extract_article_id(line)?;
        info!(id = %id, "processing article");

        let meta = self.client.fetch_metadata(&id).await?;
        if id != meta.reported_id {
            return Err(PipelineError::IdentityMismatch {
                requested: id.to_string(),
                reported: meta.reported_id,
            });
        }

        let content = self.client.fetch_content(&id).await?;
        Ok(Article {
            id,
            title: meta.title,
            content,
        })
    }
}
