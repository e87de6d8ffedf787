//! Remote retrieval of arXiv abstract pages and PDFs.
//!
//! [`ArxivClient`] fetches `GET <abs_base><id>` for metadata and
//! `GET <pdf_base><id>` for content. Failures are surfaced as-is; nothing is
//! retried.
//!
//! # Example
//!
//! ```no_run
//! use arxiv_fetch_core::fetch::{ArxivClient, FetchConfig};
//! use arxiv_fetch_core::parser::extract_article_id;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ArxivClient::new(FetchConfig::default())?;
//! let id = extract_article_id("1706.03762")?;
//! let meta = client.fetch_metadata(&id).await?;
//! println!("{}: {}", meta.reported_id, meta.title);
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod error;
mod http;
mod title;

pub use client::ArxivClient;
pub use config::{
    ARXIV_ABS_BASE_URL, ARXIV_PDF_BASE_URL, CONNECT_TIMEOUT_SECS, FetchConfig, READ_TIMEOUT_SECS,
    TIMEOUT_RANGE_SECS,
};
pub use error::FetchError;
pub use title::{ArticleMetadata, parse_title_element};
