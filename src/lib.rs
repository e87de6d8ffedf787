//! arXiv Fetch Core Library
//!
//! Fetches arXiv articles given loosely formatted identifiers, verifies that
//! the server's abstract page belongs to the requested article, downloads the
//! PDF and hands it to a post-processing sink that saves and/or prints it.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`parser`] - Identifier extraction and `--input` splitting
//! - [`fetch`] - HTTP session for the abstract and PDF endpoints
//! - [`pipeline`] - Per-line extract → metadata → verify → content sequence
//! - [`batch`] - Concurrent fan-out over all input lines
//! - [`output`] - Saving, printing and the scratch directory

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod batch;
pub mod fetch;
pub mod output;
pub mod parser;
pub mod pipeline;
mod user_agent;

// Re-export commonly used types
pub use batch::{BatchCoordinator, BatchError, BatchReport, FailurePolicy};
pub use fetch::{ArxivClient, FetchConfig, FetchError};
pub use output::{ArticleSink, OutputPlan, OutputSink, Printer, SinkError};
pub use parser::{ArticleId, ParseError, collect_input_lines, extract_article_id};
pub use pipeline::{Article, ArticlePipeline, ErrorKind, PipelineError};
