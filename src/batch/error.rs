//! Error types for batch runs.

use thiserror::Error;

use crate::pipeline::PipelineError;

/// Errors that end a batch run early.
#[derive(Debug, Error)]
pub enum BatchError {
    /// An article failed under [`FailurePolicy::AbortOnFirst`](super::FailurePolicy::AbortOnFirst).
    #[error("input line {} ('{line}') failed: {source}", .index + 1)]
    Article {
        /// Zero-based position of the line in the input.
        index: usize,
        /// The input line as given.
        line: String,
        /// What went wrong.
        #[source]
        source: PipelineError,
    },

    /// A pipeline task panicked or was cancelled.
    #[error("article task did not complete: {0}")]
    Task(#[from] tokio::task::JoinError),
}
