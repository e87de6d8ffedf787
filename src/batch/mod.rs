//! Batch coordinator: fetches every input line concurrently and hands each
//! finished article to a sink.
//!
//! # Concurrency Model
//!
//! - One Tokio task per input line, each running an [`ArticlePipeline`]
//! - All tasks share one [`ArxivClient`] (one connection pool)
//! - Results are collected from a [`JoinSet`] as they finish, not in input
//!   order; every task returns its input index so results are re-associated
//!   with the line that produced them
//! - The sink is awaited for each article from the coordinator's own task, so
//!   sink calls never overlap
//!
//! On the current-thread runtime the binary uses, this is cooperative
//! single-threaded concurrency: requests interleave, CPU work does not run in
//! parallel.
//!
//! # Failure Policy
//!
//! Lines without an identifier are skipped with a warning under either policy.
//! Fetch failures and identity mismatches abort the batch under
//! [`FailurePolicy::AbortOnFirst`] (in-flight tasks are aborted when the
//! `JoinSet` drops), or are recorded and the batch continues under
//! [`FailurePolicy::CollectAll`]. Sink failures are logged and recorded and
//! never stop the batch.

mod error;

pub use error::BatchError;

use tokio::task::JoinSet;
use tracing::{debug, info, instrument, warn};

use crate::fetch::ArxivClient;
use crate::output::{ArticleSink, SinkError};
use crate::parser::ArticleId;
use crate::pipeline::{ArticlePipeline, ErrorKind, PipelineError};

/// What to do when one article fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop at the first failed article and return its error.
    #[default]
    AbortOnFirst,
    /// Record failures and keep going.
    CollectAll,
}

/// An article that was fetched and handed to the sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedArticle {
    /// Zero-based input position.
    pub index: usize,
    /// The input line as given.
    pub line: String,
    /// Verified identifier.
    pub id: ArticleId,
    /// Title reported by arXiv.
    pub title: String,
    /// PDF size in bytes.
    pub bytes: usize,
}

/// An input line with no identifier in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// Zero-based input position.
    pub index: usize,
    /// The input line as given.
    pub line: String,
}

/// An article that failed under [`FailurePolicy::CollectAll`].
#[derive(Debug)]
pub struct FailedArticle {
    /// Zero-based input position.
    pub index: usize,
    /// The input line as given.
    pub line: String,
    /// What went wrong.
    pub error: PipelineError,
}

impl FailedArticle {
    /// Failure category.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.error.kind()
    }
}

/// A fetched article the sink could not process.
#[derive(Debug)]
pub struct SinkFailure {
    /// Zero-based input position.
    pub index: usize,
    /// Title of the article.
    pub title: String,
    /// What went wrong.
    pub error: SinkError,
}

/// Outcome of a batch run. Every list is sorted by input index.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Articles fetched and handed to the sink (including ones the sink failed on).
    pub completed: Vec<CompletedArticle>,
    /// Lines without an identifier.
    pub skipped: Vec<SkippedLine>,
    /// Articles that failed to fetch or verify.
    pub failed: Vec<FailedArticle>,
    /// Articles the sink reported errors for.
    pub sink_failures: Vec<SinkFailure>,
}

impl BatchReport {
    /// Returns true if every line produced an article and the sink accepted it.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.failed.is_empty() && self.sink_failures.is_empty()
    }

    /// Number of input lines accounted for.
    #[must_use]
    pub fn total(&self) -> usize {
        self.completed.len() + self.skipped.len() + self.failed.len()
    }

    fn sort(&mut self) {
        self.completed.sort_by_key(|a| a.index);
        self.skipped.sort_by_key(|s| s.index);
        self.failed.sort_by_key(|f| f.index);
        self.sink_failures.sort_by_key(|f| f.index);
    }
}

/// Runs article pipelines concurrently over a list of input lines.
#[derive(Debug, Clone)]
pub struct BatchCoordinator {
    client: ArxivClient,
    policy: FailurePolicy,
}

impl BatchCoordinator {
    /// Creates a coordinator that shares `client` across all pipeline runs.
    #[must_use]
    pub fn new(client: ArxivClient, policy: FailurePolicy) -> Self {
        Self { client, policy }
    }

    /// Configured failure policy.
    #[must_use]
    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Fetches every line concurrently, passing each article to `sink` as it
    /// completes.
    ///
    /// # Errors
    ///
    /// Returns [`BatchError::Article`] for the first failed article under
    /// [`FailurePolicy::AbortOnFirst`], naming the input line that caused it.
    /// Returns [`BatchError::Task`] if a pipeline task panics.
    #[instrument(skip(self, lines, sink), fields(lines = lines.len(), policy = ?self.policy))]
    pub async fn run(
        &self,
        lines: &[String],
        sink: &dyn ArticleSink,
    ) -> Result<BatchReport, BatchError> {
        let mut tasks = JoinSet::new();
        for (index, line) in lines.iter().enumerate() {
            let client = self.client.clone();
            let line = line.clone();
            tasks.spawn(async move {
                let outcome = ArticlePipeline::new(&client).run(&line).await;
                (index, outcome)
            });
        }
        debug!(tasks = tasks.len(), "pipeline tasks started");

        let mut report = BatchReport::default();
        while let Some(joined) = tasks.join_next().await {
            let (index, outcome) = joined?;
            let line = &lines[index];

            match outcome {
                Ok(article) => {
                    info!(
                        index,
                        line = %line,
                        id = %article.id,
                        title = %article.title,
                        "got article"
                    );
                    if let Err(error) = sink.accept(&article).await {
                        warn!(index, title = %article.title, %error, "post-processing failed");
                        report.sink_failures.push(SinkFailure {
                            index,
                            title: article.title.clone(),
                            error,
                        });
                    }
                    report.completed.push(CompletedArticle {
                        index,
                        line: line.clone(),
                        bytes: article.content.len(),
                        id: article.id,
                        title: article.title,
                    });
                }
                Err(PipelineError::MalformedInput(error)) => {
                    warn!(index, line = %line, %error, "Skipped unrecognized input");
                    report.skipped.push(SkippedLine {
                        index,
                        line: line.clone(),
                    });
                }
                Err(error) => match self.policy {
                    FailurePolicy::AbortOnFirst => {
                        warn!(index, line = %line, kind = %error.kind(), "aborting batch");
                        return Err(BatchError::Article {
                            index,
                            line: line.clone(),
                            source: error,
                        });
                    }
                    FailurePolicy::CollectAll => {
                        warn!(index, line = %line, kind = %error.kind(), %error, "article failed");
                        report.failed.push(FailedArticle {
                            index,
                            line: line.clone(),
                            error,
                        });
                    }
                },
            }
        }

        report.sort();
        info!(
            completed = report.completed.len(),
            skipped = report.skipped.len(),
            failed = report.failed.len(),
            sink_failures = report.sink_failures.len(),
            "batch complete"
        );
        Ok(report)
    }
}
