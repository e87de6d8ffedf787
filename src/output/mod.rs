//! Post-processing of fetched articles: saving and printing.
//!
//! The batch coordinator hands every fetched [`Article`] to an
//! [`ArticleSink`]. [`OutputSink`] is the production sink: it saves the PDF
//! through an [`ArticleStore`] and, when a printer is available, submits the
//! saved file as a print job.
//!
//! [`OutputPlan::prepare`] wires the pieces together from the CLI choices,
//! creating a [`ScratchDir`] when printing is requested without a save
//! directory. The caller owns that handle; dropping it removes the directory.

mod filename;
mod printer;
mod storage;

pub use filename::{PDF_EXTENSION, article_filename};
pub use printer::{LpPrinter, PrintError, PrintJob, Printer};
pub use storage::{ArticleStore, ScratchDir, StorageError};

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

use crate::pipeline::Article;

/// Errors returned by an [`ArticleSink`].
#[derive(Debug, Error)]
pub enum SinkError {
    /// The article could not be saved; it was not printed either.
    #[error("saving failed: {0}")]
    Save(#[source] StorageError),

    /// The article was saved but the print job was not accepted.
    #[error("printing failed: {0}")]
    Print(#[source] PrintError),
}

/// Receives each fetched article, one at a time, in completion order.
#[async_trait]
pub trait ArticleSink: Send + Sync {
    /// Processes one article. The coordinator awaits this before treating the
    /// article as done.
    async fn accept(&self, article: &Article) -> Result<(), SinkError>;
}

/// Saves articles and optionally prints the saved file.
#[derive(Debug)]
pub struct OutputSink {
    store: Option<ArticleStore>,
    printer: Printer,
}

impl OutputSink {
    /// Creates a sink. Without a store nothing is saved, and nothing can be
    /// printed either since printing works from the saved file.
    #[must_use]
    pub fn new(store: Option<ArticleStore>, printer: Printer) -> Self {
        Self { store, printer }
    }

    /// Store articles are saved into, if any.
    #[must_use]
    pub fn store(&self) -> Option<&ArticleStore> {
        self.store.as_ref()
    }

    /// Print capability for this run.
    #[must_use]
    pub fn printer(&self) -> &Printer {
        &self.printer
    }
}

#[async_trait]
impl ArticleSink for OutputSink {
    async fn accept(&self, article: &Article) -> Result<(), SinkError> {
        let Some(store) = &self.store else {
            return Ok(());
        };

        let path = store
            .save(&article.title, &article.content)
            .await
            .map_err(SinkError::Save)?;

        if let Printer::Available(printer) = &self.printer {
            printer
                .submit(&path, &article.title)
                .await
                .map_err(SinkError::Print)?;
        }
        Ok(())
    }
}

/// Output wiring for one run.
#[derive(Debug)]
pub struct OutputPlan {
    /// Sink to hand to the batch coordinator.
    pub sink: OutputSink,
    /// Scratch directory backing the store in print-only runs. Keep it alive
    /// until the batch is over; dropping it deletes the directory.
    pub scratch: Option<ScratchDir>,
}

impl OutputPlan {
    /// Chooses where articles go.
    ///
    /// - `save_dir` given: save there (created if missing).
    /// - no `save_dir`, printer available: save into a fresh scratch directory.
    /// - neither: save nothing.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the save or scratch directory cannot be
    /// created.
    pub fn prepare(save_dir: Option<&Path>, printer: Printer) -> Result<Self, StorageError> {
        let (store, scratch) = match save_dir {
            Some(dir) => (Some(ArticleStore::open(dir)?), None),
            None if printer.is_available() => {
                let scratch = ScratchDir::create()?;
                let store = ArticleStore::open(scratch.path())?;
                (Some(store), Some(scratch))
            }
            None => {
                info!("not saving");
                (None, None)
            }
        };

        if let Some(store) = &store {
            info!(dir = %store.dir().display(), "saving to directory");
        }

        Ok(Self {
            sink: OutputSink::new(store, printer),
            scratch,
        })
    }
}
