//! Writing article PDFs to disk.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::{NamedTempFile, TempDir};
use thiserror::Error;
use tracing::{debug, info, instrument};

use super::filename::article_filename;

/// Errors from saving articles or managing the scratch directory.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The target directory could not be created.
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Writing the article bytes failed.
    #[error("IO error writing to {path}: {source}")]
    Write {
        /// Final path the article was headed for.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The scratch directory could not be created or removed.
    #[error("scratch directory error: {source}")]
    Scratch {
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The blocking write task was cancelled or panicked.
    #[error("write task for {path} did not complete: {reason}")]
    Task {
        /// Final path the article was headed for.
        path: PathBuf,
        /// Join failure description.
        reason: String,
    },
}

/// Saves articles as `<dir>/<title>.pdf`.
#[derive(Debug, Clone)]
pub struct ArticleStore {
    dir: PathBuf,
}

impl ArticleStore {
    /// Opens a store rooted at `dir`, creating the directory if missing.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::CreateDir`] if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        if !dir.exists() {
            std::fs::create_dir_all(&dir).map_err(|source| StorageError::CreateDir {
                path: dir.clone(),
                source,
            })?;
            info!(dir = %dir.display(), "Created output directory");
        }
        Ok(Self { dir })
    }

    /// Directory articles are written into.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Final path an article with `title` is saved to.
    #[must_use]
    pub fn path_for(&self, title: &str) -> PathBuf {
        self.dir.join(article_filename(title))
    }

    /// Writes `content` to [`path_for(title)`](Self::path_for) and returns
    /// that path.
    ///
    /// Bytes go to a temporary file in the same directory which is then
    /// renamed over the target, so readers see either the previous file or the
    /// complete new one. An existing file with the same title is replaced.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Write`] if any filesystem step fails.
    #[instrument(skip(self, content), fields(bytes = content.len()))]
    pub async fn save(&self, title: &str, content: &[u8]) -> Result<PathBuf, StorageError> {
        let final_path = self.path_for(title);
        info!(path = %final_path.display(), "saving");

        let dir = self.dir.clone();
        let target = final_path.clone();
        let bytes = content.to_vec();
        tokio::task::spawn_blocking(move || write_atomically(&dir, &target, &bytes))
            .await
            .map_err(|e| StorageError::Task {
                path: final_path.clone(),
                reason: e.to_string(),
            })??;

        debug!(path = %final_path.display(), "saved");
        Ok(final_path)
    }
}

fn write_atomically(dir: &Path, target: &Path, bytes: &[u8]) -> Result<(), StorageError> {
    let write_err = |source| StorageError::Write {
        path: target.to_path_buf(),
        source,
    };

    let mut staged = NamedTempFile::new_in(dir).map_err(write_err)?;
    staged.write_all(bytes).map_err(write_err)?;
    staged.as_file().sync_all().map_err(write_err)?;
    staged.persist(target).map_err(|e| write_err(e.error))?;
    Ok(())
}

/// Process-lifetime directory for PDFs that are printed but not kept.
///
/// The directory is removed when the handle is dropped or
/// [`close`](Self::close)d, whichever comes first.
#[derive(Debug)]
pub struct ScratchDir {
    dir: TempDir,
}

impl ScratchDir {
    /// Creates a fresh directory under the system temp location.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Scratch`] if the directory cannot be created.
    pub fn create() -> Result<Self, StorageError> {
        let dir = tempfile::Builder::new()
            .prefix("arxiv-fetch-")
            .tempdir()
            .map_err(|source| StorageError::Scratch { source })?;
        debug!(dir = %dir.path().display(), "created scratch directory");
        Ok(Self { dir })
    }

    /// Path of the scratch directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Removes the directory and everything in it.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Scratch`] if removal fails. The directory
    /// handle is consumed either way.
    pub fn close(self) -> Result<(), StorageError> {
        info!(dir = %self.dir.path().display(), "deleting temporary directory");
        self.dir
            .close()
            .map_err(|source| StorageError::Scratch { source })
    }
}
