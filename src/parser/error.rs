//! Error types for input parsing operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while turning user input into article identifiers.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The line contains no `YYMM.NNNNN` identifier.
    #[error("invalid input '{line}': no arXiv identifier found\n  Suggestion: Use the YYMM.NNNNN form, e.g. 1706.03762")]
    MalformedInput {
        /// The offending input line.
        line: String,
    },

    /// `--input` was empty or only separators.
    #[error("no input given\n  Suggestion: Pass identifiers like 1706.03762,2301.01234 or a file path")]
    EmptyInput,

    /// The input file exists but could not be read.
    #[error("failed to read input file {path}: {source}")]
    ReadFile {
        /// The input file path.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl ParseError {
    /// Creates a `MalformedInput` error for `line`.
    #[must_use]
    pub fn malformed_input(line: &str) -> Self {
        Self::MalformedInput {
            line: line.to_string(),
        }
    }

    /// Creates a `ReadFile` error.
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }
}
