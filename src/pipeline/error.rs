//! Error types for a single article pipeline run.

use std::fmt;

use thiserror::Error;

use crate::fetch::FetchError;
use crate::parser::ParseError;

/// High-level failure category, independent of transport details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input line contains no identifier.
    MalformedInput,
    /// The server could not be reached or answered with a failure status.
    UpstreamUnavailable,
    /// The abstract page lacked the expected title element.
    UnparsableResponse,
    /// The abstract page reports a different identifier than requested.
    IdentityMismatch,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedInput => write!(f, "malformed input"),
            Self::UpstreamUnavailable => write!(f, "upstream unavailable"),
            Self::UnparsableResponse => write!(f, "unparsable response"),
            Self::IdentityMismatch => write!(f, "identity mismatch"),
        }
    }
}

/// Errors from [`ArticlePipeline::run`](super::ArticlePipeline::run).
#[derive(Debug, Error)]
pub enum PipelineError {
    /// No identifier could be extracted from the input line.
    #[error(transparent)]
    MalformedInput(#[from] ParseError),

    /// Fetching the abstract page or the PDF failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The abstract page belongs to a different article.
    #[error("identity mismatch: requested {requested} but server reported {reported}")]
    IdentityMismatch {
        /// Identifier extracted from the input line.
        requested: String,
        /// Identifier embedded in the abstract page title.
        reported: String,
    },
}

impl PipelineError {
    /// Returns the failure category.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedInput(_) => ErrorKind::MalformedInput,
            Self::Fetch(FetchError::UnparsableResponse { .. }) => ErrorKind::UnparsableResponse,
            Self::Fetch(_) => ErrorKind::UpstreamUnavailable,
            Self::IdentityMismatch { .. } => ErrorKind::IdentityMismatch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_error_kinds() {
        let malformed = PipelineError::from(ParseError::malformed_input("nope"));
        assert_eq!(malformed.kind(), ErrorKind::MalformedInput);

        let upstream = PipelineError::from(FetchError::upstream_unavailable("u", 502));
        assert_eq!(upstream.kind(), ErrorKind::UpstreamUnavailable);

        let timeout = PipelineError::from(FetchError::timeout("u"));
        assert_eq!(timeout.kind(), ErrorKind::UpstreamUnavailable);

        let unparsable = PipelineError::from(FetchError::unparsable("u", "no title"));
        assert_eq!(unparsable.kind(), ErrorKind::UnparsableResponse);

        let mismatch = PipelineError::IdentityMismatch {
            requested: "1706.03762".to_string(),
            reported: "1706.99999".to_string(),
        };
        assert_eq!(mismatch.kind(), ErrorKind::IdentityMismatch);
    }

    #[test]
    fn test_identity_mismatch_message_names_both_ids() {
        let msg = PipelineError::IdentityMismatch {
            requested: "1706.03762".to_string(),
            reported: "1706.99999".to_string(),
        }
        .to_string();
        assert!(msg.contains("1706.03762"), "{msg}");
        assert!(msg.contains("1706.99999"), "{msg}");
    }
}
