//! Error types for arXiv fetch operations.

use thiserror::Error;

/// Errors that can occur while talking to the arXiv endpoints.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level error (DNS resolution, connection refused, TLS errors, etc.)
    #[error("network error fetching {url}: {source}")]
    Network {
        /// The URL that failed.
        url: String,
        /// The underlying network error.
        #[source]
        source: reqwest::Error,
    },

    /// Request timed out before completion.
    #[error("timeout fetching {url}")]
    Timeout {
        /// The URL that timed out.
        url: String,
    },

    /// The server answered with a non-success status.
    #[error("upstream unavailable: HTTP {status} fetching {url}")]
    UpstreamUnavailable {
        /// The URL that returned an error status.
        url: String,
        /// The HTTP status code.
        status: u16,
    },

    /// The abstract page did not contain a recognizable title element.
    #[error("unparsable response from {url}: {reason}")]
    UnparsableResponse {
        /// The URL whose body could not be parsed.
        url: String,
        /// What was missing from the body.
        reason: String,
    },

    /// A configured endpoint base URL is not usable.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl {
        /// The rejected base URL.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A configuration value is outside its accepted range.
    #[error("invalid {setting}: {reason}")]
    InvalidConfig {
        /// The rejected setting.
        setting: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The HTTP client could not be constructed.
    #[error("HTTP client construction failed: {reason}")]
    ClientBuild {
        /// Why construction failed.
        reason: String,
    },
}

impl FetchError {
    /// Creates a network error from a reqwest error.
    pub fn network(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            url: url.into(),
            source,
        }
    }

    /// Creates a timeout error.
    pub fn timeout(url: impl Into<String>) -> Self {
        Self::Timeout { url: url.into() }
    }

    /// Maps a transport error from reqwest onto `Timeout` or `Network`.
    pub fn from_transport(url: impl Into<String>, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            Self::timeout(url)
        } else {
            Self::network(url, source)
        }
    }

    /// Creates an upstream-unavailable error for a non-success status.
    pub fn upstream_unavailable(url: impl Into<String>, status: u16) -> Self {
        Self::UpstreamUnavailable {
            url: url.into(),
            status,
        }
    }

    /// Creates an unparsable-response error.
    pub fn unparsable(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::UnparsableResponse {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid base URL error.
    pub fn invalid_base_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidBaseUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(setting: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            setting: setting.into(),
            reason: reason.into(),
        }
    }

    /// Returns true when the remote side could not be reached or refused the
    /// request: transport failure, timeout, or non-success status.
    #[must_use]
    pub fn is_upstream_unavailable(&self) -> bool {
        matches!(
            self,
            Self::Network { .. } | Self::Timeout { .. } | Self::UpstreamUnavailable { .. }
        )
    }
}
