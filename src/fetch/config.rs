//! Endpoint and timeout configuration for [`ArxivClient`](super::ArxivClient).

use std::time::Duration;

use url::Url;

use super::FetchError;

/// Base URL of human-readable abstract pages.
pub const ARXIV_ABS_BASE_URL: &str = "https://arxiv.org/abs/";

/// Base URL of PDF documents.
pub const ARXIV_PDF_BASE_URL: &str = "https://arxiv.org/pdf/";

/// Default HTTP connect timeout (10 seconds).
pub const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Default HTTP read timeout (2 minutes; PDFs can be large).
pub const READ_TIMEOUT_SECS: u64 = 120;

/// Accepted range for either timeout, in seconds.
pub const TIMEOUT_RANGE_SECS: std::ops::RangeInclusive<u64> = 1..=3600;

/// Where to fetch from and how long to wait.
///
/// Requests go to `<base><id>`, so both base URLs are stored with a trailing
/// slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    abs_base_url: String,
    pdf_base_url: String,
    connect_timeout: Duration,
    read_timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            abs_base_url: ARXIV_ABS_BASE_URL.to_string(),
            pdf_base_url: ARXIV_PDF_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(CONNECT_TIMEOUT_SECS),
            read_timeout: Duration::from_secs(READ_TIMEOUT_SECS),
        }
    }
}

impl FetchConfig {
    /// Creates a config with custom endpoints and default timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidBaseUrl`] if either URL does not parse or
    /// is not http(s).
    pub fn with_base_urls(abs_base_url: &str, pdf_base_url: &str) -> Result<Self, FetchError> {
        Ok(Self {
            abs_base_url: normalize_base_url(abs_base_url)?,
            pdf_base_url: normalize_base_url(pdf_base_url)?,
            ..Self::default()
        })
    }

    /// Replaces both timeouts (seconds).
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidConfig`] if either value is outside
    /// [`TIMEOUT_RANGE_SECS`].
    pub fn timeouts(
        mut self,
        connect_timeout_secs: u64,
        read_timeout_secs: u64,
    ) -> Result<Self, FetchError> {
        for (field, value) in [
            ("connect timeout", connect_timeout_secs),
            ("read timeout", read_timeout_secs),
        ] {
            if !TIMEOUT_RANGE_SECS.contains(&value) {
                return Err(FetchError::invalid_config(
                    field,
                    format!(
                        "{value}s out of range {}..={}",
                        TIMEOUT_RANGE_SECS.start(),
                        TIMEOUT_RANGE_SECS.end()
                    ),
                ));
            }
        }
        self.connect_timeout = Duration::from_secs(connect_timeout_secs);
        self.read_timeout = Duration::from_secs(read_timeout_secs);
        Ok(self)
    }

    /// Abstract page base URL, with trailing slash.
    #[must_use]
    pub fn abs_base_url(&self) -> &str {
        &self.abs_base_url
    }

    /// PDF base URL, with trailing slash.
    #[must_use]
    pub fn pdf_base_url(&self) -> &str {
        &self.pdf_base_url
    }

    /// Connect timeout.
    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    /// Whole-request timeout.
    #[must_use]
    pub fn read_timeout(&self) -> Duration {
        self.read_timeout
    }
}

fn normalize_base_url(raw: &str) -> Result<String, FetchError> {
    let trimmed = raw.trim();
    let parsed = Url::parse(trimmed).map_err(|e| FetchError::invalid_base_url(raw, e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(FetchError::invalid_base_url(
            raw,
            format!("scheme '{}' is not supported", parsed.scheme()),
        ));
    }
    if parsed.host_str().is_none() {
        return Err(FetchError::invalid_base_url(raw, "URL has no host"));
    }

    let mut normalized = parsed.to_string();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    Ok(normalized)
}
