//! User-Agent string for arXiv requests.
//!
//! arXiv asks automated clients to identify themselves, so every request
//! carries the tool name and version.

/// Default User-Agent for abstract and PDF requests.
#[must_use]
pub(crate) fn default_user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("arxiv-fetch/{version} (academic-research-tool)")
}
