//! Input parsing for article identifiers.
//!
//! Users hand us loosely formatted text: bare identifiers, abstract or PDF
//! URLs, lines copied out of a bibliography. This module pulls the canonical
//! arXiv identifier (`YYMM.NNNNN[N]`) out of such text, and turns the raw
//! `--input` value into the list of lines the batch runs over.
//!
//! # Example
//!
//! ```
//! use arxiv_fetch_core::parser::extract_article_id;
//!
//! let id = extract_article_id("see https://arxiv.org/abs/1706.03762v7").unwrap();
//! assert_eq!(id.as_str(), "1706.03762");
//! ```

mod error;
mod input;

pub use error::ParseError;
pub use input::collect_input_lines;

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static ARTICLE_ID_RE: LazyLock<Regex> = LazyLock::new(|| compile_static_regex(r"\d{4}\.\d{5,6}"));

/// Compiles a regex from a literal pattern known to be valid.
///
/// # Panics
///
/// Panics if `pattern` is not a valid regex. Only call with string literals.
pub(crate) fn compile_static_regex(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid static regex '{pattern}': {e}"))
}

/// Canonical arXiv article identifier, e.g. `1706.03762`.
///
/// Values only come out of [`extract_article_id`], so every `ArticleId`
/// matches the identifier pattern. It says nothing about whether the article
/// exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArticleId(String);

impl ArticleId {
    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ArticleId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ArticleId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ArticleId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<String> for ArticleId {
    fn eq(&self, other: &String) -> bool {
        &self.0 == other
    }
}

/// Extracts the first arXiv identifier found anywhere in `line`.
///
/// The first substring matching `\d{4}\.\d{5,6}` wins and is returned
/// verbatim. Version suffixes (`v2`) and surrounding text are ignored.
///
/// # Errors
///
/// Returns [`ParseError::MalformedInput`] when `line` contains no identifier.
pub fn extract_article_id(line: &str) -> Result<ArticleId, ParseError> {
    ARTICLE_ID_RE
        .find(line)
        .map(|m| ArticleId(m.as_str().to_string()))
        .ok_or_else(|| ParseError::malformed_input(line))
}
