//! Title extraction from abstract page HTML.
//!
//! arXiv abstract pages carry `<title>[1706.03762] Attention Is All You Need</title>`
//! in their `<head>`. The body can quote other articles, so the search is
//! limited to the head section when the page has one.

use std::sync::LazyLock;

use regex::Regex;

use crate::parser::compile_static_regex;

static HEAD_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_static_regex(r"(?is)<head\b[^>]*>(.*?)</head\s*>"));

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile_static_regex(r"(?is)<title\b[^>]*>\s*\[([^\]]*)\](.*?)</title\s*>")
});

/// Identifier and title as reported by an abstract page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleMetadata {
    /// Identifier embedded in the title element. Not guaranteed to match the
    /// identifier that was requested.
    pub reported_id: String,
    /// Title text, trimmed, entity-decoded, whitespace-collapsed.
    pub title: String,
}

/// Finds the first `<title>[id] text</title>` element, searching only the
/// `<head>` section if the document has one.
///
/// Returns `None` when no such element exists or the title text is empty.
#[must_use]
pub fn parse_title_element(html: &str) -> Option<ArticleMetadata> {
    let region = HEAD_RE
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map_or(html, |head| head.as_str());

    let caps = TITLE_RE.captures(region)?;
    let reported_id = caps.get(1)?.as_str().trim().to_string();
    let title = normalize_title(caps.get(2)?.as_str());
    if title.is_empty() {
        return None;
    }

    Some(ArticleMetadata { reported_id, title })
}

fn normalize_title(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    decode_entities(&collapsed)
}

// `&amp;` goes last so "&amp;lt;" decodes to "&lt;", not "<".
fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
