//! Filename derivation for saved articles.

/// Extension appended to every saved article.
pub const PDF_EXTENSION: &str = ".pdf";

/// Fallback stem when a title sanitizes to nothing.
const UNTITLED: &str = "untitled";

/// Keeps titles readable while staying under common filesystem limits (255 bytes).
const MAX_STEM_CHARS: usize = 200;

/// Builds `<title>.pdf` with characters illegal on common filesystems
/// replaced by `_`.
///
/// Spaces and punctuation that are legal everywhere are kept, so the saved
/// file reads like the title. The result depends only on `title`, so the same
/// title always maps to the same file.
#[must_use]
pub fn article_filename(title: &str) -> String {
    format!("{}{PDF_EXTENSION}", sanitize_title(title))
}

fn sanitize_title(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut prev_sep = false;
    for ch in title.chars() {
        let mapped = match ch {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => ' ',
            c => c,
        };
        if mapped == '_' {
            if !prev_sep {
                out.push('_');
            }
            prev_sep = true;
        } else {
            out.push(mapped);
            prev_sep = false;
        }
    }

    let truncated: String = out.chars().take(MAX_STEM_CHARS).collect();
    // Leading dots would hide the file; trailing dots/spaces are stripped by Windows.
    let stem = truncated
        .trim()
        .trim_start_matches('.')
        .trim_end_matches(['.', ' '])
        .to_string();
    if stem.is_empty() || stem.chars().all(|c| c == '_') {
        UNTITLED.to_string()
    } else {
        stem
    }
}
