//! Integration tests for the parser module.
//!
//! These tests run realistic `--input` values through line collection and
//! identifier extraction together, the way the binary does.

use std::fs;

use arxiv_fetch_core::parser::{ParseError, collect_input_lines, extract_article_id};

/// Test a reading list file with URLs, citations and noise mixed in.
#[test]
fn test_parse_realistic_reading_list_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("reading-list.txt");
    fs::write(
        &path,
        r"
# transformers
https://arxiv.org/abs/1706.03762
https://arxiv.org/pdf/1810.04805v2.pdf

[3] Brown et al. Language Models are Few-Shot Learners. arXiv:2005.14165, 2020.
remember to read the survey too
",
    )
    .unwrap();

    let lines = collect_input_lines(path.to_str().unwrap()).unwrap();
    assert_eq!(lines.len(), 5, "blank lines dropped: {lines:?}");

    let (ids, rejected): (Vec<_>, Vec<_>) = lines
        .iter()
        .map(|line| extract_article_id(line))
        .partition(Result::is_ok);

    let ids: Vec<String> = ids.into_iter().map(|r| r.unwrap().to_string()).collect();
    assert_eq!(ids, ["1706.03762", "1810.04805", "2005.14165"]);
    assert_eq!(rejected.len(), 2, "comment and note lines have no identifier");
}

/// Test comma-separated identifiers with stray whitespace.
#[test]
fn test_parse_comma_separated_identifiers() {
    let lines = collect_input_lines(" 1706.03762 , 2401.123456,arXiv:2005.14165 ").unwrap();
    let ids: Vec<String> = lines
        .iter()
        .map(|line| extract_article_id(line).unwrap().to_string())
        .collect();
    assert_eq!(ids, ["1706.03762", "2401.123456", "2005.14165"]);
}

/// Test that a URL is never mistaken for a file path.
#[test]
fn test_parse_url_input_is_not_read_as_file() {
    let lines = collect_input_lines("https://arxiv.org/abs/1706.03762v7").unwrap();
    assert_eq!(lines, ["https://arxiv.org/abs/1706.03762v7"]);
    assert_eq!(extract_article_id(&lines[0]).unwrap(), "1706.03762");
}

/// Test that extraction is independent of surrounding text.
#[test]
fn test_extract_returns_exact_match_regardless_of_context() {
    let id = "2312.11805";
    for (prefix, suffix) in [
        ("", ""),
        ("arXiv:", "v3"),
        ("https://arxiv.org/pdf/", ".pdf"),
        ("see (", ") for details"),
        ("\t", "\n"),
    ] {
        let line = format!("{prefix}{id}{suffix}");
        assert_eq!(
            extract_article_id(&line).unwrap().as_str(),
            id,
            "failed for {line:?}"
        );
    }
}

/// Test that old-style and truncated identifiers are rejected.
#[test]
fn test_extract_rejects_non_matching_lines() {
    for line in ["math.GT/0309136", "1706.0376", "17060.3762", "no id here"] {
        let err = extract_article_id(line).unwrap_err();
        assert!(
            matches!(err, ParseError::MalformedInput { .. }),
            "expected MalformedInput for {line:?}, got {err:?}"
        );
    }
}
