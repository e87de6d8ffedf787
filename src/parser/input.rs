//! Splitting the raw `--input` value into identifier-bearing lines.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::ParseError;

/// Turns the `--input` value into the list of lines to process.
///
/// The value is split on commas and each token trimmed. When that leaves a
/// single token naming an existing file, the file is read instead and every
/// non-blank line (trimmed) becomes an entry. Lines are not validated here;
/// identifier extraction happens per line in the pipeline.
///
/// # Errors
///
/// Returns [`ParseError::EmptyInput`] if nothing remains after splitting, or
/// [`ParseError::ReadFile`] if the input file cannot be read.
pub fn collect_input_lines(input: &str) -> Result<Vec<String>, ParseError> {
    let tokens: Vec<String> = input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect();

    if let [single] = tokens.as_slice() {
        let path = Path::new(single);
        if path.is_file() {
            debug!(path = %path.display(), "reading input lines from file");
            let text = fs::read_to_string(path).map_err(|e| ParseError::read_file(path, e))?;
            let lines = lines_from_text(&text);
            if lines.is_empty() {
                return Err(ParseError::EmptyInput);
            }
            return Ok(lines);
        }
    }

    if tokens.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    Ok(tokens)
}

fn lines_from_text(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_splits_on_commas_and_trims() {
        let lines = collect_input_lines("1706.03762, 2301.01234 ,2302.00001").unwrap();
        assert_eq!(lines, ["1706.03762", "2301.01234", "2302.00001"]);
    }

    #[test]
    fn test_collect_single_identifier() {
        let lines = collect_input_lines("1706.03762").unwrap();
        assert_eq!(lines, ["1706.03762"]);
    }

    #[test]
    fn test_collect_drops_empty_tokens() {
        let lines = collect_input_lines("1706.03762,,").unwrap();
        assert_eq!(lines, ["1706.03762"]);
    }

    #[test]
    fn test_collect_empty_input_is_error() {
        assert!(matches!(
            collect_input_lines(" , ,"),
            Err(ParseError::EmptyInput)
        ));
        assert!(matches!(collect_input_lines(""), Err(ParseError::EmptyInput)));
    }

    #[test]
    fn test_collect_reads_file_lines() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("ids.txt");
        fs::write(
            &path,
            "1706.03762\n\nhttps://arxiv.org/abs/2301.01234\n  2302.00001  \n",
        )
        .unwrap();

        let lines = collect_input_lines(path.to_str().unwrap()).unwrap();
        assert_eq!(
            lines,
            ["1706.03762", "https://arxiv.org/abs/2301.01234", "2302.00001"]
        );
    }

    #[test]
    fn test_collect_blank_file_is_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("ids.txt");
        fs::write(&path, "\n   \n").unwrap();

        assert!(matches!(
            collect_input_lines(path.to_str().unwrap()),
            Err(ParseError::EmptyInput)
        ));
    }

    #[test]
    fn test_collect_nonexistent_path_is_treated_as_identifier_text() {
        let lines = collect_input_lines("/definitely/not/here.txt").unwrap();
        assert_eq!(lines, ["/definitely/not/here.txt"]);
    }
}
