//! Configuration file parsing utilities.
//!
//! This module provides helpers for parsing configuration files with common
//! patterns like comment skipping and key-value parsing.

/// What: Check if a line should be skipped (empty or comment).
///
/// Inputs:
/// - `line`: Line to check
///
/// Output:
/// - `true` if the line should be skipped, `false` otherwise
///
/// Details:
/// - Skips empty lines and lines starting with `#`, `//`, or `;`
#[must_use]
pub fn skip_comment_or_empty(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("//")
        || trimmed.starts_with(';')
}

/// What: Parse a key-value pair from a line.
///
/// Inputs:
/// - `line`: Line containing key=value format
///
/// Output:
/// - `Some((key, value))` if parsing succeeds, `None` otherwise
///
/// Details:
/// - Splits on the first `=` character
/// - Normalizes the key to lowercase with `.`, `-` and spaces mapped to `_`
/// - Trims whitespace and any trailing inline comment from the value
#[must_use]
pub fn parse_key_value(line: &str) -> Option<(String, String)> {
    let (raw_key, raw_val) = line.trim().split_once('=')?;
    let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
    if key.is_empty() {
        return None;
    }
    let value = strip_inline_comment(raw_val).to_string();
    Some((key, value))
}

/// What: Remove a trailing ` # comment` from a value.
///
/// Inputs:
/// - `s`: Raw value text
///
/// Output:
/// - Trimmed value without the comment.
///
/// Details:
/// - Only a `#` preceded by whitespace starts a comment, so URL fragments and
///   `//` inside `http://` survive.
#[must_use]
pub fn strip_inline_comment(s: &str) -> &str {
    let bytes = s.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        if *b == b'#' && i > 0 && bytes[i - 1].is_ascii_whitespace() {
            return s[..i].trim();
        }
    }
    s.trim()
}

/// What: Interpret common boolean spellings.
///
/// Inputs:
/// - `val`: Raw value
///
/// Output:
/// - `Some(true)` for `true`, `1`, `yes`, `on`; `Some(false)` for `false`, `0`, `no`, `off`
///   (case-insensitive); `None` for anything else.
#[must_use]
pub fn parse_bool(val: &str) -> Option<bool> {
    match val.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Comment and blank detection covers all supported prefixes
    fn config_skip_comment_or_empty() {
        assert!(skip_comment_or_empty(""));
        assert!(skip_comment_or_empty("   "));
        assert!(skip_comment_or_empty("# note"));
        assert!(skip_comment_or_empty("// note"));
        assert!(skip_comment_or_empty("; note"));
        assert!(!skip_comment_or_empty("sort_mode = newest"));
    }

    #[test]
    /// What: Key/value parsing normalizes keys and keeps URLs intact
    ///
    /// - Input: Dashed key, URL value, inline comment
    /// - Output: Normalized key; value without comment; URL untouched
    fn config_parse_key_value_and_comments() {
        assert_eq!(
            parse_key_value("Sort-Mode = newest # default is featured"),
            Some(("sort_mode".to_string(), "newest".to_string()))
        );
        assert_eq!(
            parse_key_value("api_base_url = http://localhost:5000/api#frag"),
            Some((
                "api_base_url".to_string(),
                "http://localhost:5000/api#frag".to_string()
            ))
        );
        assert_eq!(parse_key_value("no equals sign"), None);
        assert_eq!(parse_key_value(" = value"), None);
        assert_eq!(parse_bool("Yes"), Some(true));
        assert_eq!(parse_bool("on"), Some(true));
        assert_eq!(parse_bool(" OFF "), Some(false));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("ture"), None);
        assert_eq!(parse_bool(""), None);
    }
}
