//! Content hashes embedded in URLs.
//!
//! Two strategies exist and they are deliberately kept apart:
//! [`file_hash_from_url`] only recognizes lowercase hex under `/files/`,
//! while [`extract_file_hash`] returns the last path segment of any absolute URL.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

use crate::domain::model::HashStrategy;
use crate::domain::ports::HashExtractor;
use crate::utils::error::{IdentError, Result};

static FILES_HASH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/files/([a-f0-9]+)").expect("static regex is valid"));

/// Returns the hex hash following the first `/files/` segment, or `""`.
pub fn file_hash_from_url(url: &str) -> String {
    FILES_HASH_RE
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Returns the text after the last `/` of the URL path, or `None` when the
/// input is not an absolute URL.
pub fn extract_file_hash(url: &str) -> Option<String> {
    match try_extract_file_hash(url) {
        Ok(hash) => Some(hash),
        Err(e) => {
            tracing::warn!("{}", e);
            None
        }
    }
}

/// Same as [`extract_file_hash`], keeping the parse error.
pub fn try_extract_file_hash(url: &str) -> Result<String> {
    let parsed = Url::parse(url).map_err(|e| IdentError::InvalidUrl {
        value: url.to_string(),
        reason: e.to_string(),
    })?;

    // rsplit 一定至少產生一個元素
    Ok(parsed.path().rsplit('/').next().unwrap_or_default().to_string())
}

pub fn is_valid_url(s: &str) -> bool {
    Url::parse(s).is_ok()
}

/// True for absolute `http`/`https` URLs without any whitespace.
pub fn is_http_url(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    match Url::parse(s) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PatternExtractor;

impl HashExtractor for PatternExtractor {
    fn name(&self) -> &'static str {
        "pattern"
    }

    fn extract(&self, url: &str) -> Option<String> {
        let hash = file_hash_from_url(url);
        if hash.is_empty() {
            None
        } else {
            Some(hash)
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PathTailExtractor;

impl HashExtractor for PathTailExtractor {
    fn name(&self) -> &'static str {
        "path-tail"
    }

    fn extract(&self, url: &str) -> Option<String> {
        extract_file_hash(url)
    }
}

pub fn extractor_for(strategy: HashStrategy) -> Box<dyn HashExtractor> {
    match strategy {
        HashStrategy::Pattern => Box::new(PatternExtractor),
        HashStrategy::PathTail => Box::new(PathTailExtractor),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_hash_from_url() {
        assert_eq!(file_hash_from_url("https://x/files/abc123"), "abc123");
        assert_eq!(file_hash_from_url("https://x/other/abc123"), "");
        assert_eq!(
            file_hash_from_url("https://api.example.com/files/deadbeef?nonce=1"),
            "deadbeef"
        );
        // uppercase hex stops the match
        assert_eq!(file_hash_from_url("https://x/files/abcDEF"), "abc");
        assert_eq!(file_hash_from_url("https://x/files/XYZ"), "");
        assert_eq!(file_hash_from_url("not a url /files/00ff"), "00ff");
        assert_eq!(file_hash_from_url(""), "");
    }

    #[test]
    fn test_first_files_segment_wins() {
        assert_eq!(file_hash_from_url("https://x/files/aa/files/bb"), "aa");
    }

    #[test]
    fn test_extract_file_hash() {
        assert_eq!(
            extract_file_hash("https://x/y/deadbeef").as_deref(),
            Some("deadbeef")
        );
        assert_eq!(
            extract_file_hash("https://x/files/abc?download=1#top").as_deref(),
            Some("abc")
        );
        assert_eq!(extract_file_hash("https://x/y/").as_deref(), Some(""));
        assert_eq!(extract_file_hash("https://x").as_deref(), Some(""));
        assert_eq!(extract_file_hash("not a url"), None);
        assert_eq!(extract_file_hash(""), None);
    }

    #[test]
    fn test_try_extract_reports_invalid_url() {
        assert!(matches!(
            try_extract_file_hash("not a url"),
            Err(IdentError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_strategies_disagree() {
        let url = "https://x/other/ZZZ";
        assert_eq!(extractor_for(HashStrategy::Pattern).extract(url), None);
        assert_eq!(
            extractor_for(HashStrategy::PathTail).extract(url).as_deref(),
            Some("ZZZ")
        );
    }

    #[test]
    fn test_url_checks() {
        assert!(is_valid_url("https://example.com"));
        assert!(is_valid_url("ftp://example.com/a"));
        assert!(!is_valid_url("example.com"));

        assert!(is_http_url("http://example.com/files/ab"));
        assert!(!is_http_url("ftp://example.com"));
        assert!(!is_http_url("https://example.com/a b"));
        assert!(!is_http_url("https://example.com\n"));
    }
}
