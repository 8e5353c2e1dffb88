use ident_kit::{
    extract_file_hash, extractor_for, file_hash_from_url, is_http_url, try_extract_file_hash,
    HashExtractor, HashStrategy, PathTailExtractor, PatternExtractor,
};

#[test]
fn test_pattern_anchored_extraction() {
    assert_eq!(file_hash_from_url("https://x/files/abc123"), "abc123");
    assert_eq!(file_hash_from_url("https://x/other/abc123"), "");
}

#[test]
fn test_path_tail_extraction() {
    assert_eq!(extract_file_hash("https://x/y/deadbeef").as_deref(), Some("deadbeef"));
    assert_eq!(extract_file_hash("not a url"), None);
    assert!(try_extract_file_hash("not a url").is_err());
}

#[test]
fn test_strategies_are_not_interchangeable() {
    let pattern = PatternExtractor;
    let tail = PathTailExtractor;

    // tail is permissive about the segment
    let url = "https://api.example.com/downloads/report.pdf";
    assert_eq!(pattern.extract(url), None);
    assert_eq!(tail.extract(url).as_deref(), Some("report.pdf"));

    // pattern does not need a parseable URL
    let relative = "/files/00ff/meta";
    assert_eq!(pattern.extract(relative).as_deref(), Some("00ff"));
    assert_eq!(tail.extract(relative), None);

    // both agree on the canonical shape
    let canonical = "https://api.example.com/files/9f86d081884c7d65";
    assert_eq!(pattern.extract(canonical), tail.extract(canonical));
}

#[test]
fn test_extractor_for_strategy() {
    assert_eq!(extractor_for(HashStrategy::Pattern).name(), "pattern");
    assert_eq!(extractor_for(HashStrategy::PathTail).name(), "path-tail");
}

#[test]
fn test_http_url_check() {
    assert!(is_http_url("https://api.example.com/files/abc"));
    assert!(!is_http_url("wss://api.example.com"));
    assert!(!is_http_url("api.example.com"));
}
