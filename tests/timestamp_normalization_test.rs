use ident_kit::{
    display_time, human_friendly, normalize, normalize_strict, normalize_with, CompactTimestamp,
    IdentError, TimestampPolicy,
};
use regex::Regex;

/// Deterministic 14-digit strings covering every digit in every position.
fn digit_strings() -> Vec<String> {
    let mut seed: u64 = 0x2545_F491_4F6C_DD1D;
    let mut out: Vec<String> = (0..10).map(|d| d.to_string().repeat(14)).collect();
    for _ in 0..500 {
        let s: String = (0..14)
            .map(|_| {
                seed ^= seed << 13;
                seed ^= seed >> 7;
                seed ^= seed << 17;
                char::from(b'0' + (seed % 10) as u8)
            })
            .collect();
        out.push(s);
    }
    out
}

#[test]
fn test_every_fourteen_digit_string_has_iso_shape() {
    let iso = Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}Z$").unwrap();
    for s in digit_strings() {
        let out = normalize(&s);
        assert!(iso.is_match(&out), "{} -> {}", s, out);
        assert_eq!(normalize_strict(&s).unwrap().as_str(), out);
    }
}

#[test]
fn test_known_value() {
    assert_eq!(normalize("20240115143022"), "2024-01-15T14:30:22Z");
}

#[test]
fn test_lenient_and_strict_disagree_on_short_input() {
    assert_eq!(normalize("2024"), "2024--T::Z");
    assert!(matches!(
        normalize_strict("2024"),
        Err(IdentError::MalformedInput { .. })
    ));
    assert!(normalize_with(TimestampPolicy::Lenient, "abc").is_ok());
    assert!(normalize_with(TimestampPolicy::Strict, "abc").is_err());
}

#[test]
fn test_calendar_conversion_and_display() {
    let ts = CompactTimestamp::parse("20250716115415").unwrap();
    assert_eq!(ts.to_datetime().unwrap().to_rfc3339(), "2025-07-16T11:54:15+00:00");

    assert_eq!(human_friendly(Some("20250716115415"), false), "Jul 16, 2025");
    assert_eq!(human_friendly(Some("2025-07-16T11:54:15Z"), true), "Jul 16, 2025, 11:54:15");
    assert_eq!(human_friendly(Some("20251340000000"), false), "Invalid Date");
    assert_eq!(display_time("20250716115415"), "2025-07-16 11:54:15");
}
