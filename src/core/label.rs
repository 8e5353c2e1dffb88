//! Human-facing labels from machine-style identifiers.

const HEX_PREFIX: &str = "0x";

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Upper-cases the first character of every run of `[A-Za-z0-9_]`.
///
/// Underscores belong to the word, so `"hello_world"` becomes `"Hello_world"`.
pub fn capitalize_words(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        let word = is_word_char(c);
        if word && !in_word {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
        in_word = word;
    }
    out
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn underscored_to_words(s: &str) -> String {
    s.split('_').map(capitalize_first).collect::<Vec<_>>().join(" ")
}

/// `"hello_world"` → `"Hello World"`.
///
/// Every underscore becomes a space, so `"a__b"` keeps an empty word and
/// renders as `"A  B"`.
pub fn title_case_from_underscored(s: &str) -> String {
    underscored_to_words(s)
}

/// Same transform as [`title_case_from_underscored`]; absent and empty input
/// come back unchanged.
pub fn readable_word_from_underscored(s: Option<&str>) -> Option<String> {
    match s {
        None => None,
        Some("") => Some(String::new()),
        Some(s) => Some(underscored_to_words(s)),
    }
}

pub fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix(HEX_PREFIX).unwrap_or(s)
}

/// Prepends `0x` unless it is already there.
pub fn ensure_hex_prefix(s: &str) -> String {
    if s.starts_with(HEX_PREFIX) {
        s.to_string()
    } else {
        format!("{}{}", HEX_PREFIX, s)
    }
}
