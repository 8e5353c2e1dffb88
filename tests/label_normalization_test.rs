use ident_kit::{
    capitalize_words, ensure_hex_prefix, format_crypto_address, readable_word_from_underscored,
    strip_hex_prefix, title_case_from_underscored,
};

#[test]
fn test_title_case_and_readable_word_share_behavior() {
    for s in ["hello_world", "aqua_sign", "a__b", "_x_", "single"] {
        assert_eq!(
            readable_word_from_underscored(Some(s)),
            Some(title_case_from_underscored(s))
        );
    }
    assert_eq!(title_case_from_underscored("hello_world"), "Hello World");
    assert_eq!(readable_word_from_underscored(Some("")).as_deref(), Some(""));
    assert_eq!(readable_word_from_underscored(None), None);
}

#[test]
fn test_capitalize_words_is_idempotent() {
    for s in ["identity claim", "dns_claim v2", "user-signature", "", "Ñandú ok"] {
        let once = capitalize_words(s);
        assert_eq!(capitalize_words(&once), once, "input {:?}", s);
    }
}

#[test]
fn test_hex_prefix_round() {
    assert_eq!(strip_hex_prefix("0xdead"), "dead");
    assert_eq!(strip_hex_prefix("dead"), "dead");
    assert_eq!(strip_hex_prefix(strip_hex_prefix("0x0xdead")), "dead");

    let tx = "9cef4ea1";
    assert_eq!(strip_hex_prefix(&ensure_hex_prefix(tx)), tx);
}

#[test]
fn test_witness_hash_display() {
    let display = format_crypto_address(Some(&ensure_hex_prefix("abcdef0123456789")), 4, 6, None);
    assert_eq!(display, "0xab...456789");
}
