use mdt_utils::{Error, dna_hash, dna_hash_strict, is_single_byte};

#[test]
fn empty_input_gives_empty_hash() {
    assert_eq!(dna_hash(""), "");
    assert_eq!(dna_hash_strict("").unwrap(), "");
}

#[test]
fn single_char() {
    assert_eq!(dna_hash("A"), "41");
}

#[test]
fn lowercase_hex_in_input_order() {
    assert_eq!(dna_hash("Hi!"), "486921");
    assert_eq!(dna_hash("~z"), "7e7a");
    assert_eq!(dna_hash(" 0"), "2030");
}

#[test]
fn length_is_twice_input_for_single_byte() {
    for input in ["", "a", "player:42", "ÿþ\u{0}\u{7f}", "license:abcdef0123456789"] {
        assert!(is_single_byte(input));
        assert_eq!(dna_hash(input).len(), 2 * input.chars().count(), "{input:?}");
    }
}

#[test]
fn wide_chars_are_not_truncated() {
    // U+0100 and U+20AC render as three and four hex digits.
    assert_eq!(dna_hash("\u{100}"), "100");
    assert_eq!(dna_hash("a€"), "6120ac");
    assert!(!is_single_byte("a€"));
}

#[test]
fn deterministic() {
    let input = "steam:110000112345678";
    assert_eq!(dna_hash(input), dna_hash(input));
}

#[test]
fn strict_matches_lenient_for_single_byte() {
    let input = "Ünïcödé-ish";
    assert_eq!(dna_hash_strict(input).unwrap(), dna_hash(input));
}

#[test]
fn strict_rejects_wide_chars() {
    let err = dna_hash_strict("ok€").unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
    let msg = err.to_string();
    assert!(msg.contains("U+20AC"), "{msg}");
    assert!(msg.contains("index 2"), "{msg}");
}
