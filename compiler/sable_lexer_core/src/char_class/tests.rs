use super::*;

// === Table Coverage ===

#[test]
fn letters_and_digits() {
    assert_eq!(class_of(b'Q'), CharClass::UPPER);
    assert_eq!(class_of(b'q'), CharClass::LOWER);
    assert_eq!(class_of(b'7'), CharClass::DIGIT);
    assert_eq!(class_of(b'_'), CharClass::UNDERSCORE);
}

#[test]
fn only_plus_and_minus_are_signs() {
    assert_eq!(class_of(b'+'), CharClass::SIGN);
    assert_eq!(class_of(b'-'), CharClass::SIGN);
    for &b in b"*/%<>!=" {
        assert!(!is_sign(b), "{} should not be a sign", b as char);
    }
}

#[test]
fn unsigned_operator_bytes_have_no_class() {
    for &b in b"*/%<>!=&|#.^~" {
        assert!(class_of(b).is_empty(), "{} should be unclassified", b as char);
    }
}

#[test]
fn every_punctuator_byte() {
    for &b in b"(){}[],;:" {
        assert!(is_punctuator(b), "{} should be a punctuator", b as char);
    }
    assert!(!is_punctuator(b'.'));
    assert!(!is_punctuator(b'"'));
    assert!(!is_punctuator(b'\''));
}

#[test]
fn classes_are_disjoint_for_single_bytes() {
    for b in 0..=0xFF_u8 {
        assert!(class_of(b).bits().count_ones() <= 1, "byte {b:#x} has several classes");
    }
}

#[test]
fn whitespace_set() {
    for &b in b" \t\r\n" {
        assert!(is_whitespace(b));
    }
    // Form feed and vertical tab are not whitespace in this language.
    assert!(!is_whitespace(0x0c));
    assert!(!is_whitespace(0x0b));
}

// === Composite Classes ===

#[test]
fn ident_continue_excludes_uppercase() {
    assert!(is_ident_continue(b'a'));
    assert!(is_ident_continue(b'9'));
    assert!(is_ident_continue(b'_'));
    assert!(!is_ident_continue(b'A'));
}

#[test]
fn word_includes_uppercase() {
    assert!(is_word(b'A'));
    assert!(is_word(b'z'));
    assert!(is_word(b'0'));
    assert!(is_word(b'_'));
    assert!(!is_word(b'-'));
}

// === Sentinel and Non-ASCII ===

#[test]
fn sentinel_has_no_class() {
    assert!(class_of(0).is_empty());
}

#[test]
fn non_ascii_bytes_have_no_class() {
    for b in 0x80..=0xFF_u8 {
        assert!(class_of(b).is_empty(), "byte {b:#x} should be unclassified");
    }
}

#[test]
fn table_agrees_with_std_predicates() {
    for b in 0..=0x7F_u8 {
        assert_eq!(is_upper(b), b.is_ascii_uppercase());
        assert_eq!(is_lower(b), b.is_ascii_lowercase());
        assert_eq!(is_digit(b), b.is_ascii_digit());
        assert_eq!(is_word(b), b.is_ascii_alphanumeric() || b == b'_');
    }
}
