use pretty_assertions::assert_eq;

use super::*;

fn at(line: u32, column: u32) -> Location {
    Location {
        offset: 0,
        line,
        column,
    }
}

// === Construction ===

#[test]
fn invalid_character_lexeme_is_the_char() {
    let err = LexError::invalid_character(at(3, 7), '@');
    assert_eq!(err.kind, LexErrorKind::InvalidCharacter { ch: '@' });
    assert_eq!((err.line, err.column), (3, 7));
    assert_eq!(err.lexeme, "@");
}

#[test]
fn unclosed_comment_lexeme_is_opener() {
    let err = LexError::unclosed_comment(at(1, 1));
    assert_eq!(err.lexeme, "#*");
    assert_eq!(err.code(), "UNCLOSED_COMMENT");
}

#[test]
fn invalid_escape_lexeme_includes_backslash() {
    let err = LexError::invalid_escape(at(1, 4), 'q');
    assert_eq!(err.lexeme, "\\q");
    assert_eq!(err.kind, LexErrorKind::InvalidEscape { escape_char: 'q' });
}

#[test]
fn error_equality() {
    let a = LexError::malformed_number(at(1, 1), "12.", NumberIssue::MissingFraction);
    let b = LexError::malformed_number(at(1, 1), "12.", NumberIssue::MissingFraction);
    let c = LexError::malformed_number(at(1, 1), "12.", NumberIssue::TooManyFractionDigits);
    assert_eq!(a, b);
    assert_ne!(a, c);
}

// === Codes ===

#[test]
fn every_code() {
    let kinds = [
        (LexErrorKind::InvalidCharacter { ch: '$' }, "INVALID_CHARACTER"),
        (
            LexErrorKind::MalformedNumber(NumberIssue::MissingDigitAfterSign),
            "MALFORMED_NUMBER",
        ),
        (LexErrorKind::InvalidIdentifier, "INVALID_IDENTIFIER"),
        (LexErrorKind::UnterminatedString, "UNTERMINATED_STRING"),
        (LexErrorKind::UnterminatedChar, "UNTERMINATED_CHAR"),
        (LexErrorKind::UnclosedComment, "UNCLOSED_COMMENT"),
        (LexErrorKind::InvalidEscape { escape_char: 'x' }, "INVALID_ESCAPE"),
    ];
    for (kind, code) in kinds {
        assert_eq!(kind.code(), code);
    }
}

// === Messages ===

#[test]
fn number_messages() {
    assert_eq!(
        NumberIssue::MissingDigitAfterSign.message(),
        "Expected digit after sign"
    );
    assert_eq!(
        NumberIssue::MissingDecimalPoint.message(),
        "Expected decimal point for floating-point literal"
    );
    assert_eq!(
        NumberIssue::MissingFraction.message(),
        "Missing fractional part after decimal point"
    );
    assert_eq!(
        NumberIssue::TooManyFractionDigits.message(),
        "Too many decimal digits (maximum 6 allowed)"
    );
    assert_eq!(
        NumberIssue::MissingExponentDigits.message(),
        "Missing exponent digits after 'e' or 'E'"
    );
}

#[test]
fn identifier_message_names_the_limit() {
    let err = LexError::invalid_identifier(at(1, 1), "Abcdefghijklmnopqrstuvwxyzabcdefg");
    assert_eq!(
        err.message(),
        "Identifier exceeds maximum length of 31 characters"
    );
}

#[test]
fn escape_message_lists_valid_escapes() {
    let err = LexError::invalid_escape(at(1, 1), 'z');
    assert_eq!(
        err.message(),
        r#"Invalid escape sequence. Valid escapes: \n, \t, \r, \", \', \\"#
    );
}

// === Display ===

#[test]
fn display_report_line() {
    let err = LexError::invalid_character(at(2, 5), '@');
    assert_eq!(
        err.to_string(),
        "ERROR [INVALID_CHARACTER] at Line: 2, Col: 5 - Lexeme: '@' - \
         Character '@' is not recognized in the language"
    );
}

#[test]
fn display_unterminated_string() {
    let err = LexError::unterminated_string(at(4, 9), "\"abc");
    assert_eq!(
        err.to_string(),
        "ERROR [UNTERMINATED_STRING] at Line: 4, Col: 9 - Lexeme: '\"abc' - \
         String literal not properly closed with \""
    );
}
