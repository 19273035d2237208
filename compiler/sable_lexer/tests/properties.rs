//! End-to-end behavior of `sable_lexer::scan`.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use sable_lexer::{scan, LexErrorKind, NumberIssue, Scanner, SourceBuffer, TokenKind};

fn emitted(source: &str) -> Vec<(TokenKind, String)> {
    scan(source)
        .tokens_without_eof()
        .iter()
        .map(|t| (t.kind(), t.lexeme().to_owned()))
        .collect()
}

/// Independently compute the 1-indexed (line, column) of a byte offset.
fn line_col(source: &str, offset: usize) -> (u32, u32) {
    let before = &source[..offset];
    let line = before.matches('\n').count() + 1;
    let column = match before.rfind('\n') {
        Some(nl) => before[nl + 1..].chars().count() + 1,
        None => before.chars().count() + 1,
    };
    (u32::try_from(line).unwrap(), u32::try_from(column).unwrap())
}

// === Priority & Longest Match ===

#[test]
fn double_star_is_one_operator() {
    assert_eq!(emitted("**"), [(TokenKind::ArithmeticOp, "**".to_owned())]);
}

#[test]
fn keyword_vs_identifier() {
    assert_eq!(emitted("declare"), [(TokenKind::Keyword, "declare".to_owned())]);
    assert_eq!(emitted("Declare"), [(TokenKind::Identifier, "Declare".to_owned())]);
}

#[test]
fn float_vs_integer() {
    assert_eq!(emitted("12"), [(TokenKind::IntegerLiteral, "12".to_owned())]);
    assert_eq!(emitted("12.5"), [(TokenKind::FloatLiteral, "12.5".to_owned())]);

    let out = scan("12.");
    assert_eq!(
        out.tokens_without_eof()
            .iter()
            .map(|t| (t.kind(), t.lexeme()))
            .collect::<Vec<_>>(),
        [(TokenKind::FloatLiteral, "12.")]
    );
    let kinds: Vec<_> = out.diagnostics.iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        [LexErrorKind::MalformedNumber(NumberIssue::MissingFraction)]
    );
}

// === Symbol Table ===

#[test]
fn identifier_frequency_and_order() {
    let out = scan("Foo Bar Foo");
    let table: Vec<_> = out
        .symbols
        .iter()
        .map(|e| (e.name.as_str(), e.frequency))
        .collect();
    assert_eq!(table, [("Foo", 2), ("Bar", 1)]);
}

// === Error Recovery ===

#[test]
fn unterminated_string_reported_once() {
    let out = scan("\"abc\nOutput");
    assert_eq!(out.diagnostics.error_count(), 1);
    let err = &out.diagnostics.errors()[0];
    assert_eq!(err.kind, LexErrorKind::UnterminatedString);
    assert_eq!((err.line, err.column), (1, 1));
    assert_eq!(out.tokens[0].lexeme(), "\"abc");
    assert_eq!(out.tokens[1].lexeme(), "Output");
}

#[test]
fn unclosed_comment_reported_once() {
    let out = scan("#* never closed");
    assert_eq!(out.diagnostics.error_count(), 1);
    let err = &out.diagnostics.errors()[0];
    assert_eq!(err.kind, LexErrorKind::UnclosedComment);
    assert_eq!((err.line, err.column), (1, 1));
    assert_eq!(out.stats.comments_removed(), 1);
}

#[test]
fn thousand_invalid_characters() {
    let source = "$".repeat(1000);
    let out = scan(&source);
    assert_eq!(out.diagnostics.error_count(), 1000);
    assert!(out
        .diagnostics
        .iter()
        .all(|e| e.kind == LexErrorKind::InvalidCharacter { ch: '$' }));
    assert_eq!(out.tokens.len(), 1);
    assert!(out.tokens[0].is_eof());
    assert_eq!(out.tokens[0].column(), 1001);
}

// === Whole Programs ===

#[test]
fn small_program() {
    let source = "\
## Sum the inputs
function Add(A, B) {
    declare Total = A + B;
    return Total;
}
start
    input(X);
    condition (X >= 10) { output(\"big\\n\"); } else { output('s'); }
    loop { X -= 1; break; }
finish
";
    let out = scan(source);
    assert!(!out.has_errors(), "{:?}", out.diagnostics.messages());
    assert_eq!(out.stats.comments_removed(), 1);
    assert_eq!(out.stats.count(TokenKind::Keyword), 12);
    assert_eq!(out.stats.count(TokenKind::StringLiteral), 1);
    assert_eq!(out.stats.count(TokenKind::CharLiteral), 1);
    assert_eq!(out.symbols.frequency_of("X"), 3);
    assert_eq!(out.symbols.frequency_of("Total"), 2);
    assert_eq!(
        out.symbols.iter().map(|e| e.name.as_str()).collect::<Vec<_>>(),
        ["Add", "A", "B", "Total", "X"]
    );
    assert_eq!(out.stats.lines_processed(), 11);
}

// === Properties ===

proptest! {
    #[test]
    fn any_input_terminates_with_one_eof(source in "\\PC{0,200}") {
        let out = scan(&source);
        let eofs = out.tokens.iter().filter(|t| t.is_eof()).count();
        prop_assert_eq!(eofs, 1);
        prop_assert!(out.tokens.last().is_some_and(|t| t.is_eof()));
    }

    #[test]
    fn positions_match_offsets(source in "[ -~\\n\\t\u{e9}]{0,120}") {
        let buf = SourceBuffer::new(&source);
        let mut scanner = Scanner::new(buf.cursor());
        loop {
            let before = scanner.location();
            let token = scanner.next_token();
            if token.is_eof() {
                prop_assert_eq!((token.line(), token.column()), line_col(&source, source.len()));
                break;
            }
            // A lexeme is the exact source text ending at the cursor.
            let after = scanner.location();
            let offset = after.offset as usize - token.lexeme().len();
            prop_assert_eq!(&source[offset..after.offset as usize], token.lexeme());
            prop_assert_eq!((token.line(), token.column()), line_col(&source, offset));
            prop_assert!(after.offset > before.offset);
        }
    }

    #[test]
    fn lexemes_reassemble_source_without_errors(
        source in "((Foo|Bar|declare|true|[0-9]{1,4}|[0-9]\\.[0-9]{1,3}|[-+*/=<>;(){}])[ \\n]){0,40}"
    ) {
        let buf = SourceBuffer::new(&source);
        let mut scanner = Scanner::new(buf.cursor());
        let rebuilt: String = scanner.by_ref().map(|t| t.lexeme().to_owned()).collect();
        prop_assert_eq!(rebuilt, source);
        prop_assert!(!scanner.diagnostics().has_errors());
    }
}
