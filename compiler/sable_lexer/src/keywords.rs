//! Reserved word resolution.
//!
//! Reserved words are twelve lowercase keywords plus the two boolean
//! literals. Lookup uses the word's length as a first-pass filter (reserved
//! words range from 4-9 chars), then matches against the words of that
//! length.
//!
//! Callers pass the maximal run of letters, digits, and underscores at the
//! cursor, so a hit already satisfies the word-boundary rule: `loops` and
//! `true_` are looked up whole and miss.

use sable_lexer_core::TokenKind;

/// All reserved keywords, in declaration order.
pub const KEYWORDS: [&str; 12] = [
    "start",
    "finish",
    "loop",
    "condition",
    "declare",
    "output",
    "input",
    "function",
    "return",
    "break",
    "continue",
    "else",
];

/// Boolean literal words.
pub const BOOLEANS: [&str; 2] = ["true", "false"];

/// Look up a reserved word.
///
/// Returns [`TokenKind::Keyword`] or [`TokenKind::BooleanLiteral`], or `None`
/// if `text` is not reserved.
#[inline]
pub fn lookup(text: &str) -> Option<TokenKind> {
    match text.len() {
        4 => match text {
            "loop" | "else" => Some(TokenKind::Keyword),
            "true" => Some(TokenKind::BooleanLiteral),
            _ => None,
        },
        5 => match text {
            "start" | "input" | "break" => Some(TokenKind::Keyword),
            "false" => Some(TokenKind::BooleanLiteral),
            _ => None,
        },
        6 => match text {
            "finish" | "output" | "return" => Some(TokenKind::Keyword),
            _ => None,
        },
        7 => match text {
            "declare" => Some(TokenKind::Keyword),
            _ => None,
        },
        8 => match text {
            "function" | "continue" => Some(TokenKind::Keyword),
            _ => None,
        },
        9 => match text {
            "condition" => Some(TokenKind::Keyword),
            _ => None,
        },
        _ => None,
    }
}
