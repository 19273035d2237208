//! Token category tag.
//!
//! [`TokenKind`] is the closed set of categories a lexeme can be classified
//! as. Discriminants are grouped into semantic ranges so related kinds stay
//! adjacent:
//!
//! | Range   | Group                |
//! |---------|----------------------|
//! | 0-15    | Words                |
//! | 16-31   | Literals             |
//! | 32-47   | Operators            |
//! | 48-63   | Punctuation          |
//! | 112-127 | Trivia               |
//! | 240-254 | Errors               |
//! | 255     | End of input         |

use std::fmt;

/// Category of a classified lexeme.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    // === Words (0-15) ===
    Keyword = 0,
    Identifier = 1,

    // === Literals (16-31) ===
    IntegerLiteral = 16,
    FloatLiteral = 17,
    StringLiteral = 18,
    CharLiteral = 19,
    BooleanLiteral = 20,

    // === Operators (32-47) ===
    ArithmeticOp = 32,
    RelationalOp = 33,
    LogicalOp = 34,
    AssignmentOp = 35,
    IncrementOp = 36,
    DecrementOp = 37,

    // === Punctuation (48-63) ===
    Punctuator = 48,

    // === Trivia (112-127) ===
    SingleLineComment = 112,
    MultiLineComment = 113,
    Whitespace = 114,

    // === Errors (240-254) ===
    /// A lexeme the scanner could not turn into a valid token. The
    /// accompanying diagnostic explains why.
    Error = 240,

    // === Control ===
    Eof = 255,
}

const _: () = assert!(std::mem::size_of::<TokenKind>() == 1);

impl TokenKind {
    /// Every kind, in discriminant order.
    pub const ALL: [TokenKind; 19] = [
        TokenKind::Keyword,
        TokenKind::Identifier,
        TokenKind::IntegerLiteral,
        TokenKind::FloatLiteral,
        TokenKind::StringLiteral,
        TokenKind::CharLiteral,
        TokenKind::BooleanLiteral,
        TokenKind::ArithmeticOp,
        TokenKind::RelationalOp,
        TokenKind::LogicalOp,
        TokenKind::AssignmentOp,
        TokenKind::IncrementOp,
        TokenKind::DecrementOp,
        TokenKind::Punctuator,
        TokenKind::SingleLineComment,
        TokenKind::MultiLineComment,
        TokenKind::Whitespace,
        TokenKind::Error,
        TokenKind::Eof,
    ];

    /// Upper-snake-case category name used in token dumps and reports.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::IntegerLiteral => "INTEGER_LITERAL",
            TokenKind::FloatLiteral => "FLOAT_LITERAL",
            TokenKind::StringLiteral => "STRING_LITERAL",
            TokenKind::CharLiteral => "CHAR_LITERAL",
            TokenKind::BooleanLiteral => "BOOLEAN_LITERAL",
            TokenKind::ArithmeticOp => "ARITHMETIC_OP",
            TokenKind::RelationalOp => "RELATIONAL_OP",
            TokenKind::LogicalOp => "LOGICAL_OP",
            TokenKind::AssignmentOp => "ASSIGNMENT_OP",
            TokenKind::IncrementOp => "INCREMENT_OP",
            TokenKind::DecrementOp => "DECREMENT_OP",
            TokenKind::Punctuator => "PUNCTUATOR",
            TokenKind::SingleLineComment => "SINGLE_LINE_COMMENT",
            TokenKind::MultiLineComment => "MULTI_LINE_COMMENT",
            TokenKind::Whitespace => "WHITESPACE",
            TokenKind::Error => "ERROR",
            TokenKind::Eof => "EOF",
        }
    }

    /// Whitespace and comments: classified, but never emitted by a session.
    #[inline]
    pub const fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::SingleLineComment | TokenKind::MultiLineComment
        )
    }

    #[inline]
    pub const fn is_comment(self) -> bool {
        matches!(
            self,
            TokenKind::SingleLineComment | TokenKind::MultiLineComment
        )
    }

    /// Kind of a two-character operator, or `None` if `a b` is not one.
    pub const fn two_char_operator(a: u8, b: u8) -> Option<TokenKind> {
        Some(match (a, b) {
            (b'*', b'*') => TokenKind::ArithmeticOp,
            (b'=' | b'!' | b'<' | b'>', b'=') => TokenKind::RelationalOp,
            (b'&', b'&') | (b'|', b'|') => TokenKind::LogicalOp,
            (b'+', b'+') => TokenKind::IncrementOp,
            (b'-', b'-') => TokenKind::DecrementOp,
            (b'+' | b'-' | b'*' | b'/', b'=') => TokenKind::AssignmentOp,
            _ => return None,
        })
    }

    /// Kind of a single-character operator, or `None` if `b` is not one.
    pub const fn single_char_operator(b: u8) -> Option<TokenKind> {
        Some(match b {
            b'+' | b'-' | b'*' | b'/' | b'%' => TokenKind::ArithmeticOp,
            b'<' | b'>' => TokenKind::RelationalOp,
            b'!' => TokenKind::LogicalOp,
            b'=' => TokenKind::AssignmentOp,
            _ => return None,
        })
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
