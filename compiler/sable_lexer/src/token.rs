//! Classified tokens.

use std::fmt;

use sable_lexer_core::{Location, TokenKind};

/// A classified lexeme with the position of its first character.
///
/// Immutable once created. The lexeme is the exact source text consumed.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Token {
    kind: TokenKind,
    lexeme: String,
    line: u32,
    column: u32,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
            column,
        }
    }

    /// Token starting at `at`.
    pub fn at(kind: TokenKind, lexeme: impl Into<String>, at: Location) -> Self {
        Self::new(kind, lexeme, at.line, at.column)
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    #[inline]
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

/// `<CATEGORY, "lexeme", Line: L, Col: C>`
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{}, \"{}\", Line: {}, Col: {}>",
            self.kind.name(),
            self.lexeme,
            self.line,
            self.column
        )
    }
}
