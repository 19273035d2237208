//! Lexical error records.
//!
//! Every error is recoverable: the scanner records it in the
//! [`DiagnosticSink`](crate::DiagnosticSink) and keeps going. A record
//! carries WHERE (line/column of the anchor), WHAT (`kind`), and the lexeme
//! consumed up to the point of detection. The message is derived from the
//! kind, never stored.

use std::fmt;

use sable_lexer_core::Location;

/// A lexical error anchored at a source position.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    pub kind: LexErrorKind,
    /// 1-indexed line of the anchor.
    pub line: u32,
    /// 1-indexed column of the anchor.
    pub column: u32,
    /// Offending text.
    pub lexeme: String,
}

/// What kind of lexical error occurred.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// A character that cannot start any token.
    InvalidCharacter { ch: char },
    /// A numeric literal that breaks the number grammar.
    MalformedNumber(NumberIssue),
    /// An identifier longer than [`MAX_IDENTIFIER_LEN`](crate::MAX_IDENTIFIER_LEN).
    InvalidIdentifier,
    /// Missing closing `"`.
    UnterminatedString,
    /// Missing closing `'`.
    UnterminatedChar,
    /// `#*` with no matching `*#`.
    UnclosedComment,
    /// A backslash followed by a character with no escape meaning.
    InvalidEscape { escape_char: char },
}

/// Why a numeric literal is malformed.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum NumberIssue {
    /// `+` or `-` with no digit after it.
    MissingDigitAfterSign,
    /// The float rule found no `.`.
    MissingDecimalPoint,
    /// `12.` with no digit after the point.
    MissingFraction,
    /// More than [`MAX_FRACTION_DIGITS`](crate::MAX_FRACTION_DIGITS) digits after the point.
    TooManyFractionDigits,
    /// `e`/`E` (and optional sign) with no digit after it.
    MissingExponentDigits,
}

impl NumberIssue {
    pub const fn message(self) -> &'static str {
        match self {
            NumberIssue::MissingDigitAfterSign => "Expected digit after sign",
            NumberIssue::MissingDecimalPoint => {
                "Expected decimal point for floating-point literal"
            }
            NumberIssue::MissingFraction => "Missing fractional part after decimal point",
            NumberIssue::TooManyFractionDigits => "Too many decimal digits (maximum 6 allowed)",
            NumberIssue::MissingExponentDigits => "Missing exponent digits after 'e' or 'E'",
        }
    }
}

impl LexErrorKind {
    /// Stable upper-snake-case code shown in reports.
    pub const fn code(self) -> &'static str {
        match self {
            LexErrorKind::InvalidCharacter { .. } => "INVALID_CHARACTER",
            LexErrorKind::MalformedNumber(_) => "MALFORMED_NUMBER",
            LexErrorKind::InvalidIdentifier => "INVALID_IDENTIFIER",
            LexErrorKind::UnterminatedString => "UNTERMINATED_STRING",
            LexErrorKind::UnterminatedChar => "UNTERMINATED_CHAR",
            LexErrorKind::UnclosedComment => "UNCLOSED_COMMENT",
            LexErrorKind::InvalidEscape { .. } => "INVALID_ESCAPE",
        }
    }
}

/// Renders the human-readable message.
impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexErrorKind::InvalidCharacter { ch } => {
                write!(f, "Character '{ch}' is not recognized in the language")
            }
            LexErrorKind::MalformedNumber(issue) => f.write_str(issue.message()),
            LexErrorKind::InvalidIdentifier => write!(
                f,
                "Identifier exceeds maximum length of {} characters",
                crate::MAX_IDENTIFIER_LEN
            ),
            LexErrorKind::UnterminatedString => {
                f.write_str("String literal not properly closed with \"")
            }
            LexErrorKind::UnterminatedChar => {
                f.write_str("Character literal not properly closed with '")
            }
            LexErrorKind::UnclosedComment => {
                f.write_str("Multi-line comment started but never closed with *#")
            }
            LexErrorKind::InvalidEscape { .. } => f.write_str(
                r#"Invalid escape sequence. Valid escapes: \n, \t, \r, \", \', \\"#,
            ),
        }
    }
}

impl LexError {
    fn new(kind: LexErrorKind, at: Location, lexeme: impl Into<String>) -> Self {
        Self {
            kind,
            line: at.line,
            column: at.column,
            lexeme: lexeme.into(),
        }
    }

    /// A character that starts no token.
    #[cold]
    pub fn invalid_character(at: Location, ch: char) -> Self {
        Self::new(LexErrorKind::InvalidCharacter { ch }, at, ch)
    }

    /// A malformed numeric literal. `lexeme` is the text consumed so far.
    #[cold]
    pub fn malformed_number(at: Location, lexeme: &str, issue: NumberIssue) -> Self {
        Self::new(LexErrorKind::MalformedNumber(issue), at, lexeme)
    }

    /// An identifier over the length limit. `lexeme` is the full identifier.
    #[cold]
    pub fn invalid_identifier(at: Location, lexeme: &str) -> Self {
        Self::new(LexErrorKind::InvalidIdentifier, at, lexeme)
    }

    #[cold]
    pub fn unterminated_string(at: Location, lexeme: &str) -> Self {
        Self::new(LexErrorKind::UnterminatedString, at, lexeme)
    }

    #[cold]
    pub fn unterminated_char(at: Location, lexeme: &str) -> Self {
        Self::new(LexErrorKind::UnterminatedChar, at, lexeme)
    }

    /// An unclosed `#*`. Anchored at the opener; the lexeme is always `#*`.
    #[cold]
    pub fn unclosed_comment(at: Location) -> Self {
        Self::new(LexErrorKind::UnclosedComment, at, "#*")
    }

    /// `\c` where `c` has no escape meaning. Anchored at `c`.
    #[cold]
    pub fn invalid_escape(at: Location, escape_char: char) -> Self {
        Self::new(
            LexErrorKind::InvalidEscape { escape_char },
            at,
            format!("\\{escape_char}"),
        )
    }

    /// Stable kind code, e.g. `MALFORMED_NUMBER`.
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Human-readable message.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ERROR [{}] at Line: {}, Col: {} - Lexeme: '{}' - {}",
            self.kind.code(),
            self.line,
            self.column,
            self.lexeme,
            self.kind
        )
    }
}

impl std::error::Error for LexError {}

#[cfg(test)]
mod tests;
