//! Priority-ordered scanning engine.
//!
//! The scanner answers one question repeatedly: what is the next token at
//! the cursor? Candidate categories are tried in a fixed rank order and the
//! first that matches consumes the longest valid lexeme for its category:
//!
//! 1. `#*` multi-line comment, 2. `##` single-line comment,
//! 3. two-character operators, 4-5. keywords and boolean literals,
//! 6. any other lowercase start (rejected), 7. identifiers,
//! 8. numbers (integer or float), 9. strings, 10. characters,
//! 11. single-character operators, 12. punctuators, 13. whitespace,
//! 14. anything else (rejected).
//!
//! # Recovery
//!
//! Problems go to the [`DiagnosticSink`] and never stop the scan. Malformed
//! literals still produce a token covering what was consumed. A character
//! that cannot start any token is reported and skipped, and
//! [`next_token()`](Scanner::next_token) retries from the top in a loop, so
//! every iteration advances by at least one character and arbitrarily long
//! runs of garbage cost no stack.

use sable_lexer_core::char_class::{
    is_digit, is_ident_continue, is_lower, is_punctuator, is_sign, is_upper, is_whitespace,
    is_word,
};
use sable_lexer_core::{Cursor, Location, TokenKind};

use crate::keywords;
use crate::lex_error::{LexError, NumberIssue};
use crate::{DiagnosticSink, Token};

/// Longest identifier accepted without an `INVALID_IDENTIFIER` diagnostic.
pub const MAX_IDENTIFIER_LEN: usize = 31;

/// Most digits allowed after the decimal point of a float.
pub const MAX_FRACTION_DIGITS: u32 = 6;

/// Interior units a character literal may hold before the scanner gives up
/// on finding its closing quote. An escape sequence counts as one unit.
pub const MAX_CHAR_UNITS: u32 = 3;

/// Scanning engine over one source buffer.
///
/// Owns the cursor and the diagnostics for the duration of a scan. Yields
/// every classified token, trivia included; see
/// [`ScanSession`](crate::ScanSession) for the filtered stream.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    diagnostics: DiagnosticSink,
}

impl<'a> Scanner<'a> {
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self {
            cursor,
            diagnostics: DiagnosticSink::new(),
        }
    }

    /// Produce the next token.
    ///
    /// Returns an `Eof` token (empty lexeme, final line and column) once the
    /// source is exhausted. Subsequent calls keep returning `Eof`.
    pub fn next_token(&mut self) -> Token {
        loop {
            if self.cursor.is_eof() {
                return Token::at(TokenKind::Eof, "", self.cursor.location());
            }
            let start = self.cursor.location();
            if let Some(token) = self.classify(start) {
                return token;
            }
        }
    }

    /// Current position of the cursor.
    pub fn location(&self) -> Location {
        self.cursor.location()
    }

    /// Length of the source being scanned, in bytes.
    pub fn source_len(&self) -> u32 {
        self.cursor.source_len()
    }

    pub fn diagnostics(&self) -> &DiagnosticSink {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> DiagnosticSink {
        self.diagnostics
    }

    /// One dispatch pass. Returns `None` after reporting and skipping a
    /// character that starts no token.
    fn classify(&mut self, start: Location) -> Option<Token> {
        let c = self.cursor.current();
        let next = self.cursor.peek(1);

        match (c, next) {
            (b'#', b'*') => return Some(self.multi_line_comment(start)),
            (b'#', b'#') => return Some(self.single_line_comment(start)),
            _ => {}
        }

        if let Some(kind) = TokenKind::two_char_operator(c, next) {
            return Some(self.fixed(start, kind, 2));
        }

        let token = match c {
            _ if is_lower(c) => return self.reserved_word(start),
            _ if is_upper(c) => self.identifier(start),
            _ if is_digit(c) => self.number(start),
            _ if is_sign(c) && is_digit(next) => self.number(start),
            b'"' => self.string_literal(start),
            b'\'' => self.char_literal(start),
            _ if is_punctuator(c) => self.fixed(start, TokenKind::Punctuator, 1),
            _ if is_whitespace(c) => self.whitespace(start),
            _ => match TokenKind::single_char_operator(c) {
                Some(kind) => self.fixed(start, kind, 1),
                None => {
                    self.skip_invalid(start);
                    return None;
                }
            },
        };
        Some(token)
    }

    /// Token covering everything from `start` to the cursor.
    fn token_from(&self, start: Location, kind: TokenKind) -> Token {
        Token::at(kind, self.cursor.slice_from(start.offset), start)
    }

    /// Operators and punctuators, whose text has already been matched.
    fn fixed(&mut self, start: Location, kind: TokenKind, len: u32) -> Token {
        self.cursor.advance_n(len);
        self.token_from(start, kind)
    }

    // ─── Recovery ───────────────────────────────────────────────────────

    #[cold]
    fn skip_invalid(&mut self, start: Location) {
        let ch = self.cursor.consume();
        tracing::trace!(
            ?ch,
            line = start.line,
            column = start.column,
            "skipping unrecognized character"
        );
        self.diagnostics.report(LexError::invalid_character(start, ch));
    }

    // ─── Comments ───────────────────────────────────────────────────────

    fn multi_line_comment(&mut self, start: Location) -> Token {
        self.cursor.advance_n(2); // `#*`
        loop {
            if !self.cursor.skip_to_byte(b'*') {
                self.diagnostics.report(LexError::unclosed_comment(start));
                break;
            }
            if self.cursor.peek(1) == b'#' {
                self.cursor.advance_n(2); // `*#`
                break;
            }
            self.cursor.advance();
        }
        self.token_from(start, TokenKind::MultiLineComment)
    }

    fn single_line_comment(&mut self, start: Location) -> Token {
        self.cursor.advance_n(2); // `##`
        self.cursor.eat_until_newline_or_eof();
        self.token_from(start, TokenKind::SingleLineComment)
    }

    // ─── Words ──────────────────────────────────────────────────────────

    /// Keywords and boolean literals. Any other lowercase word is rejected
    /// one character at a time.
    fn reserved_word(&mut self, start: Location) -> Option<Token> {
        let mut probe = self.cursor;
        probe.eat_while(is_word);
        let word = probe.slice_from(start.offset);
        if let Some(kind) = keywords::lookup(word) {
            self.cursor = probe;
            return Some(Token::at(kind, word, start));
        }
        self.skip_invalid(start);
        None
    }

    fn identifier(&mut self, start: Location) -> Token {
        self.cursor.advance();
        self.cursor.eat_while(is_ident_continue);
        let token = self.token_from(start, TokenKind::Identifier);
        if token.lexeme().len() > MAX_IDENTIFIER_LEN {
            self.diagnostics
                .report(LexError::invalid_identifier(start, token.lexeme()));
        }
        token
    }

    // ─── Numbers ────────────────────────────────────────────────────────

    /// Signed or unsigned number. A `.` after the sign and digits selects
    /// the float rule.
    fn number(&mut self, start: Location) -> Token {
        let mut probe = self.cursor;
        if is_sign(probe.current()) {
            probe.advance();
        }
        probe.eat_while(is_digit);
        if probe.current() == b'.' {
            self.float_literal(start)
        } else {
            self.integer_literal(start)
        }
    }

    fn eat_sign(&mut self) {
        if is_sign(self.cursor.current()) {
            self.cursor.advance();
        }
    }

    fn malformed(&mut self, start: Location, issue: NumberIssue) {
        let lexeme = self.cursor.slice_from(start.offset);
        self.diagnostics
            .report(LexError::malformed_number(start, lexeme, issue));
    }

    fn integer_literal(&mut self, start: Location) -> Token {
        self.eat_sign();
        if self.cursor.eat_while(is_digit) == 0 {
            self.malformed(start, NumberIssue::MissingDigitAfterSign);
            return self.token_from(start, TokenKind::Error);
        }
        self.token_from(start, TokenKind::IntegerLiteral)
    }

    fn float_literal(&mut self, start: Location) -> Token {
        self.eat_sign();
        self.cursor.eat_while(is_digit);
        if self.cursor.current() != b'.' {
            self.malformed(start, NumberIssue::MissingDecimalPoint);
            return self.token_from(start, TokenKind::Error);
        }
        self.cursor.advance();

        let fraction = self.cursor.eat_while(is_digit);
        if fraction == 0 {
            self.malformed(start, NumberIssue::MissingFraction);
        } else if fraction > MAX_FRACTION_DIGITS {
            self.malformed(start, NumberIssue::TooManyFractionDigits);
        }

        if matches!(self.cursor.current(), b'e' | b'E') {
            self.cursor.advance();
            self.eat_sign();
            if self.cursor.eat_while(is_digit) == 0 {
                self.malformed(start, NumberIssue::MissingExponentDigits);
            }
        }
        self.token_from(start, TokenKind::FloatLiteral)
    }

    // ─── String & Char Literals ─────────────────────────────────────────

    fn string_literal(&mut self, start: Location) -> Token {
        self.cursor.advance(); // opening `"`
        let terminated = loop {
            match self.cursor.skip_to_string_delim(b'"') {
                b'"' => {
                    self.cursor.advance();
                    break true;
                }
                b'\\' => {
                    if !self.escape(b'"') {
                        break false;
                    }
                }
                // Raw newline or end of input.
                _ => break false,
            }
        };
        let token = self.token_from(start, TokenKind::StringLiteral);
        if !terminated {
            self.diagnostics
                .report(LexError::unterminated_string(start, token.lexeme()));
        }
        token
    }

    fn char_literal(&mut self, start: Location) -> Token {
        self.cursor.advance(); // opening `'`
        let mut units = 0;
        let terminated = loop {
            if units == MAX_CHAR_UNITS || self.cursor.is_eof() {
                break false;
            }
            match self.cursor.current() {
                b'\'' => {
                    self.cursor.advance();
                    break true;
                }
                b'\n' => break false,
                b'\\' => {
                    units += 1;
                    if !self.escape(b'\'') {
                        break false;
                    }
                }
                _ => {
                    self.cursor.consume();
                    units += 1;
                }
            }
        };
        let token = self.token_from(start, TokenKind::CharLiteral);
        if !terminated {
            self.diagnostics
                .report(LexError::unterminated_char(start, token.lexeme()));
        }
        token
    }

    /// Consume a backslash and the character it escapes.
    ///
    /// Returns `false`, leaving the cursor just past the backslash, when the
    /// backslash is followed by a newline or end of input. Unknown escapes are
    /// reported at the escaped character and consumed.
    fn escape(&mut self, quote: u8) -> bool {
        self.cursor.advance(); // `\`
        if self.cursor.is_eof() || self.cursor.current() == b'\n' {
            return false;
        }
        let at = self.cursor.location();
        let ch = self.cursor.consume();
        let valid = matches!(ch, '\\' | 'n' | 't' | 'r') || ch == char::from(quote);
        if !valid {
            self.diagnostics.report(LexError::invalid_escape(at, ch));
        }
        true
    }

    // ─── Whitespace ─────────────────────────────────────────────────────

    fn whitespace(&mut self, start: Location) -> Token {
        self.cursor.eat_while(is_whitespace);
        self.token_from(start, TokenKind::Whitespace)
    }
}

/// Every classified token, trivia included, up to but excluding `Eof`.
impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (!token.is_eof()).then_some(token)
    }
}

impl std::iter::FusedIterator for Scanner<'_> {}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
