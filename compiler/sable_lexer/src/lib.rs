//! Lexical analysis for the Sable language.
//!
//! Turns source text into a flat sequence of classified [`Token`]s, and
//! collects two side products along the way: a [`SymbolTable`] of the
//! identifiers seen and a [`DiagnosticSink`] of lexical errors. Errors never
//! abort the scan.
//!
//! # Architecture
//!
//! ```text
//! &str ──> SourceBuffer ──> Cursor ──> Scanner ──> ScanSession ──> ScanOutput
//!                                       │              │
//!                                 DiagnosticSink   SymbolTable,
//!                                                  ScanStatistics
//! ```
//!
//! The buffer, cursor, character classes, and [`TokenKind`] live in
//! `sable_lexer_core`; this crate holds the scanning rules and everything
//! that accumulates during a scan.

mod diagnostics;
pub mod keywords;
mod lex_error;
mod scanner;
mod session;
mod symbol_table;
mod token;

pub use diagnostics::DiagnosticSink;
pub use lex_error::{LexError, LexErrorKind, NumberIssue};
pub use sable_lexer_core::{Location, SourceBuffer, TokenKind};
pub use scanner::{Scanner, MAX_CHAR_UNITS, MAX_FRACTION_DIGITS, MAX_IDENTIFIER_LEN};
pub use session::{ScanOutput, ScanSession, ScanStatistics};
pub use symbol_table::{DeclaredType, SymbolEntry, SymbolTable};
pub use token::Token;

/// Scan `source` from start to end of input.
///
/// Convenience wrapper around [`ScanSession`].
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn scan(source: &str) -> ScanOutput {
    let buf = SourceBuffer::new(source);
    ScanSession::new(&buf).run()
}
