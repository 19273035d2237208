//! One complete scan of one source buffer.
//!
//! The session drives the [`Scanner`] to the end of input and routes each
//! token:
//!
//! - whitespace is dropped;
//! - comments are dropped and counted;
//! - `ERROR` tokens are dropped (their diagnostic already describes them);
//! - everything else is kept and counted, and identifiers are also
//!   registered in the [`SymbolTable`].
//!
//! The kept sequence always ends with exactly one `EOF` token.

use std::collections::BTreeMap;

use sable_lexer_core::{SourceBuffer, TokenKind};

use crate::{DiagnosticSink, Scanner, SymbolTable, Token};

/// Counters gathered during a scan.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ScanStatistics {
    counts: BTreeMap<TokenKind, usize>,
    comments_removed: usize,
    lines_processed: u32,
}

impl ScanStatistics {
    fn record(&mut self, kind: TokenKind) {
        *self.counts.entry(kind).or_insert(0) += 1;
    }

    /// Number of emitted tokens of `kind`.
    pub fn count(&self, kind: TokenKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// Number of emitted tokens, excluding the final `EOF`.
    pub fn token_count(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn comments_removed(&self) -> usize {
        self.comments_removed
    }

    /// Line the scan ended on.
    ///
    /// A trailing newline opens one more line, so `"A\nB\n"` reports 3
    /// and `"A\nB"` reports 2. The `sable` driver ends every line with a
    /// newline before scanning, which makes the count independent of how the
    /// file ends.
    pub fn lines_processed(&self) -> u32 {
        self.lines_processed
    }

    /// Non-zero counts in category order.
    pub fn counts(&self) -> impl Iterator<Item = (TokenKind, usize)> + '_ {
        self.counts.iter().map(|(&kind, &n)| (kind, n))
    }
}

/// Everything a scan produces.
#[derive(Clone, Debug)]
pub struct ScanOutput {
    /// Emitted tokens, ending with `EOF`.
    pub tokens: Vec<Token>,
    pub symbols: SymbolTable,
    pub diagnostics: DiagnosticSink,
    pub stats: ScanStatistics,
}

impl ScanOutput {
    /// Emitted tokens without the final `EOF`.
    pub fn tokens_without_eof(&self) -> &[Token] {
        match self.tokens.split_last() {
            Some((last, rest)) if last.is_eof() => rest,
            _ => &self.tokens,
        }
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }
}

/// Drives a [`Scanner`] over one buffer and collects the outputs.
pub struct ScanSession<'a> {
    scanner: Scanner<'a>,
    tokens: Vec<Token>,
    symbols: SymbolTable,
    stats: ScanStatistics,
}

impl<'a> ScanSession<'a> {
    pub fn new(buf: &'a SourceBuffer) -> Self {
        Self {
            scanner: Scanner::new(buf.cursor()),
            tokens: Vec::new(),
            symbols: SymbolTable::new(),
            stats: ScanStatistics::default(),
        }
    }

    /// Scan to end of input.
    #[tracing::instrument(level = "debug", skip_all, fields(len = self.scanner.source_len()))]
    pub fn run(mut self) -> ScanOutput {
        loop {
            let token = self.scanner.next_token();
            match token.kind() {
                TokenKind::Eof => {
                    self.stats.lines_processed = self.scanner.location().line;
                    self.tokens.push(token);
                    break;
                }
                TokenKind::Error => {}
                kind if kind.is_trivia() => {
                    if kind.is_comment() {
                        self.stats.comments_removed += 1;
                    }
                }
                kind => {
                    if kind == TokenKind::Identifier {
                        self.symbols
                            .add_identifier(token.lexeme(), token.line(), token.column());
                    }
                    self.stats.record(kind);
                    self.tokens.push(token);
                }
            }
        }

        tracing::debug!(
            tokens = self.stats.token_count(),
            errors = self.scanner.diagnostics().error_count(),
            identifiers = self.symbols.unique_count(),
            lines = self.stats.lines_processed,
            "scan complete"
        );
        let diagnostics = self.scanner.into_diagnostics();
        ScanOutput {
            tokens: self.tokens,
            symbols: self.symbols,
            diagnostics,
            stats: self.stats,
        }
    }
}
