//! Append-only diagnostics accumulator.

use crate::LexError;

/// Collects lexical errors in detection order.
///
/// Reporting never interrupts scanning. Records are never mutated or
/// removed individually; [`clear()`](Self::clear) resets the whole sink for
/// reuse.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DiagnosticSink {
    errors: Vec<LexError>,
}

impl DiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&mut self, error: LexError) {
        tracing::trace!(code = error.code(), line = error.line, column = error.column, "lex error");
        self.errors.push(error);
    }

    #[inline]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    #[inline]
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// All errors, in detection order.
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LexError> {
        self.errors.iter()
    }

    /// Each error rendered as one report line.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

impl<'a> IntoIterator for &'a DiagnosticSink {
    type Item = &'a LexError;
    type IntoIter = std::slice::Iter<'a, LexError>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
