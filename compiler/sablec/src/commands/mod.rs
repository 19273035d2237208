//! Command handlers for the `sable` binary.
//!
//! `lex` is the only command today. Shared helpers like `read_file` live
//! here in the module root.

use crate::CliError;

mod lex;

pub use lex::lex_file;

/// Read a source file, mapping I/O failures to a [`CliError`] that names the
/// path.
pub fn read_file(path: &str) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|e| CliError::from_io(path, e))
}

/// End every line with `\n`, dropping the `\r` of `\r\n` line breaks.
///
/// A file that lacks a final newline gets one, so line counts match those
/// of the same file saved with one, or saved with CRLF line endings.
pub fn normalize_lines(content: &str) -> String {
    let mut normalized = String::with_capacity(content.len() + 1);
    for line in content.lines() {
        normalized.push_str(line);
        normalized.push('\n');
    }
    normalized
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
