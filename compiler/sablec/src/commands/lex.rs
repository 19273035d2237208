use tracing::debug;

use super::{normalize_lines, read_file};
use crate::reporting::render_report;
use crate::{CliError, ReportOptions};

/// Scan `path` and print the report sections enabled in `options`.
///
/// The source is scanned after [`normalize_lines`]. Lexical errors are part
/// of the report, not a failure: only a file that cannot be read returns
/// `Err`.
pub fn lex_file(path: &str, options: &ReportOptions) -> Result<(), CliError> {
    let content = normalize_lines(&read_file(path)?);
    let output = sable_lexer::scan(&content);
    debug!(
        path,
        tokens = output.tokens_without_eof().len(),
        errors = output.diagnostics.error_count(),
        "scanned file"
    );
    print!("{}", render_report(path, &output, options));
    Ok(())
}
