//! Plain-text report rendering.
//!
//! Each section renders to a `String` so the CLI can print it and tests can
//! compare it. Sections are framed by `=` banners: 80 columns wide, except
//! the symbol table, which is 85 to fit its columns.

use std::fmt::Write as _;

use sable_lexer::{DiagnosticSink, ScanOutput, ScanStatistics, SymbolTable, Token};

use crate::ReportOptions;

const WIDTH: usize = 80;
const SYMBOL_WIDTH: usize = 85;

fn banner(output: &mut String, title: &str, width: usize) {
    let rule = "=".repeat(width);
    let _ = writeln!(output);
    let _ = writeln!(output, "{rule}");
    let _ = writeln!(output, "{title}");
    let _ = writeln!(output, "{rule}");
}

fn closing_rule(output: &mut String, width: usize) {
    let _ = writeln!(output, "{}", "=".repeat(width));
    let _ = writeln!(output);
}

/// Every emitted token except `EOF`, one per line.
pub fn render_tokens(tokens: &[Token]) -> String {
    let mut output = String::new();
    banner(&mut output, "TOKENS", WIDTH);
    for token in tokens.iter().filter(|t| !t.is_eof()) {
        let _ = writeln!(output, "{token}");
    }
    closing_rule(&mut output, WIDTH);
    output
}

pub fn render_statistics(stats: &ScanStatistics) -> String {
    let mut output = String::new();
    banner(&mut output, "SCANNING STATISTICS", WIDTH);
    let _ = writeln!(
        output,
        "Total tokens (excluding whitespace & comments): {}",
        stats.token_count()
    );
    let _ = writeln!(output, "Lines processed: {}", stats.lines_processed());
    let _ = writeln!(output, "Comments removed: {}", stats.comments_removed());
    let _ = writeln!(output);
    let _ = writeln!(output, "Token count by type:");
    let _ = writeln!(output, "{}", "-".repeat(50));
    for (kind, count) in stats.counts() {
        let _ = writeln!(output, "  {kind:<25}: {count}");
    }
    closing_rule(&mut output, WIDTH);
    output
}

pub fn render_symbols(symbols: &SymbolTable) -> String {
    let mut output = String::new();
    banner(&mut output, "SYMBOL TABLE", SYMBOL_WIDTH);
    if symbols.is_empty() {
        let _ = writeln!(output, "No identifiers found.");
    } else {
        let _ = writeln!(
            output,
            "{:<20} | {:<15} | {:<15} | Frequency",
            "Identifier", "Type", "First Occurrence"
        );
        let _ = writeln!(output, "{}", "-".repeat(SYMBOL_WIDTH));
        for entry in symbols {
            let _ = writeln!(output, "{entry}");
        }
        let _ = writeln!(output, "{}", "-".repeat(SYMBOL_WIDTH));
        let _ = writeln!(output, "Total unique identifiers: {}", symbols.unique_count());
    }
    closing_rule(&mut output, SYMBOL_WIDTH);
    output
}

pub fn render_errors(diagnostics: &DiagnosticSink) -> String {
    let mut output = String::new();
    if !diagnostics.has_errors() {
        let _ = writeln!(output);
        let _ = writeln!(output, "No lexical errors found!");
        return output;
    }
    banner(&mut output, "LEXICAL ERROR REPORT", WIDTH);
    let _ = writeln!(output, "Total errors found: {}", diagnostics.error_count());
    let _ = writeln!(output, "{}", "-".repeat(WIDTH));
    for (i, error) in diagnostics.iter().enumerate() {
        let _ = writeln!(output, "{}. {error}", i + 1);
    }
    closing_rule(&mut output, WIDTH);
    output
}

/// All sections enabled in `options`, in report order.
pub fn render_report(path: &str, scan: &ScanOutput, options: &ReportOptions) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "Scanning file: {path}");
    let _ = writeln!(output, "{}", "=".repeat(WIDTH));
    if options.tokens {
        output.push_str(&render_tokens(&scan.tokens));
    }
    if options.stats {
        output.push_str(&render_statistics(&scan.stats));
    }
    if options.symbols {
        output.push_str(&render_symbols(&scan.symbols));
    }
    if options.errors {
        output.push_str(&render_errors(&scan.diagnostics));
    }
    output
}
