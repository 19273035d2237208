//! Sable lexical analyzer driver.
//!
//! Reads a source file, runs [`sable_lexer::scan`] over it, and renders the
//! token listing, statistics, symbol table, and error report. The `sable`
//! binary is a thin argument-parsing shell over this library.

use std::sync::Once;

pub mod commands;
mod error;
mod options;
pub mod reporting;

pub use error::CliError;
pub use options::{parse_args, parse_report_options, Invocation, ReportOptions};

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Does nothing unless `RUST_LOG` is set, so normal runs pay no logging
/// cost. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(EnvFilter::from_default_env())
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    });
}
