//! Sable lexical analyzer CLI.

use sablec::commands::lex_file;
use sablec::{init_tracing, parse_args, Invocation};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let result = parse_args(&args).and_then(|invocation| match invocation {
        Invocation::Usage => {
            print_usage();
            Ok(())
        }
        Invocation::Version => {
            println!("sable {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Invocation::Lex { path, options } => lex_file(&path, &options),
    });

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("Sable lexical analyzer");
    println!();
    println!("Usage: sable <file> [options]");
    println!("       sable [options] -- <file>");
    println!();
    println!("Scans <file> and prints its tokens, statistics, symbol table,");
    println!("and lexical error report.");
    println!();
    println!("Options:");
    println!("  --no-tokens          Omit the token listing");
    println!("  --no-stats           Omit scanning statistics");
    println!("  --no-symbols         Omit the symbol table");
    println!("  --no-errors          Omit the error report");
    println!("  -h, --help           Show this help message");
    println!("  -V, --version        Show version information");
    println!("  --                   Treat every later argument as a file");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=sable_lexer=debug) to trace the scan.");
}
