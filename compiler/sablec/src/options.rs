//! Command-line parsing: what to run, and which report sections to print.

use crate::CliError;

/// Which report sections to print. All are on by default.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReportOptions {
    pub tokens: bool,
    pub stats: bool,
    pub symbols: bool,
    pub errors: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            tokens: true,
            stats: true,
            symbols: true,
            errors: true,
        }
    }
}

/// Parse `--no-*` section flags.
///
/// Every argument must be a known flag; [`parse_args`] picks out the
/// source path beforehand.
pub fn parse_report_options(args: &[String]) -> Result<ReportOptions, CliError> {
    let mut options = ReportOptions::default();

    for arg in args {
        match arg.as_str() {
            "--no-tokens" => options.tokens = false,
            "--no-stats" => options.stats = false,
            "--no-symbols" => options.symbols = false,
            "--no-errors" => options.errors = false,
            _ => return Err(CliError::UnknownOption(arg.clone())),
        }
    }

    Ok(options)
}

/// What a command line asks the `sable` binary to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Invocation {
    Usage,
    Version,
    Lex { path: String, options: ReportOptions },
}

/// Parse the arguments that follow the program name.
///
/// `-h`/`--help` and `-V`/`--version` take effect wherever they appear.
/// Any other argument starting with `-` is a section flag, until a `--`
/// separator; after it every argument is a path, so a file named `-x.sb`
/// can be scanned as `sable -- -x.sb`.
pub fn parse_args(args: &[String]) -> Result<Invocation, CliError> {
    if args.is_empty() {
        return Ok(Invocation::Usage);
    }

    let mut path: Option<&String> = None;
    let mut flags = Vec::new();
    let mut paths_only = false;

    for arg in args {
        if !paths_only {
            match arg.as_str() {
                "-h" | "--help" => return Ok(Invocation::Usage),
                "-V" | "--version" => return Ok(Invocation::Version),
                "--" => {
                    paths_only = true;
                    continue;
                }
                flag if flag.len() > 1 && flag.starts_with('-') => {
                    flags.push(arg.clone());
                    continue;
                }
                _ => {}
            }
        }
        if path.is_some() {
            return Err(CliError::UnexpectedArgument(arg.clone()));
        }
        path = Some(arg);
    }

    let options = parse_report_options(&flags)?;
    let path = path.ok_or(CliError::MissingFile)?.clone();
    Ok(Invocation::Lex { path, options })
}

#[cfg(test)]
mod tests;
