use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn defaults_enable_everything() {
    let options = parse_report_options(&[]).ok();
    assert_eq!(options, Some(ReportOptions::default()));
    assert_eq!(
        ReportOptions::default(),
        ReportOptions {
            tokens: true,
            stats: true,
            symbols: true,
            errors: true,
        }
    );
}

#[test]
fn each_flag_disables_its_section() {
    let options = parse_report_options(&args(&["--no-tokens", "--no-symbols"])).ok();
    assert_eq!(
        options,
        Some(ReportOptions {
            tokens: false,
            stats: true,
            symbols: false,
            errors: true,
        })
    );

    let options = parse_report_options(&args(&["--no-stats", "--no-errors"])).ok();
    assert_eq!(
        options,
        Some(ReportOptions {
            tokens: true,
            stats: false,
            symbols: true,
            errors: false,
        })
    );
}

#[test]
fn repeated_flag_is_harmless() {
    let options = parse_report_options(&args(&["--no-tokens", "--no-tokens"])).ok();
    assert_eq!(options.map(|o| o.tokens), Some(false));
}

#[test]
fn unknown_flag_is_rejected() {
    let err = parse_report_options(&args(&["--no-tokens", "--verbose"]));
    assert!(matches!(err, Err(CliError::UnknownOption(ref flag)) if flag == "--verbose"));
}

// === Argument Splitting ===

#[test]
fn no_arguments_means_usage() {
    assert_eq!(parse_args(&[]).ok(), Some(Invocation::Usage));
}

#[test]
fn path_and_flags_in_any_order() {
    let expected = Invocation::Lex {
        path: "main.sb".to_owned(),
        options: ReportOptions {
            tokens: false,
            ..ReportOptions::default()
        },
    };
    assert_eq!(parse_args(&args(&["main.sb", "--no-tokens"])).ok(), Some(expected.clone()));
    assert_eq!(parse_args(&args(&["--no-tokens", "main.sb"])).ok(), Some(expected));
}

#[test]
fn help_and_version_win_anywhere() {
    assert_eq!(parse_args(&args(&["main.sb", "--help"])).ok(), Some(Invocation::Usage));
    assert_eq!(parse_args(&args(&["--no-stats", "-h"])).ok(), Some(Invocation::Usage));
    assert_eq!(parse_args(&args(&["main.sb", "-V"])).ok(), Some(Invocation::Version));
}

#[test]
fn separator_allows_dash_prefixed_path() {
    assert_eq!(
        parse_args(&args(&["--no-errors", "--", "-x.sb"])).ok(),
        Some(Invocation::Lex {
            path: "-x.sb".to_owned(),
            options: ReportOptions {
                errors: false,
                ..ReportOptions::default()
            },
        })
    );
    // After the separator, `--help` is a file name too.
    assert_eq!(
        parse_args(&args(&["--", "--help"])).ok(),
        Some(Invocation::Lex {
            path: "--help".to_owned(),
            options: ReportOptions::default(),
        })
    );
}

#[test]
fn lone_dash_is_a_path() {
    assert!(matches!(
        parse_args(&args(&["-"])),
        Ok(Invocation::Lex { ref path, .. }) if path == "-"
    ));
}

#[test]
fn dash_prefixed_path_without_separator_is_a_flag() {
    let err = parse_args(&args(&["-x.sb"]));
    assert!(matches!(err, Err(CliError::UnknownOption(ref flag)) if flag == "-x.sb"));
}

#[test]
fn second_path_is_rejected() {
    let err = parse_args(&args(&["a.sb", "--", "b.sb"]));
    assert!(matches!(err, Err(CliError::UnexpectedArgument(ref p)) if p == "b.sb"));
}

#[test]
fn flags_without_path() {
    let err = parse_args(&args(&["--no-tokens"]));
    assert!(matches!(err, Err(CliError::MissingFile)));
}
