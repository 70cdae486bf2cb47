//! Tests for command-line parsing.

use clap::Parser;
use mailcheck::{Config, FailOn, LogFormat, OutputFormat};
use std::path::PathBuf;

#[test]
fn test_no_arguments_reads_stdin_with_defaults() {
    let config = Config::try_parse_from(["mailcheck"]).expect("Should parse without arguments");
    assert!(config.reads_stdin());
    assert_eq!(config.format, OutputFormat::Plain);
    assert_eq!(config.fail_on, FailOn::Never);
    assert_eq!(config.dns_timeout_secs, 5);
    assert!(!config.keep_going);
    assert!(!config.legacy_header);
    assert_eq!(
        log::LevelFilter::from(config.log_level),
        log::LevelFilter::Warn
    );
}

#[test]
fn test_file_argument() {
    let config = Config::try_parse_from(["mailcheck", "addresses.txt"]).unwrap();
    assert_eq!(config.file, PathBuf::from("addresses.txt"));
    assert!(!config.reads_stdin());
}

#[test]
fn test_all_options() {
    let config = Config::try_parse_from([
        "mailcheck",
        "--format",
        "jsonl",
        "--legacy-header",
        "--keep-going",
        "--fail-on",
        "any-failure",
        "--dns-timeout-secs",
        "2",
        "--log-level",
        "debug",
        "--log-format",
        "json",
        "-",
    ])
    .expect("Should parse all options");

    assert_eq!(config.format, OutputFormat::Jsonl);
    assert!(config.legacy_header);
    assert!(config.keep_going);
    assert_eq!(config.fail_on, FailOn::AnyFailure);
    assert_eq!(config.dns_timeout_secs, 2);
    assert!(matches!(config.log_format, LogFormat::Json));
    assert!(config.reads_stdin());
}

#[test]
fn test_fail_on_rejected_lines_value() {
    let config = Config::try_parse_from(["mailcheck", "--fail-on", "rejected-lines"]).unwrap();
    assert_eq!(config.fail_on, FailOn::RejectedLines);
}

#[test]
fn test_invalid_values_are_rejected() {
    assert!(Config::try_parse_from(["mailcheck", "--format", "xml"]).is_err());
    assert!(Config::try_parse_from(["mailcheck", "--fail-on", "sometimes"]).is_err());
    assert!(Config::try_parse_from(["mailcheck", "--dns-timeout-secs", "soon"]).is_err());
}
