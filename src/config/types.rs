//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DNS_TIMEOUT_SECS, LEGACY_REPORT_HEADER, MAX_DNS_TIMEOUT_SECS, REPORT_HEADER,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Format of the per-domain reports written to stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `domain, hasMX, hasSPF, spfRecord, hasDMARC, dmarcRecord`
    Plain,
    /// One JSON object per line
    Jsonl,
}

/// Exit-code policy applied once the input has been fully consumed.
///
/// Fatal errors always exit with code 1 regardless of this setting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FailOn {
    /// Always exit 0 after a completed run
    Never,
    /// Exit 2 if any line was malformed or lacked an "@"
    RejectedLines,
    /// Exit 2 on rejected lines or any failed DNS lookup
    AnyFailure,
}

/// Which spelling of the header line to emit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderStyle {
    /// `spfRecord`
    Corrected,
    /// `sprRecord`, as older consumers expect
    Legacy,
}

impl HeaderStyle {
    /// The header line for this style, without a trailing newline.
    pub fn header(self) -> &'static str {
        match self {
            HeaderStyle::Corrected => REPORT_HEADER,
            HeaderStyle::Legacy => LEGACY_REPORT_HEADER,
        }
    }
}

/// Runtime configuration, parsed from the command line.
///
/// Every default reproduces the tool's fixed behavior: read stdin, plain
/// reports, stop at the first line without an "@", exit 0 after a completed
/// run.
///
/// # Examples
///
/// ```no_run
/// use mailcheck::Config;
///
/// let config = Config {
///     keep_going: true,
///     dns_timeout_secs: 2,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "mailcheck",
    version,
    about = "Report MX, SPF, and DMARC presence for the domain of each email address read from input"
)]
pub struct Config {
    /// File to read addresses from ("-" reads stdin)
    #[arg(default_value = "-")]
    pub file: PathBuf,

    /// Report format written to stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Emit the historical "sprRecord" header spelling
    #[arg(long)]
    pub legacy_header: bool,

    /// Skip lines without an "@" instead of stopping the run
    #[arg(long)]
    pub keep_going: bool,

    /// Exit-code policy for a completed run
    #[arg(long, value_enum, default_value_t = FailOn::Never)]
    pub fail_on: FailOn,

    /// Per-lookup DNS timeout in seconds
    #[arg(long, default_value_t = DNS_TIMEOUT_SECS)]
    pub dns_timeout_secs: u64,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from("-"),
            format: OutputFormat::Plain,
            legacy_header: false,
            keep_going: false,
            fail_on: FailOn::Never,
            dns_timeout_secs: DNS_TIMEOUT_SECS,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
        }
    }
}

/// A configuration value outside its accepted range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// What the accepted values are
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid {}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigValidationError {}

impl Config {
    /// Checks that numeric options are within their accepted ranges.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.dns_timeout_secs == 0 || self.dns_timeout_secs > MAX_DNS_TIMEOUT_SECS {
            return Err(ConfigValidationError {
                field: "dns_timeout_secs",
                message: format!(
                    "must be between 1 and {MAX_DNS_TIMEOUT_SECS} seconds (got {})",
                    self.dns_timeout_secs
                ),
            });
        }
        Ok(())
    }

    /// Returns true when input comes from stdin rather than a file.
    pub fn reads_stdin(&self) -> bool {
        self.file.as_os_str() == "-"
    }

    /// Per-lookup DNS timeout.
    pub fn dns_timeout(&self) -> Duration {
        Duration::from_secs(self.dns_timeout_secs)
    }

    /// Header spelling selected by `--legacy-header`.
    pub fn header_style(&self) -> HeaderStyle {
        if self.legacy_header {
            HeaderStyle::Legacy
        } else {
            HeaderStyle::Corrected
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.reads_stdin());
        assert_eq!(config.format, OutputFormat::Plain);
        assert_eq!(config.fail_on, FailOn::Never);
        assert!(!config.keep_going);
        assert!(!config.legacy_header);
        assert_eq!(config.dns_timeout(), Duration::from_secs(5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_header_style_selection() {
        let mut config = Config::default();
        assert_eq!(config.header_style().header(), REPORT_HEADER);
        config.legacy_header = true;
        assert_eq!(
            config.header_style().header(),
            "domain,hasMX,hasSPF,sprRecord,hasDMARC,dmarcRecord"
        );
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = Config {
            dns_timeout_secs: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.field, "dns_timeout_secs");
        assert!(err.message.contains("between 1 and 60"));
    }

    #[test]
    fn test_validate_rejects_excessive_timeout() {
        let config = Config {
            dns_timeout_secs: 61,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_defaults_match_default_impl() {
        let parsed = Config::try_parse_from(["mailcheck"]).unwrap();
        let default = Config::default();
        assert_eq!(parsed.file, default.file);
        assert_eq!(parsed.format, default.format);
        assert_eq!(parsed.fail_on, default.fail_on);
        assert_eq!(parsed.dns_timeout_secs, default.dns_timeout_secs);
        assert_eq!(
            log::LevelFilter::from(parsed.log_level),
            log::LevelFilter::from(default.log_level)
        );
    }
}
