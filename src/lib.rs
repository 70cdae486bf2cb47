//! mailcheck library: MX, SPF, and DMARC presence checks for email domains
//!
//! Reads email addresses one per line, splits off the domain, and reports
//! whether the domain publishes MX records, an SPF record (`v=spf1` TXT on the
//! domain) and a DMARC record (`v=DMARC1` TXT on `_dmarc.<domain>`).
//!
//! # Example
//!
//! ```no_run
//! use mailcheck::{run, Config};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default(); // reads stdin
//! let summary = run(&config).await?;
//! println!("Checked {} domains", summary.domains_checked);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Lookups run one at a time, so a
//! current-thread runtime is enough.

mod address;
pub mod config;
mod dns;
mod domain;
mod error_handling;
pub mod initialization;
mod report;

#[cfg(test)]
mod test_helpers;

// Re-export public API
pub use address::{split_address, EmailAddress};
pub use config::{Config, FailOn, HeaderStyle, LogFormat, LogLevel, OutputFormat};
pub use dns::{extract_dmarc_record, extract_spf_record, DnsLookup, HickoryLookup};
pub use domain::{check_domain, DomainCheck, DomainReport};
pub use error_handling::{
    AddressError, CheckError, InitializationError, LookupErrorType, ProcessingStats,
    RejectionType,
};
pub use report::{format_report, Reporter};
pub use run::{evaluate_exit_code, run, run_check, CheckSummary};

// Internal run module (contains the main checking loop)
mod run {
    use std::io::{self, Write};
    use std::time::Instant;

    use anyhow::{Context, Result};
    use log::info;
    use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

    use crate::address::split_address;
    use crate::config::{Config, FailOn, EXIT_POLICY_FAILURE};
    use crate::dns::{DnsLookup, HickoryLookup};
    use crate::domain::check_domain;
    use crate::error_handling::{AddressError, CheckError, ProcessingStats, RejectionType};
    use crate::initialization::init_resolver;
    use crate::report::Reporter;

    /// Results of a completed check run.
    #[derive(Debug, Clone, Default)]
    pub struct CheckSummary {
        /// Input lines read
        pub lines_read: usize,
        /// Domains looked up and reported
        pub domains_checked: usize,
        /// Rejected lines and failed lookups, by kind
        pub stats: ProcessingStats,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    impl CheckSummary {
        /// Lines skipped for a missing "@" or a malformed address.
        pub fn rejected_lines(&self) -> usize {
            self.stats.total_rejections()
        }

        /// DNS lookups that errored or timed out.
        pub fn lookup_failures(&self) -> usize {
            self.stats.total_lookup_errors()
        }
    }

    /// Maps a completed run to a process exit code under `fail_on`.
    ///
    /// Returns 0 or [`EXIT_POLICY_FAILURE`]. Fatal errors never reach this
    /// point; they exit with [`crate::config::EXIT_FATAL`].
    pub fn evaluate_exit_code(fail_on: FailOn, summary: &CheckSummary) -> i32 {
        let failed = match fail_on {
            FailOn::Never => false,
            FailOn::RejectedLines => summary.rejected_lines() > 0,
            FailOn::AnyFailure => summary.rejected_lines() > 0 || summary.lookup_failures() > 0,
        };
        if failed {
            EXIT_POLICY_FAILURE
        } else {
            0
        }
    }

    /// Runs a check with the provided configuration against real input and DNS.
    ///
    /// Reads from stdin or `config.file`, resolves through the system
    /// resolver, writes reports to stdout and diagnostics to stderr.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The configuration is invalid
    /// - The input file cannot be opened
    /// - The resolver cannot be initialized
    /// - Any fatal condition from [`run_check`] occurs
    pub async fn run(config: &Config) -> Result<CheckSummary> {
        config.validate()?;

        let input: Box<dyn AsyncBufRead + Unpin + Send> = if config.reads_stdin() {
            info!("Reading addresses from stdin");
            Box::new(BufReader::new(tokio::io::stdin()))
        } else {
            info!("Reading addresses from {}", config.file.display());
            let file = tokio::fs::File::open(&config.file)
                .await
                .with_context(|| format!("Failed to open input file {}", config.file.display()))?;
            Box::new(BufReader::new(file))
        };

        let resolver =
            init_resolver(config.dns_timeout()).context("Failed to initialize DNS resolver")?;
        let dns = HickoryLookup::new(resolver);

        let summary = run_check(config, input, &dns, io::stdout(), io::stderr()).await?;
        Ok(summary)
    }

    /// Decodes one raw input line, dropping a trailing `\r`.
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD, so such a line is still
    /// split and checked on its own instead of ending the run.
    fn decode_line(raw: &[u8]) -> String {
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        String::from_utf8_lossy(raw).into_owned()
    }

    /// Processes `input` line by line, checking each address's domain.
    ///
    /// The header goes to `diag` before the first line is read. Each line is
    /// then, in order:
    /// - valid: its domain is checked and one report written to `out`
    /// - malformed (several "@", empty side): a warning goes to `diag`, no lookups
    /// - missing "@": fatal, unless `config.keep_going`, in which case it is
    ///   reported on `diag` and skipped
    ///
    /// # Errors
    ///
    /// - [`CheckError::InvalidAddress`] for a line without "@" when not keeping going
    /// - [`CheckError::InputRead`] if reading `input` fails (undecodable bytes
    ///   are not a read failure)
    /// - [`CheckError::OutputWrite`] if writing to `out` or `diag` fails
    pub async fn run_check<R, L, O, D>(
        config: &Config,
        input: R,
        dns: &L,
        out: O,
        diag: D,
    ) -> Result<CheckSummary, CheckError>
    where
        R: AsyncBufRead + Unpin,
        L: DnsLookup + ?Sized,
        O: Write,
        D: Write,
    {
        let start_time = Instant::now();
        let timeout = config.dns_timeout();
        let mut reporter = Reporter::new(out, diag, config.format);
        let mut summary = CheckSummary::default();

        reporter
            .write_header(config.header_style())
            .map_err(CheckError::OutputWrite)?;

        let mut segments = input.split(b'\n');
        while let Some(raw) = segments.next_segment().await.map_err(CheckError::InputRead)? {
            summary.lines_read += 1;
            let line = decode_line(&raw);

            let address = match split_address(&line) {
                Ok(address) => address,
                Err(e @ AddressError::MissingAt(_)) if !config.keep_going => {
                    return Err(e.into());
                }
                Err(e) => {
                    summary.stats.increment_rejection(RejectionType::from(&e));
                    reporter
                        .write_diagnostic(&e)
                        .map_err(CheckError::OutputWrite)?;
                    continue;
                }
            };

            let check = check_domain(&address.domain, dns, timeout).await;
            for failure in &check.lookup_failures {
                summary.stats.increment_lookup_error(*failure);
            }
            summary.domains_checked += 1;
            reporter
                .write_report(&check.report)
                .map_err(CheckError::OutputWrite)?;
        }

        summary.elapsed_seconds = start_time.elapsed().as_secs_f64();
        info!(
            "Checked {} domain{} from {} line{} ({} rejected, {} lookup failure{}) in {:.1}s",
            summary.domains_checked,
            if summary.domains_checked == 1 { "" } else { "s" },
            summary.lines_read,
            if summary.lines_read == 1 { "" } else { "s" },
            summary.rejected_lines(),
            summary.lookup_failures(),
            if summary.lookup_failures() == 1 { "" } else { "s" },
            summary.elapsed_seconds
        );
        summary.stats.log_summary();

        Ok(summary)
    }

}
