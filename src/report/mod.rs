//! Report output.
//!
//! Two destinations are kept apart:
//! - **out** (stdout): one report per checked domain
//! - **diag** (stderr): the header line and per-line warnings about rejected
//!   input
//!
//! DNS lookup warnings go through the logger, which also writes to stderr.

use std::fmt::Display;
use std::io::{self, Write};

use serde_json::{json, Value};

use crate::config::{HeaderStyle, OutputFormat};
use crate::domain::DomainReport;

/// Builds the JSONL form of a report. Absent records are `null`.
pub fn report_to_json(report: &DomainReport) -> Value {
    let record = |has: bool, text: &str| {
        if has {
            Value::String(text.to_string())
        } else {
            Value::Null
        }
    };
    json!({
        "domain": report.domain,
        "has_mx": report.has_mx,
        "has_spf": report.has_spf,
        "spf_record": record(report.has_spf, &report.spf_record),
        "has_dmarc": report.has_dmarc,
        "dmarc_record": record(report.has_dmarc, &report.dmarc_record),
    })
}

/// Renders a report in `format`, without a trailing newline.
pub fn format_report(report: &DomainReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Plain => report.to_string(),
        OutputFormat::Jsonl => report_to_json(report).to_string(),
    }
}

/// Writes reports and diagnostics to their separate streams.
pub struct Reporter<O: Write, D: Write> {
    out: O,
    diag: D,
    format: OutputFormat,
}

impl<O: Write, D: Write> Reporter<O, D> {
    pub fn new(out: O, diag: D, format: OutputFormat) -> Self {
        Self { out, diag, format }
    }

    /// Writes the header line to the diagnostic stream.
    pub fn write_header(&mut self, style: HeaderStyle) -> io::Result<()> {
        writeln!(self.diag, "{}", style.header())?;
        self.diag.flush()
    }

    /// Writes one report line to the output stream and flushes it, so
    /// results appear as each domain finishes.
    pub fn write_report(&mut self, report: &DomainReport) -> io::Result<()> {
        writeln!(self.out, "{}", format_report(report, self.format))?;
        self.out.flush()
    }

    /// Writes one line to the diagnostic stream.
    pub fn write_diagnostic(&mut self, message: &dyn Display) -> io::Result<()> {
        writeln!(self.diag, "{message}")?;
        self.diag.flush()
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> (O, D) {
        (self.out, self.diag)
    }
}
