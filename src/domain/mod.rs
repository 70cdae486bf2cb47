//! Per-domain mail record checks.
//!
//! [`check_domain`] runs three lookups, one after another:
//! - MX on the domain
//! - TXT on the domain, scanned for an SPF record
//! - TXT on `_dmarc.<domain>`, scanned for a DMARC record
//!
//! A failed or timed-out lookup is logged and treated as an empty answer, so
//! a report is always produced.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use anyhow::{anyhow, Error, Result};
use log::{debug, warn};

use crate::dns::{dmarc_name, extract_dmarc_record, extract_spf_record, DnsLookup};
use crate::error_handling::LookupErrorType;

/// Mail-related DNS records published by one domain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainReport {
    pub domain: String,
    pub has_mx: bool,
    pub has_spf: bool,
    /// Full text of the first SPF record, empty if none
    pub spf_record: String,
    pub has_dmarc: bool,
    /// Full text of the first DMARC record, empty if none
    pub dmarc_record: String,
}

/// Renders `domain, hasMX, hasSPF, spfRecord, hasDMARC, dmarcRecord` with no
/// trailing newline.
impl fmt::Display for DomainReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}, {}, {}",
            self.domain,
            self.has_mx,
            self.has_spf,
            self.spf_record,
            self.has_dmarc,
            self.dmarc_record
        )
    }
}

/// A report plus the lookups that failed while building it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainCheck {
    pub report: DomainReport,
    pub lookup_failures: Vec<LookupErrorType>,
}

/// Checks MX, SPF, and DMARC for `domain`.
///
/// Each lookup is bounded by `timeout`. Errors and timeouts are logged as
/// warnings and recorded in [`DomainCheck::lookup_failures`]; the matching
/// report fields stay `false`/empty.
pub async fn check_domain<L>(domain: &str, dns: &L, timeout: Duration) -> DomainCheck
where
    L: DnsLookup + ?Sized,
{
    let mut report = DomainReport {
        domain: domain.to_string(),
        ..Default::default()
    };
    let mut lookup_failures = Vec::new();

    let mx_records = settle(
        LookupErrorType::MxLookup,
        domain,
        with_timeout(timeout, dns.mx_records(domain)).await,
        &mut lookup_failures,
    );
    report.has_mx = !mx_records.is_empty();

    let txt_records = settle(
        LookupErrorType::SpfTxtLookup,
        domain,
        with_timeout(timeout, dns.txt_records(domain)).await,
        &mut lookup_failures,
    );
    if let Some(spf) = extract_spf_record(&txt_records) {
        report.has_spf = true;
        report.spf_record = spf;
    }

    let dmarc_domain = dmarc_name(domain);
    let dmarc_records = settle(
        LookupErrorType::DmarcTxtLookup,
        &dmarc_domain,
        with_timeout(timeout, dns.txt_records(&dmarc_domain)).await,
        &mut lookup_failures,
    );
    if let Some(dmarc) = extract_dmarc_record(&dmarc_records) {
        report.has_dmarc = true;
        report.dmarc_record = dmarc;
    }

    debug!(
        "Checked {domain}: mx={} spf={} dmarc={}",
        report.has_mx, report.has_spf, report.has_dmarc
    );

    DomainCheck {
        report,
        lookup_failures,
    }
}

async fn with_timeout<T, F>(timeout: Duration, fut: F) -> Result<T, Error>
where
    F: Future<Output = Result<T, Error>>,
{
    match tokio::time::timeout(timeout, fut).await {
        Ok(result) => result,
        Err(_) => Err(anyhow!("lookup timed out after {timeout:?}")),
    }
}

/// Unwraps a lookup result, turning a failure into an empty answer.
fn settle<T>(
    kind: LookupErrorType,
    name: &str,
    result: Result<Vec<T>, Error>,
    failures: &mut Vec<LookupErrorType>,
) -> Vec<T> {
    match result {
        Ok(records) => records,
        Err(e) => {
            warn!("{kind} for {name}: {e:#}");
            failures.push(kind);
            Vec::new()
        }
    }
}
