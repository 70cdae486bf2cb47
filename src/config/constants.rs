//! Configuration constants.
//!
//! This module defines the fixed strings and default operational parameters
//! used throughout the application.

/// DNS query timeout in seconds.
/// Matches the resolver library's own per-query default so an unconfigured run
/// behaves like the platform resolver would.
pub const DNS_TIMEOUT_SECS: u64 = 5;

/// Upper bound accepted for `--dns-timeout-secs`.
pub const MAX_DNS_TIMEOUT_SECS: u64 = 60;

/// Prefix identifying an SPF policy among a domain's TXT records.
pub const SPF_PREFIX: &str = "v=spf1";

/// Prefix identifying a DMARC policy among `_dmarc.<domain>` TXT records.
pub const DMARC_PREFIX: &str = "v=DMARC1";

/// Label prepended to a domain to locate its DMARC policy.
pub const DMARC_LABEL: &str = "_dmarc";

/// Header line written to the diagnostic stream before any report.
pub const REPORT_HEADER: &str = "domain,hasMX,hasSPF,spfRecord,hasDMARC,dmarcRecord";

/// Historical header spelling ("sprRecord"), kept byte-for-byte for
/// downstream consumers that match on it. Selected with `--legacy-header`.
pub const LEGACY_REPORT_HEADER: &str = "domain,hasMX,hasSPF,sprRecord,hasDMARC,dmarcRecord";

/// Exit code for a run that stopped on a fatal error.
pub const EXIT_FATAL: i32 = 1;

/// Exit code for a completed run that violates the `--fail-on` policy.
pub const EXIT_POLICY_FAILURE: i32 = 2;
