//! DNS record extraction utilities.
//!
//! This module provides functions to pick specific policy records out of TXT
//! record collections, such as SPF and DMARC records.

use crate::config::{DMARC_LABEL, DMARC_PREFIX, SPF_PREFIX};

/// Returns the first record that begins with `prefix`, in the order given.
///
/// Matching is case-sensitive and does not skip leading whitespace: the
/// record must begin with the prefix byte-for-byte. The returned record is the
/// full, unmodified text.
pub fn extract_record_with_prefix(txt_records: &[String], prefix: &str) -> Option<String> {
    txt_records
        .iter()
        .find(|txt| txt.starts_with(prefix))
        .cloned()
}

/// Extracts SPF record from TXT records.
///
/// SPF records start with "v=spf1".
///
/// # Arguments
///
/// * `txt_records` - TXT record strings in resolver order
///
/// # Returns
///
/// The first SPF record found, or `None` if no SPF record exists.
pub fn extract_spf_record(txt_records: &[String]) -> Option<String> {
    extract_record_with_prefix(txt_records, SPF_PREFIX)
}

/// Extracts DMARC record from TXT records.
///
/// DMARC records live at `_dmarc.<domain>` (see [`dmarc_name`]) and start
/// with "v=DMARC1".
///
/// # Returns
///
/// The first DMARC record found, or `None` if no DMARC record exists.
pub fn extract_dmarc_record(txt_records: &[String]) -> Option<String> {
    extract_record_with_prefix(txt_records, DMARC_PREFIX)
}

/// Name queried for a domain's DMARC policy.
pub fn dmarc_name(domain: &str) -> String {
    format!("{DMARC_LABEL}.{domain}")
}
