//! DNS record querying.
//!
//! This module provides async DNS operations using `hickory-resolver`:
//! - Mail exchanger queries (MX records)
//! - Text record queries (TXT records) with SPF/DMARC extraction
//!
//! Lookups go through the [`DnsLookup`] trait so the domain checker can run
//! against the system resolver or an in-memory table.

mod extract;
mod records;

// Re-export public API
pub use extract::{dmarc_name, extract_dmarc_record, extract_record_with_prefix, extract_spf_record};
pub use records::{lookup_mx_records, lookup_txt_records, DnsLookup, HickoryLookup};
