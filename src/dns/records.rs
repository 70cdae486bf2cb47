//! DNS record queries (MX, TXT).
//!
//! "No records" answers (NODATA, NXDOMAIN) come back as empty vectors. Every
//! other resolver failure is returned as an error; callers decide whether it
//! is fatal.

use std::sync::Arc;

use anyhow::{Error, Result};
use async_trait::async_trait;
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::TokioAsyncResolver;

/// Source of MX and TXT records.
#[async_trait]
pub trait DnsLookup: Send + Sync {
    /// MX records for `domain` as (preference, exchange) pairs.
    async fn mx_records(&self, domain: &str) -> Result<Vec<(u16, String)>, Error>;

    /// TXT records for `name`, each record's strings joined.
    async fn txt_records(&self, name: &str) -> Result<Vec<String>, Error>;
}

/// [`DnsLookup`] backed by a hickory resolver.
#[derive(Clone)]
pub struct HickoryLookup {
    resolver: Arc<TokioAsyncResolver>,
}

impl HickoryLookup {
    pub fn new(resolver: Arc<TokioAsyncResolver>) -> Self {
        Self { resolver }
    }
}

#[async_trait]
impl DnsLookup for HickoryLookup {
    async fn mx_records(&self, domain: &str) -> Result<Vec<(u16, String)>, Error> {
        lookup_mx_records(domain, &self.resolver).await
    }

    async fn txt_records(&self, name: &str) -> Result<Vec<String>, Error> {
        lookup_txt_records(name, &self.resolver).await
    }
}

/// Whether a resolver error just means the name has no records of that type.
pub(crate) fn is_no_records(e: &ResolveError) -> bool {
    matches!(e.kind(), ResolveErrorKind::NoRecordsFound { .. })
}

/// Queries TXT (text) records for a name.
///
/// # Arguments
///
/// * `name` - The name to query (a domain, or `_dmarc.<domain>`)
/// * `resolver` - The DNS resolver instance
///
/// # Returns
///
/// TXT record strings in the order the resolver returned them. An empty
/// vector if the name has no TXT records.
///
/// # Errors
///
/// Returns the resolver error for anything other than a "no records" answer
/// (timeouts, SERVFAIL, network errors, invalid names).
pub async fn lookup_txt_records(
    name: &str,
    resolver: &TokioAsyncResolver,
) -> Result<Vec<String>, Error> {
    match resolver.lookup(name, RecordType::TXT).await {
        Ok(lookup) => {
            let txt_records: Vec<String> = lookup
                .iter()
                .filter_map(|rdata| {
                    if let RData::TXT(txt) = rdata {
                        // TXT records can contain multiple strings - join them
                        Some(
                            txt.iter()
                                .map(|bytes| String::from_utf8_lossy(bytes).to_string())
                                .collect::<Vec<String>>()
                                .join(""),
                        )
                    } else {
                        None
                    }
                })
                .collect();
            Ok(txt_records)
        }
        Err(e) if is_no_records(&e) => {
            log::debug!("No TXT records for {name}: {e}");
            Ok(Vec::new())
        }
        Err(e) => Err(e.into()),
    }
}

/// Queries MX (mail exchanger) records for a domain.
///
/// # Arguments
///
/// * `domain` - The domain to query
/// * `resolver` - The DNS resolver instance
///
/// # Returns
///
/// A vector of (priority, hostname) tuples, sorted by priority (lower = higher
/// priority). An empty vector if the domain has no MX records.
///
/// # Errors
///
/// Returns the resolver error for anything other than a "no records" answer.
pub async fn lookup_mx_records(
    domain: &str,
    resolver: &TokioAsyncResolver,
) -> Result<Vec<(u16, String)>, Error> {
    match resolver.lookup(domain, RecordType::MX).await {
        Ok(lookup) => {
            let mut mx_records: Vec<(u16, String)> = lookup
                .iter()
                .filter_map(|rdata| {
                    if let RData::MX(mx) = rdata {
                        Some((mx.preference(), mx.exchange().to_utf8()))
                    } else {
                        None
                    }
                })
                .collect();
            // Sort by priority (lower preference = higher priority)
            mx_records.sort_by_key(|(priority, _)| *priority);
            Ok(mx_records)
        }
        Err(e) if is_no_records(&e) => {
            log::debug!("No MX records for {domain}: {e}");
            Ok(Vec::new())
        }
        Err(e) => Err(e.into()),
    }
}
