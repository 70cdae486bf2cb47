//! DNS resolver initialization.
//!
//! This module provides functions to initialize the DNS resolver with proper
//! timeout configuration.

use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::system_conf::read_system_conf;
use hickory_resolver::TokioAsyncResolver;

use crate::error_handling::InitializationError;

/// Applies the per-query timeout and disables resolver-level retries.
fn tune_opts(mut opts: ResolverOpts, timeout: Duration) -> ResolverOpts {
    opts.timeout = timeout;
    // One attempt per lookup; a failed lookup is reported, not retried
    opts.attempts = 1;
    // Set ndots to 0 to prevent search domain appending
    opts.ndots = 0;
    opts
}

/// Initializes the DNS resolver from the system configuration.
///
/// Reads `/etc/resolv.conf` (or the platform equivalent). If the system
/// configuration cannot be read, falls back to hickory's default upstreams
/// and logs a warning.
///
/// # Arguments
///
/// * `timeout` - Per-query timeout applied to every lookup
///
/// # Returns
///
/// A configured `TokioAsyncResolver` wrapped in `Arc`.
///
/// # Errors
///
/// Returns `InitializationError::DnsResolverError` if `timeout` is zero.
pub fn init_resolver(timeout: Duration) -> Result<Arc<TokioAsyncResolver>, InitializationError> {
    if timeout.is_zero() {
        return Err(InitializationError::DnsResolverError(
            "DNS timeout must be greater than zero".to_string(),
        ));
    }

    let (config, opts) = match read_system_conf() {
        Ok((config, opts)) => (config, opts),
        Err(e) => {
            log::warn!("Could not read system DNS configuration ({e}); using default resolvers");
            (ResolverConfig::default(), ResolverOpts::default())
        }
    };

    Ok(Arc::new(TokioAsyncResolver::tokio(
        config,
        tune_opts(opts, timeout),
    )))
}
