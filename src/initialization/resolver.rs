//! DNS resolver initialization.
//!
//! This module provides functions to initialize the DNS resolver with proper
//! timeout configuration.

use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::TokioAsyncResolver;

/// Initializes the DNS resolver used for per-hop address checks.
///
/// Uses the default upstream configuration with aggressive timeouts so a slow
/// DNS server cannot stall a scan past its budget. `ndots` is 0 so no search
/// domain is ever appended to a scanned hostname.
///
/// # Returns
///
/// A configured `TokioAsyncResolver` wrapped in `Arc` for sharing across tasks.
pub fn init_resolver() -> Arc<TokioAsyncResolver> {
    use hickory_resolver::config::{ResolverConfig, ResolverOpts};

    let mut opts = ResolverOpts::default();
    opts.timeout = Duration::from_secs(crate::config::DNS_TIMEOUT_SECS);
    opts.attempts = 2;
    opts.ndots = 0;

    Arc::new(TokioAsyncResolver::tokio(ResolverConfig::default(), opts))
}
