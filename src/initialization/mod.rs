//! Shared resource initialization.
//!
//! This module provides functions to initialize the resources a `ScanContext`
//! owns:
//! - HTTP client for redirect tracing (SSRF-safe resolver, no auto-redirects)
//! - DNS resolver for per-hop address checks
//! - WHOIS worker limiter
//! - Logger and TLS crypto provider (process-wide)
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;
mod resolver;

use std::sync::Arc;

use rustls::crypto::{ring::default_provider, CryptoProvider};
use tokio::sync::Semaphore;

// Re-export public API
pub use client::init_trace_client;
pub use logger::init_logger_with;
pub use resolver::init_resolver;

/// Initializes a semaphore for bounding concurrent WHOIS workers.
///
/// # Arguments
///
/// * `count` - Maximum number of concurrent lookups allowed
///
/// # Returns
///
/// An `Arc<Semaphore>` that can be shared across scans.
pub fn init_semaphore(count: usize) -> Arc<Semaphore> {
    Arc::new(Semaphore::new(count.max(1)))
}

/// Initializes the crypto provider for TLS operations.
///
/// Configures the global crypto provider for `rustls`. This must be called before
/// any TLS connections are established.
pub fn init_crypto_provider() {
    // Ignored: a provider may already be installed
    let _ = CryptoProvider::install_default(default_provider());
}
