//! HTTP client initialization.

use std::sync::Arc;

use reqwest::ClientBuilder;

use crate::config::Config;
use crate::security::SafeResolver;

/// Initializes the HTTP client used by the redirect tracer.
///
/// Creates a `reqwest::Client` configured with:
/// - Redirect following disabled, so every hop is inspected before it is requested
/// - The SSRF-safe DNS resolver
/// - User-Agent and per-request timeout from the configuration
/// - Rustls TLS backend (no native TLS)
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_trace_client(config: &Config) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .dns_resolver(Arc::new(SafeResolver))
        .timeout(config.check_timeout)
        .connect_timeout(config.check_timeout)
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}
