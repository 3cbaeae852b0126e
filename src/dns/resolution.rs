//! Forward resolution of scan targets.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use anyhow::{Context, Error, Result};
use hickory_resolver::TokioAsyncResolver;
use url::{Host, Url};

/// Resolves a hostname to all of its IP addresses.
///
/// IP literals (bracketed or not) are returned as-is. `localhost` and
/// `*.localhost` always map to loopback without a query.
///
/// # Arguments
///
/// * `host` - The hostname to resolve
/// * `resolver` - The DNS resolver instance
///
/// # Errors
///
/// Returns an error if DNS resolution fails or no IP addresses are found.
pub async fn resolve_host(host: &str, resolver: &TokioAsyncResolver) -> Result<Vec<IpAddr>> {
    if let Some(ip) = crate::domain::parse_ip_host(host) {
        return Ok(vec![ip]);
    }

    let lower = host.trim_end_matches('.').to_ascii_lowercase();
    if lower == "localhost" || lower.ends_with(".localhost") {
        return Ok(vec![
            IpAddr::V4(Ipv4Addr::LOCALHOST),
            IpAddr::V6(Ipv6Addr::LOCALHOST),
        ]);
    }

    let response = resolver
        .lookup_ip(host)
        .await
        .with_context(|| format!("DNS lookup failed for {host}"))?;
    let ips: Vec<IpAddr> = response.iter().collect();
    if ips.is_empty() {
        return Err(Error::msg(format!("No IP addresses found for {host}")));
    }
    log::debug!("Resolved {host} to {ips:?}");
    Ok(ips)
}

/// Resolves the host component of a parsed URL.
///
/// # Errors
///
/// Returns an error if the URL has no host or resolution fails.
pub async fn resolve_url_host(url: &Url, resolver: &TokioAsyncResolver) -> Result<Vec<IpAddr>> {
    match url.host() {
        Some(Host::Ipv4(ip)) => Ok(vec![IpAddr::V4(ip)]),
        Some(Host::Ipv6(ip)) => Ok(vec![IpAddr::V6(ip)]),
        Some(Host::Domain(domain)) => resolve_host(domain, resolver).await,
        None => Err(Error::msg(format!("URL '{url}' has no host component"))),
    }
}
