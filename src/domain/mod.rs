//! Registrable domain utilities.
//!
//! This module wraps the Public Suffix List (PSL) to identify registrable
//! domains and public suffixes of hostnames.
//!
//! Key functions:
//! - `registrable_domain()` - "www.example.co.uk" -> "example.co.uk"
//! - `public_suffix()` - "www.example.co.uk" -> "co.uk"
//! - `parse_ip_host()` - IP literal detection (with or without brackets)

use std::net::IpAddr;

/// Parses `host` as an IP literal, accepting bracketed IPv6.
pub fn parse_ip_host(host: &str) -> Option<IpAddr> {
    let trimmed = host
        .strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
        .unwrap_or(host);
    trimmed.parse().ok()
}

/// Returns the registrable domain of a hostname.
///
/// # Arguments
///
/// * `host` - ASCII hostname (no scheme, port or path)
///
/// # Returns
///
/// `None` for IP literals and for hosts that are themselves a public suffix
/// (e.g. "co.uk" or a bare unlisted TLD such as "localhost").
pub fn registrable_domain(host: &str) -> Option<String> {
    if host.is_empty() || parse_ip_host(host).is_some() {
        return None;
    }
    let host = host.trim_end_matches('.').to_ascii_lowercase();
    psl::domain_str(&host).map(str::to_string)
}

/// Returns the public suffix (effective TLD) of a hostname.
pub fn public_suffix(host: &str) -> Option<String> {
    if host.is_empty() || parse_ip_host(host).is_some() {
        return None;
    }
    let host = host.trim_end_matches('.').to_ascii_lowercase();
    psl::suffix_str(&host).map(str::to_string)
}

/// Registrable domain of `host`, or the lowercased host when it has none.
pub fn site_of(host: &str) -> String {
    registrable_domain(host).unwrap_or_else(|| host.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
