//! URL canonicalization.
//!
//! Produces the canonical form every other analyzer works on:
//! - control characters removed
//! - nested percent-encoding unwrapped (bounded number of passes)
//! - scheme lowercased, defaulting to `http`
//! - hostname converted to ASCII (punycode), falling back to lowercase
//!
//! Normalization never fails. Input without a hostname comes back with an
//! empty `hostname`, which callers treat as "no network checks possible".

use crate::config::MAX_DECODE_ITERATIONS;
use crate::models::NormalizedUrl;

/// Default scheme for schemeless input.
const DEFAULT_SCHEME: &str = "http";

/// Normalizes a raw, possibly adversarial URL string.
///
/// # Examples
///
/// ```
/// use urlscope::normalize::normalize_url;
///
/// let n = normalize_url("HTTP://Example.COM/Login");
/// assert_eq!(n.canonical_url, "http://example.com/Login");
/// assert_eq!(n.hostname, "example.com");
/// ```
pub fn normalize_url(raw: &str) -> NormalizedUrl {
    let stripped = strip_controls(raw.trim());
    let decoded = decode_recursive(&stripped, MAX_DECODE_ITERATIONS);

    let Some(parts) = split_url(&decoded) else {
        return NormalizedUrl {
            canonical_url: stripped,
            hostname: String::new(),
            raw_hostname: String::new(),
            scheme: String::new(),
        };
    };

    let scheme = parts.scheme.to_ascii_lowercase();
    let raw_hostname = parts.host.to_lowercase();

    let (hostname, host_for_url) = if let Some(inner) = parts
        .host
        .strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
    {
        let inner = inner.to_ascii_lowercase();
        let bracketed = format!("[{inner}]");
        (inner, bracketed)
    } else {
        let ascii = to_ascii_host(parts.host);
        (ascii.clone(), ascii)
    };

    let mut canonical_url = String::with_capacity(decoded.len() + 8);
    canonical_url.push_str(&scheme);
    canonical_url.push_str("://");
    if let Some(userinfo) = parts.userinfo {
        canonical_url.push_str(userinfo);
        canonical_url.push('@');
    }
    canonical_url.push_str(&host_for_url);
    if let Some(port) = parts.port {
        canonical_url.push(':');
        canonical_url.push_str(port);
    }
    canonical_url.push_str(parts.rest);

    NormalizedUrl {
        canonical_url,
        hostname,
        raw_hostname,
        scheme,
    }
}

/// Removes code points below 32 (C0 controls).
fn strip_controls(input: &str) -> String {
    input.chars().filter(|c| (*c as u32) >= 32).collect()
}

/// Percent-decodes until a fixed point or `max_passes` is reached.
///
/// Control characters revealed by a pass are stripped in the same pass, so a
/// decoded `%0A` cannot assemble a fresh escape sequence afterwards.
pub fn decode_recursive(input: &str, max_passes: usize) -> String {
    let mut current = input.to_string();
    for _ in 0..max_passes {
        let bytes = urlencoding::decode_binary(current.as_bytes());
        let next = strip_controls(String::from_utf8_lossy(&bytes).trim());
        if next == current {
            break;
        }
        current = next;
    }
    current
}

/// Converts a hostname to its ASCII form, lowercasing when IDNA rejects it.
fn to_ascii_host(host: &str) -> String {
    match idna::domain_to_ascii(host) {
        Ok(ascii) if !ascii.is_empty() => ascii,
        Ok(_) => host.to_lowercase(),
        Err(e) => {
            log::debug!("IDNA conversion failed for '{host}': {e:?}; using lowercase");
            host.to_lowercase()
        }
    }
}

/// Borrowed pieces of a URL string.
#[derive(Debug, PartialEq, Eq)]
struct UrlParts<'a> {
    scheme: &'a str,
    userinfo: Option<&'a str>,
    host: &'a str,
    port: Option<&'a str>,
    /// Path, query and fragment, untouched
    rest: &'a str,
}

/// Splits a URL into scheme/authority/rest. Returns `None` without a hostname.
fn split_url(input: &str) -> Option<UrlParts<'_>> {
    let (scheme, after_scheme) = match split_scheme(input) {
        Some((scheme, rest)) if rest.starts_with("//") => (scheme, &rest[2..]),
        // `mailto:`, `tel:`, `javascript:` and friends carry no authority
        Some((scheme, _)) if !scheme.contains('.') && !looks_like_port(input, scheme) => {
            return None
        }
        _ => (DEFAULT_SCHEME, input.strip_prefix("//").unwrap_or(input)),
    };

    let authority_end = after_scheme
        .find(['/', '?', '#'])
        .unwrap_or(after_scheme.len());
    let (authority, rest) = after_scheme.split_at(authority_end);

    let (userinfo, host_port) = match authority.rfind('@') {
        Some(at) => (Some(&authority[..at]), &authority[at + 1..]),
        None => (None, authority),
    };

    let (host, port) = split_host_port(host_port);
    if host.is_empty() || host == "[]" {
        return None;
    }

    Some(UrlParts {
        scheme,
        userinfo,
        host,
        port,
        rest,
    })
}

/// Returns `(scheme, remainder)` when `input` starts with a syntactically valid scheme.
fn split_scheme(input: &str) -> Option<(&str, &str)> {
    let colon = input.find(':')?;
    let candidate = &input[..colon];
    let mut chars = candidate.chars();
    let first_ok = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    let rest_ok = chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    (first_ok && rest_ok).then(|| (candidate, &input[colon + 1..]))
}

/// `localhost:8080/x` parses as scheme `localhost`; treat a numeric tail as a port.
fn looks_like_port(input: &str, scheme: &str) -> bool {
    input[scheme.len() + 1..]
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit())
}

fn split_host_port(host_port: &str) -> (&str, Option<&str>) {
    if host_port.starts_with('[') {
        return match host_port.find(']') {
            Some(close) => {
                let host = &host_port[..=close];
                let port = host_port[close + 1..]
                    .strip_prefix(':')
                    .filter(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()));
                (host, port)
            }
            None => (host_port, None),
        };
    }
    match host_port.rfind(':') {
        Some(colon) if host_port[colon + 1..].chars().all(|c| c.is_ascii_digit()) => {
            let port = &host_port[colon + 1..];
            (&host_port[..colon], (!port.is_empty()).then_some(port))
        }
        _ => (host_port, None),
    }
}
