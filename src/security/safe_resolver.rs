//! SSRF-safe DNS resolution.
//!
//! Implements `reqwest::dns::Resolve` by delegating to the system resolver and
//! then validating that every returned IP is public. Connections to private,
//! loopback, or link-local addresses are rejected *before* reqwest opens a TCP
//! socket, closing the TOCTOU / DNS-rebinding gap.

use once_cell::sync::Lazy;
use reqwest::dns::{Addrs, Name, Resolve, Resolving};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Concurrency limiter for DNS lookups (prevent resource exhaustion)
static DNS_SEMAPHORE: Lazy<Arc<Semaphore>> = Lazy::new(|| Arc::new(Semaphore::new(64)));

/// Which destination addresses a scan is allowed to contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddressPolicy {
    /// Public unicast addresses only
    #[default]
    PublicOnly,
    /// Public addresses plus loopback (local test fixtures)
    AllowLoopback,
}

impl AddressPolicy {
    /// Whether `ip` may be contacted under this policy.
    pub fn permits(&self, ip: IpAddr) -> bool {
        match self {
            AddressPolicy::PublicOnly => is_public_ip(ip),
            AddressPolicy::AllowLoopback => is_public_ip(ip) || ip.is_loopback(),
        }
    }
}

/// A DNS resolver that rejects private/loopback/link-local IPs.
///
/// Wraps `tokio::net::lookup_host` (system resolver) and fails the whole
/// resolution if *any* resolved IP is non-public.
#[derive(Debug, Clone)]
pub struct SafeResolver;

impl Resolve for SafeResolver {
    fn resolve(&self, name: Name) -> Resolving {
        Box::pin(async move {
            let _permit = DNS_SEMAPHORE
                .acquire()
                .await
                .map_err(|e| -> Box<dyn std::error::Error + Send + Sync> { Box::new(e) })?;

            let host = format!("{}:0", name.as_str());
            let addrs: Vec<SocketAddr> = tokio::net::lookup_host(&host)
                .await
                .map_err(|e| -> Box<dyn std::error::Error + Send + Sync> { Box::new(e) })?
                .collect();

            if addrs.is_empty() || addrs.iter().any(|addr| !is_public_ip(addr.ip())) {
                return Err(Box::new(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    format!(
                        "SSRF blocked: '{}' resolves to a private/reserved address",
                        name.as_str()
                    ),
                ))
                    as Box<dyn std::error::Error + Send + Sync>);
            }

            let addrs: Addrs = Box::new(addrs.into_iter());
            Ok(addrs)
        })
    }
}

/// Returns `false` for loopback, private, link-local, multicast, unspecified
/// and reserved addresses.
pub fn is_public_ip(ip: IpAddr) -> bool {
    match ip {
        IpAddr::V4(v4) => is_public_ipv4(v4),
        IpAddr::V6(v6) => is_public_ipv6(v6),
    }
}

fn is_public_ipv4(ip: Ipv4Addr) -> bool {
    let [a, b, _, _] = ip.octets();
    !matches!(
        (a, b),
        (0, _)                       // this network
            | (10, _)                // private
            | (100, 64..=127)        // shared address space
            | (127, _)               // loopback
            | (169, 254)             // link-local, incl. cloud metadata
            | (172, 16..=31)         // private
            | (192, 168)             // private
            | (224..=255, _)         // multicast, reserved, broadcast
    )
}

fn is_public_ipv6(ip: Ipv6Addr) -> bool {
    // ::ffff:a.b.c.d is judged by its IPv4 address
    if let Some(v4) = ip.to_ipv4_mapped() {
        return is_public_ipv4(v4);
    }
    if ip.is_loopback() || ip.is_unspecified() || ip.is_multicast() {
        return false;
    }
    let head = ip.segments()[0];
    // fc00::/7 unique-local, fe80::/10 link-local
    (head & 0xfe00) != 0xfc00 && (head & 0xffc0) != 0xfe80
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_ipv4() {
        assert!(is_public_ipv4(Ipv4Addr::new(8, 8, 8, 8)));
        assert!(is_public_ipv4(Ipv4Addr::new(1, 1, 1, 1)));
        assert!(is_public_ipv4(Ipv4Addr::new(93, 184, 216, 34)));
    }

    #[test]
    fn test_private_ipv4() {
        assert!(!is_public_ipv4(Ipv4Addr::new(127, 0, 0, 1)));
        assert!(!is_public_ipv4(Ipv4Addr::new(10, 0, 0, 1)));
        assert!(!is_public_ipv4(Ipv4Addr::new(172, 16, 0, 1)));
        assert!(!is_public_ipv4(Ipv4Addr::new(172, 31, 255, 255)));
        assert!(!is_public_ipv4(Ipv4Addr::new(192, 168, 1, 1)));
        assert!(!is_public_ipv4(Ipv4Addr::new(100, 64, 0, 1)));
        assert!(!is_public_ipv4(Ipv4Addr::new(169, 254, 169, 254)));
        assert!(!is_public_ipv4(Ipv4Addr::new(0, 0, 0, 0)));
        assert!(!is_public_ipv4(Ipv4Addr::new(224, 0, 0, 1)));
        assert!(!is_public_ipv4(Ipv4Addr::new(255, 255, 255, 255)));
    }

    #[test]
    fn test_public_ipv6() {
        assert!(is_public_ipv6(Ipv6Addr::new(
            0x2607, 0xf8b0, 0x4004, 0x800, 0, 0, 0, 0x200e
        )));
    }

    #[test]
    fn test_private_ipv6() {
        assert!(!is_public_ipv6(Ipv6Addr::new(0, 0, 0, 0, 0, 0, 0, 1)));
        assert!(!is_public_ipv6(Ipv6Addr::new(0xfc00, 0, 0, 0, 0, 0, 0, 1)));
        assert!(!is_public_ipv6(Ipv6Addr::new(0xfe80, 0, 0, 0, 0, 0, 0, 1)));
        assert!(!is_public_ipv6(Ipv6Addr::new(0xff00, 0, 0, 0, 0, 0, 0, 1)));
        assert!(!is_public_ipv6(Ipv6Addr::new(0, 0, 0, 0, 0, 0, 0, 0)));
    }

    #[test]
    fn test_ipv4_mapped_ipv6() {
        let mapped = Ipv4Addr::new(127, 0, 0, 1).to_ipv6_mapped();
        assert!(!is_public_ipv6(mapped));
        let mapped = Ipv4Addr::new(8, 8, 8, 8).to_ipv6_mapped();
        assert!(is_public_ipv6(mapped));
    }

    #[test]
    fn test_address_policy() {
        let loopback: IpAddr = "127.0.0.1".parse().unwrap();
        let private: IpAddr = "10.1.2.3".parse().unwrap();
        let public: IpAddr = "1.1.1.1".parse().unwrap();

        assert!(!AddressPolicy::PublicOnly.permits(loopback));
        assert!(AddressPolicy::PublicOnly.permits(public));
        assert!(AddressPolicy::AllowLoopback.permits(loopback));
        assert!(!AddressPolicy::AllowLoopback.permits(private));
    }

    #[tokio::test]
    async fn test_safe_resolver_localhost_blocked() {
        use std::str::FromStr;
        let resolver = SafeResolver;
        let name = Name::from_str("localhost").unwrap();
        let result = resolver.resolve(name).await;
        assert!(
            result.is_err(),
            "localhost should be blocked (resolves to 127.0.0.1)"
        );
    }

    #[tokio::test]
    #[ignore] // requires network access
    async fn test_safe_resolver_public_domain() {
        use std::str::FromStr;
        let resolver = SafeResolver;
        let name = Name::from_str("example.com").unwrap();
        let addrs: Vec<SocketAddr> = resolver.resolve(name).await.unwrap().collect();
        assert!(!addrs.is_empty());
        assert!(addrs.iter().all(|a| is_public_ip(a.ip())));
    }
}
