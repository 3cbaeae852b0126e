// Domain module tests.

use super::*;

#[test]
fn test_registrable_domain_basic() {
    assert_eq!(
        registrable_domain("www.example.com").as_deref(),
        Some("example.com")
    );
    assert_eq!(registrable_domain("example.com").as_deref(), Some("example.com"));
}

#[test]
fn test_registrable_domain_multi_part_suffix() {
    assert_eq!(
        registrable_domain("login.bank.example.co.uk").as_deref(),
        Some("example.co.uk")
    );
}

#[test]
fn test_registrable_domain_case_and_trailing_dot() {
    assert_eq!(
        registrable_domain("WWW.Example.COM.").as_deref(),
        Some("example.com")
    );
}

#[test]
fn test_registrable_domain_rejects_ip() {
    assert_eq!(registrable_domain("192.168.1.1"), None);
    assert_eq!(registrable_domain("::1"), None);
    assert_eq!(registrable_domain("[2001:db8::1]"), None);
}

#[test]
fn test_registrable_domain_of_suffix_only() {
    assert_eq!(registrable_domain("co.uk"), None);
    assert_eq!(registrable_domain(""), None);
}

#[test]
fn test_public_suffix() {
    assert_eq!(public_suffix("www.example.co.uk").as_deref(), Some("co.uk"));
    assert_eq!(public_suffix("evil.xyz").as_deref(), Some("xyz"));
    assert_eq!(public_suffix("10.0.0.1"), None);
}

#[test]
fn test_site_of_falls_back_to_host() {
    assert_eq!(site_of("a.example.com"), "example.com");
    assert_eq!(site_of("127.0.0.1"), "127.0.0.1");
}

#[test]
fn test_parse_ip_host() {
    assert!(parse_ip_host("8.8.8.8").is_some());
    assert!(parse_ip_host("[::1]").is_some());
    assert!(parse_ip_host("::1").is_some());
    assert!(parse_ip_host("example.com").is_none());
}
