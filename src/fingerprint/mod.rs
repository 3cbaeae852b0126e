//! Link fingerprinting.
//!
//! Classifies the link itself before anything is fetched: IP literals, URL
//! shorteners, direct downloads of executable content and app deep links.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::domain::{parse_ip_host, registrable_domain};
use crate::models::{LinkFingerprint, NormalizedUrl};

/// Well-known URL shortening services (registrable domains).
pub const SHORTENER_DOMAINS: &[&str] = &[
    "bit.ly", "t.co", "goo.gl", "is.gd", "buff.ly", "tinyurl.com", "ow.ly", "rebrand.ly",
    "cutt.ly", "shorturl.at", "tiny.cc", "rb.gy", "t.ly", "bl.ink", "s.id", "v.gd", "lnkd.in",
    "trib.al", "soo.gd", "clck.ru", "qrco.de", "shorte.st", "adf.ly", "bit.do", "x.co",
];

/// Extensions of files that execute or install code.
pub const DANGEROUS_EXTENSIONS: &[&str] = &[
    ".exe", ".apk", ".dmg", ".zip", ".rar", ".scr", ".bat", ".ps1", ".msi", ".jar", ".vbs",
    ".js", ".iso",
];

static SHORTENERS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| SHORTENER_DOMAINS.iter().copied().collect());

/// Stateless link classifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fingerprinter;

impl Fingerprinter {
    /// Tags the link. Tags appear in a fixed order: IP, shortener, download,
    /// deep link.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlscope::fingerprint::Fingerprinter;
    /// use urlscope::normalize::normalize_url;
    ///
    /// let fp = Fingerprinter.identify(&normalize_url("http://203.0.113.9/setup.exe"));
    /// assert_eq!(fp.tags, vec!["IP-Based Link", "Direct Download"]);
    /// ```
    pub fn identify(&self, url: &NormalizedUrl) -> LinkFingerprint {
        let mut fingerprint = LinkFingerprint::default();

        if parse_ip_host(&url.hostname).is_some() {
            fingerprint.is_ip_based = true;
            fingerprint.tags.push("IP-Based Link".to_string());
        }

        if registrable_domain(&url.hostname).is_some_and(|d| SHORTENERS.contains(d.as_str())) {
            fingerprint.is_shortened = true;
            fingerprint.tags.push("Shortened URL".to_string());
        }

        if is_download(&url.canonical_url) {
            fingerprint.is_download = true;
            fingerprint.tags.push("Direct Download".to_string());
        }

        if !matches!(url.scheme.as_str(), "http" | "https" | "") {
            fingerprint.is_deep_link = true;
            fingerprint
                .tags
                .push(format!("App Deep Link ({})", url.scheme));
        }

        fingerprint
    }
}

/// Dangerous extension at the end of the path or anywhere in the query.
fn is_download(canonical_url: &str) -> bool {
    let (path, query) = match url::Url::parse(canonical_url) {
        Ok(parsed) => (
            parsed.path().to_ascii_lowercase(),
            parsed.query().unwrap_or_default().to_ascii_lowercase(),
        ),
        Err(_) => {
            let lower = canonical_url.to_ascii_lowercase();
            let without_fragment = lower.split('#').next().unwrap_or_default().to_string();
            match without_fragment.split_once('?') {
                Some((path, query)) => (path.to_string(), query.to_string()),
                None => (without_fragment, String::new()),
            }
        }
    };

    DANGEROUS_EXTENSIONS
        .iter()
        .any(|ext| path.ends_with(ext) || contains_extension(&query, ext))
}

/// `ext` followed by a query delimiter or the end of the string.
fn contains_extension(query: &str, ext: &str) -> bool {
    query.match_indices(ext).any(|(i, _)| {
        query[i + ext.len()..]
            .chars()
            .next()
            .map_or(true, |c| matches!(c, '&' | ';' | '#' | '=' | '/'))
    })
}
