//! Lexical analysis of the URL string.
//!
//! This module provides:
//! - Shannon entropy of the leftmost hostname label (DGA detection)
//! - Typosquat detection against a weighted brand corpus; hosts under a
//!   brand's own registrable domain are never flagged
//! - IDN homograph indicators
//! - Tiered phishing keyword matching
//!
//! Everything here is pure and in-memory.

mod brands;
mod entropy;
mod homograph;
mod keywords;
mod typosquat;

pub use brands::{Brand, Industry, BRANDS};
pub use entropy::shannon_entropy;
pub use homograph::inspect_hostname;
pub use keywords::{find_keywords, HIGH_RISK_KEYWORDS, LOW_RISK_KEYWORDS, MEDIUM_RISK_KEYWORDS};
pub use typosquat::{normalize_label, CorpusTyposquatDetector, TyposquatDetector, TyposquatVerdict};

use crate::config::Config;
use crate::domain::registrable_domain;
use crate::models::{Finding, FindingCategory, LexicalReport, NormalizedUrl};

/// Returns the leftmost non-empty hostname label.
pub fn leftmost_label(hostname: &str) -> &str {
    hostname.split('.').find(|l| !l.is_empty()).unwrap_or("")
}

/// Returns the label compared against brands: the leftmost one, skipping a leading `www`.
///
/// # Examples
///
/// ```
/// use urlscope::lexical::primary_label;
///
/// assert_eq!(primary_label("www.paypal.com"), "paypal");
/// assert_eq!(primary_label("login.paypal.com"), "login");
/// assert_eq!(primary_label("www"), "www");
/// ```
pub fn primary_label(hostname: &str) -> &str {
    let mut labels = hostname.split('.').filter(|l| !l.is_empty());
    match (labels.next(), labels.next()) {
        (Some(first), Some(second)) if first.eq_ignore_ascii_case("www") => second,
        (Some(first), _) => first,
        (None, _) => "",
    }
}

/// Lexical analyzer with a pluggable typosquat detector.
pub struct LexicalAnalyzer {
    detector: Box<dyn TyposquatDetector>,
    entropy_threshold: f64,
}

impl LexicalAnalyzer {
    /// Builds an analyzer over the built-in brand corpus.
    pub fn new(config: &Config) -> Self {
        Self::with_detector(
            Box::new(CorpusTyposquatDetector::new(config.typosquat_threshold)),
            config.entropy_threshold,
        )
    }

    pub fn with_detector(detector: Box<dyn TyposquatDetector>, entropy_threshold: f64) -> Self {
        Self {
            detector,
            entropy_threshold,
        }
    }

    /// Scores the URL's hostname and text.
    ///
    /// Findings are emitted in a fixed order: entropy, typosquat, homograph,
    /// keywords.
    pub fn analyze(&self, url: &NormalizedUrl) -> LexicalReport {
        let mut report = LexicalReport::default();

        report.entropy = shannon_entropy(leftmost_label(&url.hostname));
        if report.entropy > self.entropy_threshold {
            report.is_dga_candidate = true;
            report.warnings.push(Finding::new(
                FindingCategory::HighEntropy,
                format!("High Lexical Entropy ({:.2})", report.entropy),
            ));
        }

        let raw_label = primary_label(&url.raw_hostname);
        match self.brand_verdict(url, raw_label) {
            TyposquatVerdict::Suspected(found) => {
                report.warnings.push(Finding::new(
                    FindingCategory::Typosquat,
                    format!("Potential Typosquat of '{}'", found.brand_name),
                ));
                report.typosquat_target = Some(found.brand.clone());
                report.confidence = found.confidence;
                report.typosquat = Some(found);
            }
            TyposquatVerdict::Legitimate(brand) => {
                log::debug!("Label '{raw_label}' is the brand {} itself", brand.name);
            }
            TyposquatVerdict::NoMatch => {}
        }

        report.homograph = inspect_hostname(&url.raw_hostname, &url.hostname);
        if report.homograph.is_risky() {
            let shown = report
                .homograph
                .display_hostname
                .as_deref()
                .unwrap_or(&url.hostname);
            report.warnings.push(Finding::new(
                FindingCategory::Homograph,
                format!("Possible Homograph Attack (IDN: {shown})"),
            ));
        }

        report.keyword_hits = find_keywords(&url.canonical_url);
        report.keyword_score = report.keyword_hits.weighted_score();
        let flagged: Vec<&str> = report
            .keyword_hits
            .high
            .iter()
            .chain(report.keyword_hits.medium.iter())
            .map(String::as_str)
            .collect();
        if !flagged.is_empty() {
            report.warnings.push(Finding::new(
                FindingCategory::SuspiciousKeyword,
                format!("Suspicious Keywords: {}", flagged.join(", ")),
            ));
        }

        report
    }

    /// Checks the label of the registrable domain first, so that subdomains of
    /// a brand (`mail.google.com`) are not taken for look-alikes of another.
    fn brand_verdict(&self, url: &NormalizedUrl, raw_label: &str) -> TyposquatVerdict {
        let owner = registrable_domain(&url.hostname);
        let owner_label = owner.as_deref().map(leftmost_label).unwrap_or("");
        if !owner_label.is_empty() && owner_label != raw_label {
            if let verdict @ TyposquatVerdict::Legitimate(_) = self.detector.detect(owner_label) {
                return verdict;
            }
        }
        self.detector.detect(raw_label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize_url;

    fn analyze(raw: &str) -> LexicalReport {
        LexicalAnalyzer::new(&Config::default()).analyze(&normalize_url(raw))
    }

    fn categories(report: &LexicalReport) -> Vec<FindingCategory> {
        report.warnings.iter().map(|f| f.category).collect()
    }

    #[test]
    fn test_typosquat_with_keyword() {
        let report = analyze("faceb0ok.com/login");
        assert_eq!(report.typosquat_target.as_deref(), Some("facebook"));
        assert_eq!(
            categories(&report),
            vec![FindingCategory::Typosquat, FindingCategory::SuspiciousKeyword]
        );
        assert_eq!(report.warnings[0].message, "Potential Typosquat of 'Facebook'");
        assert_eq!(report.warnings[1].message, "Suspicious Keywords: login");
        assert!(report.confidence > 90.0);
    }

    #[test]
    fn test_brand_itself_is_clean() {
        let report = analyze("https://www.google.com/");
        assert!(report.typosquat.is_none());
        assert!(report.warnings.is_empty());
        assert_eq!(report.confidence, 0.0);
    }

    #[test]
    fn test_brand_subdomains_are_clean() {
        // Leftmost labels resemble Gmail, iCloud, IDrive and Meetup
        for raw in [
            "https://mail.google.com/mail/u/0/",
            "https://cloud.google.com/",
            "https://drive.google.com/",
            "https://meet.google.com/",
        ] {
            let report = analyze(raw);
            assert!(report.typosquat.is_none(), "{raw}");
            assert_eq!(report.typosquat_target, None, "{raw}");
            assert!(!categories(&report).contains(&FindingCategory::Typosquat), "{raw}");
        }
    }

    #[test]
    fn test_lookalike_registrable_domain_still_flagged() {
        let report = analyze("https://www.g00gle.com/");
        assert_eq!(report.typosquat_target.as_deref(), Some("google"));
    }

    #[test]
    fn test_entropy_uses_leftmost_label() {
        let report = analyze("https://www.qwertzuiopasdfgh.net/");
        assert_eq!(report.entropy, shannon_entropy("www"));
        assert!(!report.is_dga_candidate);

        let report = analyze("https://qwertzuiopasdfgh.example.net/");
        assert_eq!(report.entropy, 4.0);
        assert!(report.is_dga_candidate);
    }

    #[test]
    fn test_high_entropy_label() {
        let report = analyze("http://qwertzuiopasdfgh.net/");
        assert!(report.is_dga_candidate);
        assert_eq!(report.warnings[0].category, FindingCategory::HighEntropy);
        assert_eq!(report.warnings[0].message, "High Lexical Entropy (4.00)");
    }

    #[test]
    fn test_homograph_flagged() {
        let report = analyze("http://xn--bcher-kva.de/");
        assert!(report.homograph.is_punycode);
        assert!(categories(&report).contains(&FindingCategory::Homograph));
    }

    #[test]
    fn test_low_tier_keywords_only_score() {
        let report = analyze("https://example.com/help/contact");
        assert_eq!(report.keyword_score, 4);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_custom_detector() {
        struct Never;
        impl TyposquatDetector for Never {
            fn detect(&self, _label: &str) -> TyposquatVerdict {
                TyposquatVerdict::NoMatch
            }
        }
        let analyzer = LexicalAnalyzer::with_detector(Box::new(Never), 3.8);
        let report = analyzer.analyze(&normalize_url("faceb0ok.com"));
        assert!(report.typosquat.is_none());
    }

    #[test]
    fn test_primary_label() {
        assert_eq!(primary_label("www.faceb0ok.com"), "faceb0ok");
        assert_eq!(primary_label("faceb0ok.com"), "faceb0ok");
        assert_eq!(primary_label(""), "");
        assert_eq!(leftmost_label("www.faceb0ok.com"), "www");
        assert_eq!(leftmost_label(".faceb0ok.com"), "faceb0ok");
        assert_eq!(leftmost_label(""), "");
    }
}
