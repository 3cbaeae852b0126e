//! Request-scoped data model.
//!
//! Every analyzer returns one of these closed records. Signals that may be
//! unknown are `Option`s; nothing is keyed by free-form strings.

use std::fmt;

use serde::Serialize;
use strum_macros::EnumIter;

use crate::error_handling::{CertificateFailure, TraceFailure, WhoisFailure};
use crate::lexical::Industry;

/// Category code attached to every warning.
///
/// The fusion engine scores findings by category, never by message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIter)]
pub enum FindingCategory {
    // Link fingerprint tags
    LinkType,
    // Lexical analysis
    HighEntropy,
    Typosquat,
    Homograph,
    SuspiciousKeyword,
    // Redirect trace
    SsrfBlocked,
    TraceError,
    RedirectLimit,
    HighHopCount,
    CrossDomainRedirect,
    TraceSkipped,
    // Certificate
    AutomatedCertificate,
    VeryNewCertificate,
    CertificateInvalid,
    CertificateTimeout,
    NoHttps,
    CertificateSkipped,
    // Reputation
    SuspiciousTld,
    NewDomain,
    FreshDomain,
    CreationDateRedacted,
    WhoisTimeout,
    WhoisUnavailable,
    // Page content
    InsecureLogin,
    DynamicContent,
    // Orchestrator
    DeadlineExceeded,
    Unreachable,
}

/// A categorized, human-readable warning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub category: FindingCategory,
    pub message: String,
}

impl Finding {
    pub fn new(category: FindingCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Canonical form of the scanned URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedUrl {
    /// Lowercased scheme, ASCII host, original path/query
    pub canonical_url: String,
    /// ASCII (punycode) hostname, empty when the input has none
    pub hostname: String,
    /// Decoded hostname before IDNA conversion
    pub raw_hostname: String,
    /// Lowercased scheme
    pub scheme: String,
}

impl NormalizedUrl {
    /// Whether network checks can run at all.
    pub fn has_host(&self) -> bool {
        !self.hostname.is_empty()
    }

    /// Whether the scheme is one the tracer can follow.
    pub fn is_web(&self) -> bool {
        matches!(self.scheme.as_str(), "http" | "https")
    }
}

/// Static classification of the link itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LinkFingerprint {
    pub is_ip_based: bool,
    pub is_shortened: bool,
    pub is_download: bool,
    pub is_deep_link: bool,
    /// Tags in detection order
    pub tags: Vec<String>,
}

impl LinkFingerprint {
    /// Tags as findings, in detection order.
    pub fn findings(&self) -> Vec<Finding> {
        self.tags
            .iter()
            .map(|tag| Finding::new(FindingCategory::LinkType, tag.clone()))
            .collect()
    }
}

/// Terminal state of the redirect state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum TraceOutcome {
    /// A non-redirect response was received
    Reached,
    /// A hop resolved to a non-public address; no request was sent to it
    Blocked,
    /// DNS or transport failure
    NetworkError,
    /// Still redirecting after the maximum number of hops
    HopLimitExceeded,
    /// The trace was not attempted
    #[default]
    Skipped,
}

/// Result of following the redirect chain.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RedirectTrace {
    /// Host of every visited hop, in order
    pub chain: Vec<String>,
    /// URL of every requested hop, in order
    pub hops: Vec<String>,
    pub final_url: String,
    pub hop_count: usize,
    /// Status of the last response, if any
    pub status: Option<u16>,
    /// Body of the final page (200 only), capped
    #[serde(skip_serializing)]
    pub html_snapshot: String,
    pub cross_domain: bool,
    pub outcome: TraceOutcome,
    pub failure: Option<TraceFailure>,
    pub warnings: Vec<Finding>,
}

impl RedirectTrace {
    /// An empty trace for `url` that carries a single finding.
    pub fn not_run(url: &str, finding: Finding) -> Self {
        Self {
            final_url: url.to_string(),
            warnings: vec![finding],
            ..Default::default()
        }
    }
}

/// Certificate validation tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ValidationTier {
    #[serde(rename = "DV")]
    Dv,
    #[serde(rename = "OV/EV")]
    OvEv,
    #[default]
    Unknown,
}

impl fmt::Display for ValidationTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ValidationTier::Dv => "DV",
            ValidationTier::OvEv => "OV/EV",
            ValidationTier::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

/// TLS certificate posture of the target host.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CertificateReport {
    pub is_https: bool,
    pub is_valid: bool,
    pub issuer_cn: Option<String>,
    pub validation_tier: ValidationTier,
    pub cert_age_days: Option<i64>,
    pub failure: Option<CertificateFailure>,
    pub warnings: Vec<Finding>,
}

impl CertificateReport {
    /// An empty report carrying a single finding.
    pub fn not_run(finding: Finding) -> Self {
        Self {
            warnings: vec![finding],
            ..Default::default()
        }
    }
}

/// Registration data and TLD reputation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReputationReport {
    pub registrable_domain: Option<String>,
    pub tld: Option<String>,
    /// `None` when the age could not be established
    pub domain_age_days: Option<i64>,
    pub registrar: Option<String>,
    pub suspicious_tld: bool,
    pub failure: Option<WhoisFailure>,
    pub warnings: Vec<Finding>,
}

impl ReputationReport {
    /// An empty report carrying a single finding.
    pub fn not_run(finding: Finding) -> Self {
        Self {
            warnings: vec![finding],
            ..Default::default()
        }
    }
}

/// Best brand match for a hostname label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TyposquatMatch {
    /// Corpus key (e.g. `facebook`)
    pub brand: String,
    /// Display name (e.g. `Facebook`)
    pub brand_name: String,
    pub industry: Industry,
    pub risk_weight: f64,
    pub similarity: f64,
    /// Edit distance between the raw label and the brand key
    pub edit_distance: usize,
    pub confidence: f64,
}

/// Homograph indicators on the pre-IDNA hostname.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HomographReport {
    pub is_punycode: bool,
    pub has_unicode: bool,
    /// Unicode rendering of the hostname, when decodable
    pub display_hostname: Option<String>,
}

impl HomographReport {
    pub fn is_risky(&self) -> bool {
        self.is_punycode || self.has_unicode
    }
}

/// Phishing keywords found in the URL, by severity tier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KeywordHits {
    pub high: Vec<String>,
    pub medium: Vec<String>,
    pub low: Vec<String>,
}

impl KeywordHits {
    /// `10*high + 5*medium + 2*low`
    pub fn weighted_score(&self) -> u32 {
        10 * self.high.len() as u32 + 5 * self.medium.len() as u32 + 2 * self.low.len() as u32
    }
}

/// Lexical risk of the URL string itself.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LexicalReport {
    pub entropy: f64,
    pub is_dga_candidate: bool,
    pub typosquat_target: Option<String>,
    pub typosquat: Option<TyposquatMatch>,
    /// Typosquat confidence (0-99), 0 without a match
    pub confidence: f64,
    pub homograph: HomographReport,
    pub keyword_hits: KeywordHits,
    pub keyword_score: u32,
    pub warnings: Vec<Finding>,
}

/// Static inspection of the captured page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContentReport {
    pub has_login_form: bool,
    pub is_insecure_login: bool,
    pub dynamic_content_heavy: bool,
    pub script_count: usize,
    pub warnings: Vec<Finding>,
}

/// Diagnostic label derived from the classifier probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MlLabel {
    Safe,
    Suspicious,
    #[serde(rename = "High Risk")]
    HighRisk,
    #[serde(rename = "Model Unavailable")]
    ModelUnavailable,
}

/// Classifier output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MlPrediction {
    /// Probability of the malicious class, in `[0, 1]`
    pub probability: f64,
    pub verdict_label: MlLabel,
}

impl MlPrediction {
    pub fn unavailable() -> Self {
        Self {
            probability: 0.0,
            verdict_label: MlLabel::ModelUnavailable,
        }
    }
}

/// Final risk tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Safe,
    Caution,
    #[serde(rename = "High Risk")]
    HighRisk,
    /// The initial target could not be resolved
    Unreachable,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Safe => "Safe",
            Verdict::Caution => "Caution",
            Verdict::HighRisk => "High Risk",
            Verdict::Unreachable => "Unreachable",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-component reports behind a verdict.
#[derive(Debug, Clone, Serialize)]
pub struct ScanDetails {
    pub fingerprint: LinkFingerprint,
    pub lexical: LexicalReport,
    pub trace: RedirectTrace,
    pub certificate: CertificateReport,
    pub reputation: ReputationReport,
    pub content: ContentReport,
    pub ml: MlPrediction,
}

/// Outcome of one scan.
#[derive(Debug, Clone, Serialize)]
pub struct ScanResult {
    /// Canonical form of the scanned URL
    pub url: String,
    pub final_destination: String,
    /// Fused score in `[0, 100]`
    pub risk_score: u8,
    pub verdict: Verdict,
    /// Deduplicated warning messages, first-seen order
    pub reasoning: Vec<String>,
    pub details: ScanDetails,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_weighted_score() {
        let hits = KeywordHits {
            high: vec!["login".into(), "verify".into()],
            medium: vec!["billing".into()],
            low: vec!["help".into()],
        };
        assert_eq!(hits.weighted_score(), 27);
        assert_eq!(KeywordHits::default().weighted_score(), 0);
    }

    #[test]
    fn test_verdict_serializes_with_spaces() {
        let json = serde_json::to_string(&Verdict::HighRisk).unwrap();
        assert_eq!(json, "\"High Risk\"");
        assert_eq!(Verdict::HighRisk.to_string(), "High Risk");
    }

    #[test]
    fn test_validation_tier_labels() {
        assert_eq!(ValidationTier::OvEv.to_string(), "OV/EV");
        assert_eq!(
            serde_json::to_string(&ValidationTier::Dv).unwrap(),
            "\"DV\""
        );
        assert_eq!(ValidationTier::default(), ValidationTier::Unknown);
    }

    #[test]
    fn test_html_snapshot_not_serialized() {
        let trace = RedirectTrace {
            html_snapshot: "<html>secret</html>".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&trace).unwrap();
        assert!(!json.contains("secret"));
    }

    #[test]
    fn test_fingerprint_tags_become_findings() {
        let fp = LinkFingerprint {
            is_ip_based: true,
            tags: vec!["IP-Based Link".to_string()],
            ..Default::default()
        };
        let findings = fp.findings();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].category, FindingCategory::LinkType);
        assert_eq!(findings[0].message, "IP-Based Link");
    }
}
