//! Configuration constants.
//!
//! Defaults for every tunable the scan pipeline exposes. `Config::default()`
//! is built from these values.

use std::time::Duration;

// Redirect handling
/// Maximum number of redirect hops to follow.
/// A trace that is still redirecting after this many hops ends as `HopLimitExceeded`.
pub const MAX_REDIRECTS: usize = 10;
/// Hop counts above this value are reported as a "high hop count" warning.
pub const HIGH_HOP_COUNT: usize = 3;

// Network operation timeouts
/// Budget for each individual network check (trace request, TLS handshake, WHOIS).
pub const CHECK_TIMEOUT: Duration = Duration::from_secs(5);
/// DNS query timeout in seconds
pub const DNS_TIMEOUT_SECS: u64 = 3;
/// Wall-clock deadline for a whole scan.
/// Checks still running when it expires are aborted and replaced by default reports.
pub const SCAN_DEADLINE: Duration = Duration::from_secs(15);

// Response and body size limits
/// Maximum number of HTML bytes captured from the final page.
pub const HTML_CAPTURE_LIMIT: usize = 200_000;

// Normalization
/// Upper bound on recursive percent-decoding passes.
pub const MAX_DECODE_ITERATIONS: usize = 5;

// Lexical analysis
/// Shannon entropy (bits/char) above which a hostname label is a DGA candidate.
pub const ENTROPY_THRESHOLD: f64 = 3.8;
/// Minimum brand similarity for a typosquat candidate.
pub const TYPOSQUAT_SIMILARITY_THRESHOLD: f64 = 0.65;

// Reputation
/// Domains younger than this many days are critical risk.
pub const NEW_DOMAIN_DAYS: i64 = 7;
/// Domains younger than this many days are high risk.
pub const FRESH_DOMAIN_DAYS: i64 = 30;
/// Maximum number of WHOIS lookups in flight at once.
pub const WHOIS_WORKERS: usize = 8;

// Certificates
/// Certificates issued less than this many days ago are flagged.
pub const NEW_CERTIFICATE_DAYS: i64 = 2;

// Classifier
/// Probability above which the classifier label is "Suspicious".
pub const ML_SUSPICIOUS_THRESHOLD: f64 = 0.5;
/// Probability above which the classifier label is "High Risk".
pub const ML_HIGH_RISK_THRESHOLD: f64 = 0.8;
/// Default location of the classifier artifact.
pub const DEFAULT_MODEL_PATH: &str = "models/url_classifier.json";

// Verdict tiers
/// Scores at or below this value are "Safe".
pub const SAFE_MAX_SCORE: u8 = 30;
/// Scores at or below this value (and above `SAFE_MAX_SCORE`) are "Caution".
pub const CAUTION_MAX_SCORE: u8 = 69;

/// Fixed User-Agent sent on every trace request.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
