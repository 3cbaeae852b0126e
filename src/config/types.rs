//! Configuration types.
//!
//! `Config` carries every tunable of the scan pipeline. It can be built
//! programmatically (`..Default::default()`) without any CLI dependency; the
//! binary maps its flags onto it.

use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;

use crate::config::constants::*;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration.
///
/// # Examples
///
/// ```
/// use urlscope::Config;
/// use std::time::Duration;
///
/// let config = Config {
///     check_timeout: Duration::from_secs(3),
///     ..Default::default()
/// };
/// assert_eq!(config.max_redirects, 10);
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum redirect hops the tracer follows
    pub max_redirects: usize,

    /// Per-check network budget
    pub check_timeout: Duration,

    /// Aggregate wall-clock deadline for one scan
    pub scan_deadline: Duration,

    /// Maximum HTML bytes captured from the final page
    pub html_capture_limit: usize,

    /// Entropy above which a label is a DGA candidate
    pub entropy_threshold: f64,

    /// Minimum similarity for a typosquat candidate
    pub typosquat_threshold: f64,

    /// Critical-risk domain age in days
    pub new_domain_days: i64,

    /// High-risk domain age in days
    pub fresh_domain_days: i64,

    /// Classifier probability for the "Suspicious" label
    pub ml_suspicious_threshold: f64,

    /// Classifier probability for the "High Risk" label
    pub ml_high_risk_threshold: f64,

    /// Highest score still rated "Safe"
    pub safe_max_score: u8,

    /// Highest score still rated "Caution"
    pub caution_max_score: u8,

    /// HTTP User-Agent header value used by the tracer
    pub user_agent: String,

    /// Classifier artifact path (JSON)
    pub model_path: PathBuf,

    /// Concurrent WHOIS lookups allowed across scans
    pub whois_workers: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_redirects: MAX_REDIRECTS,
            check_timeout: CHECK_TIMEOUT,
            scan_deadline: SCAN_DEADLINE,
            html_capture_limit: HTML_CAPTURE_LIMIT,
            entropy_threshold: ENTROPY_THRESHOLD,
            typosquat_threshold: TYPOSQUAT_SIMILARITY_THRESHOLD,
            new_domain_days: NEW_DOMAIN_DAYS,
            fresh_domain_days: FRESH_DOMAIN_DAYS,
            ml_suspicious_threshold: ML_SUSPICIOUS_THRESHOLD,
            ml_high_risk_threshold: ML_HIGH_RISK_THRESHOLD,
            safe_max_score: SAFE_MAX_SCORE,
            caution_max_score: CAUTION_MAX_SCORE,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            whois_workers: WHOIS_WORKERS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default_tunables() {
        let config = Config::default();
        assert_eq!(config.max_redirects, 10);
        assert_eq!(config.check_timeout, Duration::from_secs(5));
        assert_eq!(config.html_capture_limit, 200_000);
        assert_eq!(config.entropy_threshold, 3.8);
        assert_eq!(config.typosquat_threshold, 0.65);
        assert_eq!(config.new_domain_days, 7);
        assert_eq!(config.fresh_domain_days, 30);
        assert_eq!(config.ml_suspicious_threshold, 0.5);
        assert_eq!(config.ml_high_risk_threshold, 0.8);
        assert_eq!(config.safe_max_score, 30);
        assert_eq!(config.caution_max_score, 69);
    }

    #[test]
    fn test_deadline_covers_a_check() {
        let config = Config::default();
        assert!(config.scan_deadline > config.check_timeout);
    }
}
