//! Domain reputation: registrable domain, TLD denylist and registration age.
//!
//! WHOIS runs on a spawned worker gated by a shared semaphore. The worker is
//! awaited under the per-check timeout and aborted when it expires, so a slow
//! registry never holds up the sibling checks.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::Semaphore;
use tokio_util::task::AbortOnDropHandle;

use crate::config::Config;
use crate::domain::{parse_ip_host, public_suffix, registrable_domain};
use crate::error_handling::WhoisFailure;
use crate::models::{Finding, FindingCategory, NormalizedUrl, ReputationReport};
use crate::whois::{RegistrationLookup, WhoisRecord};

/// Public suffixes with a high share of abusive registrations.
pub const SUSPICIOUS_TLDS: &[&str] = &[
    "xyz", "top", "tk", "gq", "ml", "ga", "cf", "zip", "mov", "bid", "casa", "click", "country",
    "icu", "cfd", "sbs", "rest", "monster", "loan", "work",
];

/// Whether `suffix` is on the high-abuse denylist.
pub fn is_suspicious_tld(suffix: &str) -> bool {
    SUSPICIOUS_TLDS.contains(&suffix)
}

/// Checks TLD reputation and domain age.
#[derive(Clone)]
pub struct ReputationChecker {
    whois: Arc<dyn RegistrationLookup>,
    workers: Arc<Semaphore>,
    timeout: Duration,
    new_domain_days: i64,
    fresh_domain_days: i64,
}

impl ReputationChecker {
    /// # Arguments
    ///
    /// * `whois` - Registration source used by the lookup workers
    /// * `workers` - Limiter shared by every scan using this checker
    /// * `config` - Supplies the timeout and age thresholds
    pub fn new(whois: Arc<dyn RegistrationLookup>, workers: Arc<Semaphore>, config: &Config) -> Self {
        Self {
            whois,
            workers,
            timeout: config.check_timeout,
            new_domain_days: config.new_domain_days,
            fresh_domain_days: config.fresh_domain_days,
        }
    }

    /// Builds the reputation report for `url`.
    ///
    /// Never fails. IP literals and hosts without a registrable domain
    /// (e.g. `localhost`) skip the WHOIS lookup.
    pub async fn check(&self, url: &NormalizedUrl) -> ReputationReport {
        let mut report = ReputationReport::default();
        if parse_ip_host(&url.hostname).is_some() {
            return report;
        }

        report.registrable_domain = registrable_domain(&url.hostname);
        report.tld = public_suffix(&url.hostname);

        if let Some(tld) = report.tld.as_deref() {
            if is_suspicious_tld(tld) {
                report.suspicious_tld = true;
                report.warnings.push(Finding::new(
                    FindingCategory::SuspiciousTld,
                    format!("Suspicious TLD detected (.{tld})"),
                ));
            }
        }

        let Some(domain) = report.registrable_domain.clone() else {
            log::debug!("No registrable domain for {}; skipping WHOIS", url.hostname);
            return report;
        };

        match self.lookup(domain.clone()).await {
            Ok(record) => self.assess_age(&mut report, record, Utc::now()),
            Err(WhoisFailure::Timeout) => {
                log::warn!("WHOIS for {domain} timed out after {:?}", self.timeout);
                report.failure = Some(WhoisFailure::Timeout);
                report.warnings.push(Finding::new(
                    FindingCategory::WhoisTimeout,
                    "WHOIS Lookup Timed Out",
                ));
            }
            Err(failure) => {
                log::warn!("WHOIS for {domain} failed: {failure}");
                report.failure = Some(failure);
                report.warnings.push(Finding::new(
                    FindingCategory::WhoisUnavailable,
                    "WHOIS Lookup Failed or Empty",
                ));
            }
        }
        report
    }

    /// Runs the lookup on a bounded worker under the check timeout.
    ///
    /// The worker is aborted when the timeout fires and also when this future
    /// is dropped, so a cancelled check never keeps a permit.
    async fn lookup(&self, domain: String) -> Result<WhoisRecord, WhoisFailure> {
        let whois = Arc::clone(&self.whois);
        let workers = Arc::clone(&self.workers);
        let mut worker = AbortOnDropHandle::new(tokio::spawn(async move {
            let _permit = workers
                .acquire_owned()
                .await
                .map_err(|e| WhoisFailure::Worker(e.to_string()))?;
            whois.lookup(&domain).await
        }));

        match tokio::time::timeout(self.timeout, &mut worker).await {
            Ok(Ok(result)) => result,
            Ok(Err(join_error)) => Err(WhoisFailure::Worker(join_error.to_string())),
            Err(_) => {
                worker.abort();
                Err(WhoisFailure::Timeout)
            }
        }
    }

    fn assess_age(&self, report: &mut ReputationReport, record: WhoisRecord, now: DateTime<Utc>) {
        report.registrar = record.registrar.clone();

        let Some(created) = record.earliest_creation() else {
            report.warnings.push(Finding::new(
                FindingCategory::CreationDateRedacted,
                "Indeterminate: Creation date redacted",
            ));
            return;
        };

        let age_days = (now - created).num_days();
        report.domain_age_days = Some(age_days);
        if age_days < self.new_domain_days {
            report.warnings.push(Finding::new(
                FindingCategory::NewDomain,
                "Critical Risk: New Domain (< 1 week)",
            ));
        } else if age_days < self.fresh_domain_days {
            report.warnings.push(Finding::new(
                FindingCategory::FreshDomain,
                "High Risk: Fresh Domain (< 1 month)",
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::initialization::init_semaphore;
    use crate::normalize::normalize_url;
    use chrono::Duration as ChronoDuration;
    use futures::future::BoxFuture;

    /// Answers every lookup with the same outcome.
    struct Canned(Result<WhoisRecord, WhoisFailure>);

    impl RegistrationLookup for Canned {
        fn lookup<'a>(&'a self, _domain: &'a str) -> BoxFuture<'a, Result<WhoisRecord, WhoisFailure>> {
            let outcome = self.0.clone();
            Box::pin(async move { outcome })
        }
    }

    /// Never answers.
    struct Silent;

    impl RegistrationLookup for Silent {
        fn lookup<'a>(&'a self, _domain: &'a str) -> BoxFuture<'a, Result<WhoisRecord, WhoisFailure>> {
            Box::pin(std::future::pending())
        }
    }

    fn checker_with(whois: impl RegistrationLookup + 'static, config: &Config) -> ReputationChecker {
        ReputationChecker::new(Arc::new(whois), init_semaphore(2), config)
    }

    fn checker() -> ReputationChecker {
        checker_with(Canned(Ok(WhoisRecord::default())), &Config::default())
    }

    fn categories(report: &ReputationReport) -> Vec<FindingCategory> {
        report.warnings.iter().map(|f| f.category).collect()
    }

    fn record_created(age: ChronoDuration, now: DateTime<Utc>) -> WhoisRecord {
        WhoisRecord {
            creation_dates: vec![now - age],
            registrar: Some("Example Registrar".to_string()),
        }
    }

    #[test]
    fn test_age_tiers() {
        let checker = checker();
        let now = Utc::now();
        let cases = [
            (ChronoDuration::days(2), Some(FindingCategory::NewDomain)),
            (ChronoDuration::days(6), Some(FindingCategory::NewDomain)),
            (ChronoDuration::days(7), Some(FindingCategory::FreshDomain)),
            (ChronoDuration::days(29), Some(FindingCategory::FreshDomain)),
            (ChronoDuration::days(30), None),
            (ChronoDuration::days(4000), None),
        ];
        for (age, expected) in cases {
            let mut report = ReputationReport::default();
            checker.assess_age(&mut report, record_created(age, now), now);
            assert_eq!(report.domain_age_days, Some(age.num_days()));
            assert_eq!(categories(&report), expected.into_iter().collect::<Vec<_>>());
            assert_eq!(report.registrar.as_deref(), Some("Example Registrar"));
        }
    }

    #[test]
    fn test_missing_creation_date_is_indeterminate() {
        let mut report = ReputationReport::default();
        checker().assess_age(&mut report, WhoisRecord::default(), Utc::now());
        assert_eq!(report.domain_age_days, None);
        assert_eq!(categories(&report), vec![FindingCategory::CreationDateRedacted]);
        assert_eq!(report.warnings[0].message, "Indeterminate: Creation date redacted");
    }

    #[tokio::test]
    async fn test_ip_and_localhost_skip_whois() {
        for raw in ["http://192.0.2.7/", "http://localhost/admin"] {
            let report = checker_with(Silent, &Config::default())
                .check(&normalize_url(raw))
                .await;
            assert!(report.warnings.is_empty(), "{raw}");
            assert_eq!(report.registrable_domain, None);
            assert_eq!(report.domain_age_days, None);
        }
    }

    #[tokio::test]
    async fn test_suspicious_tld_with_new_domain() {
        let created = record_created(ChronoDuration::days(3), Utc::now());
        let checker = checker_with(Canned(Ok(created)), &Config::default());
        let report = checker
            .check(&normalize_url("https://login.paypal-verify.xyz/"))
            .await;

        assert!(report.suspicious_tld);
        assert_eq!(report.tld.as_deref(), Some("xyz"));
        assert_eq!(report.registrable_domain.as_deref(), Some("paypal-verify.xyz"));
        assert_eq!(report.domain_age_days, Some(3));
        assert_eq!(
            categories(&report),
            vec![FindingCategory::SuspiciousTld, FindingCategory::NewDomain]
        );
        assert_eq!(report.warnings[0].message, "Suspicious TLD detected (.xyz)");
    }

    #[tokio::test]
    async fn test_slow_whois_times_out() {
        let config = Config {
            check_timeout: Duration::from_millis(200),
            ..Default::default()
        };
        let checker = checker_with(Silent, &config);
        let started = std::time::Instant::now();
        let report = checker.check(&normalize_url("example.com")).await;

        assert!(started.elapsed() < Duration::from_secs(2));
        assert_eq!(report.failure, Some(WhoisFailure::Timeout));
        assert_eq!(report.domain_age_days, None);
        assert_eq!(categories(&report), vec![FindingCategory::WhoisTimeout]);
    }

    #[tokio::test]
    async fn test_cancelled_check_releases_its_worker() {
        let config = Config {
            check_timeout: Duration::from_secs(30),
            ..Default::default()
        };
        let workers = init_semaphore(1);
        let checker = ReputationChecker::new(Arc::new(Silent), Arc::clone(&workers), &config);

        let check =
            tokio::spawn(async move { checker.check(&normalize_url("example.com")).await });
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(workers.available_permits(), 0, "lookup should hold the permit");

        check.abort();
        let _ = check.await;
        for _ in 0..50 {
            if workers.available_permits() == 1 {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        assert_eq!(workers.available_permits(), 1);

        // A later lookup gets the worker back instead of queueing forever
        let quick = ReputationChecker::new(
            Arc::new(Canned(Ok(WhoisRecord::default()))),
            workers,
            &Config::default(),
        );
        let report = quick.check(&normalize_url("example.com")).await;
        assert_eq!(report.failure, None);
    }

    #[tokio::test]
    async fn test_lookup_failure_is_absorbed() {
        let failure = WhoisFailure::Lookup("connection refused".to_string());
        let checker = checker_with(Canned(Err(failure.clone())), &Config::default());
        let report = checker.check(&normalize_url("example.com")).await;
        assert_eq!(report.failure, Some(failure));
        assert_eq!(categories(&report), vec![FindingCategory::WhoisUnavailable]);
        assert_eq!(report.warnings[0].message, "WHOIS Lookup Failed or Empty");
    }

    #[test]
    fn test_suspicious_tld_list() {
        assert!(is_suspicious_tld("tk"));
        assert!(!is_suspicious_tld("com"));
        assert!(!is_suspicious_tld("co.uk"));
    }
}
