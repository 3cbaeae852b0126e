//! Certificate field extraction and assessment.

use chrono::{DateTime, Utc};
use x509_parser::certificate::X509Certificate;

use crate::config::NEW_CERTIFICATE_DAYS;
use crate::error_handling::CertificateFailure;
use crate::models::{CertificateReport, Finding, FindingCategory, ValidationTier};

/// Issuer common names of free, fully automated intermediates.
const AUTOMATED_ISSUER_CNS: &[&str] = &["R3", "R10", "R11", "E1", "E5", "E6"];

/// Issuer name fragments of free or bundled DV certificate providers.
const AUTOMATED_ISSUER_NAMES: &[&str] = &["let's encrypt", "zerossl", "cpanel"];

/// The fields the risk assessment needs from a leaf certificate.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CertificateFacts {
    pub issuer_cn: Option<String>,
    /// Full issuer distinguished name
    pub issuer: String,
    /// Subject carries an organization (OV/EV)
    pub has_organization: bool,
    pub not_before: DateTime<Utc>,
}

/// Parses the DER-encoded leaf certificate.
pub(crate) fn parse_certificate(der: &[u8]) -> Result<CertificateFacts, CertificateFailure> {
    let (_, cert) = x509_parser::parse_x509_certificate(der)
        .map_err(|e| CertificateFailure::Parse(e.to_string()))?;
    facts_from(&cert)
}

fn facts_from(cert: &X509Certificate<'_>) -> Result<CertificateFacts, CertificateFailure> {
    let issuer_cn = cert
        .issuer()
        .iter_common_name()
        .next()
        .and_then(|cn| cn.as_str().ok())
        .map(str::to_string);

    let has_organization = cert.subject().iter_organization().next().is_some();

    let timestamp = cert.validity().not_before.timestamp();
    let not_before = DateTime::from_timestamp(timestamp, 0).ok_or_else(|| {
        CertificateFailure::Parse(format!("notBefore out of range: {timestamp}"))
    })?;

    Ok(CertificateFacts {
        issuer_cn,
        issuer: cert.issuer().to_string(),
        has_organization,
        not_before,
    })
}

/// Whether the issuer is a free/automated DV authority.
pub(crate) fn is_automated_issuer(issuer_cn: Option<&str>, issuer: &str) -> bool {
    if issuer_cn.is_some_and(|cn| AUTOMATED_ISSUER_CNS.contains(&cn)) {
        return true;
    }
    let issuer = issuer.to_lowercase();
    AUTOMATED_ISSUER_NAMES.iter().any(|name| issuer.contains(name))
}

/// Builds the report for a successfully validated certificate.
pub(crate) fn assess(facts: CertificateFacts, now: DateTime<Utc>) -> CertificateReport {
    let mut report = CertificateReport {
        is_https: true,
        is_valid: true,
        ..Default::default()
    };

    if is_automated_issuer(facts.issuer_cn.as_deref(), &facts.issuer) {
        report.warnings.push(Finding::new(
            FindingCategory::AutomatedCertificate,
            "Automated/Free DV Certificate",
        ));
    }

    let age_days = (now - facts.not_before).num_days();
    report.cert_age_days = Some(age_days);
    if age_days < NEW_CERTIFICATE_DAYS {
        report.warnings.push(Finding::new(
            FindingCategory::VeryNewCertificate,
            "Very New Certificate (< 48h)",
        ));
    }

    report.validation_tier = if facts.has_organization {
        ValidationTier::OvEv
    } else {
        ValidationTier::Dv
    };
    report.issuer_cn = facts.issuer_cn;
    report
}

/// Builds the report for a failed inspection.
pub(crate) fn assess_failure(failure: CertificateFailure) -> CertificateReport {
    let (is_https, finding) = match &failure {
        CertificateFailure::InvalidCertificate(reason) => (
            true,
            Finding::new(
                FindingCategory::CertificateInvalid,
                format!("SSL Verification Error: {reason}"),
            ),
        ),
        CertificateFailure::Parse(reason) => (
            true,
            Finding::new(
                FindingCategory::CertificateInvalid,
                format!("Certificate Parse Error: {reason}"),
            ),
        ),
        CertificateFailure::Timeout => (
            false,
            Finding::new(FindingCategory::CertificateTimeout, "SSL Check Timed Out"),
        ),
        CertificateFailure::InvalidHostname(_)
        | CertificateFailure::Connect(_)
        | CertificateFailure::Handshake(_)
        | CertificateFailure::NoCertificate => (
            false,
            Finding::new(FindingCategory::NoHttps, "No HTTPS/SSL detected on Port 443"),
        ),
    };

    CertificateReport {
        is_https,
        // A chain that failed to parse after a successful handshake still validated
        is_valid: matches!(failure, CertificateFailure::Parse(_)),
        failure: Some(failure),
        warnings: vec![finding],
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn facts(issuer_cn: &str, issuer: &str, org: bool, age: Duration) -> (CertificateFacts, DateTime<Utc>) {
        let now = Utc::now();
        (
            CertificateFacts {
                issuer_cn: Some(issuer_cn.to_string()),
                issuer: issuer.to_string(),
                has_organization: org,
                not_before: now - age,
            },
            now,
        )
    }

    #[test]
    fn test_automated_issuers() {
        assert!(is_automated_issuer(Some("R3"), "C=US, O=Let's Encrypt, CN=R3"));
        assert!(is_automated_issuer(Some("E6"), "CN=E6"));
        assert!(is_automated_issuer(
            Some("ZeroSSL RSA Domain Secure Site CA"),
            "C=AT, O=ZeroSSL, CN=ZeroSSL RSA Domain Secure Site CA"
        ));
        assert!(is_automated_issuer(
            Some("cPanel, Inc. Certification Authority"),
            "CN=cPanel, Inc. Certification Authority"
        ));
        // Exact CN match only: "R3" inside another name does not count
        assert!(!is_automated_issuer(
            Some("DigiCert Global G3 TLS ECC SHA384 2020 CA1"),
            "C=US, O=DigiCert Inc, CN=DigiCert Global G3 TLS ECC SHA384 2020 CA1"
        ));
        assert!(!is_automated_issuer(None, ""));
    }

    #[test]
    fn test_assess_new_free_certificate() {
        let (facts, now) = facts("R11", "C=US, O=Let's Encrypt, CN=R11", false, Duration::hours(5));
        let report = assess(facts, now);

        assert!(report.is_https && report.is_valid);
        assert_eq!(report.cert_age_days, Some(0));
        assert_eq!(report.validation_tier, ValidationTier::Dv);
        assert_eq!(report.issuer_cn.as_deref(), Some("R11"));
        let categories: Vec<_> = report.warnings.iter().map(|f| f.category).collect();
        assert_eq!(
            categories,
            vec![
                FindingCategory::AutomatedCertificate,
                FindingCategory::VeryNewCertificate
            ]
        );
    }

    #[test]
    fn test_assess_established_ov_certificate() {
        let (facts, now) = facts(
            "DigiCert Global G2 TLS RSA SHA256 2020 CA1",
            "C=US, O=DigiCert Inc, CN=DigiCert Global G2 TLS RSA SHA256 2020 CA1",
            true,
            Duration::days(200),
        );
        let report = assess(facts, now);
        assert_eq!(report.validation_tier, ValidationTier::OvEv);
        assert_eq!(report.cert_age_days, Some(200));
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_invalid_certificate_still_counts_as_https() {
        let report = assess_failure(CertificateFailure::InvalidCertificate(
            "Expired".to_string(),
        ));
        assert!(report.is_https);
        assert!(!report.is_valid);
        assert_eq!(report.warnings[0].category, FindingCategory::CertificateInvalid);
        assert_eq!(report.warnings[0].message, "SSL Verification Error: Expired");
    }

    #[test]
    fn test_timeout_is_distinct_from_no_https() {
        let timeout = assess_failure(CertificateFailure::Timeout);
        assert_eq!(timeout.warnings[0].category, FindingCategory::CertificateTimeout);
        assert!(!timeout.is_https);

        let refused = assess_failure(CertificateFailure::Connect("refused".to_string()));
        assert_eq!(refused.warnings[0].category, FindingCategory::NoHttps);
        assert_eq!(refused.warnings[0].message, "No HTTPS/SSL detected on Port 443");
        assert!(!refused.is_https);
    }

    #[test]
    fn test_garbage_der_is_parse_error() {
        assert!(matches!(
            parse_certificate(&[0x30, 0x03, 0x01, 0x01, 0xff]),
            Err(CertificateFailure::Parse(_))
        ));
    }
}
