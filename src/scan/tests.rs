// Orchestrator tests.
//
// Everything here stays on loopback or never touches the network; the
// httptest-backed scans allow loopback through `with_policy`.

use super::*;
use crate::error_handling::ClassifierError;
use crate::model::{Classifier, FeatureVector};
use crate::models::{MlLabel, TraceOutcome};
use crate::security::AddressPolicy;
use httptest::{matchers::*, responders::*, Expectation, Server};
use std::path::PathBuf;
use std::time::Duration;

struct Fixed(f64);

impl Classifier for Fixed {
    fn predict_proba(&self, _features: &FeatureVector) -> Result<f64, ClassifierError> {
        Ok(self.0)
    }
}

fn test_config() -> Config {
    Config {
        model_path: PathBuf::from("/nonexistent/url_classifier.json"),
        ..Default::default()
    }
}

fn scanner_with(config: Config) -> Scanner {
    Scanner::from_config(config).expect("Failed to build scanner")
}

fn loopback_scanner(config: Config) -> Scanner {
    let ctx = ScanContext::new(config)
        .expect("Failed to build context")
        .with_policy(AddressPolicy::AllowLoopback);
    Scanner::new(Arc::new(ctx))
}

#[tokio::test]
async fn test_inputs_without_host_are_rejected() {
    let scanner = scanner_with(test_config());
    for raw in ["", "   ", "mailto:someone@example.com", "http://"] {
        let result = scanner.scan(raw).await;
        assert!(
            matches!(result, Err(ScanError::MalformedInput(_))),
            "{raw:?} gave {result:?}"
        );
    }
}

#[tokio::test]
async fn test_localhost_target_is_blocked_without_contact() {
    let result = scanner_with(test_config())
        .scan("http://localhost/admin")
        .await
        .unwrap();

    assert_eq!(result.details.trace.outcome, TraceOutcome::Blocked);
    assert_eq!(result.details.trace.status, None);
    assert_eq!(
        result.details.certificate.warnings[0].category,
        FindingCategory::CertificateSkipped
    );
    assert!(result.details.reputation.warnings.is_empty());
    assert_eq!(result.details.ml.verdict_label, MlLabel::ModelUnavailable);
    assert_eq!(
        result.reasoning,
        vec![
            "Blocked: redirected to private IP",
            "Certificate check skipped (non-public address)"
        ]
    );
    assert_eq!(result.risk_score, 0);
    assert_eq!(result.verdict, Verdict::Safe);
}

#[tokio::test]
async fn test_classifier_term_is_fused() {
    let ctx = ScanContext::new(test_config())
        .unwrap()
        .with_classifier(Arc::new(Fixed(0.05)));
    let result = Scanner::new(Arc::new(ctx))
        .scan("http://127.0.0.1/")
        .await
        .unwrap();

    assert_eq!(result.details.ml.probability, 0.05);
    assert_eq!(result.details.ml.verdict_label, MlLabel::Safe);
    assert_eq!(result.risk_score, 2);
    assert_eq!(result.verdict, Verdict::Safe);
    assert_eq!(result.reasoning[0], "IP-Based Link");
}

#[tokio::test]
async fn test_insecure_login_after_redirect_forces_high_risk() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/start"))
            .respond_with(status_code(302).append_header("Location", "/signin")),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/signin")).respond_with(
            status_code(200).body(
                r#"<html><body><form action="/session"><input name="user"><input type="password" name="pass"></form></body></html>"#,
            ),
        ),
    );

    let start = server.url("/start").to_string();
    let result = loopback_scanner(test_config()).scan(&start).await.unwrap();

    assert_eq!(result.details.trace.outcome, TraceOutcome::Reached);
    assert_eq!(result.details.trace.hop_count, 1);
    assert_eq!(result.final_destination, server.url("/signin").to_string());
    assert!(result.details.content.has_login_form);
    assert!(result.details.content.is_insecure_login);
    assert_eq!(result.risk_score, 100);
    assert_eq!(result.verdict, Verdict::HighRisk);
    assert!(result
        .reasoning
        .contains(&"Insecure Login Form (HTTP)".to_string()));
}

#[tokio::test]
async fn test_slow_trace_is_cut_at_deadline() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/slow"))
            .times(0..)
            .respond_with(delay_and_then(
                Duration::from_secs(5),
                status_code(200).body("late"),
            )),
    );

    let config = Config {
        scan_deadline: Duration::from_millis(400),
        ..test_config()
    };
    let started = std::time::Instant::now();
    let result = loopback_scanner(config)
        .scan(&server.url("/slow").to_string())
        .await
        .unwrap();

    assert!(started.elapsed() < Duration::from_secs(3));
    assert_eq!(result.details.trace.outcome, TraceOutcome::Skipped);
    assert_eq!(
        result.details.trace.warnings[0].category,
        FindingCategory::DeadlineExceeded
    );
    assert!(result
        .reasoning
        .contains(&"Scan Deadline Exceeded (redirect trace)".to_string()));
    assert!(result.details.content == ContentReport::default());
}

#[tokio::test]
async fn test_deep_link_runs_offline() {
    let result = scanner_with(test_config())
        .scan("whatsapp://send?text=hello")
        .await
        .unwrap();

    assert!(result.details.fingerprint.is_deep_link);
    assert_eq!(result.details.trace.outcome, TraceOutcome::Skipped);
    assert_eq!(
        result.reasoning,
        vec![
            "App Deep Link (whatsapp)",
            "Redirect trace skipped (whatsapp link)",
            "Certificate check skipped (whatsapp link)",
        ]
    );
    assert_eq!(result.verdict, Verdict::Safe);
}

#[tokio::test]
async fn test_unresolvable_target_is_unreachable() {
    let config = Config {
        check_timeout: Duration::from_secs(2),
        ..test_config()
    };
    let result = scanner_with(config)
        .scan("http://no-such-host.invalid/login")
        .await
        .unwrap();

    assert_eq!(result.verdict, Verdict::Unreachable);
    assert_eq!(result.risk_score, 0);
    assert_eq!(result.reasoning.len(), 1);
    assert!(result.reasoning[0].starts_with("DNS Resolution"));
    assert_eq!(result.details.ml, MlPrediction::unavailable());
}

#[tokio::test]
async fn test_panicking_check_is_internal_fault() {
    let task = tokio::spawn(async { panic!("check exploded") });
    let deadline = Instant::now() + Duration::from_secs(1);
    let result: Result<Option<()>, ScanError> = settle("trace", AbortOnDropHandle::new(task), deadline).await;
    assert!(matches!(result, Err(ScanError::Internal { stage: "trace", .. })));
}

#[tokio::test]
async fn test_settle_aborts_at_deadline() {
    let task = tokio::spawn(async {
        tokio::time::sleep(Duration::from_secs(30)).await;
        1
    });
    let deadline = Instant::now() + Duration::from_millis(50);
    assert_eq!(settle("reputation", AbortOnDropHandle::new(task), deadline).await.unwrap(), None);
}

#[test]
fn test_findings_keep_component_order() {
    let details = ScanDetails {
        fingerprint: LinkFingerprint {
            tags: vec!["Shortened URL".to_string()],
            is_shortened: true,
            ..Default::default()
        },
        lexical: LexicalReport::default(),
        trace: RedirectTrace::not_run(
            "http://bit.ly/x",
            Finding::new(FindingCategory::CrossDomainRedirect, "Cross-Domain Redirect Detected"),
        ),
        certificate: CertificateReport::default(),
        reputation: ReputationReport::not_run(Finding::new(
            FindingCategory::WhoisTimeout,
            "WHOIS Lookup Timed Out",
        )),
        content: ContentReport::default(),
        ml: MlPrediction::unavailable(),
    };
    let messages: Vec<String> = collect_findings(&details)
        .into_iter()
        .map(|f| f.message)
        .collect();
    assert_eq!(
        messages,
        vec![
            "Shortened URL",
            "Cross-Domain Redirect Detected",
            "WHOIS Lookup Timed Out"
        ]
    );
}
