//! Scan orchestration.
//!
//! One scan runs in four stages:
//! 1. Normalize, fingerprint and lexically analyze the URL (pure).
//! 2. Resolve the target once. A DNS failure ends the scan as `Unreachable`;
//!    a non-public answer means no TLS socket is opened to it.
//! 3. Trace, certificate and reputation checks run as concurrent tasks, each
//!    with its own timeout, all under one scan deadline. Tasks still running
//!    at the deadline are aborted and replaced by default reports.
//! 4. Content scan of the traced page, classifier, fusion.

mod context;

use std::sync::Arc;

use tokio::time::Instant;
use tokio_util::task::AbortOnDropHandle;

pub use context::ScanContext;

use crate::config::Config;
use crate::dns::resolve_host;
use crate::error_handling::{InitializationError, ScanError};
use crate::fusion::fuse_with;
use crate::models::{
    CertificateReport, ContentReport, Finding, FindingCategory, LexicalReport, LinkFingerprint,
    MlPrediction, NormalizedUrl, RedirectTrace, ReputationReport, ScanDetails, ScanResult,
    Verdict,
};
use crate::normalize::normalize_url;

/// What the preflight lookup learned about the initial target.
enum Preflight {
    /// Resolved; `public` is false if any address is outside the policy
    Resolved { public: bool },
    /// Not an http(s) URL; nothing to resolve
    NotWeb,
    Unreachable(Finding),
}

/// Runs scans against a shared `ScanContext`.
#[derive(Clone)]
pub struct Scanner {
    ctx: Arc<ScanContext>,
}

impl Scanner {
    pub fn new(ctx: Arc<ScanContext>) -> Self {
        Self { ctx }
    }

    /// Builds a fresh context from `config`.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError` if the context cannot be initialized.
    pub fn from_config(config: Config) -> Result<Self, InitializationError> {
        Ok(Self::new(Arc::new(ScanContext::new(config)?)))
    }

    pub fn context(&self) -> &Arc<ScanContext> {
        &self.ctx
    }

    /// Scans one URL.
    ///
    /// Component failures (timeouts, refused connections, unparsable pages,
    /// a missing classifier) only degrade the result.
    ///
    /// # Errors
    ///
    /// - `ScanError::MalformedInput` if the input has no hostname; nothing is
    ///   sent over the network in that case.
    /// - `ScanError::Internal` if a check task panics.
    pub async fn scan(&self, raw_url: &str) -> Result<ScanResult, ScanError> {
        let url = normalize_url(raw_url);
        if !url.has_host() {
            return Err(ScanError::MalformedInput(format!(
                "no hostname in '{}'",
                url.canonical_url
            )));
        }
        log::info!("Scanning {}", url.canonical_url);

        let ctx = &self.ctx;
        let deadline = Instant::now() + ctx.config.scan_deadline;
        let fingerprint = ctx.fingerprinter.identify(&url);
        let lexical = ctx.lexical.analyze(&url);

        let target_is_public = match self.preflight(&url).await {
            Preflight::Unreachable(finding) => {
                return Ok(unreachable_result(url, fingerprint, lexical, finding));
            }
            Preflight::Resolved { public } => public,
            Preflight::NotWeb => true,
        };

        let trace_task = {
            let ctx = Arc::clone(ctx);
            let target = url.canonical_url.clone();
            AbortOnDropHandle::new(tokio::spawn(async move { ctx.tracer.trace(&target).await }))
        };

        let certificate_task = if !url.is_web() {
            None
        } else if !target_is_public {
            log::warn!("{} resolves to a non-public address; skipping TLS", url.hostname);
            None
        } else {
            let ctx = Arc::clone(ctx);
            let host = url.hostname.clone();
            Some(AbortOnDropHandle::new(tokio::spawn(async move {
                ctx.certificates.inspect(&host).await
            })))
        };

        let reputation_task = {
            let ctx = Arc::clone(ctx);
            let url = url.clone();
            AbortOnDropHandle::new(tokio::spawn(async move { ctx.reputation.check(&url).await }))
        };

        // Settle all three before surfacing an internal fault
        let trace = settle("trace", trace_task, deadline).await;
        let certificate = match certificate_task {
            Some(task) => settle("certificate", task, deadline).await,
            None => Ok(Some(CertificateReport::not_run(Finding::new(
                FindingCategory::CertificateSkipped,
                skipped_certificate_message(&url),
            )))),
        };
        let reputation = settle("reputation", reputation_task, deadline).await;

        let trace = trace?.unwrap_or_else(|| {
            RedirectTrace::not_run(
                &url.canonical_url,
                deadline_finding("redirect trace"),
            )
        });
        let certificate = certificate?
            .unwrap_or_else(|| CertificateReport::not_run(deadline_finding("certificate check")));
        let reputation = reputation?
            .unwrap_or_else(|| ReputationReport::not_run(deadline_finding("reputation check")));

        let content = ctx.content.scan(&trace.html_snapshot, &trace.final_url);
        let ml = ctx.scorer.predict(&url, &lexical, &reputation);

        let details = ScanDetails {
            fingerprint,
            lexical,
            trace,
            certificate,
            reputation,
            content,
            ml,
        };
        let findings = collect_findings(&details);
        let outcome = fuse_with(&details.ml, &findings, ctx.tiers);

        log::info!(
            "Verdict for {}: {} (score {}, {} finding(s))",
            url.canonical_url,
            outcome.verdict,
            outcome.score,
            findings.len()
        );

        let final_destination = if details.trace.final_url.is_empty() {
            url.canonical_url.clone()
        } else {
            details.trace.final_url.clone()
        };

        Ok(ScanResult {
            url: url.canonical_url,
            final_destination,
            risk_score: outcome.score,
            verdict: outcome.verdict,
            reasoning: outcome.reasoning,
            details,
        })
    }

    /// Resolves the initial target once, under the per-check timeout.
    async fn preflight(&self, url: &NormalizedUrl) -> Preflight {
        if !url.is_web() {
            return Preflight::NotWeb;
        }

        let ctx = &self.ctx;
        let lookup = resolve_host(&url.hostname, &ctx.resolver);
        match tokio::time::timeout(ctx.config.check_timeout, lookup).await {
            Ok(Ok(ips)) => Preflight::Resolved {
                public: ips.iter().all(|ip| ctx.policy.permits(*ip)),
            },
            Ok(Err(e)) => {
                log::warn!("Target {} is unreachable: {e:#}", url.hostname);
                Preflight::Unreachable(Finding::new(
                    FindingCategory::Unreachable,
                    format!("DNS Resolution Failed: {e}"),
                ))
            }
            Err(_) => {
                log::warn!("Target {} did not resolve in time", url.hostname);
                Preflight::Unreachable(Finding::new(
                    FindingCategory::Unreachable,
                    "DNS Resolution Timed Out",
                ))
            }
        }
    }
}

/// Waits for a check until the deadline.
///
/// `Ok(None)` means the deadline passed and the task was aborted. Dropping the
/// handle (e.g. when the scan itself is cancelled) also aborts the task.
async fn settle<T>(
    stage: &'static str,
    mut task: AbortOnDropHandle<T>,
    deadline: Instant,
) -> Result<Option<T>, ScanError> {
    match tokio::time::timeout_at(deadline, &mut task).await {
        Ok(Ok(report)) => Ok(Some(report)),
        Ok(Err(join_error)) => {
            log::error!("{stage} task failed: {join_error}");
            Err(ScanError::Internal {
                stage,
                message: join_error.to_string(),
            })
        }
        Err(_) => {
            task.abort();
            log::warn!("{stage} still running at the scan deadline; aborted");
            Ok(None)
        }
    }
}

fn deadline_finding(check: &str) -> Finding {
    Finding::new(
        FindingCategory::DeadlineExceeded,
        format!("Scan Deadline Exceeded ({check})"),
    )
}

fn skipped_certificate_message(url: &NormalizedUrl) -> String {
    if url.is_web() {
        "Certificate check skipped (non-public address)".to_string()
    } else {
        format!("Certificate check skipped ({} link)", url.scheme)
    }
}

/// Every finding of a scan in component order, duplicates kept.
fn collect_findings(details: &ScanDetails) -> Vec<Finding> {
    let mut findings = details.fingerprint.findings();
    findings.extend(details.lexical.warnings.iter().cloned());
    findings.extend(details.trace.warnings.iter().cloned());
    findings.extend(details.certificate.warnings.iter().cloned());
    findings.extend(details.reputation.warnings.iter().cloned());
    findings.extend(details.content.warnings.iter().cloned());
    findings
}

/// Minimal result for a target that does not resolve: no signal is trusted.
fn unreachable_result(
    url: NormalizedUrl,
    fingerprint: LinkFingerprint,
    lexical: LexicalReport,
    finding: Finding,
) -> ScanResult {
    log::info!("Verdict for {}: {}", url.canonical_url, Verdict::Unreachable);
    ScanResult {
        final_destination: url.canonical_url.clone(),
        risk_score: 0,
        verdict: Verdict::Unreachable,
        reasoning: vec![finding.message.clone()],
        details: ScanDetails {
            fingerprint,
            lexical,
            trace: RedirectTrace::not_run(&url.canonical_url, finding),
            certificate: CertificateReport::default(),
            reputation: ReputationReport::default(),
            content: ContentReport::default(),
            ml: MlPrediction::unavailable(),
        },
        url: url.canonical_url,
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
