//! Shared scan context.
//!
//! `ScanContext` owns every long-lived resource a scan needs: the network
//! clients, the analyzers with their lookup tables and the lazily loaded
//! classifier. It is built once, never mutated afterwards, and shared between
//! concurrent scans behind an `Arc`.

use std::sync::Arc;

use hickory_resolver::TokioAsyncResolver;

use crate::config::Config;
use crate::content::ContentScanner;
use crate::error_handling::InitializationError;
use crate::fingerprint::Fingerprinter;
use crate::fusion::Tiers;
use crate::initialization::{init_crypto_provider, init_resolver, init_semaphore, init_trace_client};
use crate::lexical::LexicalAnalyzer;
use crate::model::{Classifier, RiskScorer};
use crate::reputation::ReputationChecker;
use crate::security::AddressPolicy;
use crate::tls::CertificateInspector;
use crate::trace::RedirectTracer;
use crate::whois::WhoisClient;

/// Long-lived resources shared by every scan.
pub struct ScanContext {
    pub(crate) config: Config,
    pub(crate) resolver: Arc<TokioAsyncResolver>,
    pub(crate) policy: AddressPolicy,
    pub(crate) fingerprinter: Fingerprinter,
    pub(crate) lexical: LexicalAnalyzer,
    pub(crate) tracer: RedirectTracer,
    pub(crate) certificates: CertificateInspector,
    pub(crate) reputation: ReputationChecker,
    pub(crate) content: ContentScanner,
    pub(crate) scorer: RiskScorer,
    pub(crate) tiers: Tiers,
}

impl ScanContext {
    /// Initializes every resource from `config`.
    ///
    /// The classifier artifact is not read here; it is loaded on first use.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError` if the HTTP client or the TLS
    /// configuration cannot be built.
    pub fn new(config: Config) -> Result<Self, InitializationError> {
        init_crypto_provider();

        let resolver = init_resolver();
        let client = init_trace_client(&config)?;
        let tracer = RedirectTracer::new(client, Arc::clone(&resolver), &config);
        let certificates = CertificateInspector::new(Arc::clone(&resolver), &config)?;
        let reputation = ReputationChecker::new(
            Arc::new(WhoisClient::new()),
            init_semaphore(config.whois_workers),
            &config,
        );

        Ok(Self {
            resolver,
            policy: AddressPolicy::PublicOnly,
            fingerprinter: Fingerprinter,
            lexical: LexicalAnalyzer::new(&config),
            tracer,
            certificates,
            reputation,
            content: ContentScanner,
            scorer: RiskScorer::new(&config),
            tiers: Tiers {
                safe_max: config.safe_max_score,
                caution_max: config.caution_max_score,
            },
            config,
        })
    }

    /// Replaces the classifier artifact with an in-memory model.
    pub fn with_classifier(mut self, classifier: Arc<dyn Classifier>) -> Self {
        self.scorer = RiskScorer::with_classifier(classifier, &self.config);
        self
    }

    /// Replaces the lexical analyzer (e.g. one with a custom typosquat detector).
    pub fn with_lexical_analyzer(mut self, lexical: LexicalAnalyzer) -> Self {
        self.lexical = lexical;
        self
    }

    /// Applies `policy` to the preflight check, the tracer and the certificate inspector.
    pub(crate) fn with_policy(mut self, policy: AddressPolicy) -> Self {
        self.policy = policy;
        self.tracer = self.tracer.clone().with_policy(policy);
        self.certificates = self.certificates.clone().with_policy(policy);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
