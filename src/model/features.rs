//! Classifier input features.

use serde::Serialize;

use crate::models::{LexicalReport, NormalizedUrl, ReputationReport};

/// Number of features the classifier consumes.
pub const FEATURE_COUNT: usize = 7;

/// Fixed-order numeric features for one URL.
///
/// Order: URL length, hostname length, dots, hyphens, `@` present (0/1),
/// hostname entropy, domain age in days (0 when unknown).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureVector(pub [f64; FEATURE_COUNT]);

impl FeatureVector {
    /// Builds the vector from the normalized URL and upstream reports.
    pub fn from_signals(
        url: &NormalizedUrl,
        lexical: &LexicalReport,
        reputation: &ReputationReport,
    ) -> Self {
        let text = &url.canonical_url;
        let count = |c: char| text.matches(c).count() as f64;
        Self([
            text.chars().count() as f64,
            url.hostname.chars().count() as f64,
            count('.'),
            count('-'),
            if text.contains('@') { 1.0 } else { 0.0 },
            lexical.entropy,
            reputation.domain_age_days.unwrap_or(0) as f64,
        ])
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}
