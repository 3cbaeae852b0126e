//! Statistical risk scoring.
//!
//! This module provides:
//! - `FeatureVector` - the seven numeric features the classifier consumes
//! - `Classifier` - the seam for any binary probabilistic model
//! - `ModelArtifact` - the shipped JSON-encoded forest/logistic models
//! - `RiskScorer` - loads the artifact once and labels its probability
//!
//! A missing or broken artifact never fails a scan: the prediction degrades
//! to probability 0 with the "Model Unavailable" label.

mod artifact;
mod features;

use std::path::PathBuf;
use std::sync::Arc;

use once_cell::sync::OnceCell;

pub use artifact::{DecisionTree, ModelArtifact, TreeNode};
pub use features::{FeatureVector, FEATURE_COUNT};

use crate::config::Config;
use crate::error_handling::ClassifierError;
use crate::models::{LexicalReport, MlLabel, MlPrediction, NormalizedUrl, ReputationReport};

/// A pre-trained binary classifier.
pub trait Classifier: Send + Sync {
    /// Probability of the malicious class.
    fn predict_proba(&self, features: &FeatureVector) -> Result<f64, ClassifierError>;
}

/// Turns upstream signals into a classifier probability and label.
pub struct RiskScorer {
    model_path: PathBuf,
    classifier: OnceCell<Option<Arc<dyn Classifier>>>,
    suspicious_threshold: f64,
    high_risk_threshold: f64,
}

impl RiskScorer {
    /// A scorer that loads the artifact at `config.model_path` on first use.
    pub fn new(config: &Config) -> Self {
        Self {
            model_path: config.model_path.clone(),
            classifier: OnceCell::new(),
            suspicious_threshold: config.ml_suspicious_threshold,
            high_risk_threshold: config.ml_high_risk_threshold,
        }
    }

    /// A scorer backed by an already constructed classifier.
    pub fn with_classifier(classifier: Arc<dyn Classifier>, config: &Config) -> Self {
        let scorer = Self::new(config);
        // Freshly created cell; this cannot already be set
        let _ = scorer.classifier.set(Some(classifier));
        scorer
    }

    /// Loads the artifact once; later calls reuse the outcome.
    fn classifier(&self) -> Option<&Arc<dyn Classifier>> {
        self.classifier
            .get_or_init(|| match ModelArtifact::load(&self.model_path) {
                Ok(artifact) => {
                    log::info!("Loaded classifier from {}", self.model_path.display());
                    Some(Arc::new(artifact) as Arc<dyn Classifier>)
                }
                Err(e) => {
                    log::warn!("Classifier unavailable: {e}");
                    None
                }
            })
            .as_ref()
    }

    /// Scores the URL.
    ///
    /// Never fails; any classifier problem yields `MlPrediction::unavailable()`.
    pub fn predict(
        &self,
        url: &NormalizedUrl,
        lexical: &LexicalReport,
        reputation: &ReputationReport,
    ) -> MlPrediction {
        let Some(classifier) = self.classifier() else {
            return MlPrediction::unavailable();
        };

        let features = FeatureVector::from_signals(url, lexical, reputation);
        let probability = match classifier.predict_proba(&features) {
            Ok(p) if p.is_finite() => p.clamp(0.0, 1.0),
            Ok(p) => {
                log::warn!("Classifier returned non-finite probability {p}");
                return MlPrediction::unavailable();
            }
            Err(e) => {
                log::warn!("Classifier failed on {}: {e}", url.canonical_url);
                return MlPrediction::unavailable();
            }
        };

        MlPrediction {
            probability,
            verdict_label: self.label(probability),
        }
    }

    fn label(&self, probability: f64) -> MlLabel {
        if probability > self.high_risk_threshold {
            MlLabel::HighRisk
        } else if probability > self.suspicious_threshold {
            MlLabel::Suspicious
        } else {
            MlLabel::Safe
        }
    }
}
