//! Serialized classifier artifacts.
//!
//! Two encodings are accepted, tagged by `kind`:
//!
//! ```json
//! {"kind": "forest", "trees": [{"nodes": [
//!     {"feature": 6, "threshold": 30.0, "left": 1, "right": 2},
//!     {"value": [2.0, 8.0]},
//!     {"value": [9.0, 1.0]}
//! ]}]}
//! ```
//!
//! ```json
//! {"kind": "logistic", "weights": [0.01, 0.02, 0.3, 0.2, 1.5, 0.6, -0.01], "bias": -2.0}
//! ```
//!
//! Forest splits follow the usual convention: `x[feature] <= threshold` goes
//! left. Leaf values are per-class weights (counts or probabilities) for
//! `[benign, malicious]`.

use std::path::Path;

use serde::Deserialize;

use super::features::{FeatureVector, FEATURE_COUNT};
use super::Classifier;
use crate::error_handling::ClassifierError;

/// One node of a binary decision tree.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: [f64; 2],
    },
}

/// A decision tree stored as a flat node list; node 0 is the root.
#[derive(Debug, Clone, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

impl DecisionTree {
    /// Probability of the malicious class at the leaf `features` reach.
    fn predict(&self, features: &FeatureVector) -> Result<f64, ClassifierError> {
        let mut index = 0;
        // A well-formed tree reaches a leaf in fewer steps than it has nodes
        for _ in 0..self.nodes.len() {
            match &self.nodes[index] {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    index = if features.0[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
                TreeNode::Leaf { value: [benign, malicious] } => {
                    let total = benign + malicious;
                    if total <= 0.0 {
                        return Err(ClassifierError::Inference(format!(
                            "leaf {index} has no weight"
                        )));
                    }
                    return Ok(malicious / total);
                }
            }
        }
        Err(ClassifierError::Inference(
            "tree walk did not reach a leaf (cycle)".to_string(),
        ))
    }

    fn validate(&self, tree_index: usize) -> Result<(), ClassifierError> {
        if self.nodes.is_empty() {
            return Err(ClassifierError::Malformed(format!("tree {tree_index} is empty")));
        }
        for (i, node) in self.nodes.iter().enumerate() {
            match node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if *feature >= FEATURE_COUNT {
                        return Err(ClassifierError::Malformed(format!(
                            "tree {tree_index} node {i}: feature {feature} out of range"
                        )));
                    }
                    if !threshold.is_finite() {
                        return Err(ClassifierError::Malformed(format!(
                            "tree {tree_index} node {i}: non-finite threshold"
                        )));
                    }
                    if *left >= self.nodes.len() || *right >= self.nodes.len() {
                        return Err(ClassifierError::Malformed(format!(
                            "tree {tree_index} node {i}: child out of range"
                        )));
                    }
                }
                TreeNode::Leaf { value } => {
                    if value.iter().any(|v| !v.is_finite() || *v < 0.0) {
                        return Err(ClassifierError::Malformed(format!(
                            "tree {tree_index} node {i}: invalid leaf weights"
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

/// A pre-trained binary classifier.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ModelArtifact {
    /// Random forest: the mean of the trees' leaf probabilities
    Forest { trees: Vec<DecisionTree> },
    /// Logistic regression over the raw features
    Logistic {
        weights: [f64; FEATURE_COUNT],
        bias: f64,
    },
}

impl ModelArtifact {
    /// Reads and validates an artifact from a JSON file.
    ///
    /// # Errors
    ///
    /// `ClassifierError::Missing` if the file does not exist,
    /// `ClassifierError::Malformed` if it cannot be read, decoded or validated.
    pub fn load(path: &Path) -> Result<Self, ClassifierError> {
        let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ClassifierError::Missing(path.display().to_string()),
            _ => ClassifierError::Malformed(format!("{}: {e}", path.display())),
        })?;
        Self::from_json(&text)
    }

    /// Decodes and validates an artifact.
    ///
    /// # Errors
    ///
    /// Returns `ClassifierError::Malformed` on invalid JSON or an inconsistent model.
    pub fn from_json(text: &str) -> Result<Self, ClassifierError> {
        let artifact: Self =
            serde_json::from_str(text).map_err(|e| ClassifierError::Malformed(e.to_string()))?;
        artifact.validate()?;
        Ok(artifact)
    }

    fn validate(&self) -> Result<(), ClassifierError> {
        match self {
            ModelArtifact::Forest { trees } => {
                if trees.is_empty() {
                    return Err(ClassifierError::Malformed("forest has no trees".to_string()));
                }
                trees
                    .iter()
                    .enumerate()
                    .try_for_each(|(i, tree)| tree.validate(i))
            }
            ModelArtifact::Logistic { weights, bias } => {
                if weights.iter().chain(std::iter::once(bias)).all(|w| w.is_finite()) {
                    Ok(())
                } else {
                    Err(ClassifierError::Malformed(
                        "non-finite logistic coefficient".to_string(),
                    ))
                }
            }
        }
    }
}

impl Classifier for ModelArtifact {
    fn predict_proba(&self, features: &FeatureVector) -> Result<f64, ClassifierError> {
        match self {
            ModelArtifact::Forest { trees } => {
                let mut sum = 0.0;
                for tree in trees {
                    sum += tree.predict(features)?;
                }
                Ok(sum / trees.len() as f64)
            }
            ModelArtifact::Logistic { weights, bias } => {
                let z: f64 = weights
                    .iter()
                    .zip(features.as_slice())
                    .map(|(w, x)| w * x)
                    .sum::<f64>()
                    + bias;
                Ok(1.0 / (1.0 + (-z).exp()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STUMP_FOREST: &str = r#"{"kind": "forest", "trees": [
        {"nodes": [
            {"feature": 6, "threshold": 30.0, "left": 1, "right": 2},
            {"value": [2.0, 8.0]},
            {"value": [9.0, 1.0]}
        ]},
        {"nodes": [{"value": [1.0, 1.0]}]}
    ]}"#;

    fn features(age: f64) -> FeatureVector {
        FeatureVector([20.0, 11.0, 1.0, 0.0, 0.0, 2.5, age])
    }

    #[test]
    fn test_forest_averages_trees() {
        let model = ModelArtifact::from_json(STUMP_FOREST).unwrap();
        // Young domain: (0.8 + 0.5) / 2
        assert!((model.predict_proba(&features(3.0)).unwrap() - 0.65).abs() < 1e-12);
        // Old domain: (0.1 + 0.5) / 2
        assert!((model.predict_proba(&features(900.0)).unwrap() - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_logistic() {
        let model = ModelArtifact::from_json(
            r#"{"kind": "logistic", "weights": [0, 0, 0, 0, 0, 0, 0], "bias": 0}"#,
        )
        .unwrap();
        assert_eq!(model.predict_proba(&features(1.0)).unwrap(), 0.5);
    }

    #[test]
    fn test_malformed_artifacts_rejected() {
        let cases = [
            "not json",
            r#"{"kind": "svm"}"#,
            r#"{"kind": "forest", "trees": []}"#,
            r#"{"kind": "forest", "trees": [{"nodes": []}]}"#,
            r#"{"kind": "forest", "trees": [{"nodes": [{"feature": 9, "threshold": 1, "left": 0, "right": 0}]}]}"#,
            r#"{"kind": "forest", "trees": [{"nodes": [{"feature": 0, "threshold": 1, "left": 0, "right": 5}]}]}"#,
            r#"{"kind": "logistic", "weights": [1, 2, 3], "bias": 0}"#,
        ];
        for case in cases {
            assert!(
                matches!(ModelArtifact::from_json(case), Err(ClassifierError::Malformed(_))),
                "{case}"
            );
        }
    }

    #[test]
    fn test_cyclic_tree_fails_inference() {
        let model = ModelArtifact::from_json(
            r#"{"kind": "forest", "trees": [{"nodes": [
                {"feature": 0, "threshold": 100, "left": 1, "right": 1},
                {"feature": 0, "threshold": 100, "left": 0, "right": 0}
            ]}]}"#,
        )
        .unwrap();
        assert!(matches!(
            model.predict_proba(&features(1.0)),
            Err(ClassifierError::Inference(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = ModelArtifact::load(Path::new("/nonexistent/url_classifier.json")).unwrap_err();
        assert!(matches!(err, ClassifierError::Missing(_)));
    }
}
