//! Fusion of the classifier probability with rule-based findings.
//!
//! `score = floor(min(100, 0.5 * p * 100 + sum(penalties)))`, except that any
//! critical finding forces 100 regardless of everything else.

use std::collections::HashSet;

use crate::config::{CAUTION_MAX_SCORE, SAFE_MAX_SCORE};
use crate::models::{Finding, FindingCategory, MlPrediction, Verdict};

/// Weight of the classifier term.
pub const ML_WEIGHT: f64 = 0.5;

/// Score forced by a critical finding.
pub const OVERRIDE_SCORE: u8 = 100;

/// How a finding contributes to the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Penalty {
    /// Forces the maximum score
    Override,
    Points(u8),
    None,
}

/// Penalty of one finding category.
pub fn penalty_for(category: FindingCategory) -> Penalty {
    use FindingCategory::*;
    match category {
        InsecureLogin => Penalty::Override,
        Typosquat => Penalty::Points(50),
        NewDomain | FreshDomain => Penalty::Points(40),
        SuspiciousKeyword => Penalty::Points(20),
        CrossDomainRedirect => Penalty::Points(15),
        AutomatedCertificate => Penalty::Points(10),
        LinkType | HighEntropy | Homograph | SsrfBlocked | TraceError | RedirectLimit
        | HighHopCount | TraceSkipped | VeryNewCertificate | CertificateInvalid
        | CertificateTimeout | NoHttps | CertificateSkipped | SuspiciousTld
        | CreationDateRedacted | WhoisTimeout | WhoisUnavailable | DynamicContent
        | DeadlineExceeded | Unreachable => Penalty::None,
    }
}

/// Tier boundaries for the fused score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tiers {
    /// Highest score rated Safe
    pub safe_max: u8,
    /// Highest score rated Caution
    pub caution_max: u8,
}

impl Default for Tiers {
    fn default() -> Self {
        Self {
            safe_max: SAFE_MAX_SCORE,
            caution_max: CAUTION_MAX_SCORE,
        }
    }
}

impl Tiers {
    pub fn verdict(&self, score: u8) -> Verdict {
        if score <= self.safe_max {
            Verdict::Safe
        } else if score <= self.caution_max {
            Verdict::Caution
        } else {
            Verdict::HighRisk
        }
    }
}

/// Fused score, tier and deduplicated reasoning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FusionOutcome {
    pub score: u8,
    pub verdict: Verdict,
    pub reasoning: Vec<String>,
}

/// Fuses with the default tier boundaries.
///
/// # Examples
///
/// ```
/// use urlscope::fusion::fuse;
/// use urlscope::models::{Finding, FindingCategory, MlPrediction, MlLabel, Verdict};
///
/// let ml = MlPrediction { probability: 0.05, verdict_label: MlLabel::Safe };
/// let outcome = fuse(&ml, &[]);
/// assert_eq!(outcome.score, 2);
/// assert_eq!(outcome.verdict, Verdict::Safe);
///
/// let login = Finding::new(FindingCategory::InsecureLogin, "Insecure Login Form (HTTP)");
/// assert_eq!(fuse(&ml, &[login]).score, 100);
/// ```
pub fn fuse(ml: &MlPrediction, findings: &[Finding]) -> FusionOutcome {
    fuse_with(ml, findings, Tiers::default())
}

/// Fuses the classifier output with every finding of a scan.
///
/// `findings` is the full, non-deduplicated union: a category that fired
/// twice is penalized twice.
pub fn fuse_with(ml: &MlPrediction, findings: &[Finding], tiers: Tiers) -> FusionOutcome {
    let score = score(ml.probability, findings);
    FusionOutcome {
        score,
        verdict: tiers.verdict(score),
        reasoning: dedup_messages(findings),
    }
}

fn score(probability: f64, findings: &[Finding]) -> u8 {
    let mut penalty_points: u32 = 0;
    for finding in findings {
        match penalty_for(finding.category) {
            Penalty::Override => {
                log::debug!("Critical finding '{finding}' overrides the score");
                return OVERRIDE_SCORE;
            }
            Penalty::Points(points) => penalty_points += u32::from(points),
            Penalty::None => {}
        }
    }

    let probability = if probability.is_finite() {
        probability.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let raw = ML_WEIGHT * (probability * 100.0) + f64::from(penalty_points);
    // Bounded to [0, 100] before the cast
    raw.min(100.0).floor() as u8
}

/// Messages in first-seen order, each once.
pub fn dedup_messages(findings: &[Finding]) -> Vec<String> {
    let mut seen = HashSet::new();
    findings
        .iter()
        .filter(|f| seen.insert(f.message.as_str()))
        .map(|f| f.message.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MlLabel;
    use strum::IntoEnumIterator;

    fn ml(probability: f64) -> MlPrediction {
        MlPrediction {
            probability,
            verdict_label: MlLabel::Safe,
        }
    }

    fn finding(category: FindingCategory) -> Finding {
        Finding::new(category, format!("{category:?}"))
    }

    #[test]
    fn test_ml_only() {
        assert_eq!(fuse(&ml(0.05), &[]).score, 2);
        assert_eq!(fuse(&ml(0.0), &[]).score, 0);
        assert_eq!(fuse(&ml(1.0), &[]).score, 50);
        assert_eq!(fuse(&ml(0.999), &[]).score, 49);
    }

    #[test]
    fn test_typosquat_with_keyword_is_high_risk() {
        let outcome = fuse(
            &ml(0.0),
            &[
                finding(FindingCategory::Typosquat),
                finding(FindingCategory::SuspiciousKeyword),
            ],
        );
        assert_eq!(outcome.score, 70);
        assert_eq!(outcome.verdict, Verdict::HighRisk);
    }

    #[test]
    fn test_override_ignores_everything_else() {
        let findings = [
            finding(FindingCategory::LinkType),
            finding(FindingCategory::InsecureLogin),
        ];
        assert_eq!(fuse(&ml(0.0), &findings).score, 100);
        assert_eq!(fuse(&ml(0.0), &findings).verdict, Verdict::HighRisk);
    }

    #[test]
    fn test_score_is_capped() {
        let findings = [
            finding(FindingCategory::Typosquat),
            finding(FindingCategory::NewDomain),
            finding(FindingCategory::SuspiciousKeyword),
        ];
        assert_eq!(fuse(&ml(0.9), &findings).score, 100);
    }

    #[test]
    fn test_repeated_category_counts_each_time() {
        let findings = [
            Finding::new(FindingCategory::CrossDomainRedirect, "a"),
            Finding::new(FindingCategory::CrossDomainRedirect, "b"),
        ];
        assert_eq!(fuse(&ml(0.0), &findings).score, 30);
    }

    #[test]
    fn test_adding_findings_never_lowers_score() {
        let p = 0.37;
        let mut findings = Vec::new();
        let mut previous = fuse(&ml(p), &findings).score;
        for category in FindingCategory::iter() {
            findings.push(finding(category));
            let current = fuse(&ml(p), &findings).score;
            assert!(current >= previous, "{category:?} lowered the score");
            previous = current;
        }
    }

    #[test]
    fn test_tier_boundaries() {
        let tiers = Tiers::default();
        assert_eq!(tiers.verdict(0), Verdict::Safe);
        assert_eq!(tiers.verdict(30), Verdict::Safe);
        assert_eq!(tiers.verdict(31), Verdict::Caution);
        assert_eq!(tiers.verdict(69), Verdict::Caution);
        assert_eq!(tiers.verdict(70), Verdict::HighRisk);
        assert_eq!(tiers.verdict(100), Verdict::HighRisk);
    }

    #[test]
    fn test_reasoning_is_deduplicated_in_order() {
        let findings = [
            Finding::new(FindingCategory::LinkType, "Shortened URL"),
            Finding::new(FindingCategory::CrossDomainRedirect, "Cross-Domain Redirect Detected"),
            Finding::new(FindingCategory::LinkType, "Shortened URL"),
        ];
        assert_eq!(
            fuse(&ml(0.0), &findings).reasoning,
            vec!["Shortened URL", "Cross-Domain Redirect Detected"]
        );
    }

    #[test]
    fn test_non_finite_probability_counts_as_zero() {
        assert_eq!(fuse(&ml(f64::NAN), &[]).score, 0);
    }

    #[test]
    fn test_custom_tiers() {
        let tiers = Tiers {
            safe_max: 10,
            caution_max: 20,
        };
        let outcome = fuse_with(&ml(0.5), &[], tiers);
        assert_eq!(outcome.score, 25);
        assert_eq!(outcome.verdict, Verdict::HighRisk);
    }
}
