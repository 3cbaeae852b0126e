//! Scoring properties checked through the public API, without any network.

use strum::IntoEnumIterator;

use urlscope::fusion::{fuse, penalty_for, Penalty};
use urlscope::lexical::{shannon_entropy, LexicalAnalyzer};
use urlscope::models::{Finding, FindingCategory, MlLabel, MlPrediction};
use urlscope::normalize::normalize_url;
use urlscope::{Config, Verdict};

fn ml(probability: f64) -> MlPrediction {
    MlPrediction {
        probability,
        verdict_label: MlLabel::Safe,
    }
}

fn lexical_findings(raw: &str) -> Vec<Finding> {
    LexicalAnalyzer::new(&Config::default())
        .analyze(&normalize_url(raw))
        .warnings
}

#[test]
fn test_typosquat_login_page_is_high_risk_without_classifier() {
    let findings = lexical_findings("faceb0ok.com/login");
    let categories: Vec<_> = findings.iter().map(|f| f.category).collect();
    assert!(categories.contains(&FindingCategory::Typosquat));
    assert!(categories.contains(&FindingCategory::SuspiciousKeyword));

    let outcome = fuse(&ml(0.0), &findings);
    assert!(outcome.score >= 70, "score {}", outcome.score);
    assert_eq!(outcome.verdict, Verdict::HighRisk);
}

#[test]
fn test_plain_domain_with_low_probability_is_safe() {
    let findings = lexical_findings("https://example.com/");
    assert!(findings.is_empty());

    let outcome = fuse(&ml(0.05), &findings);
    assert_eq!(outcome.score, 2);
    assert_eq!(outcome.verdict, Verdict::Safe);
    assert!(outcome.reasoning.is_empty());
}

#[test]
fn test_brand_itself_is_not_flagged() {
    assert!(lexical_findings("https://www.paypal.com/").is_empty());
}

#[test]
fn test_repeated_character_entropy_is_zero() {
    assert_eq!(shannon_entropy("aaaaaaaa"), 0.0);
    assert_eq!(shannon_entropy(""), 0.0);
}

#[test]
fn test_adding_a_finding_never_lowers_the_score() {
    let base = vec![Finding::new(FindingCategory::CrossDomainRedirect, "x")];
    for p in [0.0, 0.3, 0.99] {
        let before = fuse(&ml(p), &base).score;
        for category in FindingCategory::iter() {
            let mut more = base.clone();
            more.push(Finding::new(category, "y"));
            assert!(fuse(&ml(p), &more).score >= before, "{category:?} at {p}");
        }
    }
}

#[test]
fn test_override_category_always_scores_100() {
    let overrides: Vec<_> = FindingCategory::iter()
        .filter(|c| penalty_for(*c) == Penalty::Override)
        .collect();
    assert_eq!(overrides, vec![FindingCategory::InsecureLogin]);

    let findings = vec![Finding::new(FindingCategory::InsecureLogin, "Insecure Login Form (HTTP)")];
    let outcome = fuse(&ml(0.0), &findings);
    assert_eq!(outcome.score, 100);
    assert_eq!(outcome.verdict, Verdict::HighRisk);
}

#[test]
fn test_score_is_bounded() {
    let everything: Vec<Finding> = FindingCategory::iter()
        .filter(|c| penalty_for(*c) != Penalty::Override)
        .flat_map(|c| [Finding::new(c, "a"), Finding::new(c, "b")])
        .collect();
    assert_eq!(fuse(&ml(1.0), &everything).score, 100);
    assert_eq!(fuse(&ml(f64::NAN), &[]).score, 0);
    assert_eq!(fuse(&ml(-3.0), &[]).score, 0);
}

#[test]
fn test_reasoning_is_deduplicated_but_penalties_are_not() {
    let findings = vec![
        Finding::new(FindingCategory::SuspiciousKeyword, "Suspicious Keywords: login"),
        Finding::new(FindingCategory::SuspiciousKeyword, "Suspicious Keywords: login"),
    ];
    let outcome = fuse(&ml(0.0), &findings);
    assert_eq!(outcome.score, 40);
    assert_eq!(outcome.reasoning, vec!["Suspicious Keywords: login"]);
}
