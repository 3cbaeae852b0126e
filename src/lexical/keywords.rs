//! Phishing keyword tiers.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::KeywordHits;

/// Credential, payment and urgency terms.
pub const HIGH_RISK_KEYWORDS: &[&str] = &[
    "login", "verify", "secure", "account", "banking", "update", "confirm", "password",
    "authenticate", "wallet", "pay", "rewards", "bonus", "security", "validation", "signin",
    "signon", "authorize", "creditcard", "debitcard", "socialsecurity", "irs", "tax", "refund",
    "claim", "rebate",
];

/// Service and account-management terms.
pub const MEDIUM_RISK_KEYWORDS: &[&str] = &[
    "service", "portal", "access", "online", "web", "click", "redirect", "form", "submit",
    "entry", "recovery", "reset", "change", "modify", "edit", "profile", "settings",
    "preferences", "billing", "invoice", "payment", "subscription", "renewal",
];

/// Generic site vocabulary.
pub const LOW_RISK_KEYWORDS: &[&str] = &[
    "home", "index", "main", "page", "site", "info", "contact", "about", "help", "support",
    "faq", "terms", "privacy", "policy", "legal",
];

fn tier_pattern(words: &[&str]) -> Regex {
    let alternation = words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{alternation})\b"))
        .expect("Failed to compile keyword pattern - this is a bug")
}

static HIGH_RISK: LazyLock<Regex> = LazyLock::new(|| tier_pattern(HIGH_RISK_KEYWORDS));
static MEDIUM_RISK: LazyLock<Regex> = LazyLock::new(|| tier_pattern(MEDIUM_RISK_KEYWORDS));
static LOW_RISK: LazyLock<Regex> = LazyLock::new(|| tier_pattern(LOW_RISK_KEYWORDS));

/// Distinct lowercase matches of `pattern` in `text`, first-seen order.
fn distinct_matches(pattern: &Regex, text: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for m in pattern.find_iter(text) {
        let word = m.as_str().to_ascii_lowercase();
        if !found.contains(&word) {
            found.push(word);
        }
    }
    found
}

/// Matches the URL against all three tiers (case-insensitive, whole words).
pub fn find_keywords(url: &str) -> KeywordHits {
    KeywordHits {
        high: distinct_matches(&HIGH_RISK, url),
        medium: distinct_matches(&MEDIUM_RISK, url),
        low: distinct_matches(&LOW_RISK, url),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiers_and_score() {
        let hits = find_keywords("http://paypal-secure.example/Login/billing?page=help");
        assert_eq!(hits.high, vec!["secure", "login"]);
        assert_eq!(hits.medium, vec!["billing"]);
        assert_eq!(hits.low, vec!["page", "help"]);
        assert_eq!(hits.weighted_score(), 10 * 2 + 5 + 2 * 2);
    }

    #[test]
    fn test_word_boundaries() {
        // "payment" is medium; "pay" must not also fire inside it
        let hits = find_keywords("http://example.com/payments/paymentgateway");
        assert!(hits.high.is_empty());
        assert!(hits.medium.is_empty());

        let hits = find_keywords("http://example.com/payment");
        assert_eq!(hits.medium, vec!["payment"]);
        assert!(hits.high.is_empty());
    }

    #[test]
    fn test_repeated_keyword_counted_once() {
        let hits = find_keywords("http://login.example.com/login?next=LOGIN");
        assert_eq!(hits.high, vec!["login"]);
    }

    #[test]
    fn test_clean_url() {
        assert_eq!(find_keywords("https://example.com/"), KeywordHits::default());
    }
}
