//! Brand impersonation detection.
//!
//! A label is first compared verbatim against the corpus (an exact match is
//! the brand itself). Otherwise look-alike substitutions are reversed and the
//! result is scored by normalized Levenshtein similarity against every brand.

use strsim::levenshtein;

use super::brands::{Brand, BRANDS};
use crate::models::TyposquatMatch;

/// Brand keys shorter than this only ever match exactly.
const MIN_FUZZY_KEY_LEN: usize = 4;

/// Upper bound on reported confidence.
const MAX_CONFIDENCE: f64 = 99.0;

/// Confidence boost when the label contains look-alike characters.
const SUBSTITUTION_BOOST: f64 = 1.3;

/// Confidence boost when the raw label is within two edits of the brand.
const NEAR_EDIT_BOOST: f64 = 1.2;

/// Maps a look-alike character to the letter it imitates.
fn reverse_substitution(c: char) -> Option<char> {
    let letter = match c {
        '0' => 'o',
        '1' => 'l',
        '3' => 'e',
        '4' => 'a',
        '5' => 's',
        '6' | '8' => 'b',
        '7' => 't',
        '9' => 'g',
        // Cyrillic and other Unicode look-alikes
        'а' => 'a',
        'е' => 'e',
        'о' => 'o',
        'р' => 'p',
        'с' => 'c',
        'у' => 'y',
        'х' => 'x',
        'і' => 'i',
        'ј' => 'j',
        'ѕ' => 's',
        'ԁ' => 'd',
        'ԋ' => 'h',
        'ѵ' => 'v',
        'ꞓ' => 'c',
        'ꭵ' => 'e',
        _ => return None,
    };
    Some(letter)
}

/// Reverses substitutions and keeps only ASCII letters.
pub fn normalize_label(label: &str) -> String {
    label
        .chars()
        .map(|c| reverse_substitution(c).unwrap_or(c))
        .filter(|c| c.is_ascii_lowercase())
        .collect()
}

fn has_substitutions(label: &str) -> bool {
    label.chars().any(|c| reverse_substitution(c).is_some())
}

/// `1 - distance / max_len`, over chars.
fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - levenshtein(a, b) as f64 / max_len as f64
}

/// Outcome of checking one label against known brands.
#[derive(Debug, Clone, PartialEq)]
pub enum TyposquatVerdict {
    /// The label is a brand's own name.
    Legitimate(&'static Brand),
    /// The label resembles a brand without being it.
    Suspected(TyposquatMatch),
    NoMatch,
}

/// Decides whether a hostname label impersonates a known brand.
pub trait TyposquatDetector: Send + Sync {
    /// `label` is the lowercased, percent-decoded label before IDNA conversion.
    fn detect(&self, label: &str) -> TyposquatVerdict;
}

/// Detector backed by a static weighted brand corpus.
#[derive(Debug, Clone)]
pub struct CorpusTyposquatDetector {
    corpus: &'static [Brand],
    threshold: f64,
}

impl CorpusTyposquatDetector {
    /// Uses the built-in corpus with the given similarity threshold.
    pub fn new(threshold: f64) -> Self {
        Self::with_corpus(BRANDS, threshold)
    }

    pub fn with_corpus(corpus: &'static [Brand], threshold: f64) -> Self {
        Self { corpus, threshold }
    }

    fn confidence(similarity: f64, substituted: bool, raw_distance: usize) -> f64 {
        let mut confidence = similarity * 100.0;
        if substituted {
            confidence *= SUBSTITUTION_BOOST;
        }
        if raw_distance <= 2 {
            confidence *= NEAR_EDIT_BOOST;
        }
        confidence.min(MAX_CONFIDENCE)
    }
}

impl TyposquatDetector for CorpusTyposquatDetector {
    fn detect(&self, label: &str) -> TyposquatVerdict {
        let label = label.to_lowercase();
        if let Some(brand) = self.corpus.iter().find(|b| b.key == label) {
            return TyposquatVerdict::Legitimate(brand);
        }

        let normalized = normalize_label(&label);
        if normalized.is_empty() {
            return TyposquatVerdict::NoMatch;
        }

        // Highest similarity wins; ties go to the higher risk weight, then corpus order.
        let mut best: Option<(&'static Brand, f64)> = None;
        for brand in self.corpus {
            if brand.key.len() < MIN_FUZZY_KEY_LEN {
                continue;
            }
            let score = similarity(&normalized, brand.key);
            if score < self.threshold {
                continue;
            }
            let better = match best {
                None => true,
                Some((current, current_score)) => {
                    score > current_score
                        || (score == current_score && brand.risk_weight > current.risk_weight)
                }
            };
            if better {
                best = Some((brand, score));
            }
        }

        let Some((brand, score)) = best else {
            return TyposquatVerdict::NoMatch;
        };

        let edit_distance = levenshtein(&label, brand.key);
        let confidence = Self::confidence(score, has_substitutions(&label), edit_distance);
        log::debug!(
            "Label '{label}' resembles '{}' (similarity {score:.2}, confidence {confidence:.1})",
            brand.key
        );

        TyposquatVerdict::Suspected(TyposquatMatch {
            brand: brand.key.to_string(),
            brand_name: brand.name.to_string(),
            industry: brand.industry,
            risk_weight: brand.risk_weight,
            similarity: score,
            edit_distance,
            confidence,
        })
    }
}
