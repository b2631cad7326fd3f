//! Intent classification over the static keyword lexicon.
//!
//! Two-tier matching:
//! 1. Fast substring pass over the trigger keywords, in lexicon priority
//!    order; the first hit wins.
//! 2. Fuzzy fallback if nothing matched: noun/verb tokens are scored
//!    against every keyword by bidirectional containment, which catches
//!    inflected forms the substring pass misses.
//!
//! Classification never fails; the answer defaults to [`Intent::General`].

use serde::{Deserialize, Serialize};

use super::lexicon::Intent;
use super::tagger::HeuristicTagger;

/// Result of intent classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Detected intent
    pub intent: Intent,
    /// Keyword that triggered the substring pass, if any. Diagnostic only.
    pub matched_keyword: Option<String>,
}

impl ClassificationResult {
    fn general() -> Self {
        Self {
            intent: Intent::General,
            matched_keyword: None,
        }
    }
}

/// Keyword-based intent classifier
#[derive(Debug, Default, Clone)]
pub struct IntentClassifier {
    tagger: HeuristicTagger,
}

impl IntentClassifier {
    pub fn new() -> Self {
        Self {
            tagger: HeuristicTagger::new(),
        }
    }

    /// Classify the intent of a text. Total: any input maps to some intent.
    pub fn classify(&self, text: &str) -> ClassificationResult {
        let normalized = text.trim().to_lowercase();

        if normalized.is_empty() {
            return ClassificationResult::general();
        }

        // Substring pass, priority order. General has no keywords and is
        // skipped by construction.
        for intent in Intent::ALL {
            for keyword in intent.keywords() {
                if normalized.contains(keyword) {
                    return ClassificationResult {
                        intent,
                        matched_keyword: Some((*keyword).to_string()),
                    };
                }
            }
        }

        self.classify_fuzzy(&normalized)
    }

    /// Fallback scorer: one point per (token, keyword) pair where either
    /// side contains the other. Strictly highest score wins; ties keep the
    /// first-declared intent.
    fn classify_fuzzy(&self, normalized: &str) -> ClassificationResult {
        let tokens = self.tagger.content_tokens(normalized);
        if tokens.is_empty() {
            return ClassificationResult::general();
        }

        let mut best_intent = Intent::General;
        let mut best_score = 0usize;

        for intent in Intent::ALL {
            let score = intent
                .keywords()
                .iter()
                .flat_map(|kw| tokens.iter().map(move |token| (kw, token)))
                .filter(|(kw, token)| token.contains(*kw) || kw.contains(token.as_str()))
                .count();

            if score > best_score {
                best_score = score;
                best_intent = intent;
            }
        }

        ClassificationResult {
            intent: best_intent,
            matched_keyword: None,
        }
    }
}
