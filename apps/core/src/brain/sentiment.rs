//! Sentiment analysis with a primary valence scorer and a keyword fallback.
//!
//! The primary path scores each sentence from an embedded valence lexicon
//! (exact-token weights in [-1.0, 1.0]) and averages the scored sentences.
//! Averaging is a deliberate, fixed policy: a text that opens badly and
//! ends well is neutral, not whatever its last sentence says. The result
//! maps through strict thresholds: `> 0.3` positive, `< -0.3` negative.
//!
//! When no sentence carries a valence token the fallback counts positive
//! and negative lexicon markers by substring containment, which also
//! covers inflected forms the exact-token path misses.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

use super::lexicon::Sentiment;

/// Result of sentiment analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentResult {
    /// Detected sentiment
    pub sentiment: Sentiment,
    /// Averaged valence score, present only when the primary path fired
    pub score: Option<f32>,
}

/// Sentence boundaries for the primary scorer.
static SENTENCE_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?\n]+").expect("invalid sentence split pattern"));

/// Exact-token valence weights, TR and EN.
static VALENCE: LazyLock<HashMap<&'static str, f32>> = LazyLock::new(|| {
    let mut weights = HashMap::new();

    for (word, weight) in [
        // Positive
        ("harika", 0.9),
        ("mükemmel", 0.9),
        ("mutlu", 0.7),
        ("huzurlu", 0.7),
        ("güzel", 0.6),
        ("iyi", 0.4),
        ("teşekkür", 0.5),
        ("wonderful", 0.9),
        ("amazing", 0.9),
        ("great", 0.8),
        ("happy", 0.7),
        ("peaceful", 0.7),
        ("grateful", 0.7),
        ("love", 0.7),
        ("relaxed", 0.6),
        ("calm", 0.5),
        ("thanks", 0.5),
        ("good", 0.4),
        ("better", 0.4),
        // Negative
        ("berbat", -0.9),
        ("korkunç", -0.8),
        ("kötü", -0.7),
        ("sinirli", -0.7),
        ("üzgün", -0.6),
        ("mutsuz", -0.6),
        ("endişeli", -0.6),
        ("stresli", -0.6),
        ("yorgun", -0.4),
        ("terrible", -0.9),
        ("awful", -0.8),
        ("hate", -0.8),
        ("angry", -0.7),
        ("exhausted", -0.7),
        ("sad", -0.6),
        ("anxious", -0.6),
        ("stressed", -0.6),
        ("bad", -0.5),
        ("worried", -0.5),
        ("worse", -0.5),
        ("tired", -0.4),
    ] {
        weights.insert(word, weight);
    }

    weights
});

/// Map an averaged valence score onto a sentiment. Thresholds are strict:
/// exactly ±0.3 is neutral.
pub fn sentiment_for_score(score: f32) -> Sentiment {
    if score > 0.3 {
        Sentiment::Positive
    } else if score < -0.3 {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

/// Two-tier sentiment analyzer
#[derive(Debug, Default, Clone)]
pub struct SentimentAnalyzer;

impl SentimentAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Analyze the sentiment of a text. Total: any input maps to a result.
    pub fn analyze(&self, text: &str) -> SentimentResult {
        if let Some(score) = self.valence_score(text) {
            return SentimentResult {
                sentiment: sentiment_for_score(score),
                score: Some(score),
            };
        }

        SentimentResult {
            sentiment: self.count_markers(text),
            score: None,
        }
    }

    /// Average valence over the sentences that carry at least one lexicon
    /// token. `None` when nothing in the text is scored.
    fn valence_score(&self, text: &str) -> Option<f32> {
        let lower = text.to_lowercase();
        let mut sentence_scores = Vec::new();

        for sentence in SENTENCE_SPLIT.split(&lower) {
            let weights: Vec<f32> = sentence
                .split(|c: char| !c.is_alphanumeric())
                .filter_map(|token| VALENCE.get(token).copied())
                .collect();
            if !weights.is_empty() {
                sentence_scores.push(weights.iter().sum::<f32>() / weights.len() as f32);
            }
        }

        if sentence_scores.is_empty() {
            None
        } else {
            Some(sentence_scores.iter().sum::<f32>() / sentence_scores.len() as f32)
        }
    }

    /// Fallback: substring occurrence counts of positive vs negative markers.
    fn count_markers(&self, text: &str) -> Sentiment {
        let lower = text.to_lowercase();

        let positives = Sentiment::Positive
            .keywords()
            .iter()
            .filter(|kw| lower.contains(**kw))
            .count();
        let negatives = Sentiment::Negative
            .keywords()
            .iter()
            .filter(|kw| lower.contains(**kw))
            .count();

        if positives > negatives {
            Sentiment::Positive
        } else if negatives > positives {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}
