//! Heuristic part-of-speech tagging.
//!
//! No linguistic model: function words are recognized via stopword tables
//! (TR and EN) and the remaining tokens are tagged verb or noun by suffix
//! rules. Good enough to keep only content-bearing tokens for the fuzzy
//! intent scorer.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Stopwords for Turkish
const STOPWORDS_TR: &[&str] = &[
    "ve", "ile", "ama", "fakat", "ancak", "veya", "ya", "da", "de", "ki", "mi", "mı", "mu", "mü",
    "bir", "bu", "şu", "o", "ben", "sen", "biz", "siz", "onlar", "bana", "sana", "beni", "seni",
    "benim", "senin", "bizim", "sizin", "çok", "az", "daha", "en", "gibi", "için", "kadar", "ne",
    "nasıl", "neden", "niye", "hangi", "kim", "nerede", "ne zaman", "evet", "hayır", "belki",
    "hem", "her", "hiç", "şey", "çünkü", "eğer", "ise", "değil", "var", "yok", "olan", "olarak",
];

/// Stopwords for English
const STOPWORDS_EN: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "nor", "for", "yet", "so", "i", "you", "he", "she",
    "it", "we", "they", "me", "him", "her", "us", "them", "my", "your", "his", "its", "our",
    "their", "this", "that", "these", "those", "who", "whom", "which", "what", "whose", "is",
    "am", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does", "did",
    "will", "would", "shall", "should", "can", "cant", "could", "may", "might", "must", "in",
    "on", "at", "to", "from", "by", "with", "about", "into", "over", "under", "again", "here",
    "there", "where", "when", "why", "how", "all", "each", "every", "both", "few", "more",
    "most", "other", "some", "any", "no", "not", "only", "own", "same", "than", "too", "very",
    "just", "also", "now", "then", "once", "if", "because", "as", "until", "while", "yes",
    "maybe", "s", "t", "ve", "re", "ll", "d", "m",
];

/// Verb-like suffixes, checked against the token tail.
const VERB_SUFFIXES: &[&str] = &[
    // English
    "ing", "ed", "ize", "ise", "ify", // Turkish
    "mak", "mek", "yor", "dım", "dim", "dum", "düm", "acak", "ecek", "malı", "meli",
];

static STOPWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    STOPWORDS_TR
        .iter()
        .chain(STOPWORDS_EN.iter())
        .copied()
        .collect()
});

/// Coarse part-of-speech tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosTag {
    Noun,
    Verb,
    /// Pronouns, conjunctions, particles, auxiliaries
    Function,
}

/// Suffix-rule tagger over stopword-filtered tokens
#[derive(Debug, Default, Clone)]
pub struct HeuristicTagger;

impl HeuristicTagger {
    pub fn new() -> Self {
        Self
    }

    /// Tag a single lower-cased token.
    pub fn tag(&self, token: &str) -> PosTag {
        if STOPWORDS.contains(token) {
            return PosTag::Function;
        }
        for suffix in VERB_SUFFIXES {
            if token.len() > suffix.len() + 1 && token.ends_with(suffix) {
                return PosTag::Verb;
            }
        }
        PosTag::Noun
    }

    /// Lower-cased noun and verb tokens of `text`, in order of appearance.
    /// Short and purely numeric tokens are discarded.
    pub fn content_tokens(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| t.len() >= 3 && !t.chars().all(|c| c.is_numeric()))
            .filter(|t| self.tag(t) != PosTag::Function)
            .map(|t| t.to_string())
            .collect()
    }
}
