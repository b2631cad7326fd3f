//! Static keyword lexicon for intent and sentiment matching.
//!
//! Pure data, no behavior: each [`Intent`] owns an ordered trigger-keyword
//! list (TR and EN), a display label and an optional deep link; the
//! [`Sentiment`] variants own the keyword sets used by the fallback
//! analyzer. Declaration order of `Intent` is the matching priority order,
//! with `General` last.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classified purpose of a user utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Stress, anxiety, feeling overwhelmed
    Stress,
    /// Concentration and productivity
    Focus,
    /// Sleep trouble, tiredness
    Sleep,
    /// Breathing exercises
    Breathing,
    /// Low motivation, wanting to give up
    Motivation,
    /// Meditation and mindfulness practice
    Meditation,
    /// Usage statistics, streaks, milestones
    Progress,
    /// Default when nothing else matches
    General,
}

impl Intent {
    /// All intents in priority order. `General` is last and never matched
    /// directly; it is the fallback value.
    pub const ALL: [Intent; 8] = [
        Intent::Stress,
        Intent::Focus,
        Intent::Sleep,
        Intent::Breathing,
        Intent::Motivation,
        Intent::Meditation,
        Intent::Progress,
        Intent::General,
    ];

    /// Human-readable label for the intent
    pub fn label(&self) -> &'static str {
        match self {
            Intent::Stress => "stress",
            Intent::Focus => "focus",
            Intent::Sleep => "sleep",
            Intent::Breathing => "breathing",
            Intent::Motivation => "motivation",
            Intent::Meditation => "meditation",
            Intent::Progress => "progress",
            Intent::General => "general",
        }
    }

    /// Ordered trigger keywords, lower-cased. Entries may be multi-word
    /// phrases; more specific forms are listed before their stems so that
    /// the reported match is the most descriptive one.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Intent::Stress => &[
                "stres",
                "stress",
                "endişe",
                "kaygı",
                "gergin",
                "anxious",
                "anxiety",
                "overwhelm",
                "panik",
                "panic attack",
            ],
            Intent::Focus => &[
                "odaklan",
                "odak",
                "konsantrasyon",
                "konsantre",
                "dikkat",
                "focus",
                "concentrat",
                "distract",
                "verimli",
                "productiv",
            ],
            Intent::Sleep => &[
                "uyku",
                "uyuyam",
                "uykusuz",
                "insomnia",
                "sleepless",
                "fall asleep",
                "yorgun",
                "tired",
            ],
            Intent::Breathing => &[
                "nefes egzersizi",
                "nefes",
                "breathing exercise",
                "breath",
                "soluk",
                "inhale",
                "exhale",
            ],
            Intent::Motivation => &[
                "motivasyon",
                "motivat",
                "isteksiz",
                "vazgeç",
                "give up",
                "pes et",
            ],
            Intent::Meditation => &[
                "meditasyon egzersizi",
                "meditasyon",
                "meditat",
                "mindful",
                "farkındalık",
            ],
            Intent::Progress => &[
                "ilerleme",
                "gelişim",
                "progress",
                "streak",
                "istatistik",
                "statist",
                "kaç dakika",
                "how many minutes",
                "milestone",
            ],
            Intent::General => &[],
        }
    }

    /// Deep-link identifier for the intent's follow-up action. Opaque to
    /// this crate; the host application resolves it to a destination.
    pub fn deep_link(&self) -> Option<&'static str> {
        match self {
            Intent::Stress => Some("calmcoach://breathe/calm"),
            Intent::Focus => Some("calmcoach://session/focus"),
            Intent::Sleep => Some("calmcoach://sounds/sleep"),
            Intent::Breathing => Some("calmcoach://breathe/box"),
            Intent::Motivation => Some("calmcoach://goals"),
            Intent::Meditation => Some("calmcoach://session/meditate"),
            Intent::Progress => Some("calmcoach://stats"),
            Intent::General => None,
        }
    }

    /// Label for the action button paired with [`Intent::deep_link`].
    pub fn action_label(&self) -> Option<&'static str> {
        match self {
            Intent::Stress => Some("Try a calming breath"),
            Intent::Focus => Some("Start a focus session"),
            Intent::Sleep => Some("Open sleep sounds"),
            Intent::Breathing => Some("Start a breathing exercise"),
            Intent::Motivation => Some("Set a daily goal"),
            Intent::Meditation => Some("Begin a meditation"),
            Intent::Progress => Some("View your progress"),
            Intent::General => None,
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Classified emotional valence of an utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

/// Positive markers counted by the fallback analyzer (substring containment).
const POSITIVE_KEYWORDS: &[&str] = &[
    "mutlu",
    "harika",
    "güzel",
    "huzur",
    "minnettar",
    "daha iyi",
    "iyi hissed",
    "happy",
    "great",
    "wonderful",
    "amazing",
    "grateful",
    "calm",
    "peaceful",
    "better",
    "love",
];

/// Negative markers counted by the fallback analyzer.
const NEGATIVE_KEYWORDS: &[&str] = &[
    "kötü",
    "üzgün",
    "mutsuz",
    "berbat",
    "yorgun",
    "endişeli",
    "sinirli",
    "stresli",
    "sad",
    "bad",
    "terrible",
    "awful",
    "tired",
    "worried",
    "angry",
    "worse",
    "anxious",
    "depress",
];

impl Sentiment {
    /// Keyword set owned by the sentiment. Only `Positive` and `Negative`
    /// carry markers; `Neutral` is the absence of a majority.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Sentiment::Positive => POSITIVE_KEYWORDS,
            Sentiment::Negative => NEGATIVE_KEYWORDS,
            Sentiment::Neutral => &[],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intent_order_ends_with_general() {
        assert_eq!(Intent::ALL.len(), 8);
        assert_eq!(Intent::ALL[0], Intent::Stress);
        assert_eq!(Intent::ALL[7], Intent::General);
    }

    #[test]
    fn general_owns_no_keywords_and_no_action() {
        assert!(Intent::General.keywords().is_empty());
        assert!(Intent::General.deep_link().is_none());
        assert!(Intent::General.action_label().is_none());
    }

    #[test]
    fn every_other_intent_has_keywords_and_action() {
        for intent in Intent::ALL.iter().filter(|i| **i != Intent::General) {
            assert!(!intent.keywords().is_empty(), "{intent} has no keywords");
            assert!(intent.deep_link().is_some(), "{intent} has no deep link");
            assert!(intent.action_label().is_some(), "{intent} has no action label");
        }
    }

    #[test]
    fn keywords_are_lower_case() {
        for intent in Intent::ALL {
            for kw in intent.keywords() {
                assert_eq!(*kw, kw.to_lowercase(), "keyword '{kw}' is not lower-case");
            }
        }
        for kw in Sentiment::Positive
            .keywords()
            .iter()
            .chain(Sentiment::Negative.keywords())
        {
            assert_eq!(*kw, kw.to_lowercase());
        }
    }

    #[test]
    fn serde_names_are_stable() {
        let json = serde_json::to_string(&Intent::Breathing).unwrap();
        assert_eq!(json, "\"breathing\"");
        let back: Intent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Intent::Breathing);
    }
}
