//! Reply construction from the template catalog.
//!
//! Selects a variant for the classified (intent, sentiment), optionally
//! appends a quote, applies personalization suffixes from usage stats and
//! attaches the intent's follow-up action. Total for every input pair; the
//! generic openings cover combinations without authored variants.
//!
//! Randomness is confined to one seedable source so tests can either fix
//! the seed or assert membership in the selection pool.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};

use super::templates::{variants, GENERIC_OPENINGS, QUOTES};
use crate::brain::{Intent, Sentiment};
use crate::config::CoachConfig;
use crate::models::{CoachAction, CoachResponse, UsageStats};

/// Attempts to draw a quote that is not already part of the reply.
const QUOTE_ATTEMPTS: usize = 3;

/// Template-driven response generator
pub struct ResponseGenerator {
    rng: Mutex<StdRng>,
    max_response_len: usize,
    quote_probability: f64,
}

impl Default for ResponseGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseGenerator {
    /// Generator with default configuration and an entropy-seeded RNG.
    pub fn new() -> Self {
        Self::build(StdRng::from_entropy(), &CoachConfig::default())
    }

    /// Deterministic generator for reproducible output sequences.
    pub fn with_seed(seed: u64) -> Self {
        Self::build(StdRng::seed_from_u64(seed), &CoachConfig::default())
    }

    pub fn from_config(config: &CoachConfig) -> Self {
        Self::build(StdRng::from_entropy(), config)
    }

    pub fn seeded_from_config(config: &CoachConfig, seed: u64) -> Self {
        Self::build(StdRng::seed_from_u64(seed), config)
    }

    fn build(rng: StdRng, config: &CoachConfig) -> Self {
        Self {
            rng: Mutex::new(rng),
            max_response_len: config.max_response_len as usize,
            quote_probability: config.quote_probability.clamp(0.0, 1.0),
        }
    }

    /// Build a reply for the classified pair. Never fails: combinations
    /// without authored variants fall back to a generic opening.
    pub fn generate(
        &self,
        intent: Intent,
        sentiment: Sentiment,
        stats: Option<&UsageStats>,
    ) -> CoachResponse {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);

        let pool = variants(intent, sentiment);
        let (mut text, fell_back) = match pool.choose(&mut *rng) {
            Some(variant) => ((*variant).to_string(), false),
            None => (
                (*GENERIC_OPENINGS.choose(&mut *rng).unwrap_or(&GENERIC_OPENINGS[0])).to_string(),
                true,
            ),
        };

        // A fallback reply always gets a quote so it does not feel canned;
        // authored variants get one on a coin flip.
        if fell_back || rng.gen_bool(self.quote_probability) {
            for _ in 0..QUOTE_ATTEMPTS {
                let quote = *QUOTES.choose(&mut *rng).unwrap_or(&QUOTES[0]);
                if !text.contains(quote) {
                    text.push_str("\n\n");
                    text.push_str(quote);
                    break;
                }
            }
        }

        if let Some(stats) = stats {
            if stats.current_streak > 0 {
                let suffix = format!(
                    "\n\nDay {} of your streak. Keep showing up.",
                    stats.current_streak
                );
                self.append_if_fits(&mut text, &suffix);
            }
            if stats.total_minutes >= 300 && stats.total_minutes % 100 < 10 {
                let rounded = stats.total_minutes - stats.total_minutes % 100;
                let suffix = format!(
                    "\n\nYou've crossed {} mindful minutes in total. That consistency is yours.",
                    rounded
                );
                if !text.contains(&suffix) {
                    self.append_if_fits(&mut text, &suffix);
                }
            }
        }

        let action = intent
            .action_label()
            .zip(intent.deep_link())
            .map(|(label, deep_link)| CoachAction {
                label: label.to_string(),
                deep_link: deep_link.to_string(),
            });

        CoachResponse {
            text,
            intent,
            sentiment,
            action,
        }
    }

    /// Append a suffix unless it would push the reply past the length cap.
    fn append_if_fits(&self, text: &mut String, suffix: &str) {
        if text.chars().count() + suffix.chars().count() <= self.max_response_len {
            text.push_str(suffix);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SENTIMENTS: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    #[test]
    fn total_over_every_pair() {
        let generator = ResponseGenerator::with_seed(7);

        for intent in Intent::ALL {
            for sentiment in SENTIMENTS {
                let response = generator.generate(intent, sentiment, None);
                assert!(!response.text.is_empty(), "empty text for ({intent}, {sentiment})");
                assert_eq!(response.intent, intent);
                assert_eq!(response.sentiment, sentiment);
            }
        }
    }

    #[test]
    fn action_fields_are_paired() {
        let generator = ResponseGenerator::with_seed(7);

        for intent in Intent::ALL {
            let response = generator.generate(intent, Sentiment::Neutral, None);
            match intent {
                Intent::General => assert!(response.action.is_none()),
                _ => {
                    let action = response.action.expect("specific intents carry an action");
                    assert_eq!(Some(action.deep_link.as_str()), intent.deep_link());
                    assert_eq!(Some(action.label.as_str()), intent.action_label());
                }
            }
        }
    }

    #[test]
    fn text_is_drawn_from_the_registered_pool() {
        let generator = ResponseGenerator::with_seed(99);
        let pool = variants(Intent::Stress, Sentiment::Negative);

        for _ in 0..40 {
            let response = generator.generate(Intent::Stress, Sentiment::Negative, None);
            let from_pool = pool.iter().any(|v| response.text.starts_with(v));
            let from_openings = GENERIC_OPENINGS.iter().any(|v| response.text.starts_with(v));
            assert!(from_pool || from_openings, "unexpected text: {}", response.text);
        }
    }

    #[test]
    fn missing_combination_uses_generic_opening_with_quote() {
        let generator = ResponseGenerator::with_seed(3);

        for _ in 0..10 {
            let response = generator.generate(Intent::General, Sentiment::Positive, None);
            assert!(GENERIC_OPENINGS.iter().any(|v| response.text.starts_with(v)));
            assert!(
                QUOTES.iter().any(|q| response.text.contains(q)),
                "fallback replies always carry a quote"
            );
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let a = ResponseGenerator::with_seed(42);
        let b = ResponseGenerator::with_seed(42);

        for _ in 0..10 {
            let ra = a.generate(Intent::Sleep, Sentiment::Negative, None);
            let rb = b.generate(Intent::Sleep, Sentiment::Negative, None);
            assert_eq!(ra.text, rb.text);
        }
    }

    #[test]
    fn streak_suffix_is_appended() {
        let generator = ResponseGenerator::with_seed(1);
        let stats = UsageStats {
            current_streak: 5,
            ..UsageStats::default()
        };

        let response = generator.generate(Intent::Meditation, Sentiment::Neutral, Some(&stats));
        assert!(response.text.contains("Day 5 of your streak"));
    }

    #[test]
    fn milestone_fires_only_near_round_numbers() {
        let generator = ResponseGenerator::with_seed(1);

        let near = UsageStats {
            total_minutes: 305,
            ..UsageStats::default()
        };
        let response = generator.generate(Intent::Progress, Sentiment::Positive, Some(&near));
        assert!(response.text.contains("300 mindful minutes"));

        for minutes in [299, 350, 77] {
            let stats = UsageStats {
                total_minutes: minutes,
                ..UsageStats::default()
            };
            let response = generator.generate(Intent::Progress, Sentiment::Positive, Some(&stats));
            assert!(
                !response.text.contains("mindful minutes in total"),
                "milestone fired for {minutes} minutes"
            );
        }
    }

    #[test]
    fn suffix_respects_the_length_cap() {
        let config = CoachConfig {
            max_response_len: 80,
            ..CoachConfig::default()
        };
        let generator = ResponseGenerator::seeded_from_config(&config, 1);
        let stats = UsageStats {
            current_streak: 3,
            ..UsageStats::default()
        };

        // Every authored Stress/Negative variant is already longer than the
        // cap, so the suffix must be skipped.
        let response = generator.generate(Intent::Stress, Sentiment::Negative, Some(&stats));
        assert!(!response.text.contains("streak"));
    }
}
