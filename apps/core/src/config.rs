//! Tunable knobs for the coach pipeline, validated at session construction.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use validator::Validate;

/// Configuration for a coach session.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CoachConfig {
    /// Maximum number of messages kept in the conversation log.
    #[validate(range(min = 1, max = 1000))]
    pub max_history: u32,
    /// Quiet period before a mutated log is persisted.
    #[validate(range(min = 0, max = 60_000))]
    pub debounce_ms: u64,
    /// Artificial minimum latency before a reply is delivered, so the coach
    /// does not answer instantaneously.
    #[validate(range(min = 0, max = 10_000))]
    pub min_reply_delay_ms: u64,
    /// Character cap a personalization suffix may not push a reply past.
    #[validate(range(min = 80, max = 4000))]
    pub max_response_len: u32,
    /// Probability of appending a quote to a non-fallback reply.
    #[validate(range(min = 0.0, max = 1.0))]
    pub quote_probability: f64,
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            max_history: 50,
            debounce_ms: 400,
            min_reply_delay_ms: 600,
            max_response_len: 600,
            quote_probability: 0.5,
        }
    }
}

impl CoachConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn min_reply_delay(&self) -> Duration {
        Duration::from_millis(self.min_reply_delay_ms)
    }
}
