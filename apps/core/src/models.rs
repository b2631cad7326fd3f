use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::brain::{Intent, Sentiment};

/// Read-only snapshot of aggregate usage, supplied by the host application.
/// The coach pipeline never mutates these.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageStats {
    /// Total mindful minutes accumulated
    pub total_minutes: u32,
    /// Total completed sessions
    pub total_sessions: u32,
    /// Current consecutive-day streak
    pub current_streak: u32,
    /// Longest streak ever reached
    pub longest_streak: u32,
}

/// Follow-up action attached to a coach reply. The deep link is an opaque
/// identifier resolved by the host application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoachAction {
    pub label: String,
    pub deep_link: String,
}

/// A generated coach reply. `action` bundles label and deep link so they
/// are present or absent together.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoachResponse {
    pub text: String,
    pub intent: Intent,
    pub sentiment: Sentiment,
    pub action: Option<CoachAction>,
}

/// A single conversation turn. Created once, immutable thereafter;
/// identity is the UUID.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub text: String,
    pub is_from_user: bool,
    pub timestamp: DateTime<Utc>,
    /// Intent the reply was generated for; `None` on user turns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,
}

impl Message {
    /// Build a user turn.
    pub(crate) fn user(text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            is_from_user: true,
            timestamp: Utc::now(),
            intent: None,
        }
    }

    /// Build a coach turn carrying the intent it answered.
    pub(crate) fn coach(text: String, intent: Intent) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            is_from_user: false,
            timestamp: Utc::now(),
            intent: Some(intent),
        }
    }
}
