//! # CalmCoach Core
//!
//! The conversational guidance engine behind CalmCoach: free-text user
//! input is classified into an intent and a sentiment, answered with a
//! personalized template-driven reply and an optional follow-up action,
//! and recorded in a bounded conversation log with debounced persistence.
//!
//! The host application supplies the collaborators: raw text, aggregate
//! [`models::UsageStats`] for personalization, and a [`store::KvStore`]
//! for the serialized history. Everything here degrades gracefully; no
//! interactive path returns an error to the end user.

pub mod brain;
pub mod config;
pub mod error;
pub mod models;
pub mod reply;
pub mod session;
pub mod store;

#[cfg(test)]
mod tests;

pub use brain::{
    ClassificationResult, Intent, IntentClassifier, Sentiment, SentimentAnalyzer, SentimentResult,
};
pub use config::CoachConfig;
pub use error::CoachError;
pub use models::{CoachAction, CoachResponse, Message, UsageStats};
pub use reply::ResponseGenerator;
pub use session::{CoachSession, UsageStatsProvider};
pub use store::{ConversationStoreHandle, KvStore, MemoryKvStore, SqliteKvStore};
