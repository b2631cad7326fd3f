//! The coach session: one conversation, one set of injected components.
//!
//! Classification, sentiment analysis and generation are pure and
//! synchronous; the session threads them together, keeps the log through
//! the store actor and inserts the artificial minimum reply delay. The
//! delay is cooperative: dropping the returned future before it completes
//! leaves the log with the user turn only, never a half-appended reply.

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};
use validator::Validate;

use crate::brain::{IntentClassifier, SentimentAnalyzer};
use crate::config::CoachConfig;
use crate::error::CoachError;
use crate::models::{CoachResponse, Message, UsageStats};
use crate::reply::ResponseGenerator;
use crate::store::{ConversationStoreHandle, KvStore};

/// Read-only access to aggregate usage statistics, supplied by the host.
pub trait UsageStatsProvider: Send + Sync {
    fn usage_stats(&self) -> UsageStats;
}

impl<F> UsageStatsProvider for F
where
    F: Fn() -> UsageStats + Send + Sync,
{
    fn usage_stats(&self) -> UsageStats {
        self()
    }
}

/// A single user's coaching conversation.
pub struct CoachSession {
    classifier: IntentClassifier,
    analyzer: SentimentAnalyzer,
    generator: ResponseGenerator,
    store: ConversationStoreHandle,
    stats: Arc<dyn UsageStatsProvider>,
    min_reply_delay: Duration,
}

impl CoachSession {
    /// Builds a session from explicitly injected components.
    pub fn new(
        classifier: IntentClassifier,
        analyzer: SentimentAnalyzer,
        generator: ResponseGenerator,
        store: ConversationStoreHandle,
        stats: Arc<dyn UsageStatsProvider>,
        config: &CoachConfig,
    ) -> Result<Self, CoachError> {
        config.validate()?;

        Ok(Self {
            classifier,
            analyzer,
            generator,
            store,
            stats,
            min_reply_delay: config.min_reply_delay(),
        })
    }

    /// Convenience constructor wiring default components over `kv`,
    /// rehydrating any persisted history.
    pub async fn bootstrap(
        kv: Arc<dyn KvStore>,
        stats: Arc<dyn UsageStatsProvider>,
        config: CoachConfig,
    ) -> Result<Self, CoachError> {
        config.validate()?;

        let store =
            ConversationStoreHandle::new(kv, config.max_history as usize, config.debounce()).await;

        let session = Self::new(
            IntentClassifier::new(),
            SentimentAnalyzer::new(),
            ResponseGenerator::from_config(&config),
            store,
            stats,
            &config,
        )?;
        info!("Coach session ready");
        Ok(session)
    }

    /// Processes one user utterance.
    ///
    /// Empty or whitespace-only input is ignored: nothing is appended and
    /// `Ok(None)` is returned. Otherwise both turns are appended and the
    /// generated reply is returned.
    pub async fn respond(&self, text: &str) -> Result<Option<CoachResponse>, CoachError> {
        let Some(user_message) = self.store.append_user(text).await? else {
            return Ok(None);
        };

        let classification = self.classifier.classify(&user_message.text);
        let sentiment = self.analyzer.analyze(&user_message.text);
        debug!(
            intent = %classification.intent,
            sentiment = %sentiment.sentiment,
            matched = classification.matched_keyword.as_deref().unwrap_or("-"),
            "Classified user message"
        );

        let stats = self.stats.usage_stats();
        let response =
            self.generator
                .generate(classification.intent, sentiment.sentiment, Some(&stats));

        // Delivered replies should not feel instantaneous. Cancellation
        // (dropping this future) stops here, before the coach turn exists.
        if !self.min_reply_delay.is_zero() {
            tokio::time::sleep(self.min_reply_delay).await;
        }

        self.store.append_coach(response.clone()).await?;
        Ok(Some(response))
    }

    /// The conversation so far, oldest first.
    pub async fn history(&self) -> Result<Vec<Message>, CoachError> {
        self.store.messages().await
    }

    /// Erases the conversation, in memory and in the blob store.
    pub async fn clear(&self) -> Result<(), CoachError> {
        self.store.clear().await
    }

    /// Forces pending changes out to the blob store.
    pub async fn flush(&self) -> Result<(), CoachError> {
        self.store.flush().await
    }
}
