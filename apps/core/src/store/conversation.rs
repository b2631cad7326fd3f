//! The conversation store actor.
//!
//! Owns the ordered, size-bounded message log. All mutations and the
//! persistence trigger run on the actor task, so concurrent callers queue
//! on the channel instead of racing. Persistence is debounced: every
//! mutation re-arms a single deadline, and only when the log has been
//! quiet for the configured window is it serialized to the blob store.
//! Persistence failures are logged and swallowed; the in-memory log stays
//! authoritative.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::time::{sleep_until, Instant};
use tracing::{debug, info, warn};

use super::kv::KvStore;
use super::messages::StoreMessage;
use crate::error::CoachError;
use crate::models::{CoachResponse, Message};

/// Fixed key the serialized message array lives under.
pub const CONVERSATION_KEY: &str = "coach.conversation.v1";

/// A handle to the conversation store actor.
///
/// Cloneable and cheap; all clones talk to the same log. When the last
/// handle is dropped the actor persists any pending changes and stops.
#[derive(Clone)]
pub struct ConversationStoreHandle {
    sender: mpsc::Sender<StoreMessage>,
}

impl ConversationStoreHandle {
    /// Spawns the store actor, first rehydrating the log from `kv`.
    ///
    /// Any load failure (missing key, corrupt blob) yields an empty log and
    /// is never surfaced to the caller.
    pub async fn new(kv: Arc<dyn KvStore>, max_history: usize, debounce: Duration) -> Self {
        let log = load_log(kv.as_ref()).await;

        let (sender, receiver) = mpsc::channel(32);
        let runner = StoreRunner {
            receiver,
            kv,
            log,
            max_history,
            debounce,
            deadline: None,
        };
        tokio::spawn(async move { runner.run().await });

        Self { sender }
    }

    /// Appends a user turn. Returns `None` without touching the log when
    /// the trimmed text is empty.
    pub async fn append_user(&self, text: impl Into<String>) -> Result<Option<Message>, CoachError> {
        let (send, recv) = oneshot::channel();
        self.send(StoreMessage::AppendUser {
            text: text.into(),
            responder: send,
        })
        .await?;
        recv.await.map_err(|e| CoachError::Actor(e.to_string()))
    }

    /// Appends a coach turn. Always succeeds once the message is delivered.
    pub async fn append_coach(&self, response: CoachResponse) -> Result<Message, CoachError> {
        let (send, recv) = oneshot::channel();
        self.send(StoreMessage::AppendCoach {
            response,
            responder: send,
        })
        .await?;
        recv.await.map_err(|e| CoachError::Actor(e.to_string()))
    }

    /// Snapshot of the log, oldest first.
    pub async fn messages(&self) -> Result<Vec<Message>, CoachError> {
        let (send, recv) = oneshot::channel();
        self.send(StoreMessage::Snapshot { responder: send }).await?;
        recv.await.map_err(|e| CoachError::Actor(e.to_string()))
    }

    /// Current log length.
    pub async fn len(&self) -> Result<usize, CoachError> {
        let (send, recv) = oneshot::channel();
        self.send(StoreMessage::Len { responder: send }).await?;
        recv.await.map_err(|e| CoachError::Actor(e.to_string()))
    }

    /// Empties the log and deletes the persisted blob.
    pub async fn clear(&self) -> Result<(), CoachError> {
        let (send, recv) = oneshot::channel();
        self.send(StoreMessage::Clear { responder: send }).await?;
        recv.await.map_err(|e| CoachError::Actor(e.to_string()))?
    }

    /// Persists immediately instead of waiting out the debounce window.
    pub async fn flush(&self) -> Result<(), CoachError> {
        let (send, recv) = oneshot::channel();
        self.send(StoreMessage::Flush { responder: send }).await?;
        recv.await.map_err(|e| CoachError::Actor(e.to_string()))?
    }

    async fn send(&self, msg: StoreMessage) -> Result<(), CoachError> {
        self.sender
            .send(msg)
            .await
            .map_err(|e| CoachError::Actor(e.to_string()))
    }
}

/// Rehydrate the log from the blob store; degrade to empty on any failure.
async fn load_log(kv: &dyn KvStore) -> Vec<Message> {
    match kv.get(CONVERSATION_KEY).await {
        Ok(Some(bytes)) => match serde_json::from_slice::<Vec<Message>>(&bytes) {
            Ok(log) => log,
            Err(e) => {
                warn!("Discarding unreadable conversation blob: {}", e);
                Vec::new()
            }
        },
        Ok(None) => Vec::new(),
        Err(e) => {
            warn!("Failed to load conversation history: {}", e);
            Vec::new()
        }
    }
}

// --- Actor Runner ---
struct StoreRunner {
    receiver: mpsc::Receiver<StoreMessage>,
    kv: Arc<dyn KvStore>,
    log: Vec<Message>,
    max_history: usize,
    debounce: Duration,
    /// `Some` while a persist is pending; re-armed by every mutation.
    deadline: Option<Instant>,
}

impl StoreRunner {
    async fn run(mut self) {
        info!(messages = self.log.len(), "Conversation store started");

        loop {
            let deadline = self.deadline;
            tokio::select! {
                msg = self.receiver.recv() => match msg {
                    Some(msg) => self.handle_message(msg).await,
                    None => break,
                },
                _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                    self.deadline = None;
                    self.persist_quietly().await;
                }
            }
        }

        // Last handle gone: write out anything still pending.
        if self.deadline.is_some() {
            self.persist_quietly().await;
        }
        info!("Conversation store stopped");
    }

    async fn handle_message(&mut self, msg: StoreMessage) {
        match msg {
            StoreMessage::AppendUser { text, responder } => {
                let trimmed = text.trim();
                let appended = if trimmed.is_empty() {
                    None
                } else {
                    Some(self.append(Message::user(trimmed.to_string())))
                };
                let _ = responder.send(appended);
            }
            StoreMessage::AppendCoach {
                response,
                responder,
            } => {
                let message = self.append(Message::coach(response.text, response.intent));
                let _ = responder.send(message);
            }
            StoreMessage::Snapshot { responder } => {
                let _ = responder.send(self.log.clone());
            }
            StoreMessage::Len { responder } => {
                let _ = responder.send(self.log.len());
            }
            StoreMessage::Clear { responder } => {
                self.log.clear();
                self.deadline = None;
                let result = self.kv.delete(CONVERSATION_KEY).await;
                if let Err(ref e) = result {
                    warn!("Failed to delete persisted conversation: {}", e);
                }
                let _ = responder.send(result);
            }
            StoreMessage::Flush { responder } => {
                self.deadline = None;
                let _ = responder.send(self.persist().await);
            }
        }
    }

    /// Push a message, trim to capacity and re-arm the debounce deadline.
    fn append(&mut self, message: Message) -> Message {
        self.log.push(message.clone());
        self.trim_to_capacity();
        self.deadline = Some(Instant::now() + self.debounce);
        message
    }

    /// Drop oldest entries until the log fits the configured capacity.
    fn trim_to_capacity(&mut self) {
        while self.log.len() > self.max_history {
            self.log.remove(0);
        }
    }

    async fn persist(&self) -> Result<(), CoachError> {
        let bytes = serde_json::to_vec(&self.log)?;
        self.kv.set(CONVERSATION_KEY, &bytes).await?;
        debug!(messages = self.log.len(), "Conversation persisted");
        Ok(())
    }

    /// Debounced persistence is fire-and-forget: failures are logged, the
    /// in-memory log stays valid either way.
    async fn persist_quietly(&self) {
        if let Err(e) = self.persist().await {
            warn!("Failed to persist conversation: {}", e);
        }
    }
}
