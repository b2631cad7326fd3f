use tokio::sync::oneshot;

use crate::error::CoachError;
use crate::models::{CoachResponse, Message};

/// Messages that can be sent to the conversation store actor.
///
/// Every mutation and every read travels through this channel, so the log
/// is only ever touched from the actor's own task.
#[derive(Debug)]
pub enum StoreMessage {
    /// Append a user turn. Empty (after trimming) text is rejected and the
    /// responder receives `None`.
    AppendUser {
        text: String,
        responder: oneshot::Sender<Option<Message>>,
    },
    /// Append a coach turn built from a generated response.
    AppendCoach {
        response: CoachResponse,
        responder: oneshot::Sender<Message>,
    },
    /// A snapshot of the current log, oldest first.
    Snapshot {
        responder: oneshot::Sender<Vec<Message>>,
    },
    /// Current number of messages in the log.
    Len {
        responder: oneshot::Sender<usize>,
    },
    /// Empty the log and delete the persisted blob.
    Clear {
        responder: oneshot::Sender<Result<(), CoachError>>,
    },
    /// Persist immediately, bypassing the debounce window.
    Flush {
        responder: oneshot::Sender<Result<(), CoachError>>,
    },
}
