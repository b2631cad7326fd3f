//! Bounded log, debounced persistence and failure degradation.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::brain::{Intent, Sentiment};
use crate::error::CoachError;
use crate::models::CoachResponse;
use crate::store::{ConversationStoreHandle, KvStore, MemoryKvStore, CONVERSATION_KEY};

const MAX_HISTORY: usize = 50;

fn coach_response(text: &str) -> CoachResponse {
    CoachResponse {
        text: text.to_string(),
        intent: Intent::Breathing,
        sentiment: Sentiment::Neutral,
        action: None,
    }
}

async fn fresh_handle(kv: Arc<dyn KvStore>) -> ConversationStoreHandle {
    ConversationStoreHandle::new(kv, MAX_HISTORY, Duration::from_millis(20)).await
}

/// Counts writes so debounce collapsing is observable.
struct CountingKvStore {
    inner: MemoryKvStore,
    sets: AtomicUsize,
}

impl CountingKvStore {
    fn new() -> Self {
        Self {
            inner: MemoryKvStore::new(),
            sets: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl KvStore for CountingKvStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CoachError> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<(), CoachError> {
        self.sets.fetch_add(1, Ordering::SeqCst);
        self.inner.set(key, value).await
    }

    async fn delete(&self, key: &str) -> Result<(), CoachError> {
        self.inner.delete(key).await
    }
}

/// Rejects every write; reads behave normally.
struct FailingKvStore;

#[async_trait]
impl KvStore for FailingKvStore {
    async fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, CoachError> {
        Ok(None)
    }

    async fn set(&self, _key: &str, _value: &[u8]) -> Result<(), CoachError> {
        Err(CoachError::Actor("injected storage failure".to_string()))
    }

    async fn delete(&self, _key: &str) -> Result<(), CoachError> {
        Ok(())
    }
}

#[tokio::test]
async fn log_is_capped_with_oldest_removed_first() {
    let kv: Arc<dyn KvStore> = Arc::new(MemoryKvStore::new());
    let store = fresh_handle(kv).await;

    for i in 0..60 {
        let appended = store.append_user(format!("msg {i}")).await.unwrap();
        assert!(appended.is_some());
    }

    assert_eq!(store.len().await.unwrap(), MAX_HISTORY);

    let messages = store.messages().await.unwrap();
    assert_eq!(messages.len(), MAX_HISTORY);
    // The survivors are the most recent 50, starting at the 11th append.
    assert_eq!(messages[0].text, "msg 10");
    assert_eq!(messages[MAX_HISTORY - 1].text, "msg 59");
    // Chronological order is preserved.
    for pair in messages.windows(2) {
        assert!(pair[0].timestamp <= pair[1].timestamp);
    }
}

#[tokio::test]
async fn empty_user_text_is_a_noop() {
    let kv: Arc<dyn KvStore> = Arc::new(MemoryKvStore::new());
    let store = fresh_handle(kv).await;

    assert!(store.append_user("").await.unwrap().is_none());
    assert!(store.append_user("   \n\t").await.unwrap().is_none());
    assert_eq!(store.len().await.unwrap(), 0);
}

#[tokio::test]
async fn log_round_trips_through_the_blob_store() {
    let kv: Arc<dyn KvStore> = Arc::new(MemoryKvStore::new());

    let store = fresh_handle(kv.clone()).await;
    let user = store.append_user("nefes almak istiyorum").await.unwrap().unwrap();
    let coach = store.append_coach(coach_response("Four counts in, six out.")).await.unwrap();
    store.flush().await.unwrap();
    drop(store);

    let reloaded = fresh_handle(kv).await;
    let messages = reloaded.messages().await.unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].id, user.id);
    assert!(messages[0].is_from_user);
    assert_eq!(messages[1].id, coach.id);
    assert_eq!(messages[1].intent, Some(Intent::Breathing));
    assert_eq!(messages[1].timestamp, coach.timestamp);
}

#[tokio::test]
async fn clear_empties_memory_and_deletes_the_blob() {
    let kv: Arc<dyn KvStore> = Arc::new(MemoryKvStore::new());

    let store = fresh_handle(kv.clone()).await;
    store.append_user("merhaba").await.unwrap();
    store.flush().await.unwrap();
    assert!(kv.get(CONVERSATION_KEY).await.unwrap().is_some());

    store.clear().await.unwrap();
    assert_eq!(store.len().await.unwrap(), 0);
    assert!(kv.get(CONVERSATION_KEY).await.unwrap().is_none());

    let reloaded = fresh_handle(kv).await;
    assert_eq!(reloaded.len().await.unwrap(), 0);
}

#[tokio::test]
async fn corrupted_blob_loads_as_empty_history() {
    let kv: Arc<dyn KvStore> = Arc::new(MemoryKvStore::new());
    kv.set(CONVERSATION_KEY, b"{ definitely not json").await.unwrap();

    let store = fresh_handle(kv).await;
    assert_eq!(store.len().await.unwrap(), 0);

    // And the store remains usable afterwards.
    store.append_user("hala buradayım").await.unwrap();
    assert_eq!(store.len().await.unwrap(), 1);
}

#[tokio::test]
async fn burst_of_appends_collapses_to_one_write() {
    let kv = Arc::new(CountingKvStore::new());
    let store = ConversationStoreHandle::new(kv.clone(), MAX_HISTORY, Duration::from_millis(100)).await;

    for i in 0..5 {
        store.append_user(format!("burst {i}")).await.unwrap();
    }

    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(kv.sets.load(Ordering::SeqCst), 1);

    // A later mutation schedules a fresh write.
    store.append_user("after the burst").await.unwrap();
    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(kv.sets.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn storage_failures_never_reach_the_caller() {
    let kv: Arc<dyn KvStore> = Arc::new(FailingKvStore);
    let store = ConversationStoreHandle::new(kv, MAX_HISTORY, Duration::from_millis(10)).await;

    store.append_user("this will not persist").await.unwrap();
    tokio::time::sleep(Duration::from_millis(80)).await;

    // The debounced write failed silently; the log is intact and live.
    assert_eq!(store.len().await.unwrap(), 1);
    store.append_user("still appending").await.unwrap();
    assert_eq!(store.len().await.unwrap(), 2);

    // An explicit flush does report the failure.
    assert!(store.flush().await.is_err());
}
