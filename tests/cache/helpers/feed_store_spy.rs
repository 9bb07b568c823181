use async_trait::async_trait;
use chrono::{DateTime, Utc};
use feed_cache::domain::feed_cache::{
    CachedFeed, DeletionResult, FeedStore, InsertionResult, LocalFeedImage, RetrievalResult,
};
use feed_cache::error::StoreError;
use parking_lot::Mutex;
use tokio::sync::oneshot;

#[derive(Debug, Clone, PartialEq)]
pub enum ReceivedMessage {
    DeleteCachedFeed,
    Insert(Vec<LocalFeedImage>, DateTime<Utc>),
    Retrieve,
}

/// Store double recording every call and holding it open until completed.
#[derive(Default)]
pub struct FeedStoreSpy {
    received_messages: Mutex<Vec<ReceivedMessage>>,
    deletion_completions: Mutex<Vec<Option<oneshot::Sender<DeletionResult>>>>,
    insertion_completions: Mutex<Vec<Option<oneshot::Sender<InsertionResult>>>>,
    retrieval_completions: Mutex<Vec<Option<oneshot::Sender<RetrievalResult>>>>,
}

impl FeedStoreSpy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn received_messages(&self) -> Vec<ReceivedMessage> {
        self.received_messages.lock().clone()
    }

    pub fn complete_deletion(&self, error: StoreError, index: usize) {
        Self::complete(&self.deletion_completions, Err(error), index);
    }

    pub fn complete_deletion_successfully(&self, index: usize) {
        Self::complete(&self.deletion_completions, Ok(()), index);
    }

    pub fn complete_insertion(&self, error: StoreError, index: usize) {
        Self::complete(&self.insertion_completions, Err(error), index);
    }

    pub fn complete_insertion_successfully(&self, index: usize) {
        Self::complete(&self.insertion_completions, Ok(()), index);
    }

    pub fn complete_retrieval(&self, error: StoreError, index: usize) {
        Self::complete(&self.retrieval_completions, Err(error), index);
    }

    pub fn complete_retrieval_with_empty_cache(&self, index: usize) {
        Self::complete(&self.retrieval_completions, Ok(None), index);
    }

    pub fn complete_retrieval_with(
        &self,
        feed: Vec<LocalFeedImage>,
        timestamp: DateTime<Utc>,
        index: usize,
    ) {
        Self::complete(
            &self.retrieval_completions,
            Ok(Some(CachedFeed::new(feed, timestamp))),
            index,
        );
    }

    fn complete<T>(completions: &Mutex<Vec<Option<oneshot::Sender<T>>>>, result: T, index: usize) {
        let sender = completions
            .lock()
            .get_mut(index)
            .and_then(Option::take)
            .unwrap_or_else(|| panic!("no pending store call at index {index}"));
        let _ = sender.send(result);
    }

    fn register<T>(completions: &Mutex<Vec<Option<oneshot::Sender<T>>>>) -> oneshot::Receiver<T> {
        let (sender, receiver) = oneshot::channel();
        completions.lock().push(Some(sender));
        receiver
    }
}

#[async_trait]
impl FeedStore for FeedStoreSpy {
    async fn delete_cached_feed(&self) -> DeletionResult {
        self.received_messages
            .lock()
            .push(ReceivedMessage::DeleteCachedFeed);
        let receiver = Self::register(&self.deletion_completions);
        receiver.await.unwrap_or(Err(StoreError::Abandoned))
    }

    async fn insert(&self, feed: Vec<LocalFeedImage>, timestamp: DateTime<Utc>) -> InsertionResult {
        self.received_messages
            .lock()
            .push(ReceivedMessage::Insert(feed, timestamp));
        let receiver = Self::register(&self.insertion_completions);
        receiver.await.unwrap_or(Err(StoreError::Abandoned))
    }

    async fn retrieve(&self) -> RetrievalResult {
        self.received_messages.lock().push(ReceivedMessage::Retrieve);
        let receiver = Self::register(&self.retrieval_completions);
        receiver.await.unwrap_or(Err(StoreError::Abandoned))
    }
}
