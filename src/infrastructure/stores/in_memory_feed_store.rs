use crate::domain::feed_cache::{
    CachedFeed, DeletionResult, FeedStore, InsertionResult, LocalFeedImage, RetrievalResult,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

/// Process-local [`FeedStore`].
///
/// Every operation takes the same fair lock for its whole duration, so side
/// effects happen one at a time in the order the calls were issued.
#[derive(Default)]
pub struct InMemoryFeedStore {
    cache: Mutex<Option<CachedFeed>>,
}

impl InMemoryFeedStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cache(cache: CachedFeed) -> Self {
        Self {
            cache: Mutex::new(Some(cache)),
        }
    }
}

#[async_trait]
impl FeedStore for InMemoryFeedStore {
    async fn delete_cached_feed(&self) -> DeletionResult {
        let mut cache = self.cache.lock().await;
        if cache.take().is_some() {
            tracing::debug!("In-memory feed cache cleared");
        }
        Ok(())
    }

    async fn insert(&self, feed: Vec<LocalFeedImage>, timestamp: DateTime<Utc>) -> InsertionResult {
        let mut cache = self.cache.lock().await;
        tracing::debug!(items = feed.len(), timestamp = %timestamp, "In-memory feed cache replaced");
        *cache = Some(CachedFeed::new(feed, timestamp));
        Ok(())
    }

    async fn retrieve(&self) -> RetrievalResult {
        Ok(self.cache.lock().await.clone())
    }
}
