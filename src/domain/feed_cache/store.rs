use super::model::{CachedFeed, LocalFeedImage};
use crate::error::StoreError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

pub type DeletionResult = Result<(), StoreError>;
pub type InsertionResult = Result<(), StoreError>;
pub type RetrievalResult = Result<Option<CachedFeed>, StoreError>;

/// Persistence capability backing the feed cache.
///
/// A store holds at most one [`CachedFeed`]. Implementations must run the side
/// effects of calls issued against the same instance serially, in the order
/// they were issued; the cache loader relies on it and does not re-check.
#[async_trait]
pub trait FeedStore: Send + Sync {
    /// Removes the current snapshot. Succeeds on an empty store.
    async fn delete_cached_feed(&self) -> DeletionResult;

    /// Replaces the store contents with `feed` taken at `timestamp`.
    async fn insert(&self, feed: Vec<LocalFeedImage>, timestamp: DateTime<Utc>) -> InsertionResult;

    /// Returns the current snapshot, `None` when empty, or an error when the
    /// stored data cannot be read.
    async fn retrieve(&self) -> RetrievalResult;
}
