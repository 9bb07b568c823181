pub mod model;
pub mod policy;
pub mod service;
pub mod store;

pub use model::{to_local, to_models, CachedFeed, LocalFeedImage};
pub use policy::FeedCachePolicy;
pub use service::LocalFeedLoader;
pub use store::{DeletionResult, FeedStore, InsertionResult, RetrievalResult};

use crate::domain::feed::FeedImage;
use crate::error::StoreError;
use async_trait::async_trait;

pub type SaveResult = Result<(), StoreError>;

/// Anything able to persist a feed for later offline use.
#[async_trait]
pub trait FeedCache: Send + Sync {
    async fn save(&self, feed: Vec<FeedImage>) -> SaveResult;
}
