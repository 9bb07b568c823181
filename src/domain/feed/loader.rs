use super::model::FeedImage;
use crate::error::StoreError;
use async_trait::async_trait;

pub type LoadResult = Result<Vec<FeedImage>, StoreError>;

/// Anything able to produce the current feed.
///
/// Implemented by the local cache and by remote loaders alike, so callers can
/// compose them without knowing where the items come from.
#[async_trait]
pub trait FeedLoader: Send + Sync {
    async fn load(&self) -> LoadResult;
}
