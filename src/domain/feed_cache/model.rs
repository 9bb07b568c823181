use crate::domain::feed::FeedImage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

/// Persisted shape of a feed item.
///
/// Mirrors [`FeedImage`] field for field but is owned by the cache, so stores
/// can evolve their format without touching the public model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalFeedImage {
    pub id: Uuid,
    pub description: Option<String>,
    pub location: Option<String>,
    pub url: Url,
}

/// The single snapshot a store holds: the feed as of `timestamp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedFeed {
    pub feed: Vec<LocalFeedImage>,
    pub timestamp: DateTime<Utc>,
}

impl CachedFeed {
    pub fn new(feed: Vec<LocalFeedImage>, timestamp: DateTime<Utc>) -> Self {
        Self { feed, timestamp }
    }
}

impl From<FeedImage> for LocalFeedImage {
    fn from(image: FeedImage) -> Self {
        Self {
            id: image.id,
            description: image.description,
            location: image.location,
            url: image.url,
        }
    }
}

impl From<LocalFeedImage> for FeedImage {
    fn from(local: LocalFeedImage) -> Self {
        Self {
            id: local.id,
            description: local.description,
            location: local.location,
            url: local.url,
        }
    }
}

pub fn to_local(feed: Vec<FeedImage>) -> Vec<LocalFeedImage> {
    feed.into_iter().map(LocalFeedImage::from).collect()
}

pub fn to_models(feed: Vec<LocalFeedImage>) -> Vec<FeedImage> {
    feed.into_iter().map(FeedImage::from).collect()
}
