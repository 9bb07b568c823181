use super::model::{to_local, to_models, CachedFeed};
use super::policy::FeedCachePolicy;
use super::store::FeedStore;
use super::{FeedCache, SaveResult};
use crate::domain::feed::{FeedImage, FeedLoader, LoadResult};
use crate::error::StoreError;
use async_trait::async_trait;
use chrono::{DateTime, Local, TimeZone, Utc};
use std::sync::Arc;
use tokio::sync::oneshot;

type CurrentDate = Box<dyn Fn() -> DateTime<Utc> + Send + Sync>;
type FreshnessCheck = Box<dyn Fn(&DateTime<Utc>, &DateTime<Utc>) -> bool + Send + Sync>;

/// Cache use cases on top of a [`FeedStore`]: save, load and validate.
///
/// Every operation is spawned on the current Tokio runtime and reports back
/// through its completion. Pending operations only hold a weak reference to
/// the loader: once the loader is dropped, store calls already in flight still
/// finish, but no completion is invoked and no follow-up store call is issued.
///
/// Cache age is counted in calendar days of the loader's calendar zone, the
/// local time zone unless [`LocalFeedLoader::with_calendar`] says otherwise.
pub struct LocalFeedLoader {
    state: Arc<LoaderState>,
}

struct LoaderState {
    store: Arc<dyn FeedStore>,
    current_date: CurrentDate,
    policy: FeedCachePolicy,
    is_within_max_age: FreshnessCheck,
}

impl LoaderState {
    fn is_fresh(&self, cache: &CachedFeed) -> bool {
        (self.is_within_max_age)(&cache.timestamp, &(self.current_date)())
    }
}

impl LocalFeedLoader {
    pub fn new<F>(store: Arc<dyn FeedStore>, current_date: F) -> Self
    where
        F: Fn() -> DateTime<Utc> + Send + Sync + 'static,
    {
        Self::with_policy(store, current_date, FeedCachePolicy::default())
    }

    pub fn with_policy<F>(store: Arc<dyn FeedStore>, current_date: F, policy: FeedCachePolicy) -> Self
    where
        F: Fn() -> DateTime<Utc> + Send + Sync + 'static,
    {
        Self::with_calendar(store, current_date, policy, Local)
    }

    /// Builds a loader that evaluates `policy` in the `calendar` time zone.
    pub fn with_calendar<F, Tz>(
        store: Arc<dyn FeedStore>,
        current_date: F,
        policy: FeedCachePolicy,
        calendar: Tz,
    ) -> Self
    where
        F: Fn() -> DateTime<Utc> + Send + Sync + 'static,
        Tz: TimeZone + Send + Sync + 'static,
    {
        let is_within_max_age = move |timestamp: &DateTime<Utc>, now: &DateTime<Utc>| {
            policy.validate(
                &timestamp.with_timezone(&calendar),
                &now.with_timezone(&calendar),
            )
        };

        Self {
            state: Arc::new(LoaderState {
                store,
                current_date: Box::new(current_date),
                policy,
                is_within_max_age: Box::new(is_within_max_age),
            }),
        }
    }

    pub fn policy(&self) -> FeedCachePolicy {
        self.state.policy
    }

    /// Replaces the cached feed: deletes the current snapshot, then inserts
    /// `feed` stamped with the current date.
    ///
    /// A deletion failure is reported as is and no insertion is attempted.
    /// Otherwise the insertion outcome is reported, so a failed insertion
    /// leaves the cache empty.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    pub fn save<C>(&self, feed: Vec<FeedImage>, completion: C)
    where
        C: FnOnce(SaveResult) + Send + 'static,
    {
        let store = Arc::clone(&self.state.store);
        let state = Arc::downgrade(&self.state);

        tokio::spawn(async move {
            let deletion = store.delete_cached_feed().await;

            let timestamp = {
                let Some(loader) = state.upgrade() else {
                    tracing::debug!("Feed loader dropped during cache deletion, discarding save");
                    return;
                };

                if let Err(error) = deletion {
                    tracing::warn!(error = %error, "Cache deletion failed, skipping insertion");
                    completion(Err(error));
                    return;
                }

                (loader.current_date)()
            };

            tracing::debug!(items = feed.len(), timestamp = %timestamp, "Inserting feed into cache");
            let insertion = store.insert(to_local(feed), timestamp).await;

            let Some(_loader) = state.upgrade() else {
                tracing::debug!("Feed loader dropped during cache insertion, discarding result");
                return;
            };

            if let Err(error) = &insertion {
                tracing::warn!(error = %error, "Cache insertion failed");
            }
            completion(insertion);
        });
    }

    /// Reads the cached feed.
    ///
    /// Reports the stored items in order when the snapshot is fresh, an empty
    /// feed when there is no snapshot or it is stale, and the store error when
    /// retrieval fails. Never modifies the store.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    pub fn load<C>(&self, completion: C)
    where
        C: FnOnce(LoadResult) + Send + 'static,
    {
        let store = Arc::clone(&self.state.store);
        let state = Arc::downgrade(&self.state);

        tokio::spawn(async move {
            let retrieval = store.retrieve().await;

            let result = {
                let Some(loader) = state.upgrade() else {
                    tracing::debug!("Feed loader dropped during cache retrieval, discarding load");
                    return;
                };

                match retrieval {
                    Err(error) => {
                        tracing::warn!(error = %error, "Cache retrieval failed");
                        Err(error)
                    }
                    Ok(Some(cache)) if loader.is_fresh(&cache) => {
                        tracing::debug!(items = cache.feed.len(), "Serving fresh cached feed");
                        Ok(to_models(cache.feed))
                    }
                    Ok(Some(cache)) => {
                        tracing::debug!(timestamp = %cache.timestamp, "Cached feed is stale");
                        Ok(Vec::new())
                    }
                    Ok(None) => Ok(Vec::new()),
                }
            };

            completion(result);
        });
    }

    /// Deletes the cached feed when it is stale or unreadable.
    ///
    /// Nothing is reported back; the outcome of the deletion is only logged.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    pub fn validate_cache(&self) {
        let store = Arc::clone(&self.state.store);
        let state = Arc::downgrade(&self.state);

        tokio::spawn(async move {
            let retrieval = store.retrieve().await;

            let should_delete = {
                let Some(loader) = state.upgrade() else {
                    tracing::debug!("Feed loader dropped during cache retrieval, skipping validation");
                    return;
                };

                match &retrieval {
                    Err(error) => {
                        tracing::warn!(error = %error, "Cached feed unreadable, deleting it");
                        true
                    }
                    Ok(Some(cache)) if !loader.is_fresh(cache) => {
                        tracing::info!(timestamp = %cache.timestamp, "Cached feed expired, deleting it");
                        true
                    }
                    Ok(_) => false,
                }
            };

            if should_delete {
                if let Err(error) = store.delete_cached_feed().await {
                    tracing::warn!(error = %error, "Cache deletion during validation failed");
                }
            }
        });
    }
}

#[async_trait]
impl FeedLoader for LocalFeedLoader {
    async fn load(&self) -> LoadResult {
        let (sender, receiver) = oneshot::channel();
        LocalFeedLoader::load(self, move |result| {
            let _ = sender.send(result);
        });
        receiver.await.unwrap_or(Err(StoreError::Abandoned))
    }
}

#[async_trait]
impl FeedCache for LocalFeedLoader {
    async fn save(&self, feed: Vec<FeedImage>) -> SaveResult {
        let (sender, receiver) = oneshot::channel();
        LocalFeedLoader::save(self, feed, move |result| {
            let _ = sender.send(result);
        });
        receiver.await.unwrap_or(Err(StoreError::Abandoned))
    }
}
