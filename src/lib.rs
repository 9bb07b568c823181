//! Local, time-bounded cache for a feed of images.
//!
//! [`LocalFeedLoader`](domain::feed_cache::LocalFeedLoader) saves, loads and
//! validates the cached feed through an abstract
//! [`FeedStore`](domain::feed_cache::FeedStore), serving cached items only
//! while they are younger than the retention window.

pub mod domain;
pub mod error;
pub mod infrastructure;
