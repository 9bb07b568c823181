pub mod feed;
pub mod feed_cache;
