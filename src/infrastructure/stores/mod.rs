pub mod in_memory_feed_store;

pub use in_memory_feed_store::InMemoryFeedStore;
