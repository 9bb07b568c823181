pub mod loader;
pub mod model;

pub use loader::{FeedLoader, LoadResult};
pub use model::FeedImage;
