/// Failure reported by a feed store, forwarded verbatim by the cache loader.
///
/// Stores pick the variant matching the operation that failed; the payload is
/// an opaque description coming from the storage backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("cache deletion failed: {0}")]
    Deletion(String),

    #[error("cache insertion failed: {0}")]
    Insertion(String),

    #[error("cache retrieval failed: {0}")]
    Retrieval(String),

    /// The operation ended without delivering a result to its caller.
    #[error("cache operation abandoned before completion")]
    Abandoned,
}

/// Invalid or missing configuration values.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },

    #[error("{name} must be a positive number of days")]
    NonPositiveDays { name: &'static str },
}
