use thiserror::Error;

/// Cache backend failures.
///
/// A missing key is never an error; it is reported as `Ok(None)` by the cache.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Redis connection pool couldn't be created from the configured URL.
    #[error("Failed to create cache connection pool: {0}")]
    CreatePool(#[from] deadpool_redis::CreatePoolError),

    /// No connection could be checked out of the pool.
    #[error("Failed to get cache connection: {0}")]
    Pool(#[from] deadpool_redis::PoolError),

    /// Redis rejected or failed a command.
    #[error("Cache command failed: {0}")]
    Redis(#[from] redis::RedisError),

    /// Cached bytes couldn't be encoded or decoded as JSON.
    #[error("Failed to (de)serialize cached value: {0}")]
    Serialization(#[from] serde_json::Error),
}
