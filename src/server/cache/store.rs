//! Backend capability shared by every cache implementation.

use async_trait::async_trait;

use crate::server::error::cache::CacheError;

/// Raw key-value storage used by the typed caches.
///
/// Implementations return `Ok(None)` on a miss and reserve `Err` for backend failures.
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError>;

    /// Overwrites any existing value under `key`.
    async fn set(&self, key: &str, value: Vec<u8>) -> Result<(), CacheError>;

    async fn delete(&self, key: &str) -> Result<(), CacheError>;

    /// Deletes every key starting with `prefix`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of keys removed
    /// - `Err(CacheError)` - Backend failure
    async fn delete_prefix(&self, prefix: &str) -> Result<u64, CacheError>;
}

/// Backend used when caching is disabled. Always misses and discards writes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCache;

#[async_trait]
impl CacheStore for NoopCache {
    async fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        Ok(None)
    }

    async fn set(&self, _key: &str, _value: Vec<u8>) -> Result<(), CacheError> {
        Ok(())
    }

    async fn delete(&self, _key: &str) -> Result<(), CacheError> {
        Ok(())
    }

    async fn delete_prefix(&self, _prefix: &str) -> Result<u64, CacheError> {
        Ok(0)
    }
}
