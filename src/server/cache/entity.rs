//! JSON-encoded caches keyed by prefix.

use std::{fmt::Display, marker::PhantomData, sync::Arc};

use serde::{de::DeserializeOwned, Serialize};

use crate::server::{cache::store::CacheStore, error::cache::CacheError};

/// Cache of values keyed as `{prefix}-{key}`.
pub struct EntityCache<K, V> {
    store: Arc<dyn CacheStore>,
    prefix: &'static str,
    _marker: PhantomData<fn(K) -> V>,
}

impl<K, V> Clone for EntityCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            prefix: self.prefix,
            _marker: PhantomData,
        }
    }
}

impl<K, V> EntityCache<K, V>
where
    K: Display,
    V: Serialize + DeserializeOwned,
{
    pub fn new(store: Arc<dyn CacheStore>, prefix: &'static str) -> Self {
        Self {
            store,
            prefix,
            _marker: PhantomData,
        }
    }

    pub fn key(&self, key: &K) -> String {
        format!("{}-{}", self.prefix, key)
    }

    /// Looks up a cached value.
    ///
    /// # Returns
    /// - `Ok(Some(V))` - Cache hit
    /// - `Ok(None)` - Cache miss
    /// - `Err(CacheError)` - Backend failure or an entry that no longer decodes
    pub async fn get(&self, key: &K) -> Result<Option<V>, CacheError> {
        let key = self.key(key);
        match self.store.get(&key).await? {
            Some(bytes) => {
                tracing::debug!(key = %key, "cache hit");
                Ok(Some(serde_json::from_slice(&bytes)?))
            }
            None => {
                tracing::debug!(key = %key, "cache miss");
                Ok(None)
            }
        }
    }

    /// Overwrites the cached value for `key`.
    pub async fn remember(&self, key: &K, value: &V) -> Result<(), CacheError> {
        let bytes = serde_json::to_vec(value)?;
        self.store.set(&self.key(key), bytes).await
    }

    pub async fn forget(&self, key: &K) -> Result<(), CacheError> {
        let key = self.key(key);
        tracing::debug!(key = %key, "cache forget");
        self.store.delete(&key).await
    }
}

/// Cache holding a single value under a fixed key.
pub struct ValueCache<V> {
    store: Arc<dyn CacheStore>,
    key: &'static str,
    _marker: PhantomData<fn() -> V>,
}

impl<V> Clone for ValueCache<V> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            key: self.key,
            _marker: PhantomData,
        }
    }
}

impl<V> ValueCache<V>
where
    V: Serialize + DeserializeOwned,
{
    pub fn new(store: Arc<dyn CacheStore>, key: &'static str) -> Self {
        Self {
            store,
            key,
            _marker: PhantomData,
        }
    }

    pub async fn get(&self) -> Result<Option<V>, CacheError> {
        match self.store.get(self.key).await? {
            Some(bytes) => {
                tracing::debug!(key = %self.key, "cache hit");
                Ok(Some(serde_json::from_slice(&bytes)?))
            }
            None => {
                tracing::debug!(key = %self.key, "cache miss");
                Ok(None)
            }
        }
    }

    pub async fn remember(&self, value: &V) -> Result<(), CacheError> {
        let bytes = serde_json::to_vec(value)?;
        self.store.set(self.key, bytes).await
    }
}
