//! Cache-aside layer in front of the database.
//!
//! Repositories consult these caches before querying the database and write back
//! (or forget) entries after every successful mutation. The database stays the source
//! of truth and entries never expire on their own.
//!
//! - **Backends** (`store`, `redis`, `memory`) - Raw byte storage behind the `CacheStore` trait
//! - **Typed caches** (`entity`, `query`) - JSON encoding, key prefixes and query invalidation
//!
//! A miss is never an error. Any other backend failure surfaces as `CacheError` and
//! aborts the request.

pub mod entity;
pub mod memory;
pub mod query;
pub mod redis;
pub mod store;

use std::sync::Arc;

use crate::server::{
    cache::{
        entity::{EntityCache, ValueCache},
        memory::MemoryCache,
        query::QueryCache,
        store::{CacheStore, NoopCache},
    },
    model::{
        card::{Card, Expansion, Language},
        cart::Cart,
        collection::Collection,
    },
};

/// Every typed cache the repositories use, sharing one backend.
#[derive(Clone)]
pub struct Caches {
    /// `card-{id}`
    pub cards: EntityCache<i32, Card>,
    /// `cardQuery-{raw}` and `cardQueryTotalCount-{raw}`
    pub card_queries: QueryCache,
    /// `collection-{id}`
    pub collections: EntityCache<i32, Collection>,
    /// `cart-{userId}`
    pub carts: EntityCache<i32, Cart>,
    pub languages: ValueCache<Vec<Language>>,
    pub expansions: ValueCache<Vec<Expansion>>,
}

impl Caches {
    /// Builds every typed cache on top of the given backend.
    pub fn new(store: Arc<dyn CacheStore>) -> Self {
        Self {
            cards: EntityCache::new(store.clone(), "card"),
            card_queries: QueryCache::new(store.clone()),
            collections: EntityCache::new(store.clone(), "collection"),
            carts: EntityCache::new(store.clone(), "cart"),
            languages: ValueCache::new(store.clone(), "languages"),
            expansions: ValueCache::new(store, "expansions"),
        }
    }

    /// Caches that always miss; every read goes to the database.
    pub fn noop() -> Self {
        Self::new(Arc::new(NoopCache))
    }

    /// Caches held in process memory.
    pub fn memory() -> Self {
        Self::new(Arc::new(MemoryCache::new()))
    }
}
