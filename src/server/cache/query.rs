//! Cache of card search result pages.

use std::sync::Arc;

use crate::server::{
    cache::store::CacheStore,
    error::cache::CacheError,
    model::card::{Card, CardPage},
};

const PAGE_PREFIX: &str = "cardQuery-";
const TOTAL_PREFIX: &str = "cardQueryTotalCount-";
/// Shared by both key families above.
const QUERY_PREFIX: &str = "cardQuery";

/// Stores each result page under `cardQuery-{raw}` and its total match count under
/// `cardQueryTotalCount-{raw}`, where `raw` is the canonical query string.
#[derive(Clone)]
pub struct QueryCache {
    store: Arc<dyn CacheStore>,
}

impl QueryCache {
    pub fn new(store: Arc<dyn CacheStore>) -> Self {
        Self { store }
    }

    /// Looks up a cached page.
    ///
    /// Only a hit on both the page and its count counts as a hit.
    pub async fn get(&self, raw: &str) -> Result<Option<CardPage>, CacheError> {
        let page_key = format!("{}{}", PAGE_PREFIX, raw);
        let Some(cards) = self.store.get(&page_key).await? else {
            tracing::debug!(key = %page_key, "cache miss");
            return Ok(None);
        };
        let Some(total) = self.store.get(&format!("{}{}", TOTAL_PREFIX, raw)).await? else {
            tracing::debug!(key = %page_key, "cache miss on total count");
            return Ok(None);
        };

        tracing::debug!(key = %page_key, "cache hit");
        let cards: Vec<Card> = serde_json::from_slice(&cards)?;
        let total: u64 = serde_json::from_slice(&total)?;

        Ok(Some(CardPage { cards, total }))
    }

    pub async fn remember(&self, raw: &str, page: &CardPage) -> Result<(), CacheError> {
        self.store
            .set(
                &format!("{}{}", PAGE_PREFIX, raw),
                serde_json::to_vec(&page.cards)?,
            )
            .await?;
        self.store
            .set(
                &format!("{}{}", TOTAL_PREFIX, raw),
                serde_json::to_vec(&page.total)?,
            )
            .await
    }

    /// Drops every cached page and count.
    pub async fn forget_all(&self) -> Result<(), CacheError> {
        let removed = self.store.delete_prefix(QUERY_PREFIX).await?;
        tracing::debug!(removed, "card query cache flushed");
        Ok(())
    }
}
