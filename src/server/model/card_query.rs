//! Normalized card search.
//!
//! `CardQuery` is the validated form of the query string. Its `raw` form is the key
//! under which result pages are cached, so two requests that bind to the same query
//! share an entry regardless of parameter order or whitespace in the keywords.

use url::form_urlencoded;

use crate::{
    model::card::{CardQueryParams, CardQueryResultDto},
    server::{
        error::AppError,
        model::card::{Card, CardPage},
    },
};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CardQuery {
    pub name: String,
    pub card_type_id: String,
    pub language_id: String,
    pub card_key_id: String,
    pub expansion_id: String,
    /// Exclusive lower bound; `None` when the query passed the `-1` sentinel.
    pub min_price: Option<f64>,
    /// Exclusive upper bound; `None` when the query passed the `-1` sentinel.
    pub max_price: Option<f64>,
    pub in_stock_only: bool,
    pub foil_only: bool,
    pub keywords: Vec<String>,
    /// 1-based page number, never below 1.
    pub page: u64,
}

impl CardQuery {
    /// Validates and normalizes bound query parameters.
    ///
    /// # Arguments
    /// - `params` - Query string as bound by the controller
    /// - `keyword_limit` - Maximum number of keywords allowed in `t`
    ///
    /// # Returns
    /// - `Ok(CardQuery)` - Normalized query
    /// - `Err(AppError::BadRequest)` - Too many keywords
    pub fn from_params(params: CardQueryParams, keyword_limit: usize) -> Result<Self, AppError> {
        let keywords: Vec<String> = params
            .keywords
            .split_whitespace()
            .map(str::to_string)
            .collect();

        if keywords.len() > keyword_limit {
            return Err(AppError::BadRequest(format!(
                "too many keywords (limit: {})",
                keyword_limit
            )));
        }

        Ok(Self {
            name: params.name,
            card_type_id: params.card_type,
            language_id: params.language,
            card_key_id: params.key,
            expansion_id: params.expansion,
            min_price: price_bound(params.min_price),
            max_price: price_bound(params.max_price),
            in_stock_only: params.in_stock_only,
            foil_only: params.foil_only,
            keywords,
            page: params.page.max(1),
        })
    }

    /// Canonical query string used as the cache key.
    ///
    /// Fields are emitted in a fixed order. Unbounded prices are written as `-1`.
    pub fn raw(&self) -> String {
        let min_price = self.min_price.unwrap_or(NO_PRICE_BOUND);
        let max_price = self.max_price.unwrap_or(NO_PRICE_BOUND);
        let keywords = self.keywords.join(" ");

        form_urlencoded::Serializer::new(String::new())
            .append_pair("expansion", &self.expansion_id)
            .append_pair("foilOnly", &self.foil_only.to_string())
            .append_pair("inStockOnly", &self.in_stock_only.to_string())
            .append_pair("key", &self.card_key_id)
            .append_pair("lang", &self.language_id)
            .append_pair("maxPrice", &max_price.to_string())
            .append_pair("minPrice", &min_price.to_string())
            .append_pair("name", &self.name)
            .append_pair("page", &self.page.to_string())
            .append_pair("t", &keywords)
            .append_pair("type", &self.card_type_id)
            .finish()
    }

    /// Offset of the first row of the requested page.
    ///
    /// # Returns
    /// - `Ok(u64)` - Row offset
    /// - `Err(AppError::BadRequest)` - The offset doesn't fit a signed 64-bit `OFFSET`
    pub fn offset(&self, page_size: u64) -> Result<u64, AppError> {
        self.page
            .saturating_sub(1)
            .checked_mul(page_size)
            .filter(|offset| *offset <= i64::MAX as u64)
            .ok_or_else(|| AppError::BadRequest(format!("page {} is out of range", self.page)))
    }
}

/// Search result page together with the page size it was cut with.
#[derive(Debug, Clone, PartialEq)]
pub struct CardQueryResult {
    pub page: CardPage,
    pub per_page: u64,
}

impl CardQueryResult {
    pub fn into_dto(self) -> CardQueryResultDto {
        CardQueryResultDto {
            cards: self.page.cards.into_iter().map(Card::into_dto).collect(),
            total_cards: self.page.total,
            per_page: self.per_page,
        }
    }
}

/// Price bound sent when the search isn't bounded on that side.
const NO_PRICE_BOUND: f64 = -1.0;

fn price_bound(value: f64) -> Option<f64> {
    if value == NO_PRICE_BOUND {
        None
    } else {
        Some(value)
    }
}
