//! Card repository with cache-aside reads.
//!
//! Single cards are cached under `card-{id}` and search pages under the query cache.
//! Every successful write re-reads the row, remembers it and flushes the whole query
//! cache, since any card change may alter the result of an arbitrary earlier search.

pub mod query;

use std::collections::{HashMap, HashSet};

use sea_orm::{
    sea_query::Expr,
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    cache::Caches,
    error::AppError,
    model::{
        card::{Card, CardPage, CardParams, CardRelations, CardType, Expansion, Foiling, Language},
        card_query::CardQuery,
    },
};

pub struct CardRepository<'a> {
    db: &'a DatabaseConnection,
    caches: &'a Caches,
}

impl<'a> CardRepository<'a> {
    /// Creates a new CardRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `caches` - Caches consulted before the database
    ///
    /// # Returns
    /// - `CardRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection, caches: &'a Caches) -> Self {
        Self { db, caches }
    }

    /// Inserts a new card posted by `poster_id`.
    ///
    /// # Arguments
    /// - `poster_id` - Id of the posting user
    /// - `params` - Validated card fields
    ///
    /// # Returns
    /// - `Ok(Card)` - The stored card with references resolved
    /// - `Err(AppError)` - Database or cache error
    pub async fn save(&self, poster_id: i32, params: CardParams) -> Result<Card, AppError> {
        let entity = entity::card::ActiveModel {
            name: ActiveValue::Set(params.name),
            text: ActiveValue::Set(params.text),
            image_url: ActiveValue::Set(params.image_url),
            price: ActiveValue::Set(params.price),
            in_stock_amount: ActiveValue::Set(params.in_stock_amount),
            card_key_id: ActiveValue::Set(params.card_key_id),
            poster_id: ActiveValue::Set(poster_id),
            card_type_id: ActiveValue::Set(params.card_type_id),
            language_id: ActiveValue::Set(params.language_id),
            expansion_id: ActiveValue::Set(params.expansion_id),
            foiling_id: ActiveValue::Set(params.foiling_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.refresh(entity.id)
            .await?
            .ok_or_else(|| AppError::InternalError(format!("card {} vanished after insert", entity.id)))
    }

    /// Replaces every field of a card except its id and poster.
    ///
    /// # Returns
    /// - `Ok(Some(Card))` - The updated card
    /// - `Ok(None)` - No card with that id
    /// - `Err(AppError)` - Database or cache error
    pub async fn update(&self, id: i32, params: CardParams) -> Result<Option<Card>, AppError> {
        let result = entity::prelude::Card::update_many()
            .col_expr(entity::card::Column::Name, Expr::value(params.name))
            .col_expr(entity::card::Column::Text, Expr::value(params.text))
            .col_expr(entity::card::Column::ImageUrl, Expr::value(params.image_url))
            .col_expr(entity::card::Column::Price, Expr::value(params.price))
            .col_expr(entity::card::Column::InStockAmount, Expr::value(params.in_stock_amount))
            .col_expr(entity::card::Column::CardKeyId, Expr::value(params.card_key_id))
            .col_expr(entity::card::Column::CardTypeId, Expr::value(params.card_type_id))
            .col_expr(entity::card::Column::LanguageId, Expr::value(params.language_id))
            .col_expr(entity::card::Column::ExpansionId, Expr::value(params.expansion_id))
            .col_expr(entity::card::Column::FoilingId, Expr::value(params.foiling_id))
            .filter(entity::card::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.refresh(id).await
    }

    /// Sets the price of a card.
    ///
    /// # Returns
    /// - `Ok(Some(Card))` - The updated card
    /// - `Ok(None)` - No card with that id
    /// - `Err(AppError)` - Database or cache error
    pub async fn update_price(&self, id: i32, price: f64) -> Result<Option<Card>, AppError> {
        let result = entity::prelude::Card::update_many()
            .col_expr(entity::card::Column::Price, Expr::value(price))
            .filter(entity::card::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.refresh(id).await
    }

    /// Sets the stocked amount of a card.
    ///
    /// # Returns
    /// - `Ok(Some(Card))` - The updated card
    /// - `Ok(None)` - No card with that id
    /// - `Err(AppError)` - Database or cache error
    pub async fn update_in_stock_amount(
        &self,
        id: i32,
        amount: i32,
    ) -> Result<Option<Card>, AppError> {
        let result = entity::prelude::Card::update_many()
            .col_expr(entity::card::Column::InStockAmount, Expr::value(amount))
            .filter(entity::card::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.refresh(id).await
    }

    /// Finds a card by id, consulting the cache first.
    ///
    /// A database hit is remembered for later reads.
    ///
    /// # Returns
    /// - `Ok(Some(Card))` - Card found
    /// - `Ok(None)` - No card with that id
    /// - `Err(AppError)` - Database or cache error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Card>, AppError> {
        if let Some(card) = self.caches.cards.get(&id).await? {
            return Ok(Some(card));
        }

        let Some(card) = self.load(id).await? else {
            return Ok(None);
        };

        self.caches.cards.remember(&id, &card).await?;

        Ok(Some(card))
    }

    /// Finds every card with an id in `ids`, bypassing the cache.
    ///
    /// # Returns
    /// - `Ok(HashMap<i32, Card>)` - Cards keyed by id; missing ids are absent
    /// - `Err(DbErr)` - Database error
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<HashMap<i32, Card>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let entities = entity::prelude::Card::find()
            .filter(entity::card::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await?;

        let cards = self.resolve(entities).await?;

        Ok(cards.into_iter().map(|card| (card.id, card)).collect())
    }

    /// Runs a search, consulting the query cache first.
    ///
    /// Results are ordered by card id so that pages stay stable between calls.
    ///
    /// # Arguments
    /// - `query` - Normalized search
    /// - `page_size` - Number of cards per page
    ///
    /// # Returns
    /// - `Ok(CardPage)` - Requested page and total number of matches
    /// - `Err(AppError::BadRequest)` - Page too large to address
    /// - `Err(AppError)` - Database or cache error
    pub async fn query(&self, query: &CardQuery, page_size: u64) -> Result<CardPage, AppError> {
        let offset = query.offset(page_size)?;
        let raw = query.raw();
        if let Some(page) = self.caches.card_queries.get(&raw).await? {
            return Ok(page);
        }

        let select = query::filtered_select(query);
        let total = select.clone().count(self.db).await?;

        let entities = select
            .order_by_asc(entity::card::Column::Id)
            .limit(page_size)
            .offset(offset)
            .all(self.db)
            .await?;

        let page = CardPage {
            cards: self.resolve(entities).await?,
            total,
        };

        self.caches.card_queries.remember(&raw, &page).await?;

        Ok(page)
    }

    /// Re-reads a card after a write, remembers it and flushes cached searches.
    async fn refresh(&self, id: i32) -> Result<Option<Card>, AppError> {
        let Some(card) = self.load(id).await? else {
            return Ok(None);
        };

        self.caches.cards.remember(&id, &card).await?;
        self.caches.card_queries.forget_all().await?;

        Ok(Some(card))
    }

    async fn load(&self, id: i32) -> Result<Option<Card>, DbErr> {
        let Some(entity) = entity::prelude::Card::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(self.resolve(vec![entity]).await?.into_iter().next())
    }

    /// Resolves the references of a batch of card rows, keeping their order.
    ///
    /// Each reference table is read once with an `IN` filter.
    async fn resolve(&self, entities: Vec<entity::card::Model>) -> Result<Vec<Card>, DbErr> {
        if entities.is_empty() {
            return Ok(Vec::new());
        }

        let type_ids: HashSet<String> = entities.iter().map(|c| c.card_type_id.clone()).collect();
        let language_ids: HashSet<String> =
            entities.iter().map(|c| c.language_id.clone()).collect();
        let expansion_ids: HashSet<String> =
            entities.iter().map(|c| c.expansion_id.clone()).collect();
        let foiling_ids: HashSet<String> =
            entities.iter().filter_map(|c| c.foiling_id.clone()).collect();

        let card_types: HashMap<String, CardType> = entity::prelude::CardType::find()
            .filter(entity::card_type::Column::Id.is_in(type_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|t| (t.id.clone(), CardType::from_entity(t)))
            .collect();

        let languages: HashMap<String, Language> = entity::prelude::Language::find()
            .filter(entity::language::Column::Id.is_in(language_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|l| (l.id.clone(), Language::from_entity(l)))
            .collect();

        let expansions: HashMap<String, Expansion> = entity::prelude::Expansion::find()
            .filter(entity::expansion::Column::Id.is_in(expansion_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|e| (e.id.clone(), Expansion::from_entity(e)))
            .collect();

        let foilings: HashMap<String, Foiling> = if foiling_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Foiling::find()
                .filter(entity::foiling::Column::Id.is_in(foiling_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|f| (f.id.clone(), Foiling::from_entity(f)))
                .collect()
        };

        entities
            .into_iter()
            .map(|card| {
                let relations = CardRelations {
                    card_type: lookup(&card_types, &card.card_type_id, "card type")?,
                    language: lookup(&languages, &card.language_id, "language")?,
                    expansion: lookup(&expansions, &card.expansion_id, "expansion")?,
                    foiling: match &card.foiling_id {
                        Some(id) => Some(lookup(&foilings, id, "foiling")?),
                        None => None,
                    },
                };
                Ok(Card::from_entity(card, relations))
            })
            .collect()
    }
}

fn lookup<T: Clone>(map: &HashMap<String, T>, id: &str, kind: &str) -> Result<T, DbErr> {
    map.get(id)
        .cloned()
        .ok_or_else(|| DbErr::RecordNotFound(format!("{} {} referenced by card", kind, id)))
}
