//! Card service for business logic.
//!
//! This module provides the `CardService` for posting, reading, searching and editing
//! card listings. It validates parameters, checks that referenced rows exist and maps
//! missing cards to `AppError::CardNotFound`.

use sea_orm::DatabaseConnection;

use crate::server::{
    cache::Caches,
    data::{card::CardRepository, reference::ReferenceRepository},
    error::AppError,
    model::{
        card::{Card, CardParams, Expansion, Language},
        card_query::{CardQuery, CardQueryResult},
    },
    service::require_user,
};

/// Service providing business logic for card listings.
pub struct CardService<'a> {
    pub db: &'a DatabaseConnection,
    pub caches: &'a Caches,
}

impl<'a> CardService<'a> {
    /// Creates a new CardService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `caches` - Caches shared by the repositories
    ///
    /// # Returns
    /// - `CardService` - New service instance
    pub fn new(db: &'a DatabaseConnection, caches: &'a Caches) -> Self {
        Self { db, caches }
    }

    /// Posts a new card.
    ///
    /// # Arguments
    /// - `poster_id` - Id of the authenticated poster
    /// - `params` - Card fields
    ///
    /// # Returns
    /// - `Ok(Card)` - The stored card
    /// - `Err(AppError::BadRequest)` - Invalid fields or unknown reference ids
    /// - `Err(AppError::AuthErr(UserNotFound))` - Poster doesn't exist
    /// - `Err(AppError::DbErr | CacheErr)` - Storage failure
    pub async fn add(&self, poster_id: i32, params: CardParams) -> Result<Card, AppError> {
        params.validate()?;
        require_user(self.db, poster_id).await?;
        self.check_references(&params).await?;

        let card = CardRepository::new(self.db, self.caches)
            .save(poster_id, params)
            .await?;

        tracing::info!("User {} posted card {}", poster_id, card.id);

        Ok(card)
    }

    /// Retrieves a card by id.
    ///
    /// # Returns
    /// - `Ok(Card)` - Card found
    /// - `Err(AppError::CardNotFound)` - No card with that id
    pub async fn get_by_id(&self, id: i32) -> Result<Card, AppError> {
        CardRepository::new(self.db, self.caches)
            .find_by_id(id)
            .await?
            .ok_or(AppError::CardNotFound(id))
    }

    /// Searches cards and returns one page of results.
    ///
    /// # Arguments
    /// - `query` - Normalized search
    /// - `page_size` - Configured number of cards per page
    ///
    /// # Returns
    /// - `Ok(CardQueryResult)` - Page, total match count and page size
    /// - `Err(AppError)` - Storage failure
    pub async fn query(
        &self,
        query: CardQuery,
        page_size: u64,
    ) -> Result<CardQueryResult, AppError> {
        let page = CardRepository::new(self.db, self.caches)
            .query(&query, page_size)
            .await?;

        Ok(CardQueryResult {
            page,
            per_page: page_size,
        })
    }

    /// Replaces every field of a card. The id and poster are kept.
    ///
    /// # Returns
    /// - `Ok(Card)` - The updated card
    /// - `Err(AppError::BadRequest)` - Invalid fields or unknown reference ids
    /// - `Err(AppError::CardNotFound)` - No card with that id
    pub async fn update(&self, id: i32, params: CardParams) -> Result<Card, AppError> {
        params.validate()?;

        let repo = CardRepository::new(self.db, self.caches);
        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::CardNotFound(id));
        }

        self.check_references(&params).await?;

        repo.update(id, params)
            .await?
            .ok_or(AppError::CardNotFound(id))
    }

    /// Sets a new price.
    ///
    /// # Returns
    /// - `Ok(Card)` - The updated card
    /// - `Err(AppError::BadRequest)` - Price isn't greater than 0
    /// - `Err(AppError::CardNotFound)` - No card with that id
    pub async fn update_price(&self, id: i32, price: f64) -> Result<Card, AppError> {
        if price <= 0.0 || !price.is_finite() {
            return Err(AppError::BadRequest(format!(
                "card price can't be {}",
                price
            )));
        }

        CardRepository::new(self.db, self.caches)
            .update_price(id, price)
            .await?
            .ok_or(AppError::CardNotFound(id))
    }

    /// Sets a new stocked amount.
    ///
    /// # Returns
    /// - `Ok(Card)` - The updated card
    /// - `Err(AppError::BadRequest)` - Amount is negative
    /// - `Err(AppError::CardNotFound)` - No card with that id
    pub async fn update_in_stock_amount(&self, id: i32, amount: i32) -> Result<Card, AppError> {
        if amount < 0 {
            return Err(AppError::BadRequest(format!(
                "in stock amount can't be {}",
                amount
            )));
        }

        CardRepository::new(self.db, self.caches)
            .update_in_stock_amount(id, amount)
            .await?
            .ok_or(AppError::CardNotFound(id))
    }

    pub async fn languages(&self) -> Result<Vec<Language>, AppError> {
        ReferenceRepository::new(self.db, self.caches)
            .languages()
            .await
    }

    pub async fn expansions(&self) -> Result<Vec<Expansion>, AppError> {
        ReferenceRepository::new(self.db, self.caches)
            .expansions()
            .await
    }

    async fn check_references(&self, params: &CardParams) -> Result<(), AppError> {
        let refs = ReferenceRepository::new(self.db, self.caches);

        if !refs.card_type_exists(&params.card_type_id).await? {
            return Err(unknown("card type", &params.card_type_id));
        }
        if !refs.language_exists(&params.language_id).await? {
            return Err(unknown("language", &params.language_id));
        }
        if !refs.card_key_exists(&params.card_key_id).await? {
            return Err(unknown("card key", &params.card_key_id));
        }
        if !refs.expansion_exists(&params.expansion_id).await? {
            return Err(unknown("expansion", &params.expansion_id));
        }
        if let Some(foiling_id) = &params.foiling_id {
            if !refs.foiling_exists(foiling_id).await? {
                return Err(unknown("foiling", foiling_id));
            }
        }

        Ok(())
    }
}

fn unknown(kind: &str, id: &str) -> AppError {
    AppError::BadRequest(format!("unknown {} {}", kind, id))
}

#[cfg(test)]
mod tests {
    use test_utils::{builder::TestBuilder, factory};

    use super::*;
    use crate::server::error::auth::AuthError;

    fn params(refs: &factory::reference::ReferenceData) -> CardParams {
        CardParams {
            name: "card1".to_string(),
            text: "text".to_string(),
            image_url: String::new(),
            price: 10.0,
            in_stock_amount: 1,
            card_type_id: refs.card_type.id.clone(),
            language_id: refs.language.id.clone(),
            card_key_id: refs.card_key.id.clone(),
            expansion_id: refs.expansion.id.clone(),
            foiling_id: None,
        }
    }

    /// Expected: Ok(Card) posted by the user
    #[tokio::test]
    async fn adds_card() -> Result<(), AppError> {
        let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let caches = Caches::memory();

        let poster = factory::user::create_verified_user(db).await?;
        let refs = factory::create_reference_data(db).await?;

        let card = CardService::new(db, &caches)
            .add(poster.id, params(&refs))
            .await?;

        assert_eq!(card.poster_id, poster.id);

        Ok(())
    }

    /// Expected: Err(BadRequest) naming the unknown language
    #[tokio::test]
    async fn add_rejects_unknown_reference() -> Result<(), AppError> {
        let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let caches = Caches::memory();

        let poster = factory::user::create_verified_user(db).await?;
        let refs = factory::create_reference_data(db).await?;
        let mut params = params(&refs);
        params.language_id = "XX".to_string();

        match CardService::new(db, &caches).add(poster.id, params).await {
            Err(AppError::BadRequest(msg)) => assert_eq!(msg, "unknown language XX"),
            other => panic!("Expected BadRequest, got {:?}", other),
        }

        Ok(())
    }

    /// Expected: Err(AuthErr(UserNotFound))
    #[tokio::test]
    async fn add_rejects_missing_poster() -> Result<(), AppError> {
        let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let caches = Caches::memory();

        let refs = factory::create_reference_data(db).await?;

        let result = CardService::new(db, &caches).add(999, params(&refs)).await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::UserNotFound(999)))
        ));

        Ok(())
    }

    /// Expected: Err(CardNotFound)
    #[tokio::test]
    async fn get_by_id_reports_missing_card() -> Result<(), AppError> {
        let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let caches = Caches::noop();

        let result = CardService::new(db, &caches).get_by_id(5).await;

        assert!(matches!(result, Err(AppError::CardNotFound(5))));

        Ok(())
    }

    /// Expected: Err(BadRequest) with the rejected price
    #[tokio::test]
    async fn update_price_rejects_non_positive_price() -> Result<(), AppError> {
        let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let caches = Caches::noop();

        let (_, _, card) = factory::helpers::create_card_with_dependencies(db).await?;

        match CardService::new(db, &caches).update_price(card.id, -5.0).await {
            Err(AppError::BadRequest(msg)) => assert_eq!(msg, "card price can't be -5"),
            other => panic!("Expected BadRequest, got {:?}", other),
        }

        Ok(())
    }

    /// Expected: Err(CardNotFound) for both patches of a missing card
    #[tokio::test]
    async fn patches_report_missing_card() -> Result<(), AppError> {
        let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let caches = Caches::noop();
        let service = CardService::new(db, &caches);

        assert!(matches!(
            service.update_price(9, 1.0).await,
            Err(AppError::CardNotFound(9))
        ));
        assert!(matches!(
            service.update_in_stock_amount(9, 1).await,
            Err(AppError::CardNotFound(9))
        ));
        assert!(matches!(
            service.update_in_stock_amount(9, -1).await,
            Err(AppError::BadRequest(_))
        ));

        Ok(())
    }

    /// Expected: Ok(Card) keeping its poster, Err(CardNotFound) for a missing id
    #[tokio::test]
    async fn updates_existing_card_only() -> Result<(), AppError> {
        let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let caches = Caches::memory();

        let (poster, refs, card) = factory::helpers::create_card_with_dependencies(db).await?;
        let service = CardService::new(db, &caches);

        let updated = service.update(card.id, params(&refs)).await?;
        assert_eq!(updated.name, "card1");
        assert_eq!(updated.poster_id, poster.id);

        assert!(matches!(
            service.update(card.id + 100, params(&refs)).await,
            Err(AppError::CardNotFound(_))
        ));

        Ok(())
    }
}
