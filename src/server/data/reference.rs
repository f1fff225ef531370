//! Reference data repository.
//!
//! Card types, languages, expansions, card keys and foilings are static lookup tables
//! maintained outside this service. The repository only reads them: to list them for
//! clients, and to check that a card's references exist before it is written.

use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use crate::server::{
    cache::Caches,
    error::AppError,
    model::card::{CardType, Expansion, Language},
};

pub struct ReferenceRepository<'a> {
    db: &'a DatabaseConnection,
    caches: &'a Caches,
}

impl<'a> ReferenceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection, caches: &'a Caches) -> Self {
        Self { db, caches }
    }

    /// Lists every language, cached under `languages`.
    ///
    /// # Returns
    /// - `Ok(Vec<Language>)` - Languages ordered by id
    /// - `Err(AppError)` - Database or cache error
    pub async fn languages(&self) -> Result<Vec<Language>, AppError> {
        if let Some(languages) = self.caches.languages.get().await? {
            return Ok(languages);
        }

        let languages: Vec<Language> = entity::prelude::Language::find()
            .order_by_asc(entity::language::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Language::from_entity)
            .collect();

        self.caches.languages.remember(&languages).await?;

        Ok(languages)
    }

    /// Lists every expansion, cached under `expansions`.
    ///
    /// # Returns
    /// - `Ok(Vec<Expansion>)` - Expansions ordered by id
    /// - `Err(AppError)` - Database or cache error
    pub async fn expansions(&self) -> Result<Vec<Expansion>, AppError> {
        if let Some(expansions) = self.caches.expansions.get().await? {
            return Ok(expansions);
        }

        let expansions: Vec<Expansion> = entity::prelude::Expansion::find()
            .order_by_asc(entity::expansion::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Expansion::from_entity)
            .collect();

        self.caches.expansions.remember(&expansions).await?;

        Ok(expansions)
    }

    pub async fn card_types(&self) -> Result<Vec<CardType>, AppError> {
        let card_types = entity::prelude::CardType::find()
            .order_by_asc(entity::card_type::Column::Id)
            .all(self.db)
            .await?;

        Ok(card_types.into_iter().map(CardType::from_entity).collect())
    }

    pub async fn card_keys(&self) -> Result<Vec<entity::card_key::Model>, AppError> {
        let card_keys = entity::prelude::CardKey::find()
            .order_by_asc(entity::card_key::Column::Id)
            .all(self.db)
            .await?;

        Ok(card_keys)
    }

    pub async fn card_type_exists(&self, id: &str) -> Result<bool, AppError> {
        Ok(entity::prelude::CardType::find_by_id(id.to_string())
            .one(self.db)
            .await?
            .is_some())
    }

    pub async fn language_exists(&self, id: &str) -> Result<bool, AppError> {
        Ok(entity::prelude::Language::find_by_id(id.to_string())
            .one(self.db)
            .await?
            .is_some())
    }

    pub async fn expansion_exists(&self, id: &str) -> Result<bool, AppError> {
        Ok(entity::prelude::Expansion::find_by_id(id.to_string())
            .one(self.db)
            .await?
            .is_some())
    }

    pub async fn card_key_exists(&self, id: &str) -> Result<bool, AppError> {
        Ok(entity::prelude::CardKey::find_by_id(id.to_string())
            .one(self.db)
            .await?
            .is_some())
    }

    pub async fn foiling_exists(&self, id: &str) -> Result<bool, AppError> {
        Ok(entity::prelude::Foiling::find_by_id(id.to_string())
            .one(self.db)
            .await?
            .is_some())
    }
}
