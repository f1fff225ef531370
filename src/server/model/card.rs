//! Card domain models and parameters.
//!
//! A `Card` always carries its reference data (type, language, expansion and optional
//! foiling) resolved, so it can be cached and serialized without further lookups.

use serde::{Deserialize, Serialize};

use crate::{
    model::card::{CardDto, CardTypeDto, ExpansionDto, FoilingDto, LanguageDto, PostCardDto},
    server::error::AppError,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardType {
    pub id: String,
    pub long_name: String,
    pub short_name: String,
}

impl CardType {
    pub fn from_entity(entity: entity::card_type::Model) -> Self {
        Self {
            id: entity.id,
            long_name: entity.long_name,
            short_name: entity.short_name,
        }
    }

    pub fn into_dto(self) -> CardTypeDto {
        CardTypeDto {
            id: self.id,
            long_name: self.long_name,
            short_name: self.short_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub id: String,
    pub long_name: String,
}

impl Language {
    pub fn from_entity(entity: entity::language::Model) -> Self {
        Self {
            id: entity.id,
            long_name: entity.long_name,
        }
    }

    pub fn into_dto(self) -> LanguageDto {
        LanguageDto {
            id: self.id,
            long_name: self.long_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expansion {
    pub id: String,
    pub short_name: String,
    pub full_name: String,
}

impl Expansion {
    pub fn from_entity(entity: entity::expansion::Model) -> Self {
        Self {
            id: entity.id,
            short_name: entity.short_name,
            full_name: entity.full_name,
        }
    }

    pub fn into_dto(self) -> ExpansionDto {
        ExpansionDto {
            id: self.id,
            short_name: self.short_name,
            full_name: self.full_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Foiling {
    pub id: String,
    pub name: String,
}

impl Foiling {
    pub fn from_entity(entity: entity::foiling::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> FoilingDto {
        FoilingDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// Reference rows a card points at, resolved by the repository.
#[derive(Debug, Clone)]
pub struct CardRelations {
    pub card_type: CardType,
    pub language: Language,
    pub expansion: Expansion,
    pub foiling: Option<Foiling>,
}

/// Card listing with resolved reference data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: i32,
    pub name: String,
    pub text: String,
    pub image_url: String,
    pub price: f64,
    pub in_stock_amount: i32,
    pub card_key_id: String,
    /// User who posted the listing.
    pub poster_id: i32,
    pub card_type: CardType,
    pub language: Language,
    pub expansion: Expansion,
    pub foiling: Option<Foiling>,
}

impl Card {
    /// Combines a card row with its resolved references.
    ///
    /// # Arguments
    /// - `entity` - The card row from the database
    /// - `relations` - Reference rows matching the card's foreign keys
    ///
    /// # Returns
    /// - `Card` - The domain model
    pub fn from_entity(entity: entity::card::Model, relations: CardRelations) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            text: entity.text,
            image_url: entity.image_url,
            price: entity.price,
            in_stock_amount: entity.in_stock_amount,
            card_key_id: entity.card_key_id,
            poster_id: entity.poster_id,
            card_type: relations.card_type,
            language: relations.language,
            expansion: relations.expansion,
            foiling: relations.foiling,
        }
    }

    /// Converts the card into its API representation.
    ///
    /// The expansion is flattened into its short and full names.
    pub fn into_dto(self) -> CardDto {
        CardDto {
            id: self.id,
            name: self.name,
            text: self.text,
            image_url: self.image_url,
            price: self.price,
            card_type: self.card_type.into_dto(),
            language: self.language.into_dto(),
            foiling: self.foiling.map(Foiling::into_dto),
            key: self.card_key_id,
            expansion: self.expansion.short_name,
            expansion_name: self.expansion.full_name,
            in_stock_amount: self.in_stock_amount,
        }
    }
}

/// Parameters for creating a card or replacing all of its fields.
#[derive(Debug, Clone, PartialEq)]
pub struct CardParams {
    pub name: String,
    pub text: String,
    pub image_url: String,
    pub price: f64,
    pub in_stock_amount: i32,
    pub card_type_id: String,
    pub language_id: String,
    pub card_key_id: String,
    pub expansion_id: String,
    pub foiling_id: Option<String>,
}

impl CardParams {
    pub fn from_dto(dto: PostCardDto) -> Self {
        Self {
            name: dto.name,
            text: dto.text,
            image_url: dto.image_url,
            price: dto.price,
            in_stock_amount: dto.in_stock_amount,
            card_type_id: dto.card_type,
            language_id: dto.language,
            card_key_id: dto.key,
            expansion_id: dto.expansion,
            foiling_id: dto.foiling.filter(|f| !f.is_empty()),
        }
    }

    /// Checks required fields and value ranges.
    ///
    /// # Returns
    /// - `Ok(())` - Parameters are valid
    /// - `Err(AppError::BadRequest)` - First failing rule
    pub fn validate(&self) -> Result<(), AppError> {
        let required = [
            ("name", &self.name),
            ("text", &self.text),
            ("type", &self.card_type_id),
            ("language", &self.language_id),
            ("key", &self.card_key_id),
            ("expansion", &self.expansion_id),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(AppError::BadRequest(format!("{} is required", field)));
        }

        if self.price <= 0.0 || !self.price.is_finite() {
            return Err(AppError::BadRequest(format!(
                "card price can't be {}",
                self.price
            )));
        }

        if self.in_stock_amount < 0 {
            return Err(AppError::BadRequest(format!(
                "in stock amount can't be {}",
                self.in_stock_amount
            )));
        }

        Ok(())
    }
}

/// One page of search results together with the total number of matches.
#[derive(Debug, Clone, PartialEq)]
pub struct CardPage {
    pub cards: Vec<Card>,
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> CardParams {
        CardParams {
            name: "card1".to_string(),
            text: "card text".to_string(),
            image_url: String::new(),
            price: 10.0,
            in_stock_amount: 0,
            card_type_id: "CT1".to_string(),
            language_id: "ENG".to_string(),
            card_key_id: "key1".to_string(),
            expansion_id: "exp1".to_string(),
            foiling_id: None,
        }
    }

    #[test]
    fn accepts_complete_params() {
        assert!(params().validate().is_ok());
    }

    #[test]
    fn rejects_missing_reference() {
        let mut p = params();
        p.language_id = " ".to_string();

        match p.validate() {
            Err(AppError::BadRequest(msg)) => assert_eq!(msg, "language is required"),
            other => panic!("Expected BadRequest, got {:?}", other),
        }
    }

    #[test]
    fn rejects_non_positive_price() {
        let mut p = params();
        p.price = 0.0;

        assert!(matches!(p.validate(), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn empty_foiling_is_treated_as_none() {
        let params = CardParams::from_dto(PostCardDto {
            name: "card1".to_string(),
            text: "text".to_string(),
            image_url: String::new(),
            price: 1.0,
            card_type: "CT1".to_string(),
            language: "ENG".to_string(),
            key: "key1".to_string(),
            expansion: "exp1".to_string(),
            foiling: Some(String::new()),
            in_stock_amount: 3,
        });

        assert_eq!(params.foiling_id, None);
        assert_eq!(params.in_stock_amount, 3);
    }
}
