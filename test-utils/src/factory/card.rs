//! Card factory for creating test card entities.

use crate::factory::{helpers::next_id, reference::ReferenceData};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test cards with customizable fields.
///
/// References default to the rows in the provided `ReferenceData`; the card is
/// not foiled unless `foiling` is set.
///
/// # Example
///
/// ```rust,ignore
/// let card = CardFactory::new(&db, poster.id, &refs)
///     .name("Shivan Dragon")
///     .price(4.5)
///     .in_stock_amount(0)
///     .build()
///     .await?;
/// ```
pub struct CardFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    text: String,
    image_url: String,
    price: f64,
    in_stock_amount: i32,
    poster_id: i32,
    card_key_id: String,
    card_type_id: String,
    language_id: String,
    expansion_id: String,
    foiling_id: Option<String>,
}

impl<'a> CardFactory<'a> {
    /// Creates a new CardFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Card {id}"`
    /// - text: `"Card text {id}"`
    /// - price: `10.0`
    /// - in_stock_amount: `1`
    /// - foiling: `None`
    pub fn new(db: &'a DatabaseConnection, poster_id: i32, refs: &ReferenceData) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Card {}", id),
            text: format!("Card text {}", id),
            image_url: String::new(),
            price: 10.0,
            in_stock_amount: 1,
            poster_id,
            card_key_id: refs.card_key.id.clone(),
            card_type_id: refs.card_type.id.clone(),
            language_id: refs.language.id.clone(),
            expansion_id: refs.expansion.id.clone(),
            foiling_id: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn in_stock_amount(mut self, amount: i32) -> Self {
        self.in_stock_amount = amount;
        self
    }

    pub fn card_key(mut self, card_key_id: impl Into<String>) -> Self {
        self.card_key_id = card_key_id.into();
        self
    }

    pub fn card_type(mut self, card_type_id: impl Into<String>) -> Self {
        self.card_type_id = card_type_id.into();
        self
    }

    pub fn language(mut self, language_id: impl Into<String>) -> Self {
        self.language_id = language_id.into();
        self
    }

    pub fn expansion(mut self, expansion_id: impl Into<String>) -> Self {
        self.expansion_id = expansion_id.into();
        self
    }

    pub fn foiling(mut self, foiling_id: Option<String>) -> Self {
        self.foiling_id = foiling_id;
        self
    }

    /// Builds and inserts the card entity into the database.
    pub async fn build(self) -> Result<entity::card::Model, DbErr> {
        entity::card::ActiveModel {
            name: ActiveValue::Set(self.name),
            text: ActiveValue::Set(self.text),
            image_url: ActiveValue::Set(self.image_url),
            price: ActiveValue::Set(self.price),
            in_stock_amount: ActiveValue::Set(self.in_stock_amount),
            card_key_id: ActiveValue::Set(self.card_key_id),
            poster_id: ActiveValue::Set(self.poster_id),
            card_type_id: ActiveValue::Set(self.card_type_id),
            language_id: ActiveValue::Set(self.language_id),
            expansion_id: ActiveValue::Set(self.expansion_id),
            foiling_id: ActiveValue::Set(self.foiling_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a card with default values posted by `poster_id`.
pub async fn create_card(
    db: &DatabaseConnection,
    poster_id: i32,
    refs: &ReferenceData,
) -> Result<entity::card::Model, DbErr> {
    CardFactory::new(db, poster_id, refs).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        builder::TestBuilder,
        factory::{reference::create_reference_data, user::create_user},
    };

    #[tokio::test]
    async fn creates_card_with_reference_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_catalog_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user = create_user(db).await?;
        let refs = create_reference_data(db).await?;
        let card = create_card(db, user.id, &refs).await?;

        assert_eq!(card.poster_id, user.id);
        assert_eq!(card.language_id, refs.language.id);
        assert_eq!(card.card_type_id, refs.card_type.id);
        assert!(card.foiling_id.is_none());

        Ok(())
    }
}
