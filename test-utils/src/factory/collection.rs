//! Collection factory for creating test collections and their slots.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test collections.
pub struct CollectionFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: i32,
    name: String,
    description: String,
}

impl<'a> CollectionFactory<'a> {
    /// Creates a new CollectionFactory owned by `owner_id`.
    ///
    /// Defaults:
    /// - name: `"Collection {id}"`
    /// - description: empty
    pub fn new(db: &'a DatabaseConnection, owner_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            owner_id,
            name: format!("Collection {}", id),
            description: String::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub async fn build(self) -> Result<entity::collection::Model, DbErr> {
        entity::collection::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            owner_id: ActiveValue::Set(self.owner_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an empty collection owned by `owner_id`.
pub async fn create_collection(
    db: &DatabaseConnection,
    owner_id: i32,
) -> Result<entity::collection::Model, DbErr> {
    CollectionFactory::new(db, owner_id).build().await
}

/// Inserts a slot holding `amount` copies of a card into a collection.
pub async fn create_collection_slot(
    db: &DatabaseConnection,
    collection_id: i32,
    card_id: i32,
    amount: i32,
) -> Result<entity::collection_slot::Model, DbErr> {
    entity::collection_slot::ActiveModel {
        collection_id: ActiveValue::Set(collection_id),
        card_id: ActiveValue::Set(card_id),
        amount: ActiveValue::Set(amount),
        ..Default::default()
    }
    .insert(db)
    .await
}
