//! Collection data repository.
//!
//! Collections are cached whole, slots and slot cards included, under
//! `collection-{id}`. Slot writes re-read the collection and remember it; deleting a
//! collection forgets it.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    cache::Caches,
    data::card::CardRepository,
    error::AppError,
    model::collection::{Collection, CollectionInfoParams, CollectionSlot},
};

pub struct CollectionRepository<'a> {
    db: &'a DatabaseConnection,
    caches: &'a Caches,
}

impl<'a> CollectionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection, caches: &'a Caches) -> Self {
        Self { db, caches }
    }

    /// Lists every collection owned by a user, ordered by id.
    ///
    /// # Returns
    /// - `Ok(Vec<Collection>)` - Collections with their slots resolved
    /// - `Err(DbErr)` - Database error
    pub async fn find_by_owner(&self, owner_id: i32) -> Result<Vec<Collection>, DbErr> {
        let entities = entity::prelude::Collection::find()
            .filter(entity::collection::Column::OwnerId.eq(owner_id))
            .order_by_asc(entity::collection::Column::Id)
            .all(self.db)
            .await?;

        self.resolve(entities).await
    }

    /// Finds a collection by id, consulting the cache first.
    ///
    /// # Returns
    /// - `Ok(Some(Collection))` - Collection found
    /// - `Ok(None)` - No collection with that id
    /// - `Err(AppError)` - Database or cache error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Collection>, AppError> {
        if let Some(collection) = self.caches.collections.get(&id).await? {
            return Ok(Some(collection));
        }

        let Some(collection) = self.load(id).await? else {
            return Ok(None);
        };

        self.caches.collections.remember(&id, &collection).await?;

        Ok(Some(collection))
    }

    /// Creates an empty collection.
    ///
    /// # Arguments
    /// - `owner_id` - Id of the owning user
    /// - `params` - Validated name and description
    ///
    /// # Returns
    /// - `Ok(Collection)` - The stored collection
    /// - `Err(AppError)` - Database or cache error
    pub async fn save(
        &self,
        owner_id: i32,
        params: CollectionInfoParams,
    ) -> Result<Collection, AppError> {
        let entity = entity::collection::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            owner_id: ActiveValue::Set(owner_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let collection = Collection::from_entity(entity, Vec::new());
        self.caches
            .collections
            .remember(&collection.id, &collection)
            .await?;

        Ok(collection)
    }

    /// Renames a collection and replaces its description.
    ///
    /// # Returns
    /// - `Ok(Some(Collection))` - The updated collection
    /// - `Ok(None)` - No collection with that id
    /// - `Err(AppError)` - Database or cache error
    pub async fn update_info(
        &self,
        id: i32,
        params: CollectionInfoParams,
    ) -> Result<Option<Collection>, AppError> {
        let Some(entity) = entity::prelude::Collection::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::collection::ActiveModel = entity.into();
        active.name = ActiveValue::Set(params.name);
        active.description = ActiveValue::Set(params.description);
        active.update(self.db).await?;

        self.refresh(id).await
    }

    /// Sets the amount of an existing slot.
    pub async fn update_slot(
        &self,
        collection_id: i32,
        slot_id: i32,
        amount: i32,
    ) -> Result<Option<Collection>, AppError> {
        entity::prelude::CollectionSlot::update(entity::collection_slot::ActiveModel {
            id: ActiveValue::Unchanged(slot_id),
            amount: ActiveValue::Set(amount),
            ..Default::default()
        })
        .exec(self.db)
        .await?;

        self.refresh(collection_id).await
    }

    /// Adds a slot for a card not yet in the collection.
    pub async fn insert_slot(
        &self,
        collection_id: i32,
        card_id: i32,
        amount: i32,
    ) -> Result<Option<Collection>, AppError> {
        entity::collection_slot::ActiveModel {
            amount: ActiveValue::Set(amount),
            card_id: ActiveValue::Set(card_id),
            collection_id: ActiveValue::Set(collection_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.refresh(collection_id).await
    }

    pub async fn delete_slot(
        &self,
        collection_id: i32,
        slot_id: i32,
    ) -> Result<Option<Collection>, AppError> {
        entity::prelude::CollectionSlot::delete_by_id(slot_id)
            .exec(self.db)
            .await?;

        self.refresh(collection_id).await
    }

    /// Deletes a collection with its slots and forgets the cached copy.
    ///
    /// # Returns
    /// - `Ok(true)` - Collection deleted
    /// - `Ok(false)` - No collection with that id
    /// - `Err(AppError)` - Database or cache error
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        entity::prelude::CollectionSlot::delete_many()
            .filter(entity::collection_slot::Column::CollectionId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Collection::delete_by_id(id)
            .exec(self.db)
            .await?;

        self.caches.collections.forget(&id).await?;

        Ok(result.rows_affected > 0)
    }

    async fn refresh(&self, id: i32) -> Result<Option<Collection>, AppError> {
        let Some(collection) = self.load(id).await? else {
            self.caches.collections.forget(&id).await?;
            return Ok(None);
        };

        self.caches.collections.remember(&id, &collection).await?;

        Ok(Some(collection))
    }

    async fn load(&self, id: i32) -> Result<Option<Collection>, DbErr> {
        let Some(entity) = entity::prelude::Collection::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.resolve(vec![entity]).await?.into_iter().next())
    }

    /// Loads the slots of a batch of collections and resolves their cards.
    async fn resolve(
        &self,
        entities: Vec<entity::collection::Model>,
    ) -> Result<Vec<Collection>, DbErr> {
        if entities.is_empty() {
            return Ok(Vec::new());
        }

        let collection_ids: Vec<i32> = entities.iter().map(|c| c.id).collect();
        let slots = entity::prelude::CollectionSlot::find()
            .filter(entity::collection_slot::Column::CollectionId.is_in(collection_ids))
            .order_by_asc(entity::collection_slot::Column::Id)
            .all(self.db)
            .await?;

        let card_ids: Vec<i32> = slots.iter().map(|s| s.card_id).collect();
        let cards = CardRepository::new(self.db, self.caches)
            .find_by_ids(&card_ids)
            .await?;

        let mut slots_by_collection: HashMap<i32, Vec<CollectionSlot>> = HashMap::new();
        for slot in slots {
            let card = cards.get(&slot.card_id).cloned().ok_or_else(|| {
                DbErr::RecordNotFound(format!("card {} referenced by slot {}", slot.card_id, slot.id))
            })?;
            slots_by_collection
                .entry(slot.collection_id)
                .or_default()
                .push(CollectionSlot {
                    id: slot.id,
                    card,
                    amount: slot.amount,
                });
        }

        Ok(entities
            .into_iter()
            .map(|entity| {
                let slots = slots_by_collection.remove(&entity.id).unwrap_or_default();
                Collection::from_entity(entity, slots)
            })
            .collect())
    }
}
