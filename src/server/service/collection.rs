//! Collection service for business logic.
//!
//! This module provides the `CollectionService` for managing a user's card collections.
//! Reads only need an existing user; every write also needs a verified one. A
//! collection owned by someone else is reported as missing.

use sea_orm::DatabaseConnection;

use crate::server::{
    cache::Caches,
    data::{card::CardRepository, collection::CollectionRepository},
    error::AppError,
    model::{
        collection::{Collection, CollectionInfoParams},
        slot::{plan_slot_change, ExistingSlot, SlotChange, SlotDelta},
    },
    service::{require_user, require_verified},
};

pub struct CollectionService<'a> {
    pub db: &'a DatabaseConnection,
    pub caches: &'a Caches,
}

impl<'a> CollectionService<'a> {
    pub fn new(db: &'a DatabaseConnection, caches: &'a Caches) -> Self {
        Self { db, caches }
    }

    /// Lists every collection of a user.
    pub async fn get_all(&self, user_id: i32) -> Result<Vec<Collection>, AppError> {
        require_user(self.db, user_id).await?;

        let collections = CollectionRepository::new(self.db, self.caches)
            .find_by_owner(user_id)
            .await?;

        Ok(collections)
    }

    /// Creates an empty collection.
    ///
    /// # Returns
    /// - `Ok(Collection)` - The new collection
    /// - `Err(AppError::BadRequest)` - Name shorter than 3 characters
    /// - `Err(AppError::AuthErr(NotVerified))` - User isn't verified
    pub async fn create(
        &self,
        user_id: i32,
        params: CollectionInfoParams,
    ) -> Result<Collection, AppError> {
        params.validate()?;
        require_verified(self.db, user_id).await?;

        let collection = CollectionRepository::new(self.db, self.caches)
            .save(user_id, params)
            .await?;

        tracing::info!("User {} created collection {}", user_id, collection.id);

        Ok(collection)
    }

    /// Retrieves one of the user's collections.
    ///
    /// # Returns
    /// - `Ok(Collection)` - Collection owned by the user
    /// - `Err(AppError::CollectionNotFound)` - Missing or owned by someone else
    pub async fn get_by_id(&self, user_id: i32, id: i32) -> Result<Collection, AppError> {
        require_user(self.db, user_id).await?;
        self.owned(user_id, id).await
    }

    /// Applies a signed amount change to the slot holding a card.
    ///
    /// The slot is created for a positive change on a card not yet collected and
    /// removed once its amount drops to 0 or below.
    ///
    /// # Arguments
    /// - `user_id` - Id of the authenticated user
    /// - `id` - Collection id
    /// - `delta` - Card id and signed amount
    ///
    /// # Returns
    /// - `Ok(Collection)` - The collection after the change
    /// - `Err(AppError::CardNotFound)` - Card doesn't exist
    /// - `Err(AppError::AuthErr(NotVerified))` - User isn't verified
    /// - `Err(AppError::CollectionNotFound)` - Missing or owned by someone else
    /// - `Err(AppError::BadRequest)` - Negative change on a card not in the collection
    pub async fn edit_slot(
        &self,
        user_id: i32,
        id: i32,
        delta: SlotDelta,
    ) -> Result<Collection, AppError> {
        if CardRepository::new(self.db, self.caches)
            .find_by_id(delta.card_id)
            .await?
            .is_none()
        {
            return Err(AppError::CardNotFound(delta.card_id));
        }

        require_verified(self.db, user_id).await?;
        let collection = self.owned(user_id, id).await?;

        let existing = collection.slot_for(delta.card_id).map(|slot| ExistingSlot {
            id: slot.id,
            amount: slot.amount,
        });

        let repo = CollectionRepository::new(self.db, self.caches);
        let updated = match plan_slot_change(existing, delta.amount)? {
            SlotChange::Insert { amount } => {
                repo.insert_slot(id, delta.card_id, amount).await?
            }
            SlotChange::Update { slot_id, amount } => repo.update_slot(id, slot_id, amount).await?,
            SlotChange::Delete { slot_id } => repo.delete_slot(id, slot_id).await?,
        };

        updated.ok_or(AppError::CollectionNotFound(id))
    }

    /// Renames a collection and replaces its description.
    pub async fn update_info(
        &self,
        user_id: i32,
        id: i32,
        params: CollectionInfoParams,
    ) -> Result<Collection, AppError> {
        params.validate()?;
        require_verified(self.db, user_id).await?;
        self.owned(user_id, id).await?;

        CollectionRepository::new(self.db, self.caches)
            .update_info(id, params)
            .await?
            .ok_or(AppError::CollectionNotFound(id))
    }

    /// Deletes a collection and all of its slots.
    pub async fn delete(&self, user_id: i32, id: i32) -> Result<(), AppError> {
        require_verified(self.db, user_id).await?;
        self.owned(user_id, id).await?;

        if !CollectionRepository::new(self.db, self.caches)
            .delete(id)
            .await?
        {
            return Err(AppError::CollectionNotFound(id));
        }

        tracing::info!("User {} deleted collection {}", user_id, id);

        Ok(())
    }

    async fn owned(&self, user_id: i32, id: i32) -> Result<Collection, AppError> {
        match CollectionRepository::new(self.db, self.caches)
            .find_by_id(id)
            .await?
        {
            Some(collection) if collection.owner_id == user_id => Ok(collection),
            _ => Err(AppError::CollectionNotFound(id)),
        }
    }
}
