//! Collection domain models and parameters.

use serde::{Deserialize, Serialize};

use crate::{
    model::collection::{CollectionDto, CollectionInfoDto, CollectionSlotDto},
    server::{error::AppError, model::card::Card},
};

/// Slot of a collection with its card resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionSlot {
    pub id: i32,
    pub card: Card,
    pub amount: i32,
}

impl CollectionSlot {
    pub fn into_dto(self) -> CollectionSlotDto {
        CollectionSlotDto {
            card: self.card.into_dto(),
            amount: self.amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub owner_id: i32,
    pub slots: Vec<CollectionSlot>,
}

impl Collection {
    pub fn from_entity(entity: entity::collection::Model, slots: Vec<CollectionSlot>) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            owner_id: entity.owner_id,
            slots,
        }
    }

    /// Slot holding `card_id`, if any.
    pub fn slot_for(&self, card_id: i32) -> Option<&CollectionSlot> {
        self.slots.iter().find(|slot| slot.card.id == card_id)
    }

    pub fn into_dto(self) -> CollectionDto {
        CollectionDto {
            id: self.id,
            name: self.name,
            description: self.description,
            cards: self
                .slots
                .into_iter()
                .map(CollectionSlot::into_dto)
                .collect(),
        }
    }
}

/// Name and description used to create or rename a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionInfoParams {
    pub name: String,
    pub description: String,
}

impl CollectionInfoParams {
    pub const MIN_NAME_LEN: usize = 3;

    pub fn from_dto(dto: CollectionInfoDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().chars().count() < Self::MIN_NAME_LEN {
            return Err(AppError::BadRequest(format!(
                "collection name must be at least {} characters",
                Self::MIN_NAME_LEN
            )));
        }

        Ok(())
    }
}
