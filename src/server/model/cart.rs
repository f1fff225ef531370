use serde::{Deserialize, Serialize};

use crate::model::cart::{CartDto, CartSlotDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartSlot {
    pub id: i32,
    pub card_id: i32,
    pub amount: i32,
}

impl CartSlot {
    pub fn from_entity(entity: entity::cart_slot::Model) -> Self {
        Self {
            id: entity.id,
            card_id: entity.card_id,
            amount: entity.amount,
        }
    }

    pub fn into_dto(self) -> CartSlotDto {
        CartSlotDto {
            amount: self.amount,
            card_id: self.card_id,
        }
    }
}

/// A user's cart. Every user has exactly one, created at registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub id: i32,
    pub user_id: i32,
    pub slots: Vec<CartSlot>,
}

impl Cart {
    pub fn from_entity(entity: entity::cart::Model, slots: Vec<entity::cart_slot::Model>) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            slots: slots.into_iter().map(CartSlot::from_entity).collect(),
        }
    }

    /// Slot holding `card_id`, if any.
    pub fn slot_for(&self, card_id: i32) -> Option<&CartSlot> {
        self.slots.iter().find(|slot| slot.card_id == card_id)
    }

    pub fn into_dto(self) -> CartDto {
        CartDto {
            cards: self.slots.into_iter().map(CartSlot::into_dto).collect(),
        }
    }
}
