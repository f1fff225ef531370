//! Slot merge shared by collections and carts.
//!
//! A slot pairs a card with an amount inside its parent. Amounts stay strictly
//! positive: an edit that drives a slot to zero or below removes it.

use crate::{model::collection::SlotDeltaDto, server::error::AppError};

/// Signed change to the amount of one card in a collection or cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotDelta {
    pub card_id: i32,
    pub amount: i32,
}

impl SlotDelta {
    pub fn from_dto(dto: SlotDeltaDto) -> Self {
        Self {
            card_id: dto.card_id,
            amount: dto.amount,
        }
    }
}

/// Existing slot for the edited card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExistingSlot {
    pub id: i32,
    pub amount: i32,
}

/// Write the repository must perform to apply a delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotChange {
    Insert { amount: i32 },
    Update { slot_id: i32, amount: i32 },
    Delete { slot_id: i32 },
}

/// Plans the write that applies `delta` to the slot holding a card.
///
/// # Arguments
/// - `existing` - Current slot for the card, if the parent has one
/// - `delta` - Signed amount to add
///
/// # Returns
/// - `Ok(SlotChange)` - Write to perform
/// - `Err(AppError::BadRequest)` - No slot exists and `delta` is not positive
pub fn plan_slot_change(existing: Option<ExistingSlot>, delta: i32) -> Result<SlotChange, AppError> {
    match existing {
        Some(slot) => {
            let amount = slot.amount.saturating_add(delta);
            if amount <= 0 {
                Ok(SlotChange::Delete { slot_id: slot.id })
            } else {
                Ok(SlotChange::Update {
                    slot_id: slot.id,
                    amount,
                })
            }
        }
        None if delta > 0 => Ok(SlotChange::Insert { amount: delta }),
        None => Err(AppError::BadRequest(
            "no matching slot to subtract from".to_string(),
        )),
    }
}
