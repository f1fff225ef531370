use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::card::CardDto;

/// Name and description of a collection, used both to create and to rename one.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CollectionInfoDto {
    /// At least 3 characters.
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Signed change applied to the slot holding `card_id`.
///
/// A positive amount adds copies, a negative amount removes them. Used by both
/// collection and cart slot edits.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SlotDeltaDto {
    pub card_id: i32,
    pub amount: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CollectionSlotDto {
    pub card: CardDto,
    pub amount: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CollectionDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub cards: Vec<CollectionSlotDto>,
}
