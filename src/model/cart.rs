use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartSlotDto {
    pub amount: i32,
    pub card_id: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CartDto {
    pub cards: Vec<CartSlotDto>,
}
