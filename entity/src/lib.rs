//! SeaORM entity models for the card store schema.

pub mod prelude;

pub mod card;
pub mod card_key;
pub mod card_type;
pub mod cart;
pub mod cart_slot;
pub mod collection;
pub mod collection_slot;
pub mod expansion;
pub mod foiling;
pub mod language;
pub mod user;
