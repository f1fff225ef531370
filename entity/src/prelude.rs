pub use super::card::Entity as Card;
pub use super::card_key::Entity as CardKey;
pub use super::card_type::Entity as CardType;
pub use super::cart::Entity as Cart;
pub use super::cart_slot::Entity as CartSlot;
pub use super::collection::Entity as Collection;
pub use super::collection_slot::Entity as CollectionSlot;
pub use super::expansion::Entity as Expansion;
pub use super::foiling::Entity as Foiling;
pub use super::language::Entity as Language;
pub use super::user::Entity as User;
