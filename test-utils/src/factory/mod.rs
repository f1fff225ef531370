//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take the ids of the rows they reference, so
//! tests stay explicit about which user posted a card or owns a collection.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let refs = factory::reference::create_reference_data(&db).await?;
//!     let card = factory::card::create_card(&db, user.id, &refs).await?;
//!
//!     // Create with all dependencies
//!     let (user, refs, card) = factory::helpers::create_card_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let admin = factory::user::UserFactory::new(&db)
//!     .username("admin")
//!     .admin(true)
//!     .verified(true)
//!     .build()
//!     .await?;
//!
//! let card = factory::card::CardFactory::new(&db, admin.id, &refs)
//!     .name("Black Lotus")
//!     .price(25.0)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `reference` - Create card types, languages, expansions, card keys and foilings
//! - `card` - Create card entities
//! - `collection` - Create collections and collection slots
//! - `cart` - Create carts and cart slots
//! - `helpers` - ID generation and entities with dependencies

pub mod card;
pub mod cart;
pub mod collection;
pub mod helpers;
pub mod reference;
pub mod user;

pub use card::create_card;
pub use cart::{create_cart, create_cart_slot};
pub use collection::{create_collection, create_collection_slot};
pub use reference::create_reference_data;
pub use user::create_user;
