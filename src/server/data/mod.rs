//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to keep the data layer separate from business logic. Repositories for
//! cards, collections, carts and reference lists also consult the cache layer before the
//! database and keep it current after every write.

pub mod card;
pub mod cart;
pub mod collection;
pub mod reference;
pub mod user;

#[cfg(test)]
mod test;
