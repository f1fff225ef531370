//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Models that are cached derive serde traits so the cache can store them as JSON.

pub mod card;
pub mod card_query;
pub mod cart;
pub mod collection;
pub mod slot;
pub mod user;
