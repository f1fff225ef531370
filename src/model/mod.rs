//! Request and response DTOs shared by the HTTP layer and the OpenAPI document.

pub mod api;
pub mod auth;
pub mod card;
pub mod cart;
pub mod collection;
pub mod user;
