//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Caches consulted by the repositories
//! - Token service for signing and verifying session tokens
//! - Search limits taken from the configuration

use sea_orm::DatabaseConnection;

use crate::server::{cache::Caches, service::auth::token::TokenService};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: the database connection is a pool handle, the caches
/// share one reference-counted backend and the token service only holds key material.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Typed caches over the configured backend (Redis or no-op).
    pub caches: Caches,

    /// Signs tokens at login and verifies them on authenticated requests.
    pub tokens: TokenService,

    /// Number of cards returned per search page.
    pub card_page_size: u64,

    /// Maximum number of keywords accepted in a search.
    pub query_keyword_limit: usize,
}

impl AppState {
    /// Creates a new AppState instance.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `caches` - Typed caches over the chosen backend
    /// - `tokens` - Token service built from the signing key and realm
    /// - `card_page_size` - Cards per search page
    /// - `query_keyword_limit` - Maximum keywords per search
    ///
    /// # Returns
    /// - `AppState` - New application state instance
    pub fn new(
        db: DatabaseConnection,
        caches: Caches,
        tokens: TokenService,
        card_page_size: u64,
        query_keyword_limit: usize,
    ) -> Self {
        Self {
            db,
            caches,
            tokens,
            card_page_size,
            query_keyword_limit,
        }
    }
}
