//! Card marketplace backend.
//!
//! The backend uses Axum as the web framework and SeaORM for database access, with an
//! optional Redis cache in front of the database.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, access control and DTO conversion
//! - **Service Layer** (`service/`) - Business rules between controllers and the data layer
//! - **Data Layer** (`data/`) - Repositories with cache-aside reads and write-back
//! - **Cache** (`cache/`) - Cache backends and typed caches
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Token extraction and authentication guards
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment or file based configuration
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Tracing, database and cache initialization
//! - **Router** (`router`) - Route table and OpenAPI document
//!
//! # Request Flow
//!
//! 1. **Router** matches the request to a controller
//! 2. **Controller** resolves the session, checks access and converts the DTO to params
//! 3. **Service** applies business rules
//! 4. **Data** reads through the cache, queries the database and refreshes cache entries
//! 5. **Controller** converts the domain model back to a DTO

pub mod cache;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
