//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::reference::ReferenceData;

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a card together with its poster and reference data.
///
/// The poster is a verified admin, matching who is allowed to post cards.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((poster, reference_data, card))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_card_with_dependencies(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, ReferenceData, entity::card::Model), DbErr> {
    let poster = crate::factory::user::UserFactory::new(db)
        .admin(true)
        .verified(true)
        .build()
        .await?;
    let refs = crate::factory::reference::create_reference_data(db).await?;
    let card = crate::factory::card::create_card(db, poster.id, &refs).await?;

    Ok((poster, refs, card))
}
