//! Reference data factories: card types, languages, expansions, card keys and foilings.
//!
//! Reference rows use string primary keys. The explicit `create_*` functions take the id so
//! tests can assert on known values, while `create_reference_data` generates unique ids for
//! tests that only need something valid to point at.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// One row of each reference table, enough to insert a valid card.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub card_type: entity::card_type::Model,
    pub language: entity::language::Model,
    pub expansion: entity::expansion::Model,
    pub card_key: entity::card_key::Model,
    pub foiling: entity::foiling::Model,
}

pub async fn create_card_type(
    db: &DatabaseConnection,
    id: impl Into<String>,
    long_name: impl Into<String>,
    short_name: impl Into<String>,
) -> Result<entity::card_type::Model, DbErr> {
    entity::card_type::ActiveModel {
        id: ActiveValue::Set(id.into()),
        long_name: ActiveValue::Set(long_name.into()),
        short_name: ActiveValue::Set(short_name.into()),
    }
    .insert(db)
    .await
}

pub async fn create_language(
    db: &DatabaseConnection,
    id: impl Into<String>,
    long_name: impl Into<String>,
) -> Result<entity::language::Model, DbErr> {
    entity::language::ActiveModel {
        id: ActiveValue::Set(id.into()),
        long_name: ActiveValue::Set(long_name.into()),
    }
    .insert(db)
    .await
}

pub async fn create_expansion(
    db: &DatabaseConnection,
    id: impl Into<String>,
    short_name: impl Into<String>,
    full_name: impl Into<String>,
) -> Result<entity::expansion::Model, DbErr> {
    entity::expansion::ActiveModel {
        id: ActiveValue::Set(id.into()),
        short_name: ActiveValue::Set(short_name.into()),
        full_name: ActiveValue::Set(full_name.into()),
    }
    .insert(db)
    .await
}

pub async fn create_card_key(
    db: &DatabaseConnection,
    id: impl Into<String>,
    eng_name: impl Into<String>,
) -> Result<entity::card_key::Model, DbErr> {
    entity::card_key::ActiveModel {
        id: ActiveValue::Set(id.into()),
        eng_name: ActiveValue::Set(eng_name.into()),
    }
    .insert(db)
    .await
}

pub async fn create_foiling(
    db: &DatabaseConnection,
    id: impl Into<String>,
    name: impl Into<String>,
) -> Result<entity::foiling::Model, DbErr> {
    entity::foiling::ActiveModel {
        id: ActiveValue::Set(id.into()),
        name: ActiveValue::Set(name.into()),
    }
    .insert(db)
    .await
}

/// Creates one row in every reference table with unique generated ids.
///
/// # Returns
/// - `Ok(ReferenceData)` - The created rows
/// - `Err(DbErr)` - Database error during insert
pub async fn create_reference_data(db: &DatabaseConnection) -> Result<ReferenceData, DbErr> {
    let id = next_id();

    let card_type = create_card_type(
        db,
        format!("CT{}", id),
        format!("Card type {}", id),
        format!("ct{}", id),
    )
    .await?;
    let language = create_language(db, format!("L{}", id), format!("Language {}", id)).await?;
    let expansion = create_expansion(
        db,
        format!("EXP{}", id),
        format!("exp{}", id),
        format!("Expansion {}", id),
    )
    .await?;
    let card_key = create_card_key(db, format!("KEY{}", id), format!("Key {}", id)).await?;
    let foiling = create_foiling(db, format!("F{}", id), format!("Foil {}", id)).await?;

    Ok(ReferenceData {
        card_type,
        language,
        expansion,
        card_key,
        foiling,
    })
}
