pub use sea_orm_migration::prelude::*;

mod m20251001_000001_create_user_table;
mod m20251001_000002_create_card_type_table;
mod m20251001_000003_create_language_table;
mod m20251001_000004_create_expansion_table;
mod m20251001_000005_create_card_key_table;
mod m20251001_000006_create_foiling_table;
mod m20251002_000007_create_card_table;
mod m20251003_000008_create_collection_table;
mod m20251003_000009_create_collection_slot_table;
mod m20251003_000010_create_cart_table;
mod m20251003_000011_create_cart_slot_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251001_000001_create_user_table::Migration),
            Box::new(m20251001_000002_create_card_type_table::Migration),
            Box::new(m20251001_000003_create_language_table::Migration),
            Box::new(m20251001_000004_create_expansion_table::Migration),
            Box::new(m20251001_000005_create_card_key_table::Migration),
            Box::new(m20251001_000006_create_foiling_table::Migration),
            Box::new(m20251002_000007_create_card_table::Migration),
            Box::new(m20251003_000008_create_collection_table::Migration),
            Box::new(m20251003_000009_create_collection_slot_table::Migration),
            Box::new(m20251003_000010_create_cart_table::Migration),
            Box::new(m20251003_000011_create_cart_slot_table::Migration),
        ]
    }
}
