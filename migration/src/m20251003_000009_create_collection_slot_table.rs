use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251002_000007_create_card_table::Card,
    m20251003_000008_create_collection_table::Collection,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CollectionSlot::Table)
                    .if_not_exists()
                    .col(pk_auto(CollectionSlot::Id))
                    .col(integer(CollectionSlot::Amount))
                    .col(integer(CollectionSlot::CardId))
                    .col(integer(CollectionSlot::CollectionId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_collection_slot_card_id")
                            .from(CollectionSlot::Table, CollectionSlot::CardId)
                            .to(Card::Table, Card::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_collection_slot_collection_id")
                            .from(CollectionSlot::Table, CollectionSlot::CollectionId)
                            .to(Collection::Table, Collection::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_collection_slot_collection_card")
                    .table(CollectionSlot::Table)
                    .col(CollectionSlot::CollectionId)
                    .col(CollectionSlot::CardId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CollectionSlot::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CollectionSlot {
    Table,
    Id,
    Amount,
    CardId,
    CollectionId,
}
