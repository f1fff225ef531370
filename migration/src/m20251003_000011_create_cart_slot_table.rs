use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251002_000007_create_card_table::Card,
    m20251003_000010_create_cart_table::Cart,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CartSlot::Table)
                    .if_not_exists()
                    .col(pk_auto(CartSlot::Id))
                    .col(integer(CartSlot::Amount))
                    .col(integer(CartSlot::CardId))
                    .col(integer(CartSlot::CartId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cart_slot_card_id")
                            .from(CartSlot::Table, CartSlot::CardId)
                            .to(Card::Table, Card::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cart_slot_cart_id")
                            .from(CartSlot::Table, CartSlot::CartId)
                            .to(Cart::Table, Cart::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_cart_slot_cart_card")
                    .table(CartSlot::Table)
                    .col(CartSlot::CartId)
                    .col(CartSlot::CardId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CartSlot::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CartSlot {
    Table,
    Id,
    Amount,
    CardId,
    CartId,
}
