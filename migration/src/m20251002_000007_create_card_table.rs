use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251001_000001_create_user_table::User,
    m20251001_000002_create_card_type_table::CardType,
    m20251001_000003_create_language_table::Language,
    m20251001_000004_create_expansion_table::Expansion,
    m20251001_000005_create_card_key_table::CardKey,
    m20251001_000006_create_foiling_table::Foiling,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Card::Table)
                    .if_not_exists()
                    .col(pk_auto(Card::Id))
                    .col(string(Card::Name))
                    .col(text(Card::Text))
                    .col(string(Card::ImageUrl).default(""))
                    .col(double(Card::Price))
                    .col(integer(Card::InStockAmount).default(0))
                    .col(string(Card::CardKeyId))
                    .col(integer(Card::PosterId))
                    .col(string(Card::CardTypeId))
                    .col(string(Card::LanguageId))
                    .col(string(Card::ExpansionId))
                    .col(string_null(Card::FoilingId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_card_poster_id")
                            .from(Card::Table, Card::PosterId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_card_card_key_id")
                            .from(Card::Table, Card::CardKeyId)
                            .to(CardKey::Table, CardKey::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_card_card_type_id")
                            .from(Card::Table, Card::CardTypeId)
                            .to(CardType::Table, CardType::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_card_language_id")
                            .from(Card::Table, Card::LanguageId)
                            .to(Language::Table, Language::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_card_expansion_id")
                            .from(Card::Table, Card::ExpansionId)
                            .to(Expansion::Table, Expansion::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_card_foiling_id")
                            .from(Card::Table, Card::FoilingId)
                            .to(Foiling::Table, Foiling::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Card::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Card {
    Table,
    Id,
    Name,
    Text,
    ImageUrl,
    Price,
    InStockAmount,
    CardKeyId,
    PosterId,
    CardTypeId,
    LanguageId,
    ExpansionId,
    FoilingId,
}
