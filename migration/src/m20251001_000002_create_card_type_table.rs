use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CardType::Table)
                    .if_not_exists()
                    .col(string(CardType::Id).primary_key())
                    .col(string(CardType::LongName))
                    .col(string(CardType::ShortName))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CardType::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CardType {
    Table,
    Id,
    LongName,
    ShortName,
}
