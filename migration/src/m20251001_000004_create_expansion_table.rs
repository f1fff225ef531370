use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Expansion::Table)
                    .if_not_exists()
                    .col(string(Expansion::Id).primary_key())
                    .col(string(Expansion::ShortName))
                    .col(string(Expansion::FullName))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Expansion::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Expansion {
    Table,
    Id,
    ShortName,
    FullName,
}
