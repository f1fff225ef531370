use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CardKey::Table)
                    .if_not_exists()
                    .col(string(CardKey::Id).primary_key())
                    .col(string(CardKey::EngName))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CardKey::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CardKey {
    Table,
    Id,
    EngName,
}
