use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StarboardConfig::Table)
                    .if_not_exists()
                    .col(pk_auto(StarboardConfig::Id))
                    .col(string_uniq(StarboardConfig::GuildId))
                    .col(string(StarboardConfig::ChannelId))
                    .col(integer(StarboardConfig::Threshold).default(3))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StarboardConfig::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum StarboardConfig {
    Table,
    Id,
    GuildId,
    ChannelId,
    Threshold,
}
