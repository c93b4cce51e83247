use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StarboardEntry::Table)
                    .if_not_exists()
                    .col(pk_auto(StarboardEntry::Id))
                    .col(string(StarboardEntry::GuildId))
                    .col(string_uniq(StarboardEntry::OriginalMessageId))
                    .col(string(StarboardEntry::OriginalChannelId))
                    .col(string(StarboardEntry::StarboardMessageId))
                    .col(integer(StarboardEntry::Stars).default(0))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StarboardEntry::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum StarboardEntry {
    Table,
    Id,
    GuildId,
    OriginalMessageId,
    OriginalChannelId,
    StarboardMessageId,
    Stars,
}
