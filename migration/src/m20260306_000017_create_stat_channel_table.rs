use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StatChannel::Table)
                    .if_not_exists()
                    .col(pk_auto(StatChannel::Id))
                    .col(string(StatChannel::GuildId))
                    .col(string_uniq(StatChannel::ChannelId))
                    .col(string(StatChannel::Kind))
                    .col(string(StatChannel::NameFormat))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StatChannel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum StatChannel {
    Table,
    Id,
    GuildId,
    ChannelId,
    Kind,
    NameFormat,
}
