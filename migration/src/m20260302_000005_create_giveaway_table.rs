use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Giveaway::Table)
                    .if_not_exists()
                    .col(pk_auto(Giveaway::Id))
                    .col(string(Giveaway::GuildId))
                    .col(string(Giveaway::ChannelId))
                    .col(string_uniq(Giveaway::MessageId))
                    .col(string(Giveaway::Prize))
                    .col(integer(Giveaway::WinnersCount).default(1))
                    .col(timestamp_with_time_zone(Giveaway::EndTime))
                    .col(boolean(Giveaway::Active).default(true))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Giveaway::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Giveaway {
    Table,
    Id,
    GuildId,
    ChannelId,
    MessageId,
    Prize,
    WinnersCount,
    EndTime,
    Active,
}
