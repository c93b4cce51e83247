use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NewsFeed::Table)
                    .if_not_exists()
                    .col(pk_auto(NewsFeed::Id))
                    .col(string(NewsFeed::GuildId))
                    .col(string(NewsFeed::ChannelId))
                    .col(string_null(NewsFeed::RoleId))
                    .col(string(NewsFeed::Name))
                    .col(string(NewsFeed::Url))
                    .col(string(NewsFeed::Kind))
                    .col(string_null(NewsFeed::LastPostUrl))
                    .col(
                        timestamp_with_time_zone(NewsFeed::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(NewsFeed::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum NewsFeed {
    Table,
    Id,
    GuildId,
    ChannelId,
    RoleId,
    Name,
    Url,
    Kind,
    LastPostUrl,
    UpdatedAt,
}
