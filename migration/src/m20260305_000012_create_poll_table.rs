use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Poll::Table)
                    .if_not_exists()
                    .col(pk_auto(Poll::Id))
                    .col(string(Poll::GuildId))
                    .col(string(Poll::ChannelId))
                    .col(string_uniq(Poll::MessageId))
                    .col(string(Poll::AuthorId))
                    .col(string(Poll::Question))
                    .col(string(Poll::Options))
                    .col(boolean(Poll::Active).default(true))
                    .col(
                        timestamp_with_time_zone(Poll::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Poll::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Poll {
    Table,
    Id,
    GuildId,
    ChannelId,
    MessageId,
    AuthorId,
    Question,
    Options,
    Active,
    CreatedAt,
}
