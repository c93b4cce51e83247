use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Challenge::Table)
                    .if_not_exists()
                    .col(pk_auto(Challenge::Id))
                    .col(string(Challenge::GuildId))
                    .col(string(Challenge::Title))
                    .col(string(Challenge::Description))
                    .col(integer(Challenge::XpReward).default(200))
                    .col(boolean(Challenge::Active).default(true))
                    .col(
                        timestamp_with_time_zone(Challenge::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Challenge::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Challenge {
    Table,
    Id,
    GuildId,
    Title,
    Description,
    XpReward,
    Active,
    CreatedAt,
}
