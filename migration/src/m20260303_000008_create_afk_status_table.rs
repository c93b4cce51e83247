use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AfkStatus::Table)
                    .if_not_exists()
                    .col(pk_auto(AfkStatus::Id))
                    .col(string_uniq(AfkStatus::UserId))
                    .col(string(AfkStatus::GuildId))
                    .col(string(AfkStatus::Reason))
                    .col(
                        timestamp_with_time_zone(AfkStatus::StartTime)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AfkStatus::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum AfkStatus {
    Table,
    Id,
    UserId,
    GuildId,
    Reason,
    StartTime,
}
