use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Habit::Table)
                    .if_not_exists()
                    .col(pk_auto(Habit::Id))
                    .col(string(Habit::UserId))
                    .col(string(Habit::Name))
                    .col(integer(Habit::CurrentStreak).default(0))
                    .col(integer(Habit::LongestStreak).default(0))
                    .col(date_null(Habit::LastCheckin))
                    .col(
                        timestamp_with_time_zone(Habit::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Habit::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Habit {
    Table,
    Id,
    UserId,
    Name,
    CurrentStreak,
    LongestStreak,
    LastCheckin,
    CreatedAt,
}
