use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reminder::Table)
                    .if_not_exists()
                    .col(pk_auto(Reminder::Id))
                    .col(string(Reminder::UserId))
                    .col(string(Reminder::ChannelId))
                    .col(text(Reminder::Message))
                    .col(
                        timestamp_with_time_zone(Reminder::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone(Reminder::DueAt))
                    .col(boolean(Reminder::Active).default(true))
                    .to_owned(),
            )
            .await?;

        // The polling loop filters on (active, due_at)
        manager
            .create_index(
                Index::create()
                    .name("idx_reminder_active_due_at")
                    .table(Reminder::Table)
                    .col(Reminder::Active)
                    .col(Reminder::DueAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_reminder_active_due_at")
                    .table(Reminder::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Reminder::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Reminder {
    Table,
    Id,
    UserId,
    ChannelId,
    Message,
    CreatedAt,
    DueAt,
    Active,
}
