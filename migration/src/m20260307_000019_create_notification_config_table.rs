use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NotificationConfig::Table)
                    .if_not_exists()
                    .col(pk_auto(NotificationConfig::Id))
                    .col(string_uniq(NotificationConfig::GuildId))
                    .col(string_null(NotificationConfig::FreeGamesChannelId))
                    .col(string_null(NotificationConfig::MentionRoleId))
                    .col(string_null(NotificationConfig::LastGameId))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(NotificationConfig::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum NotificationConfig {
    Table,
    Id,
    GuildId,
    FreeGamesChannelId,
    MentionRoleId,
    LastGameId,
}
