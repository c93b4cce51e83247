use sea_orm_migration::{prelude::*, schema::*};

const DEFAULT_WELCOME_MESSAGE: &str =
    "Hello {user}, welcome to {server}!\nYou are member #{count}.\nHave fun!";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildConfig::Table)
                    .if_not_exists()
                    .col(pk_auto(GuildConfig::Id))
                    .col(string_uniq(GuildConfig::GuildId))
                    .col(string_null(GuildConfig::WelcomeChannelId))
                    .col(string_null(GuildConfig::WelcomeRoleId))
                    .col(string_null(GuildConfig::TicketCategoryId))
                    .col(string_null(GuildConfig::LogChannelId))
                    .col(string_null(GuildConfig::DailyChannelId))
                    .col(text(GuildConfig::WelcomeMessageText).default(DEFAULT_WELCOME_MESSAGE))
                    .col(boolean(GuildConfig::ModuleWelcome).default(true))
                    .col(boolean(GuildConfig::ModuleLevels).default(true))
                    .col(boolean(GuildConfig::ModuleEconomy).default(true))
                    .col(boolean(GuildConfig::ModuleMusic).default(true))
                    .col(boolean(GuildConfig::ModuleTickets).default(true))
                    .col(boolean(GuildConfig::ModuleAutomod).default(true))
                    .col(boolean(GuildConfig::ModuleGiveaways).default(true))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildConfig::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GuildConfig {
    Table,
    Id,
    GuildId,
    WelcomeChannelId,
    WelcomeRoleId,
    TicketCategoryId,
    LogChannelId,
    DailyChannelId,
    WelcomeMessageText,
    ModuleWelcome,
    ModuleLevels,
    ModuleEconomy,
    ModuleMusic,
    ModuleTickets,
    ModuleAutomod,
    ModuleGiveaways,
}
