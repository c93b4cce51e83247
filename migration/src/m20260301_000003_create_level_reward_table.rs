use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LevelReward::Table)
                    .if_not_exists()
                    .col(pk_auto(LevelReward::Id))
                    .col(string(LevelReward::GuildId))
                    .col(integer(LevelReward::LevelRequired))
                    .col(string(LevelReward::RoleId))
                    .to_owned(),
            )
            .await?;

        // One reward per level per guild
        manager
            .create_index(
                Index::create()
                    .name("idx_level_reward_guild_level")
                    .table(LevelReward::Table)
                    .col(LevelReward::GuildId)
                    .col(LevelReward::LevelRequired)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_level_reward_guild_level")
                    .table(LevelReward::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(LevelReward::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum LevelReward {
    Table,
    Id,
    GuildId,
    LevelRequired,
    RoleId,
}
