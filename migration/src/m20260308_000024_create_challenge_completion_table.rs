use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ChallengeCompletion::Table)
                    .if_not_exists()
                    .col(pk_auto(ChallengeCompletion::Id))
                    .col(integer(ChallengeCompletion::ChallengeId))
                    .col(string(ChallengeCompletion::UserId))
                    .col(
                        timestamp_with_time_zone(ChallengeCompletion::CompletedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // One completion per member per challenge
        manager
            .create_index(
                Index::create()
                    .name("idx_challenge_completion_challenge_user")
                    .table(ChallengeCompletion::Table)
                    .col(ChallengeCompletion::ChallengeId)
                    .col(ChallengeCompletion::UserId)
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
                    .name("idx_challenge_completion_challenge_user")
                    .table(ChallengeCompletion::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ChallengeCompletion::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ChallengeCompletion {
    Table,
    Id,
    ChallengeId,
    UserId,
    CompletedAt,
}
