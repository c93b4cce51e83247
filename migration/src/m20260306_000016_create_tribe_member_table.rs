use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TribeMember::Table)
                    .if_not_exists()
                    .col(pk_auto(TribeMember::Id))
                    .col(integer(TribeMember::TribeId))
                    .col(string_uniq(TribeMember::UserId))
                    .col(
                        timestamp_with_time_zone(TribeMember::JoinedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TribeMember::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TribeMember {
    Table,
    Id,
    TribeId,
    UserId,
    JoinedAt,
}
