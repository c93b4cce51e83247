use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Birthday::Table)
                    .if_not_exists()
                    .col(pk_auto(Birthday::Id))
                    .col(string_uniq(Birthday::UserId))
                    .col(integer(Birthday::Day))
                    .col(integer(Birthday::Month))
                    .col(integer_null(Birthday::LastCelebratedYear))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Birthday::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Birthday {
    Table,
    Id,
    UserId,
    Day,
    Month,
    LastCelebratedYear,
}
