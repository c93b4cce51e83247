use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tribe::Table)
                    .if_not_exists()
                    .col(pk_auto(Tribe::Id))
                    .col(string_uniq(Tribe::Name))
                    .col(string(Tribe::Description))
                    .col(string(Tribe::LeaderId))
                    .col(
                        timestamp_with_time_zone(Tribe::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tribe::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Tribe {
    Table,
    Id,
    Name,
    Description,
    LeaderId,
    CreatedAt,
}
