use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ShopItem::Table)
                    .if_not_exists()
                    .col(pk_auto(ShopItem::Id))
                    .col(string(ShopItem::GuildId))
                    .col(string_uniq(ShopItem::RoleId))
                    .col(string(ShopItem::Name))
                    .col(big_integer(ShopItem::Price))
                    .col(text_null(ShopItem::Description))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ShopItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ShopItem {
    Table,
    Id,
    GuildId,
    RoleId,
    Name,
    Price,
    Description,
}
