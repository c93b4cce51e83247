use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    error::AppError,
    model::shop::{CreateShopItemParam, ShopItem},
};

pub struct ShopItemRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShopItemRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateShopItemParam) -> Result<ShopItem, AppError> {
        let entity = entity::shop_item::ActiveModel {
            guild_id: ActiveValue::Set(param.guild_id.to_string()),
            role_id: ActiveValue::Set(param.role_id.to_string()),
            name: ActiveValue::Set(param.name),
            price: ActiveValue::Set(param.price),
            description: ActiveValue::Set(param.description),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        ShopItem::from_entity(entity)
    }

    /// Finds an item by id within a guild. Items of other guilds are not visible.
    pub async fn find_in_guild(&self, guild_id: u64, id: i32) -> Result<Option<ShopItem>, AppError> {
        entity::prelude::ShopItem::find_by_id(id)
            .filter(entity::shop_item::Column::GuildId.eq(guild_id.to_string()))
            .one(self.db)
            .await?
            .map(ShopItem::from_entity)
            .transpose()
    }

    pub async fn find_by_role(&self, role_id: u64) -> Result<Option<ShopItem>, AppError> {
        entity::prelude::ShopItem::find()
            .filter(entity::shop_item::Column::RoleId.eq(role_id.to_string()))
            .one(self.db)
            .await?
            .map(ShopItem::from_entity)
            .transpose()
    }

    /// Items of a guild, cheapest first.
    pub async fn get_by_guild(&self, guild_id: u64) -> Result<Vec<ShopItem>, AppError> {
        entity::prelude::ShopItem::find()
            .filter(entity::shop_item::Column::GuildId.eq(guild_id.to_string()))
            .order_by_asc(entity::shop_item::Column::Price)
            .order_by_asc(entity::shop_item::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(ShopItem::from_entity)
            .collect()
    }
}
