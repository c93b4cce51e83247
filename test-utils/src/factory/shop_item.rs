//! Shop item factory.

use crate::factory::helpers::{next_id, next_snowflake};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating role items sold in a guild shop.
pub struct ShopItemFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    role_id: String,
    name: String,
    price: i64,
    description: Option<String>,
}

impl<'a> ShopItemFactory<'a> {
    /// Defaults to a 100 coin item named `Item {id}` in the given guild.
    pub fn new(db: &'a DatabaseConnection, guild_id: &str) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: guild_id.to_string(),
            role_id: next_snowflake(),
            name: format!("Item {}", id),
            price: 100,
            description: None,
        }
    }

    pub fn role_id(mut self, role_id: impl Into<String>) -> Self {
        self.role_id = role_id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn price(mut self, price: i64) -> Self {
        self.price = price;
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub async fn build(self) -> Result<entity::shop_item::Model, DbErr> {
        entity::shop_item::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            role_id: ActiveValue::Set(self.role_id),
            name: ActiveValue::Set(self.name),
            price: ActiveValue::Set(self.price),
            description: ActiveValue::Set(self.description),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a shop item with the given price.
pub async fn create_shop_item(
    db: &DatabaseConnection,
    guild_id: &str,
    price: i64,
) -> Result<entity::shop_item::Model, DbErr> {
    ShopItemFactory::new(db, guild_id).price(price).build().await
}
