use crate::{error::AppError, model::user::UserProfile, util::parse::parse_u64_from_string};

/// Role sold in a guild shop.
#[derive(Debug, Clone, PartialEq)]
pub struct ShopItem {
    pub id: i32,
    pub guild_id: u64,
    pub role_id: u64,
    pub name: String,
    pub price: i64,
    pub description: Option<String>,
}

impl ShopItem {
    pub fn from_entity(entity: entity::shop_item::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            guild_id: parse_u64_from_string(entity.guild_id)?,
            role_id: parse_u64_from_string(entity.role_id)?,
            name: entity.name,
            price: entity.price,
            description: entity.description,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateShopItemParam {
    pub guild_id: u64,
    pub role_id: u64,
    pub name: String,
    pub price: i64,
    pub description: Option<String>,
}

/// Item bought and the buyer's profile after paying.
#[derive(Debug, Clone, PartialEq)]
pub struct Purchase {
    pub item: ShopItem,
    pub buyer: UserProfile,
}
