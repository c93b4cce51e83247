use sea_orm::DatabaseConnection;

use crate::{
    data::{shop_item::ShopItemRepository, user::UserRepository},
    error::AppError,
    model::shop::{CreateShopItemParam, Purchase, ShopItem},
};

pub struct ShopService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShopService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, guild_id: u64) -> Result<Vec<ShopItem>, AppError> {
        ShopItemRepository::new(self.db).get_by_guild(guild_id).await
    }

    /// Puts a role on sale. A role can only be sold by one item.
    pub async fn add(&self, param: CreateShopItemParam) -> Result<ShopItem, AppError> {
        if param.name.trim().is_empty() {
            return Err(AppError::BadRequest("The item needs a name.".to_string()));
        }
        if param.price <= 0 {
            return Err(AppError::BadRequest(
                "The price must be greater than zero.".to_string(),
            ));
        }

        let repo = ShopItemRepository::new(self.db);
        if repo.find_by_role(param.role_id).await?.is_some() {
            return Err(AppError::BadRequest(
                "That role is already sold in the shop.".to_string(),
            ));
        }

        repo.create(CreateShopItemParam {
            name: param.name.trim().to_string(),
            ..param
        })
        .await
    }

    /// Charges the buyer for an item of this guild.
    ///
    /// The role itself is granted by the caller once the payment succeeded.
    ///
    /// # Returns
    /// - `Ok(Purchase)` - Item bought and the buyer's remaining balance
    /// - `Err(AppError::NotFound)` - Unknown item or the buyer has no profile
    /// - `Err(AppError::BadRequest)` - Insufficient funds
    pub async fn buy(&self, guild_id: u64, buyer_id: u64, item_id: i32) -> Result<Purchase, AppError> {
        let item = ShopItemRepository::new(self.db)
            .find_in_guild(guild_id, item_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Item not found.".to_string()))?;

        let users = UserRepository::new(self.db);
        if users.find_by_discord_id(buyer_id).await?.is_none() {
            return Err(AppError::NotFound(
                "You do not have a profile yet. Chat a little first!".to_string(),
            ));
        }

        let buyer = users
            .try_spend(buyer_id, item.price)
            .await?
            .ok_or_else(|| {
                AppError::BadRequest(format!(
                    "Insufficient funds. {} costs DC$ {}.",
                    item.name, item.price
                ))
            })?;

        Ok(Purchase { item, buyer })
    }
}
