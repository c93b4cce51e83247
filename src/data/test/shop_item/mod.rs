use crate::{data::shop_item::ShopItemRepository, error::AppError, model::shop::CreateShopItemParam};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_in_guild;
