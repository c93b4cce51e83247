use super::*;

/// Tests that an item cannot be looked up from another guild.
///
/// Expected: Ok(Some) in its own guild, Ok(None) elsewhere
#[tokio::test]
async fn hides_items_of_other_guilds() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ShopItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let item = factory::create_shop_item(db, "1", 100).await?;

    let repo = ShopItemRepository::new(db);
    assert!(repo.find_in_guild(1, item.id).await?.is_some());
    assert!(repo.find_in_guild(2, item.id).await?.is_none());

    Ok(())
}
