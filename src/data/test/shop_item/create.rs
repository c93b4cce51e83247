use super::*;

/// Tests adding an item to a shop.
///
/// Expected: Ok with the stored item
#[tokio::test]
async fn creates_item() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ShopItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ShopItemRepository::new(db);
    let item = repo
        .create(CreateShopItemParam {
            guild_id: 1,
            role_id: 2,
            name: "VIP".to_string(),
            price: 500,
            description: Some("Shiny name".to_string()),
        })
        .await?;

    assert_eq!(item.name, "VIP");
    assert_eq!(item.price, 500);
    assert_eq!(item.role_id, 2);

    let found = repo.find_by_role(2).await?;
    assert_eq!(found, Some(item));

    Ok(())
}

/// Tests that listing is ordered by price.
///
/// Expected: Ok with the cheapest item first
#[tokio::test]
async fn lists_cheapest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ShopItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_shop_item(db, "1", 900).await?;
    factory::create_shop_item(db, "1", 50).await?;
    factory::create_shop_item(db, "2", 10).await?;

    let repo = ShopItemRepository::new(db);
    let prices: Vec<i64> = repo
        .get_by_guild(1)
        .await?
        .iter()
        .map(|item| item.price)
        .collect();

    assert_eq!(prices, vec![50, 900]);

    Ok(())
}
