use super::*;

/// Tests that a giveaway can only be closed once.
///
/// Expected: Ok(true), then Ok(false) and the giveaway no longer due
#[tokio::test]
async fn closes_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Giveaway)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let giveaway = factory::create_giveaway(db, now - Duration::seconds(1)).await?;

    let repo = GiveawayRepository::new(db);
    assert!(repo.deactivate(giveaway.id).await?);
    assert!(!repo.deactivate(giveaway.id).await?);
    assert!(repo.get_due(now).await?.is_empty());

    Ok(())
}
