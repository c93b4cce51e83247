use super::*;

/// Tests that configuring the starboard again replaces the existing row.
///
/// Expected: Ok with one config per guild holding the latest values
#[tokio::test]
async fn upserts_guild_config() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::StarboardConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StarboardRepository::new(db);
    let first = repo.upsert_config(1, 10, 3).await?;
    let second = repo.upsert_config(1, 20, 5).await?;

    assert_eq!(first.id, second.id);
    let stored = repo.find_config(1).await?.unwrap();
    assert_eq!(stored.channel_id, 20);
    assert_eq!(stored.threshold, 5);

    Ok(())
}

/// Tests updating the star count of a starboard post.
///
/// Expected: Ok with the new count stored
#[tokio::test]
async fn updates_star_count() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::StarboardEntry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let entry = factory::create_starboard_entry(db, "1", 3).await?;
    let message_id: u64 = entry.original_message_id.parse().unwrap();

    let repo = StarboardRepository::new(db);
    repo.update_stars(entry.id, 7).await?;

    assert_eq!(repo.find_entry(message_id).await?.unwrap().stars, 7);

    Ok(())
}
