use crate::{
    error::AppError,
    model::starboard::CreateStarboardEntryParam,
    service::starboard::{StarAction, StarboardService},
};
use test_utils::builder::TestBuilder;

/// Tests a message crossing the threshold and collecting more stars.
///
/// Expected: Post first, then Update with the recorded entry
#[tokio::test]
async fn posts_then_updates() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::StarboardConfig)
        .with_table(entity::prelude::StarboardEntry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = StarboardService::new(db);
    let config = service.configure(1, 50, 3).await?;

    assert_eq!(service.evaluate(&config, 10, 100, 2).await?, StarAction::Ignore);
    assert_eq!(service.evaluate(&config, 10, 100, 3).await?, StarAction::Post);

    let entry = service
        .record(CreateStarboardEntryParam {
            guild_id: 1,
            original_message_id: 100,
            original_channel_id: 10,
            starboard_message_id: 200,
            stars: 3,
        })
        .await?;
    service.update_stars(entry.id, 4).await?;

    match service.evaluate(&config, 10, 100, 4).await? {
        StarAction::Update(stored) => assert_eq!(stored.stars, 4),
        other => panic!("expected an update, got {:?}", other),
    }
    assert_eq!(service.evaluate(&config, 50, 200, 9).await?, StarAction::Ignore);

    Ok(())
}

/// Tests threshold validation.
///
/// Expected: Err(BadRequest) outside 1 to 100 and no config stored
#[tokio::test]
async fn refuses_invalid_threshold() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::StarboardConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = StarboardService::new(db);
    assert!(matches!(service.configure(1, 50, 0).await, Err(AppError::BadRequest(_))));
    assert!(matches!(service.configure(1, 50, 101).await, Err(AppError::BadRequest(_))));
    assert!(service.config(1).await?.is_none());

    Ok(())
}
