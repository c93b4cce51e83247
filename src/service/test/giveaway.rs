use crate::{error::AppError, model::giveaway::CreateGiveawayParam, service::giveaway::GiveawayService};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

/// Tests that a due giveaway is only finished once across polling passes.
///
/// Expected: the first pass finishes it, the second pass sees nothing due
#[tokio::test]
async fn due_giveaway_fires_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Giveaway)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    factory::create_giveaway(db, now - Duration::seconds(30)).await?;

    let service = GiveawayService::new(db);

    let mut fired = 0;
    for _ in 0..2 {
        for giveaway in service.due(now).await? {
            if service.finish(giveaway.id).await? {
                fired += 1;
            }
        }
    }

    assert_eq!(fired, 1);

    Ok(())
}

/// Tests creating a giveaway and looking it up by message.
///
/// Expected: Ok, then Err(NotFound) once finished
#[tokio::test]
async fn finds_active_giveaway_until_finished() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Giveaway)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GiveawayService::new(db);
    let param = CreateGiveawayParam {
        guild_id: 1,
        channel_id: 2,
        message_id: 3,
        prize: "Nitro".to_string(),
        winners_count: 2,
        end_time: Utc::now() + Duration::hours(1),
    };

    let giveaway = service.create(param.clone()).await?;
    assert_eq!(service.find_active(1, 3).await?.id, giveaway.id);

    service.finish(giveaway.id).await?;
    assert!(matches!(service.find_active(1, 3).await, Err(AppError::NotFound(_))));

    let invalid = CreateGiveawayParam {
        message_id: 4,
        winners_count: 0,
        ..param
    };
    assert!(matches!(service.create(invalid).await, Err(AppError::BadRequest(_))));

    Ok(())
}
