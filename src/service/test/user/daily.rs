use super::*;

/// Tests a first daily claim.
///
/// Expected: Ok(Claimed) with the rolled rewards applied
#[tokio::test]
async fn grants_rewards() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let service = UserService::new(db);
    let claim = service.daily(8, now, 650, 120).await?;

    let DailyClaim::Claimed { xp, coins, gain } = claim else {
        panic!("expected a successful claim");
    };
    assert_eq!((xp, coins), (650, 120));
    assert_eq!(gain.profile.level, 4);

    let profile = service.profile(8).await?;
    assert_eq!(profile.coins, 120);
    assert!(profile.last_daily.is_some());

    Ok(())
}

/// Tests claiming again before 24 hours have passed.
///
/// Expected: Ok(CoolingDown) with the next claim 24 hours after the last one
#[tokio::test]
async fn enforces_cooldown() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let last = chrono::DateTime::from_timestamp(1_790_000_000, 0).unwrap();
    factory::user::UserFactory::new(db)
        .discord_id("9")
        .coins(10)
        .last_daily(Some(last))
        .build()
        .await?;

    let service = UserService::new(db);
    let claim = service.daily(9, last + Duration::hours(23), 500, 100).await?;

    assert_eq!(
        claim,
        DailyClaim::CoolingDown {
            next_claim: last + Duration::hours(24)
        }
    );
    assert_eq!(service.profile(9).await?.coins, 10);

    let claim = service.daily(9, last + Duration::hours(24), 500, 100).await?;
    assert!(matches!(claim, DailyClaim::Claimed { .. }));
    assert_eq!(service.profile(9).await?.coins, 110);

    Ok(())
}
