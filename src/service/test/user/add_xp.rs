use super::*;

/// Tests granting XP to a member seen for the first time.
///
/// Expected: Ok with a new profile and the XP applied
#[tokio::test]
async fn creates_profile_on_first_gain() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let gain = service.add_xp(50, 30).await?;

    assert_eq!(gain.previous_level, 1);
    assert_eq!(gain.profile.level, 1);
    assert_eq!(gain.profile.xp, 30);
    assert!(!gain.leveled_up());

    Ok(())
}

/// Tests a gain large enough to cross several levels.
///
/// Expected: Ok with three levels gained and the remainder kept
#[tokio::test]
async fn levels_up_several_times() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let gain = service.add_xp(51, 650).await?;

    assert_eq!(gain.levels_gained(), 3);
    assert_eq!(gain.profile.level, 4);
    assert_eq!(gain.profile.xp, 50);

    Ok(())
}

/// Tests that lifetime XP never decreases across gains.
///
/// Expected: Ok with a non-decreasing total after every gain
#[tokio::test]
async fn total_xp_is_monotonic() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let mut total = 0;

    for amount in [15, 99, 0, 250, -40, 1, 1000] {
        let gain = service.add_xp(52, amount).await?;
        assert!(gain.profile.total_xp() >= total);
        total = gain.profile.total_xp();
    }

    assert_eq!(total, 15 + 99 + 250 + 1 + 1000);

    Ok(())
}

/// Tests that XP is applied on top of an existing profile.
///
/// Expected: Ok with the stored XP increased
#[tokio::test]
async fn adds_to_existing_progress() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .discord_id("53")
        .level(2)
        .xp(190)
        .build()
        .await?;

    let service = UserService::new(db);
    let gain = service.add_xp(53, 20).await?;

    assert_eq!(gain.previous_level, 2);
    assert_eq!(gain.profile.level, 3);
    assert_eq!(gain.profile.xp, 10);

    Ok(())
}

/// Tests many gains for the same member running at the same time.
///
/// Expected: Ok with every gain applied, 20 x 5 XP in total
#[tokio::test]
async fn concurrent_gains_are_not_lost() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut tasks = Vec::new();
    for _ in 0..20 {
        let db = db.clone();
        tasks.push(tokio::spawn(async move {
            UserService::new(&db).add_xp(7, 5).await
        }));
    }
    for task in tasks {
        task.await.unwrap()?;
    }

    let profile = UserService::new(db).profile(7).await?;
    assert_eq!(profile.total_xp(), 100);
    assert_eq!(profile.level, 2);
    assert_eq!(profile.xp, 0);

    Ok(())
}
