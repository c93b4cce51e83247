use super::*;

/// Tests founding a tribe with enough in-level XP.
///
/// Expected: Ok with the cost deducted and the leader as first member
#[tokio::test]
async fn founds_tribe_and_charges_leader() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Tribe)
        .with_table(entity::prelude::TribeMember)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .discord_id("42")
        .level(3)
        .xp(1_500)
        .build()
        .await?;

    let repo = TribeRepository::new(db);
    let tribe = repo.create("Owls", "Night shift", 42, 1_000, Utc::now()).await?;

    assert_eq!(tribe.leader_id, 42);
    assert_eq!(repo.count_members(tribe.id).await?, 1);
    assert_eq!(repo.find_by_member(42).await?.unwrap().id, tribe.id);

    let leader = entity::prelude::User::find_by_id("42".to_string())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(leader.xp, 500);
    assert_eq!(leader.level, 3);

    Ok(())
}

/// Tests that a refused founding leaves XP and tables untouched.
///
/// Expected: Err(BadRequest) for too little XP and for a taken name, nothing written
#[tokio::test]
async fn refusal_rolls_back_everything() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Tribe)
        .with_table(entity::prelude::TribeMember)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .discord_id("7")
        .xp(999)
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .discord_id("8")
        .xp(5_000)
        .build()
        .await?;
    let existing = factory::create_tribe(db, "9").await?;

    let repo = TribeRepository::new(db);

    let poor = repo.create("Foxes", "", 7, 1_000, Utc::now()).await;
    assert!(matches!(poor, Err(AppError::BadRequest(_))));

    let taken = repo.create(&existing.name, "", 8, 1_000, Utc::now()).await;
    assert!(matches!(taken, Err(AppError::BadRequest(_))));

    let rich = entity::prelude::User::find_by_id("8".to_string())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(rich.xp, 5_000);
    assert!(repo.find_by_member(7).await?.is_none());
    assert!(repo.find_by_member(8).await?.is_none());
    assert_eq!(entity::prelude::Tribe::find().count(db).await?, 1);

    Ok(())
}

/// Tests that a member of a tribe cannot found another.
///
/// Expected: Err(BadRequest) and the XP untouched
#[tokio::test]
async fn members_cannot_found_second_tribe() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Tribe)
        .with_table(entity::prelude::TribeMember)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .discord_id("5")
        .xp(3_000)
        .build()
        .await?;
    factory::create_tribe(db, "5").await?;

    let result = TribeRepository::new(db)
        .create("Second", "", 5, 1_000, Utc::now())
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    let user = entity::prelude::User::find_by_id("5".to_string())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(user.xp, 3_000);

    Ok(())
}
