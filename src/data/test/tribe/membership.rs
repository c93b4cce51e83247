use super::*;

/// Tests adding a member who is already in a tribe.
///
/// Expected: Ok(true) for the first tribe, Ok(false) for any other
#[tokio::test]
async fn member_joins_one_tribe_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tribe)
        .with_table(entity::prelude::TribeMember)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_tribe(db, "1").await?;
    let second = factory::create_tribe(db, "2").await?;

    let repo = TribeRepository::new(db);
    assert!(repo.add_member(first.id, 3, Utc::now()).await?);
    assert!(!repo.add_member(second.id, 3, Utc::now()).await?);
    assert_eq!(repo.find_by_member(3).await?.unwrap().id, first.id);
    assert_eq!(repo.count_members(first.id).await?, 2);

    Ok(())
}

/// Tests leaving a tribe.
///
/// Expected: Ok(true) once, Ok(false) when no longer a member
#[tokio::test]
async fn removes_membership() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tribe)
        .with_table(entity::prelude::TribeMember)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tribe = factory::create_tribe(db, "1").await?;
    factory::create_tribe_member(db, tribe.id, "4").await?;

    let repo = TribeRepository::new(db);
    assert!(repo.remove_member(4).await?);
    assert!(!repo.remove_member(4).await?);
    assert!(repo.find_by_member(4).await?.is_none());

    Ok(())
}
