use crate::{
    error::AppError,
    model::tribe::{DEFAULT_MOTTO, TRIBE_COST},
    service::{tribe::TribeService, user::UserService},
};
use test_utils::{builder::TestBuilder, factory};

/// Tests founding a tribe and inviting a member.
///
/// Expected: the founder pays the cost, the invitee joins, the card counts both
#[tokio::test]
async fn founds_tribe_and_invites() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Tribe)
        .with_table(entity::prelude::TribeMember)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .discord_id("1")
        .xp(TRIBE_COST + 10)
        .build()
        .await?;

    let service = TribeService::new(db);
    let tribe = service.create(1, " Owls ", None).await?;
    assert_eq!(tribe.name, "Owls");
    assert_eq!(tribe.description, DEFAULT_MOTTO);
    assert_eq!(UserService::new(db).profile(1).await?.xp, 10);

    service.invite(1, 2, false).await?;

    let card = service.card_of(2).await?.unwrap();
    assert_eq!(card.tribe.id, tribe.id);
    assert_eq!(card.member_count, 2);

    Ok(())
}

/// Tests the refused tribe actions.
///
/// Expected: Err(BadRequest) for bots, self invites, non-leaders and a leaving leader
#[tokio::test]
async fn refuses_invalid_tribe_actions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Tribe)
        .with_table(entity::prelude::TribeMember)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tribe = factory::create_tribe(db, "1").await?;
    factory::create_tribe_member(db, tribe.id, "2").await?;

    let service = TribeService::new(db);
    assert!(matches!(service.invite(1, 3, true).await, Err(AppError::BadRequest(_))));
    assert!(matches!(service.invite(1, 1, false).await, Err(AppError::BadRequest(_))));
    assert!(matches!(service.invite(2, 3, false).await, Err(AppError::BadRequest(_))));
    assert!(matches!(service.leave(1).await, Err(AppError::BadRequest(_))));
    assert!(matches!(service.leave(3).await, Err(AppError::NotFound(_))));

    let left = service.leave(2).await?;
    assert_eq!(left.id, tribe.id);
    assert!(service.card_of(2).await?.is_none());

    Ok(())
}
