use crate::{
    error::AppError,
    model::challenge::CreateChallengeParam,
    service::{challenge::ChallengeService, user::UserService},
};
use chrono::Utc;
use test_utils::builder::TestBuilder;

fn param(guild_id: u64, xp_reward: i64) -> CreateChallengeParam {
    CreateChallengeParam {
        guild_id,
        title: "No sugar week".to_string(),
        description: "Skip sweets for seven days".to_string(),
        xp_reward,
    }
}

/// Tests claiming a challenge reward twice.
///
/// Expected: XP paid on the first claim, Err(BadRequest) on the second
#[tokio::test]
async fn pays_reward_once_per_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_challenge_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ChallengeService::new(db);
    service.create(param(1, 250), Utc::now()).await?;

    let done = service.complete(1, 30, Utc::now()).await?;
    assert_eq!(done.gain.profile.xp, 250);

    assert!(matches!(
        service.complete(1, 30, Utc::now()).await,
        Err(AppError::BadRequest(_))
    ));
    assert_eq!(UserService::new(db).profile(30).await?.xp, 250);

    Ok(())
}

/// Tests completing and ending without an active challenge.
///
/// Expected: Err(NotFound) in every guild without one, including after `end`
#[tokio::test]
async fn requires_active_challenge() -> Result<(), AppError> {
    let test = TestBuilder::new().with_challenge_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ChallengeService::new(db);
    service.create(param(1, 100), Utc::now()).await?;

    assert!(matches!(
        service.complete(2, 30, Utc::now()).await,
        Err(AppError::NotFound(_))
    ));

    let ended = service.end(1).await?;
    assert!(!ended.active);
    assert!(matches!(service.end(1).await, Err(AppError::NotFound(_))));
    assert!(matches!(
        service.complete(1, 30, Utc::now()).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests reward bounds.
///
/// Expected: Err(BadRequest) for zero, negative and oversized rewards
#[tokio::test]
async fn refuses_invalid_rewards() -> Result<(), AppError> {
    let test = TestBuilder::new().with_challenge_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ChallengeService::new(db);
    for xp in [0, -5, 10_001, i64::MAX] {
        assert!(matches!(
            service.create(param(1, xp), Utc::now()).await,
            Err(AppError::BadRequest(_))
        ));
    }
    assert!(service.active(1).await?.is_none());

    Ok(())
}
