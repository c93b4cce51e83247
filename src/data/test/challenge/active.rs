use super::*;

/// Tests that the newest active challenge of the guild wins.
///
/// Expected: the most recent active one, ignoring closed and foreign challenges
#[tokio::test]
async fn finds_newest_active_challenge() -> Result<(), AppError> {
    let test = TestBuilder::new().with_challenge_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    factory::create_challenge(db, "1", true, now - Duration::days(2)).await?;
    let newest = factory::create_challenge(db, "1", true, now - Duration::days(1)).await?;
    factory::create_challenge(db, "1", false, now).await?;
    factory::create_challenge(db, "2", true, now).await?;

    let active = ChallengeRepository::new(db).find_active(1).await?.unwrap();
    assert_eq!(active.id, newest.id);

    Ok(())
}

/// Tests closing a challenge.
///
/// Expected: Ok(true) once, then no active challenge and Ok(false)
#[tokio::test]
async fn deactivates_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_challenge_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ChallengeRepository::new(db);
    let challenge = repo
        .create(
            CreateChallengeParam {
                guild_id: 3,
                title: "Read a book".to_string(),
                description: "Any book".to_string(),
                xp_reward: 300,
            },
            300,
            Utc::now(),
        )
        .await?;
    assert!(challenge.active);

    assert!(repo.deactivate(challenge.id).await?);
    assert!(!repo.deactivate(challenge.id).await?);
    assert!(repo.find_active(3).await?.is_none());

    Ok(())
}
