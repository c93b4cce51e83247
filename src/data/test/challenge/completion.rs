use super::*;

/// Tests that a member completes a challenge only once.
///
/// Expected: Ok(true) for the first claim, Ok(false) for the repeat
#[tokio::test]
async fn records_completion_once_per_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_challenge_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let challenge = factory::create_challenge(db, "1", true, Utc::now()).await?;
    factory::create_challenge_completion(db, challenge.id, "20").await?;

    let repo = ChallengeRepository::new(db);
    assert!(!repo.record_completion(challenge.id, 20, Utc::now()).await?);
    assert!(repo.record_completion(challenge.id, 21, Utc::now()).await?);
    assert!(!repo.record_completion(challenge.id, 21, Utc::now()).await?);

    Ok(())
}
