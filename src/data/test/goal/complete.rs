use super::*;

/// Tests completing the same goal twice.
///
/// Expected: Some on the first call, None on the second
#[tokio::test]
async fn completes_goal_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Goal)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let goal = factory::create_goal(db, "8", false).await?;

    let repo = GoalRepository::new(db);
    let done = repo.complete(goal.id, 8, Utc::now()).await?.unwrap();
    assert!(done.completed);
    assert!(done.completed_at.is_some());

    assert!(repo.complete(goal.id, 8, Utc::now()).await?.is_none());
    assert!(repo.get_pending(8).await?.is_empty());

    Ok(())
}

/// Tests that another member cannot complete someone's goal.
///
/// Expected: None and the goal still pending for its owner
#[tokio::test]
async fn only_owner_completes_goal() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Goal)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let goal = factory::create_goal(db, "8", false).await?;
    factory::create_goal(db, "8", true).await?;

    let repo = GoalRepository::new(db);
    assert!(repo.complete(goal.id, 9, Utc::now()).await?.is_none());

    let pending = repo.get_pending(8).await?;
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, goal.id);

    Ok(())
}
