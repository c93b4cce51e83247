use super::*;

/// Tests that answers survive the round trip through the separator-joined column.
///
/// Expected: Ok with the answers in their original order
#[tokio::test]
async fn stores_answers_in_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Poll)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PollRepository::new(db);
    repo.create(
        CreatePollParam {
            guild_id: 1,
            channel_id: 2,
            message_id: 3,
            author_id: 4,
            question: "Pizza or pasta?".to_string(),
            options: vec!["Pizza".to_string(), "Pasta".to_string(), "Both".to_string()],
        },
        Utc::now(),
    )
    .await?;

    let poll = repo.find_by_message(1, 3).await?.unwrap();
    assert_eq!(poll.options, vec!["Pizza", "Pasta", "Both"]);
    assert!(poll.active);
    assert!(repo.find_by_message(99, 3).await?.is_none());

    Ok(())
}

/// Tests closing a poll twice.
///
/// Expected: Ok(true) for the first close, Ok(false) afterwards
#[tokio::test]
async fn closes_poll_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Poll)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let poll = factory::create_poll(db, "1", true).await?;

    let repo = PollRepository::new(db);
    assert!(repo.deactivate(poll.id).await?);
    assert!(!repo.deactivate(poll.id).await?);

    Ok(())
}
