use crate::{
    error::AppError,
    model::poll::CreatePollParam,
    service::poll::PollService,
};
use test_utils::{builder::TestBuilder, factory};

/// Tests closing a poll twice.
///
/// Expected: Ok once, then Err(NotFound)
#[tokio::test]
async fn closes_poll_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Poll)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let poll = factory::create_poll(db, "1", true).await?;
    let message_id: u64 = poll.message_id.parse().unwrap();

    let service = PollService::new(db);
    let closed = service.close(1, message_id).await?;
    assert!(!closed.active);
    assert_eq!(closed.options, vec!["Yes", "No"]);

    assert!(matches!(
        service.close(1, message_id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.close(2, message_id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests the answer count bounds.
///
/// Expected: Err(BadRequest) for a single answer
#[tokio::test]
async fn needs_two_answers() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Poll)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PollService::new(db)
        .create(CreatePollParam {
            guild_id: 1,
            channel_id: 2,
            message_id: 3,
            author_id: 4,
            question: "Yes?".to_string(),
            options: vec!["Yes".to_string()],
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
