use crate::{error::AppError, service::reminder::ReminderService};
use chrono::{Duration, Utc};
use test_utils::builder::TestBuilder;

/// Tests the minimum reminder delay.
///
/// Expected: Err(BadRequest) under 10 seconds, Ok at 10 seconds
#[tokio::test]
async fn enforces_minimum_delay() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Reminder)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = chrono::DateTime::from_timestamp(1_790_000_000, 0).unwrap();
    let service = ReminderService::new(db);

    let result = service.create(1, 2, "tea", Duration::seconds(9), now).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let reminder = service.create(1, 2, "tea", Duration::seconds(10), now).await?;
    assert_eq!(reminder.due_at, now + Duration::seconds(10));

    Ok(())
}

/// Tests that a due reminder is delivered exactly once.
///
/// Expected: one delivery across two polling passes
#[tokio::test]
async fn due_reminder_fires_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Reminder)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = Utc::now() - Duration::minutes(1);
    let service = ReminderService::new(db);
    service
        .create(1, 2, "stand up", Duration::seconds(30), created)
        .await?;

    let now = Utc::now();
    let mut fired = 0;
    for _ in 0..2 {
        for reminder in service.due(now).await? {
            if service.mark_sent(reminder.id).await? {
                fired += 1;
            }
        }
    }

    assert_eq!(fired, 1);

    Ok(())
}
