use super::*;

/// Tests storing a reminder.
///
/// Expected: Ok with an active reminder
#[tokio::test]
async fn creates_active_reminder() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Reminder)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = chrono::DateTime::from_timestamp(1_790_000_000, 0).unwrap();
    let repo = ReminderRepository::new(db);
    let reminder = repo
        .create(
            CreateReminderParam {
                user_id: 1,
                channel_id: 2,
                message: "stretch".to_string(),
                due_at: now + Duration::minutes(10),
            },
            now,
        )
        .await?;

    assert!(reminder.active);
    assert_eq!(reminder.message, "stretch");
    assert_eq!(reminder.created_at, now);

    Ok(())
}
