use super::*;

/// Tests selecting due reminders.
///
/// Expected: Ok with active reminders due at or before now, oldest first
#[tokio::test]
async fn returns_due_reminders_in_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Reminder)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let later = factory::create_reminder(db, now - Duration::seconds(5)).await?;
    let earlier = factory::create_reminder(db, now - Duration::minutes(5)).await?;
    factory::create_reminder(db, now + Duration::minutes(5)).await?;
    factory::reminder::create_reminder_with_state(db, now - Duration::minutes(1), false).await?;

    let repo = ReminderRepository::new(db);
    let ids: Vec<i32> = repo.get_due(now).await?.iter().map(|r| r.id).collect();

    assert_eq!(ids, vec![earlier.id, later.id]);

    Ok(())
}

/// Tests that a delivered reminder is not returned again.
///
/// Expected: Ok with an empty list after deactivation
#[tokio::test]
async fn delivered_reminders_are_skipped() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Reminder)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let reminder = factory::create_reminder(db, now - Duration::seconds(1)).await?;

    let repo = ReminderRepository::new(db);
    assert!(repo.deactivate(reminder.id).await?);
    assert!(repo.get_due(now).await?.is_empty());

    Ok(())
}
