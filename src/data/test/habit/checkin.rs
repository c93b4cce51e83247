use super::*;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 5, d).unwrap()
}

/// Tests storing a check-in against the last check-in day that was read.
///
/// Expected: Ok(true) and the new streak stored
#[tokio::test]
async fn stores_checkin_when_unchanged() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Habit)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let habit = factory::habit::HabitFactory::new(db)
        .user_id("4")
        .streak(2, 6)
        .last_checkin(day(9))
        .build()
        .await?;

    let repo = HabitRepository::new(db);
    assert!(repo.record_checkin(habit.id, Some(day(9)), day(10), 3, 6).await?);

    let stored = repo.find_owned(habit.id, 4).await?.unwrap();
    assert_eq!(stored.current_streak, 3);
    assert_eq!(stored.longest_streak, 6);
    assert_eq!(stored.last_checkin, Some(day(10)));

    Ok(())
}

/// Tests a check-in based on a stale read.
///
/// Expected: Ok(false) and the stored streak untouched
#[tokio::test]
async fn rejects_stale_checkin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Habit)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let fresh = factory::create_habit(db, "4").await?;

    let repo = HabitRepository::new(db);
    assert!(repo.record_checkin(fresh.id, None, day(10), 1, 1).await?);
    assert!(!repo.record_checkin(fresh.id, None, day(10), 1, 1).await?);
    assert!(!repo.record_checkin(fresh.id, Some(day(9)), day(10), 2, 2).await?);

    let stored = repo.find_owned(fresh.id, 4).await?.unwrap();
    assert_eq!(stored.current_streak, 1);

    Ok(())
}

/// Tests that habits are only found for their owner.
///
/// Expected: None for another member
#[tokio::test]
async fn finds_only_owned_habits() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Habit)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let habit = factory::create_habit(db, "4").await?;

    let repo = HabitRepository::new(db);
    assert!(repo.find_owned(habit.id, 5).await?.is_none());
    assert_eq!(repo.get_for_user(4).await?.len(), 1);

    Ok(())
}
