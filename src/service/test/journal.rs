use crate::{
    error::AppError,
    model::journal::{JOURNAL_READ_LIMIT, JOURNAL_XP},
    service::journal::JournalService,
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

/// Tests writing a journal entry.
///
/// Expected: Ok with the trimmed entry stored and the writing XP paid
#[tokio::test]
async fn writing_pays_xp() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::JournalEntry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = JournalService::new(db);
    let (entry, gain) = service.write(2, " Good day. ", Utc::now()).await?;

    assert_eq!(entry.content, "Good day.");
    assert_eq!(gain.profile.xp, JOURNAL_XP);
    assert!(matches!(
        service.write(2, "", Utc::now()).await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}

/// Tests reading the journal back.
///
/// Expected: at most the read limit of entries, newest first
#[tokio::test]
async fn reads_latest_entries() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::JournalEntry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    for day in 0..8 {
        factory::create_journal_entry(db, "2", &format!("day {}", day), now + Duration::days(day))
            .await?;
    }

    let entries = JournalService::new(db).latest(2).await?;

    assert_eq!(entries.len() as u64, JOURNAL_READ_LIMIT);
    assert_eq!(entries[0].content, "day 7");

    Ok(())
}
