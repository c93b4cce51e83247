use super::*;

/// Tests reading the latest entries of a member.
///
/// Expected: newest first, capped at the limit, other members' entries excluded
#[tokio::test]
async fn reads_newest_entries_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::JournalEntry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    for days_ago in [3, 1, 2] {
        factory::create_journal_entry(
            db,
            "6",
            &format!("{} days ago", days_ago),
            now - Duration::days(days_ago),
        )
        .await?;
    }
    factory::create_journal_entry(db, "7", "someone else", now).await?;

    let entries = JournalRepository::new(db).get_latest(6, 2).await?;

    let contents: Vec<&str> = entries.iter().map(|e| e.content.as_str()).collect();
    assert_eq!(contents, vec!["1 days ago", "2 days ago"]);

    Ok(())
}
