use super::*;

/// Tests that going AFK again keeps the original start time.
///
/// Expected: Ok with the new reason and the first start time
#[tokio::test]
async fn keeps_start_time_on_update() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AfkStatus)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let started = chrono::DateTime::from_timestamp(1_790_000_000, 0).unwrap();
    factory::create_afk_status(db, "1", "2", "Lunch", started).await?;

    let repo = AfkRepository::new(db);
    let status = repo
        .upsert(
            1,
            2,
            "Meeting".to_string(),
            Some("[AFK] Ana".to_string()),
            started + Duration::hours(1),
        )
        .await?;

    assert_eq!(status.reason, "Meeting");
    assert_eq!(status.start_time, started);
    assert_eq!(status.original_nick.as_deref(), Some("Ana"));

    Ok(())
}

/// Tests clearing the AFK status.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn deletes_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AfkStatus)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AfkRepository::new(db);
    repo.upsert(1, 2, "Busy".to_string(), None, Utc::now()).await?;

    assert!(repo.delete(1).await?);
    assert!(!repo.delete(1).await?);
    assert!(repo.find(1).await?.is_none());

    Ok(())
}
