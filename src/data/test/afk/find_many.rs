use super::*;

/// Tests looking up several mentioned members at once.
///
/// Expected: Ok with statuses for AFK members only
#[tokio::test]
async fn returns_statuses_of_afk_members() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AfkStatus)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_afk_status(db, "1", "9", "Sleeping", Utc::now()).await?;
    factory::create_afk_status(db, "3", "9", "Gym", Utc::now()).await?;

    let repo = AfkRepository::new(db);
    let mut ids: Vec<u64> = repo
        .find_many(&[1, 2, 3])
        .await?
        .iter()
        .map(|s| s.user_id)
        .collect();
    ids.sort();

    assert_eq!(ids, vec![1, 3]);
    assert!(repo.find_many(&[]).await?.is_empty());

    Ok(())
}
