use super::*;

/// Tests selecting birthdays still to celebrate today.
///
/// Verifies that birthdays already celebrated this year are skipped while those
/// celebrated last year or never are returned.
///
/// Expected: Ok with the two uncelebrated birthdays
#[tokio::test]
async fn skips_birthdays_celebrated_this_year() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Birthday)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::birthday::create_birthday_for_user(db, "1", 18, 10, None).await?;
    factory::birthday::create_birthday_for_user(db, "2", 18, 10, Some(2025)).await?;
    factory::birthday::create_birthday_for_user(db, "3", 18, 10, Some(2026)).await?;
    factory::create_birthday(db, 19, 10).await?;

    let repo = BirthdayRepository::new(db);
    let mut ids: Vec<u64> = repo
        .get_uncelebrated_on(18, 10, 2026)
        .await?
        .iter()
        .map(|b| b.user_id)
        .collect();
    ids.sort();

    assert_eq!(ids, vec![1, 2]);
    assert_eq!(repo.get_on(18, 10).await?.len(), 3);

    Ok(())
}

/// Tests marking a birthday celebrated.
///
/// Expected: Ok and the birthday no longer returned for that year
#[tokio::test]
async fn marks_celebrated() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Birthday)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let birthday = factory::create_birthday(db, 29, 2).await?;

    let repo = BirthdayRepository::new(db);
    repo.mark_celebrated(birthday.id, 2028).await?;

    assert!(repo.get_uncelebrated_on(29, 2, 2028).await?.is_empty());
    assert_eq!(repo.get_uncelebrated_on(29, 2, 2032).await?.len(), 1);

    Ok(())
}
