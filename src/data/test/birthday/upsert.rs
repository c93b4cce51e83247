use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests that setting a birthday twice keeps one row and the celebration year.
///
/// Expected: Ok with the new date and the previous last_celebrated_year
#[tokio::test]
async fn replaces_date_and_keeps_year() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Birthday)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::birthday::create_birthday_for_user(db, "7", 1, 1, Some(2026)).await?;

    let repo = BirthdayRepository::new(db);
    let birthday = repo.upsert(7, 24, 12).await?;

    assert_eq!((birthday.day, birthday.month), (24, 12));
    assert_eq!(birthday.last_celebrated_year, Some(2026));
    assert_eq!(entity::prelude::Birthday::find().count(db).await?, 1);

    Ok(())
}
