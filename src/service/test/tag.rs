use crate::{error::AppError, service::tag::TagService};
use chrono::Utc;
use test_utils::builder::TestBuilder;

/// Tests that names are normalised on create and lookup.
///
/// Expected: Ok when fetching with different case and spacing
#[tokio::test]
async fn normalises_names() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = TagService::new(db);
    let tag = service
        .create(1, 2, " House Rules ", "No spam", Utc::now())
        .await?;
    assert_eq!(tag.name, "house_rules");

    let used = service.use_tag(1, "HOUSE RULES").await?;
    assert_eq!(used.uses, 1);

    Ok(())
}

/// Tests duplicate and missing tags.
///
/// Expected: Err(BadRequest) on duplicate, Err(NotFound) on unknown tags
#[tokio::test]
async fn rejects_duplicates_and_unknown_tags() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = TagService::new(db);
    service.create(1, 2, "faq", "Read the pins", Utc::now()).await?;

    let duplicate = service.create(1, 3, "FAQ", "Other", Utc::now()).await;
    assert!(matches!(duplicate, Err(AppError::BadRequest(_))));

    // Same name is fine in another guild
    service.create(9, 3, "faq", "Other", Utc::now()).await?;

    assert!(matches!(service.use_tag(1, "missing").await, Err(AppError::NotFound(_))));

    service.delete(1, "faq").await?;
    assert!(matches!(service.delete(1, "faq").await, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests autocomplete suggestions for one guild.
///
/// Expected: Ok with matching names of that guild, sorted by name
#[tokio::test]
async fn suggests_tags_of_the_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = TagService::new(db);
    service.create(1, 2, "voice rules", "Be nice", Utc::now()).await?;
    service.create(1, 2, "faq", "Read the pins", Utc::now()).await?;
    service.create(1, 2, "house rules", "No spam", Utc::now()).await?;
    service.create(9, 2, "rules", "Other guild", Utc::now()).await?;

    let suggestions = service.suggest(1, "rul").await?;

    assert_eq!(suggestions, vec!["house_rules".to_string(), "voice_rules".to_string()]);

    Ok(())
}
