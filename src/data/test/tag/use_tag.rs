use super::*;

/// Tests that every use increments the counter.
///
/// Expected: Ok(Some) with uses counting up
#[tokio::test]
async fn increments_uses() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_tag(db, "1", "rules", "Be nice").await?;

    let repo = TagRepository::new(db);
    assert_eq!(repo.use_tag(1, "rules").await?.unwrap().uses, 1);
    let tag = repo.use_tag(1, "rules").await?.unwrap();

    assert_eq!(tag.uses, 2);
    assert_eq!(tag.content, "Be nice");

    Ok(())
}

/// Tests that tags are scoped by guild.
///
/// Expected: Ok(None) for a tag of another guild
#[tokio::test]
async fn tags_are_scoped_by_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_tag(db, "1", "rules", "Be nice").await?;

    let repo = TagRepository::new(db);
    assert!(repo.use_tag(2, "rules").await?.is_none());
    assert!(repo.find(1, "rules").await?.is_some());

    Ok(())
}

/// Tests listing and deleting tags.
///
/// Expected: Ok with names sorted, one fewer after delete
#[tokio::test]
async fn lists_and_deletes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_tag(db, "1", "zebra", "z").await?;
    factory::create_tag(db, "1", "apple", "a").await?;

    let repo = TagRepository::new(db);
    let names: Vec<String> = repo
        .get_by_guild(1)
        .await?
        .into_iter()
        .map(|t| t.name)
        .collect();
    assert_eq!(names, vec!["apple", "zebra"]);

    assert!(repo.delete(1, "apple").await?);
    assert!(!repo.delete(1, "apple").await?);
    assert_eq!(repo.get_by_guild(1).await?.len(), 1);

    Ok(())
}
