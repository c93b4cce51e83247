use super::*;

/// Tests recording the last announced post.
///
/// Expected: Ok(true) and the url stored on the feed
#[tokio::test]
async fn records_last_post() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::NewsFeed)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let feed = factory::create_news_feed(db, "3").await?;
    assert!(feed.last_post_url.is_none());

    let repo = FeedRepository::new(db);
    assert!(
        repo.update_last_post(feed.id, "https://blog.example/post-2", Utc::now())
            .await?
    );

    let stored = repo.get_for_guild(3).await?;
    assert_eq!(
        stored[0].last_post_url.as_deref(),
        Some("https://blog.example/post-2")
    );

    Ok(())
}

/// Tests that a guild cannot delete another guild's feed.
///
/// Expected: Ok(false) for the wrong guild, Ok(true) for the owner
#[tokio::test]
async fn deletes_only_within_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::NewsFeed)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let feed = factory::create_news_feed(db, "1").await?;

    let repo = FeedRepository::new(db);
    assert!(!repo.delete(2, feed.id).await?);
    assert_eq!(repo.get_all().await?.len(), 1);
    assert!(repo.delete(1, feed.id).await?);
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
