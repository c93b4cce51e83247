use crate::{error::AppError, model::stats::StatKind, service::stats::StatsService};
use test_utils::builder::TestBuilder;

/// Tests registering statistics channels.
///
/// Expected: Ok with a placeholder, Err(BadRequest) without one
#[tokio::test]
async fn needs_count_placeholder() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::StatChannel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = StatsService::new(db);
    service
        .register(1, 10, StatKind::Members, "👥 Members: {count}")
        .await?;
    assert!(matches!(
        service.register(1, 11, StatKind::Online, "Online").await,
        Err(AppError::BadRequest(_))
    ));

    assert_eq!(service.for_guild(1).await?.len(), 1);
    assert!(service.remove(10).await?);
    assert!(service.all().await?.is_empty());

    Ok(())
}
