use crate::{error::AppError, model::deals::Deal, service::deals::DealsService};
use test_utils::{builder::TestBuilder, factory};

fn deal(id: u64) -> Deal {
    Deal {
        id,
        title: "Free game".to_string(),
        description: String::new(),
        image: None,
        open_giveaway_url: "https://deals.example/open".to_string(),
        worth: "$19.99".to_string(),
        platforms: "PC".to_string(),
        end_date: "N/A".to_string(),
    }
}

/// Tests which guilds still need a listing announced.
///
/// Expected: guilds with a channel that have not seen the listing, and none after marking them
#[tokio::test]
async fn announces_each_listing_once_per_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::NotificationConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_notification_config(db, "1", true, Some("500")).await?;
    factory::create_notification_config(db, "2", true, None).await?;
    factory::create_notification_config(db, "3", false, None).await?;

    let service = DealsService::new(db);

    let seen = service.pending(&deal(500)).await?;
    assert_eq!(
        seen.iter().map(|c| c.guild_id).collect::<Vec<_>>(),
        vec![2]
    );

    let fresh = service.pending(&deal(501)).await?;
    assert_eq!(fresh.len(), 2);

    for config in fresh {
        service.mark_posted(config.guild_id, 501).await?;
    }
    assert!(service.pending(&deal(501)).await?.is_empty());

    Ok(())
}
