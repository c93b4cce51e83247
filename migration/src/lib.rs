pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_user_table;
mod m20260301_000002_create_guild_config_table;
mod m20260301_000003_create_level_reward_table;
mod m20260301_000004_create_shop_item_table;
mod m20260302_000005_create_giveaway_table;
mod m20260302_000006_create_reminder_table;
mod m20260302_000007_create_birthday_table;
mod m20260303_000008_create_afk_status_table;
mod m20260303_000009_create_tag_table;
mod m20260303_000010_create_ticket_table;
mod m20260304_000011_add_afk_original_nick;
mod m20260305_000012_create_poll_table;
mod m20260305_000013_create_starboard_config_table;
mod m20260305_000014_create_starboard_entry_table;
mod m20260306_000015_create_tribe_table;
mod m20260306_000016_create_tribe_member_table;
mod m20260306_000017_create_stat_channel_table;
mod m20260307_000018_create_news_feed_table;
mod m20260307_000019_create_notification_config_table;
mod m20260308_000020_create_goal_table;
mod m20260308_000021_create_habit_table;
mod m20260308_000022_create_journal_entry_table;
mod m20260308_000023_create_challenge_table;
mod m20260308_000024_create_challenge_completion_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_user_table::Migration),
            Box::new(m20260301_000002_create_guild_config_table::Migration),
            Box::new(m20260301_000003_create_level_reward_table::Migration),
            Box::new(m20260301_000004_create_shop_item_table::Migration),
            Box::new(m20260302_000005_create_giveaway_table::Migration),
            Box::new(m20260302_000006_create_reminder_table::Migration),
            Box::new(m20260302_000007_create_birthday_table::Migration),
            Box::new(m20260303_000008_create_afk_status_table::Migration),
            Box::new(m20260303_000009_create_tag_table::Migration),
            Box::new(m20260303_000010_create_ticket_table::Migration),
            Box::new(m20260304_000011_add_afk_original_nick::Migration),
            Box::new(m20260305_000012_create_poll_table::Migration),
            Box::new(m20260305_000013_create_starboard_config_table::Migration),
            Box::new(m20260305_000014_create_starboard_entry_table::Migration),
            Box::new(m20260306_000015_create_tribe_table::Migration),
            Box::new(m20260306_000016_create_tribe_member_table::Migration),
            Box::new(m20260306_000017_create_stat_channel_table::Migration),
            Box::new(m20260307_000018_create_news_feed_table::Migration),
            Box::new(m20260307_000019_create_notification_config_table::Migration),
            Box::new(m20260308_000020_create_goal_table::Migration),
            Box::new(m20260308_000021_create_habit_table::Migration),
            Box::new(m20260308_000022_create_journal_entry_table::Migration),
            Box::new(m20260308_000023_create_challenge_table::Migration),
            Box::new(m20260308_000024_create_challenge_completion_table::Migration),
        ]
    }
}
