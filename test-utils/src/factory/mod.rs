//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization and
//! a `create_*` convenience function for quick default creation. Discord snowflakes are
//! generated from a shared counter so rows created in one test never collide.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(db).await?;
//! let config = factory::create_guild_config(db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(db)
//!     .discord_id("987654321")
//!     .level(5)
//!     .coins(1_000)
//!     .build()
//!     .await?;
//! ```

pub mod afk_status;
pub mod birthday;
pub mod challenge;
pub mod giveaway;
pub mod goal;
pub mod guild_config;
pub mod habit;
pub mod helpers;
pub mod journal_entry;
pub mod level_reward;
pub mod news_feed;
pub mod notification_config;
pub mod poll;
pub mod reminder;
pub mod shop_item;
pub mod starboard;
pub mod stat_channel;
pub mod tag;
pub mod ticket;
pub mod tribe;
pub mod user;

pub use afk_status::create_afk_status;
pub use birthday::create_birthday;
pub use challenge::{create_challenge, create_challenge_completion};
pub use giveaway::create_giveaway;
pub use goal::create_goal;
pub use guild_config::create_guild_config;
pub use habit::create_habit;
pub use journal_entry::create_journal_entry;
pub use level_reward::create_level_reward;
pub use news_feed::create_news_feed;
pub use notification_config::create_notification_config;
pub use poll::create_poll;
pub use reminder::create_reminder;
pub use shop_item::create_shop_item;
pub use starboard::{create_starboard_config, create_starboard_entry};
pub use stat_channel::create_stat_channel;
pub use tag::create_tag;
pub use ticket::create_ticket;
pub use tribe::{create_tribe, create_tribe_member};
pub use user::{create_user, create_user_with_coins};
