use serde::Deserialize;

use crate::{
    error::AppError,
    util::parse::{parse_optional_u64, parse_u64_from_string},
};

/// Free game announcements of a guild.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationConfig {
    pub id: i32,
    pub guild_id: u64,
    pub free_games_channel_id: Option<u64>,
    pub mention_role_id: Option<u64>,
    /// Listing id of the last game announced
    pub last_game_id: Option<String>,
}

impl NotificationConfig {
    pub fn from_entity(entity: entity::notification_config::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            guild_id: parse_u64_from_string(entity.guild_id)?,
            free_games_channel_id: parse_optional_u64(entity.free_games_channel_id)?,
            mention_role_id: parse_optional_u64(entity.mention_role_id)?,
            last_game_id: entity.last_game_id,
        })
    }
}

/// Free game listing from the GamerPower API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Deal {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    pub open_giveaway_url: String,
    #[serde(default = "not_available")]
    pub worth: String,
    #[serde(default = "not_available")]
    pub platforms: String,
    #[serde(default = "not_available")]
    pub end_date: String,
}

fn not_available() -> String {
    "N/A".to_string()
}
