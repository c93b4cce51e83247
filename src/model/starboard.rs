use crate::{error::AppError, util::parse::parse_u64_from_string};

/// Reaction that counts towards the starboard.
pub const STAR_EMOJI: &str = "⭐";

pub const DEFAULT_THRESHOLD: i32 = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct StarboardConfig {
    pub id: i32,
    pub guild_id: u64,
    pub channel_id: u64,
    /// Stars a message needs before it is reposted
    pub threshold: i32,
}

impl StarboardConfig {
    pub fn from_entity(entity: entity::starboard_config::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            guild_id: parse_u64_from_string(entity.guild_id)?,
            channel_id: parse_u64_from_string(entity.channel_id)?,
            threshold: entity.threshold,
        })
    }
}

/// A message that made it to the starboard.
#[derive(Debug, Clone, PartialEq)]
pub struct StarboardEntry {
    pub id: i32,
    pub guild_id: u64,
    pub original_message_id: u64,
    pub original_channel_id: u64,
    pub starboard_message_id: u64,
    pub stars: i32,
}

impl StarboardEntry {
    pub fn from_entity(entity: entity::starboard_entry::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            guild_id: parse_u64_from_string(entity.guild_id)?,
            original_message_id: parse_u64_from_string(entity.original_message_id)?,
            original_channel_id: parse_u64_from_string(entity.original_channel_id)?,
            starboard_message_id: parse_u64_from_string(entity.starboard_message_id)?,
            stars: entity.stars,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateStarboardEntryParam {
    pub guild_id: u64,
    pub original_message_id: u64,
    pub original_channel_id: u64,
    pub starboard_message_id: u64,
    pub stars: i32,
}

/// Emoji shown next to the star count; brighter as the count grows.
pub fn star_emoji(count: u64) -> &'static str {
    match count {
        0..=4 => "⭐",
        5..=9 => "🌟",
        10..=19 => "✨",
        _ => "💫",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brightens_with_more_stars() {
        assert_eq!(star_emoji(3), "⭐");
        assert_eq!(star_emoji(5), "🌟");
        assert_eq!(star_emoji(19), "✨");
        assert_eq!(star_emoji(20), "💫");
    }
}
