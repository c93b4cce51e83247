use chrono::{DateTime, Utc};

use crate::{error::AppError, model::user::XpGain, util::parse::parse_u64_from_string};

pub const DEFAULT_CHALLENGE_XP: i64 = 200;
pub const MAX_CHALLENGE_XP: i64 = 10_000;
pub const MAX_TITLE_LENGTH: usize = 100;
pub const MAX_DESCRIPTION_LENGTH: usize = 1000;

/// Community challenge of a guild.
#[derive(Debug, Clone, PartialEq)]
pub struct Challenge {
    pub id: i32,
    pub guild_id: u64,
    pub title: String,
    pub description: String,
    pub xp_reward: i32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl Challenge {
    pub fn from_entity(entity: entity::challenge::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            guild_id: parse_u64_from_string(entity.guild_id)?,
            title: entity.title,
            description: entity.description,
            xp_reward: entity.xp_reward,
            active: entity.active,
            created_at: entity.created_at,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateChallengeParam {
    pub guild_id: u64,
    pub title: String,
    pub description: String,
    pub xp_reward: i64,
}

/// A member's first completion of a challenge.
#[derive(Debug, Clone, PartialEq)]
pub struct ChallengeCompletion {
    pub challenge: Challenge,
    pub gain: XpGain,
}
