use crate::{error::AppError, util::parse::parse_u64_from_string};

/// Role granted when a member reaches `level_required` in a guild.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelReward {
    pub id: i32,
    pub guild_id: u64,
    pub level_required: i32,
    pub role_id: u64,
}

impl LevelReward {
    pub fn from_entity(entity: entity::level_reward::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            guild_id: parse_u64_from_string(entity.guild_id)?,
            level_required: entity.level_required,
            role_id: parse_u64_from_string(entity.role_id)?,
        })
    }
}
