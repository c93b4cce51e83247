use chrono::{DateTime, Utc};

use crate::{error::AppError, model::user::XpGain, util::parse::parse_u64_from_string};

/// XP for finishing a goal.
pub const GOAL_XP: i64 = 100;

pub const MAX_GOAL_LENGTH: usize = 200;

#[derive(Debug, Clone, PartialEq)]
pub struct Goal {
    pub id: i32,
    pub user_id: u64,
    pub description: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Goal {
    pub fn from_entity(entity: entity::goal::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            user_id: parse_u64_from_string(entity.user_id)?,
            description: entity.description,
            completed: entity.completed,
            created_at: entity.created_at,
            completed_at: entity.completed_at,
        })
    }
}

/// A finished goal and the XP it paid.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalCompletion {
    pub goal: Goal,
    pub gain: XpGain,
}
