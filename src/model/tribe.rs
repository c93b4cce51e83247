use chrono::{DateTime, Utc};

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// In-level XP the founder pays to create a tribe.
pub const TRIBE_COST: i64 = 1000;

pub const DEFAULT_MOTTO: &str = "A tribe focused on growth.";

#[derive(Debug, Clone, PartialEq)]
pub struct Tribe {
    pub id: i32,
    pub name: String,
    /// Motto shown on the tribe card
    pub description: String,
    pub leader_id: u64,
    pub created_at: DateTime<Utc>,
}

impl Tribe {
    pub fn from_entity(entity: entity::tribe::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            leader_id: parse_u64_from_string(entity.leader_id)?,
            created_at: entity.created_at,
        })
    }
}

/// A tribe together with its head count.
#[derive(Debug, Clone, PartialEq)]
pub struct TribeCard {
    pub tribe: Tribe,
    pub member_count: u64,
}
