use chrono::{DateTime, NaiveDate, Utc};

use crate::{error::AppError, model::user::XpGain, util::parse::parse_u64_from_string};

pub const MAX_HABIT_NAME_LENGTH: usize = 50;

/// XP for every check-in.
pub const CHECKIN_BASE_XP: i64 = 50;
/// Extra XP per day of streak.
pub const STREAK_BONUS_XP: i64 = 5;
pub const MAX_STREAK_BONUS_XP: i64 = 100;

/// Daily habit with a check-in streak.
#[derive(Debug, Clone, PartialEq)]
pub struct Habit {
    pub id: i32,
    pub user_id: u64,
    pub name: String,
    pub current_streak: i32,
    pub longest_streak: i32,
    /// UTC day of the last check-in
    pub last_checkin: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl Habit {
    pub fn from_entity(entity: entity::habit::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            user_id: parse_u64_from_string(entity.user_id)?,
            name: entity.name,
            current_streak: entity.current_streak,
            longest_streak: entity.longest_streak,
            last_checkin: entity.last_checkin,
            created_at: entity.created_at,
        })
    }
}

/// What a check-in did to the streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakChange {
    Started,
    Kept,
    /// A day was missed; holds the streak that was lost
    Lost { previous: i32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckIn {
    pub habit: Habit,
    pub change: StreakChange,
    pub xp: i64,
    pub gain: XpGain,
}
