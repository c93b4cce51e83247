//! Habit factory.

use crate::factory::helpers::{next_id, next_snowflake};
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating habit rows.
///
/// # Example
///
/// ```rust,ignore
/// let habit = HabitFactory::new(&db)
///     .streak(4, 9)
///     .last_checkin(yesterday)
///     .build()
///     .await?;
/// ```
pub struct HabitFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    current_streak: i32,
    longest_streak: i32,
    last_checkin: Option<NaiveDate>,
}

impl<'a> HabitFactory<'a> {
    /// Defaults to a habit that was never checked in.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            user_id: next_snowflake(),
            current_streak: 0,
            longest_streak: 0,
            last_checkin: None,
        }
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn streak(mut self, current: i32, longest: i32) -> Self {
        self.current_streak = current;
        self.longest_streak = longest;
        self
    }

    pub fn last_checkin(mut self, day: NaiveDate) -> Self {
        self.last_checkin = Some(day);
        self
    }

    pub async fn build(self) -> Result<entity::habit::Model, DbErr> {
        entity::habit::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            name: ActiveValue::Set(format!("Habit {}", next_id())),
            current_streak: ActiveValue::Set(self.current_streak),
            longest_streak: ActiveValue::Set(self.longest_streak),
            last_checkin: ActiveValue::Set(self.last_checkin),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_habit(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<entity::habit::Model, DbErr> {
    HabitFactory::new(db).user_id(user_id).build().await
}
