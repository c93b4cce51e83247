//! Habit repository.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::{error::AppError, model::habit::Habit};

pub struct HabitRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HabitRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: u64,
        name: &str,
        now: DateTime<Utc>,
    ) -> Result<Habit, AppError> {
        let entity = entity::habit::ActiveModel {
            user_id: ActiveValue::Set(user_id.to_string()),
            name: ActiveValue::Set(name.to_string()),
            current_streak: ActiveValue::Set(0),
            longest_streak: ActiveValue::Set(0),
            last_checkin: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Habit::from_entity(entity)
    }

    pub async fn get_for_user(&self, user_id: u64) -> Result<Vec<Habit>, AppError> {
        entity::prelude::Habit::find()
            .filter(entity::habit::Column::UserId.eq(user_id.to_string()))
            .order_by_asc(entity::habit::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Habit::from_entity)
            .collect()
    }

    /// Finds a habit owned by the member.
    pub async fn find_owned(&self, id: i32, user_id: u64) -> Result<Option<Habit>, AppError> {
        entity::prelude::Habit::find_by_id(id)
            .filter(entity::habit::Column::UserId.eq(user_id.to_string()))
            .one(self.db)
            .await?
            .map(Habit::from_entity)
            .transpose()
    }

    /// Stores a check-in if the habit still has the last check-in day the caller read.
    ///
    /// # Returns
    /// - `Ok(true)` - The check-in was stored
    /// - `Ok(false)` - Another check-in was stored in between
    pub async fn record_checkin(
        &self,
        id: i32,
        seen_last_checkin: Option<NaiveDate>,
        today: NaiveDate,
        current_streak: i32,
        longest_streak: i32,
    ) -> Result<bool, AppError> {
        let mut update = entity::prelude::Habit::update_many()
            .filter(entity::habit::Column::Id.eq(id));

        update = match seen_last_checkin {
            Some(day) => update.filter(entity::habit::Column::LastCheckin.eq(day)),
            None => update.filter(entity::habit::Column::LastCheckin.is_null()),
        };

        let result = update
            .col_expr(entity::habit::Column::LastCheckin, Expr::value(Some(today)))
            .col_expr(entity::habit::Column::CurrentStreak, Expr::value(current_streak))
            .col_expr(entity::habit::Column::LongestStreak, Expr::value(longest_streak))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
