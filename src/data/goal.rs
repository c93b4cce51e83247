//! Personal goal repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::{error::AppError, model::goal::Goal};

pub struct GoalRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GoalRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: u64,
        description: &str,
        now: DateTime<Utc>,
    ) -> Result<Goal, AppError> {
        let entity = entity::goal::ActiveModel {
            user_id: ActiveValue::Set(user_id.to_string()),
            description: ActiveValue::Set(description.to_string()),
            completed: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            completed_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Goal::from_entity(entity)
    }

    /// Unfinished goals of a member, oldest first.
    pub async fn get_pending(&self, user_id: u64) -> Result<Vec<Goal>, AppError> {
        entity::prelude::Goal::find()
            .filter(entity::goal::Column::UserId.eq(user_id.to_string()))
            .filter(entity::goal::Column::Completed.eq(false))
            .order_by_asc(entity::goal::Column::CreatedAt)
            .order_by_asc(entity::goal::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Goal::from_entity)
            .collect()
    }

    /// Marks a pending goal of the member as done.
    ///
    /// # Returns
    /// - `Ok(Some(Goal))` - This call completed the goal
    /// - `Ok(None)` - No such goal for this member, or it was already completed
    pub async fn complete(
        &self,
        id: i32,
        user_id: u64,
        now: DateTime<Utc>,
    ) -> Result<Option<Goal>, AppError> {
        let result = entity::prelude::Goal::update_many()
            .filter(entity::goal::Column::Id.eq(id))
            .filter(entity::goal::Column::UserId.eq(user_id.to_string()))
            .filter(entity::goal::Column::Completed.eq(false))
            .col_expr(entity::goal::Column::Completed, Expr::value(true))
            .col_expr(entity::goal::Column::CompletedAt, Expr::value(Some(now)))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        entity::prelude::Goal::find_by_id(id)
            .one(self.db)
            .await?
            .map(Goal::from_entity)
            .transpose()
    }
}
