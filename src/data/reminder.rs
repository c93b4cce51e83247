use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    error::AppError,
    model::reminder::{CreateReminderParam, Reminder},
};

pub struct ReminderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReminderRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        param: CreateReminderParam,
        now: DateTime<Utc>,
    ) -> Result<Reminder, AppError> {
        let entity = entity::reminder::ActiveModel {
            user_id: ActiveValue::Set(param.user_id.to_string()),
            channel_id: ActiveValue::Set(param.channel_id.to_string()),
            message: ActiveValue::Set(param.message),
            created_at: ActiveValue::Set(now),
            due_at: ActiveValue::Set(param.due_at),
            active: ActiveValue::Set(true),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Reminder::from_entity(entity)
    }

    /// Active reminders due at or before `now`, oldest first.
    pub async fn get_due(&self, now: DateTime<Utc>) -> Result<Vec<Reminder>, AppError> {
        entity::prelude::Reminder::find()
            .filter(entity::reminder::Column::Active.eq(true))
            .filter(entity::reminder::Column::DueAt.lte(now))
            .order_by_asc(entity::reminder::Column::DueAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(Reminder::from_entity)
            .collect()
    }

    /// Marks a reminder as delivered.
    pub async fn deactivate(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Reminder::update_many()
            .filter(entity::reminder::Column::Id.eq(id))
            .filter(entity::reminder::Column::Active.eq(true))
            .col_expr(
                entity::reminder::Column::Active,
                sea_orm::sea_query::Expr::value(false),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
