//! Poll repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection,
    EntityTrait, QueryFilter,
};

use crate::{
    error::AppError,
    model::poll::{CreatePollParam, Poll, OPTION_SEPARATOR},
};

pub struct PollRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PollRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreatePollParam, now: DateTime<Utc>) -> Result<Poll, AppError> {
        let entity = entity::poll::ActiveModel {
            guild_id: ActiveValue::Set(param.guild_id.to_string()),
            channel_id: ActiveValue::Set(param.channel_id.to_string()),
            message_id: ActiveValue::Set(param.message_id.to_string()),
            author_id: ActiveValue::Set(param.author_id.to_string()),
            question: ActiveValue::Set(param.question),
            options: ActiveValue::Set(param.options.join(&OPTION_SEPARATOR.to_string())),
            active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Poll::from_entity(entity)
    }

    pub async fn find_by_message(
        &self,
        guild_id: u64,
        message_id: u64,
    ) -> Result<Option<Poll>, AppError> {
        entity::prelude::Poll::find()
            .filter(entity::poll::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::poll::Column::MessageId.eq(message_id.to_string()))
            .one(self.db)
            .await?
            .map(Poll::from_entity)
            .transpose()
    }

    /// Closes an active poll.
    ///
    /// # Returns
    /// - `Ok(true)` - This call closed the poll
    /// - `Ok(false)` - It was already closed
    pub async fn deactivate(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Poll::update_many()
            .filter(entity::poll::Column::Id.eq(id))
            .filter(entity::poll::Column::Active.eq(true))
            .col_expr(entity::poll::Column::Active, Expr::value(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
