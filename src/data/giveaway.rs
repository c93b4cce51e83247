//! Giveaway repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    error::AppError,
    model::giveaway::{CreateGiveawayParam, Giveaway},
};

pub struct GiveawayRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GiveawayRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateGiveawayParam) -> Result<Giveaway, AppError> {
        let entity = entity::giveaway::ActiveModel {
            guild_id: ActiveValue::Set(param.guild_id.to_string()),
            channel_id: ActiveValue::Set(param.channel_id.to_string()),
            message_id: ActiveValue::Set(param.message_id.to_string()),
            prize: ActiveValue::Set(param.prize),
            winners_count: ActiveValue::Set(param.winners_count),
            end_time: ActiveValue::Set(param.end_time),
            active: ActiveValue::Set(true),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Giveaway::from_entity(entity)
    }

    /// Active giveaways whose end time is at or before `now`, oldest first.
    pub async fn get_due(&self, now: DateTime<Utc>) -> Result<Vec<Giveaway>, AppError> {
        entity::prelude::Giveaway::find()
            .filter(entity::giveaway::Column::Active.eq(true))
            .filter(entity::giveaway::Column::EndTime.lte(now))
            .order_by_asc(entity::giveaway::Column::EndTime)
            .all(self.db)
            .await?
            .into_iter()
            .map(Giveaway::from_entity)
            .collect()
    }

    /// Finds an active giveaway by its announcement message within a guild.
    pub async fn find_active_by_message(
        &self,
        guild_id: u64,
        message_id: u64,
    ) -> Result<Option<Giveaway>, AppError> {
        entity::prelude::Giveaway::find()
            .filter(entity::giveaway::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::giveaway::Column::MessageId.eq(message_id.to_string()))
            .filter(entity::giveaway::Column::Active.eq(true))
            .one(self.db)
            .await?
            .map(Giveaway::from_entity)
            .transpose()
    }

    /// Marks a giveaway finished.
    ///
    /// # Returns
    /// - `Ok(true)` - The giveaway was active and is now closed
    /// - `Ok(false)` - It was already closed (or does not exist)
    pub async fn deactivate(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Giveaway::update_many()
            .filter(entity::giveaway::Column::Id.eq(id))
            .filter(entity::giveaway::Column::Active.eq(true))
            .col_expr(
                entity::giveaway::Column::Active,
                sea_orm::sea_query::Expr::value(false),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
