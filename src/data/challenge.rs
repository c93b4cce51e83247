//! Challenge repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::{
    error::AppError,
    model::challenge::{Challenge, CreateChallengeParam},
};

pub struct ChallengeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChallengeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        param: CreateChallengeParam,
        xp_reward: i32,
        now: DateTime<Utc>,
    ) -> Result<Challenge, AppError> {
        let entity = entity::challenge::ActiveModel {
            guild_id: ActiveValue::Set(param.guild_id.to_string()),
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            xp_reward: ActiveValue::Set(xp_reward),
            active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Challenge::from_entity(entity)
    }

    /// Newest active challenge of a guild.
    pub async fn find_active(&self, guild_id: u64) -> Result<Option<Challenge>, AppError> {
        entity::prelude::Challenge::find()
            .filter(entity::challenge::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::challenge::Column::Active.eq(true))
            .order_by_desc(entity::challenge::Column::CreatedAt)
            .order_by_desc(entity::challenge::Column::Id)
            .one(self.db)
            .await?
            .map(Challenge::from_entity)
            .transpose()
    }

    /// # Returns
    /// - `Ok(true)` - This call closed the challenge
    /// - `Ok(false)` - It was already closed
    pub async fn deactivate(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Challenge::update_many()
            .filter(entity::challenge::Column::Id.eq(id))
            .filter(entity::challenge::Column::Active.eq(true))
            .col_expr(entity::challenge::Column::Active, Expr::value(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Records that a member completed a challenge.
    ///
    /// The unique (challenge, member) index decides between concurrent claims.
    ///
    /// # Returns
    /// - `Ok(true)` - First completion by this member
    /// - `Ok(false)` - The member had already completed it
    pub async fn record_completion(
        &self,
        challenge_id: i32,
        user_id: u64,
        now: DateTime<Utc>,
    ) -> Result<bool, AppError> {
        let inserted = entity::challenge_completion::ActiveModel {
            challenge_id: ActiveValue::Set(challenge_id),
            user_id: ActiveValue::Set(user_id.to_string()),
            completed_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await;

        match inserted {
            Ok(_) => Ok(true),
            Err(err) => {
                let existing = entity::prelude::ChallengeCompletion::find()
                    .filter(entity::challenge_completion::Column::ChallengeId.eq(challenge_id))
                    .filter(entity::challenge_completion::Column::UserId.eq(user_id.to_string()))
                    .one(self.db)
                    .await?;

                match existing {
                    Some(_) => Ok(false),
                    None => Err(err.into()),
                }
            }
        }
    }
}
