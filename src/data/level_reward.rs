use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{error::AppError, model::level_reward::LevelReward};

pub struct LevelRewardRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LevelRewardRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sets the role for a level, replacing any previous reward for that level.
    pub async fn upsert(
        &self,
        guild_id: u64,
        level_required: i32,
        role_id: u64,
    ) -> Result<LevelReward, AppError> {
        let existing = entity::prelude::LevelReward::find()
            .filter(entity::level_reward::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::level_reward::Column::LevelRequired.eq(level_required))
            .one(self.db)
            .await?;

        let entity = match existing {
            Some(entity) => {
                let mut active: entity::level_reward::ActiveModel = entity.into();
                active.role_id = ActiveValue::Set(role_id.to_string());
                active.update(self.db).await?
            }
            None => {
                entity::level_reward::ActiveModel {
                    guild_id: ActiveValue::Set(guild_id.to_string()),
                    level_required: ActiveValue::Set(level_required),
                    role_id: ActiveValue::Set(role_id.to_string()),
                    ..Default::default()
                }
                .insert(self.db)
                .await?
            }
        };

        LevelReward::from_entity(entity)
    }

    /// Rewards of a guild ordered by level.
    pub async fn get_by_guild(&self, guild_id: u64) -> Result<Vec<LevelReward>, AppError> {
        entity::prelude::LevelReward::find()
            .filter(entity::level_reward::Column::GuildId.eq(guild_id.to_string()))
            .order_by_asc(entity::level_reward::Column::LevelRequired)
            .all(self.db)
            .await?
            .into_iter()
            .map(LevelReward::from_entity)
            .collect()
    }

    /// Rewards unlocked by any level in `from..=to`.
    pub async fn get_for_levels(
        &self,
        guild_id: u64,
        from: i32,
        to: i32,
    ) -> Result<Vec<LevelReward>, AppError> {
        entity::prelude::LevelReward::find()
            .filter(entity::level_reward::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::level_reward::Column::LevelRequired.between(from, to))
            .order_by_asc(entity::level_reward::Column::LevelRequired)
            .all(self.db)
            .await?
            .into_iter()
            .map(LevelReward::from_entity)
            .collect()
    }

    /// Deletes the reward for a level.
    ///
    /// # Returns
    /// - `Ok(true)` - A reward was removed
    /// - `Ok(false)` - No reward was configured for that level
    pub async fn delete(&self, guild_id: u64, level_required: i32) -> Result<bool, AppError> {
        let result = entity::prelude::LevelReward::delete_many()
            .filter(entity::level_reward::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::level_reward::Column::LevelRequired.eq(level_required))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
