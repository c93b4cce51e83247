use sea_orm::DatabaseConnection;

use crate::{
    data::level_reward::LevelRewardRepository,
    error::AppError,
    model::{level_reward::LevelReward, user::XpGain},
};

pub struct LevelRewardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LevelRewardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sets the role granted at `level`, replacing the previous one.
    pub async fn set(&self, guild_id: u64, level: i32, role_id: u64) -> Result<LevelReward, AppError> {
        if level < 2 {
            return Err(AppError::BadRequest(
                "Rewards can only be set for level 2 and above.".to_string(),
            ));
        }

        LevelRewardRepository::new(self.db)
            .upsert(guild_id, level, role_id)
            .await
    }

    pub async fn list(&self, guild_id: u64) -> Result<Vec<LevelReward>, AppError> {
        LevelRewardRepository::new(self.db).get_by_guild(guild_id).await
    }

    pub async fn remove(&self, guild_id: u64, level: i32) -> Result<(), AppError> {
        if LevelRewardRepository::new(self.db)
            .delete(guild_id, level)
            .await?
        {
            Ok(())
        } else {
            Err(AppError::NotFound(format!(
                "There is no reward for level {}.",
                level
            )))
        }
    }

    /// Rewards unlocked by every level reached in `gain`.
    pub async fn unlocked_by(&self, guild_id: u64, gain: &XpGain) -> Result<Vec<LevelReward>, AppError> {
        if !gain.leveled_up() {
            return Ok(Vec::new());
        }

        let levels = gain.reached_levels();
        LevelRewardRepository::new(self.db)
            .get_for_levels(guild_id, *levels.start(), *levels.end())
            .await
    }
}
