//! Personal goals that pay XP when finished.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::goal::GoalRepository,
    error::AppError,
    model::goal::{Goal, GoalCompletion, GOAL_XP, MAX_GOAL_LENGTH},
    service::user::UserService,
};

pub struct GoalService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GoalService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: u64,
        description: &str,
        now: DateTime<Utc>,
    ) -> Result<Goal, AppError> {
        let description = description.trim();
        if description.is_empty() || description.chars().count() > MAX_GOAL_LENGTH {
            return Err(AppError::BadRequest(format!(
                "Keep the goal short (1 to {} characters).",
                MAX_GOAL_LENGTH
            )));
        }

        GoalRepository::new(self.db)
            .create(user_id, description, now)
            .await
    }

    pub async fn pending(&self, user_id: u64) -> Result<Vec<Goal>, AppError> {
        GoalRepository::new(self.db).get_pending(user_id).await
    }

    /// Completes a goal of the member and pays its XP once.
    ///
    /// # Returns
    /// - `Ok(GoalCompletion)` - The goal and the member's XP gain
    /// - `Err(AppError::NotFound)` - Not the member's goal, or already completed
    pub async fn complete(
        &self,
        user_id: u64,
        goal_id: i32,
        now: DateTime<Utc>,
    ) -> Result<GoalCompletion, AppError> {
        let goal = GoalRepository::new(self.db)
            .complete(goal_id, user_id, now)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Goal #{} not found or already completed.", goal_id))
            })?;

        let gain = UserService::new(self.db).add_xp(user_id, GOAL_XP).await?;

        Ok(GoalCompletion { goal, gain })
    }
}
