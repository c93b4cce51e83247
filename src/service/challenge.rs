//! Community challenges: one active challenge per guild, XP once per member.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::challenge::ChallengeRepository,
    error::AppError,
    model::challenge::{
        Challenge, ChallengeCompletion, CreateChallengeParam, MAX_CHALLENGE_XP,
        MAX_DESCRIPTION_LENGTH, MAX_TITLE_LENGTH,
    },
    service::user::UserService,
};

fn no_active_challenge() -> AppError {
    AppError::NotFound("There is no active challenge right now.".to_string())
}

pub struct ChallengeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChallengeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Starts a challenge. Older active challenges stay open but `/challenge` shows the
    /// newest one.
    pub async fn create(
        &self,
        mut param: CreateChallengeParam,
        now: DateTime<Utc>,
    ) -> Result<Challenge, AppError> {
        param.title = param.title.trim().to_string();
        param.description = param.description.trim().to_string();

        if param.title.is_empty() || param.title.chars().count() > MAX_TITLE_LENGTH {
            return Err(AppError::BadRequest(format!(
                "The title must be 1 to {} characters.",
                MAX_TITLE_LENGTH
            )));
        }
        if param.description.is_empty()
            || param.description.chars().count() > MAX_DESCRIPTION_LENGTH
        {
            return Err(AppError::BadRequest(format!(
                "The description must be 1 to {} characters.",
                MAX_DESCRIPTION_LENGTH
            )));
        }

        let xp_reward = i32::try_from(param.xp_reward)
            .ok()
            .filter(|xp| (1..=MAX_CHALLENGE_XP).contains(&i64::from(*xp)))
            .ok_or_else(|| {
                AppError::BadRequest(format!(
                    "The reward must be between 1 and {} XP.",
                    MAX_CHALLENGE_XP
                ))
            })?;

        ChallengeRepository::new(self.db)
            .create(param, xp_reward, now)
            .await
    }

    pub async fn active(&self, guild_id: u64) -> Result<Option<Challenge>, AppError> {
        ChallengeRepository::new(self.db).find_active(guild_id).await
    }

    /// Completes the guild's active challenge for a member.
    ///
    /// # Returns
    /// - `Ok(ChallengeCompletion)` - First completion, XP paid
    /// - `Err(AppError::NotFound)` - No active challenge
    /// - `Err(AppError::BadRequest)` - The member already claimed this challenge
    pub async fn complete(
        &self,
        guild_id: u64,
        user_id: u64,
        now: DateTime<Utc>,
    ) -> Result<ChallengeCompletion, AppError> {
        let repo = ChallengeRepository::new(self.db);
        let challenge = repo
            .find_active(guild_id)
            .await?
            .ok_or_else(no_active_challenge)?;

        if !repo.record_completion(challenge.id, user_id, now).await? {
            return Err(AppError::BadRequest(
                "You already received the reward for this challenge!".to_string(),
            ));
        }

        let gain = UserService::new(self.db)
            .add_xp(user_id, i64::from(challenge.xp_reward))
            .await?;

        Ok(ChallengeCompletion { challenge, gain })
    }

    /// Closes the guild's active challenge.
    pub async fn end(&self, guild_id: u64) -> Result<Challenge, AppError> {
        let repo = ChallengeRepository::new(self.db);
        let mut challenge = repo
            .find_active(guild_id)
            .await?
            .ok_or_else(no_active_challenge)?;

        if !repo.deactivate(challenge.id).await? {
            return Err(no_active_challenge());
        }

        challenge.active = false;
        Ok(challenge)
    }
}
