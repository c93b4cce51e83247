//! Tribes: member groups founded with XP.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    data::tribe::TribeRepository,
    error::AppError,
    model::tribe::{Tribe, TribeCard, DEFAULT_MOTTO, TRIBE_COST},
};

pub const MAX_NAME_LENGTH: usize = 32;
pub const MAX_MOTTO_LENGTH: usize = 100;

pub struct TribeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TribeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Founds a tribe led by `leader_id` for `TRIBE_COST` XP.
    pub async fn create(
        &self,
        leader_id: u64,
        name: &str,
        motto: Option<&str>,
    ) -> Result<Tribe, AppError> {
        let name = name.trim();
        if name.is_empty() || name.chars().count() > MAX_NAME_LENGTH {
            return Err(AppError::BadRequest(format!(
                "A tribe name needs 1 to {} characters.",
                MAX_NAME_LENGTH
            )));
        }

        let motto = motto.map(str::trim).filter(|m| !m.is_empty()).unwrap_or(DEFAULT_MOTTO);
        if motto.chars().count() > MAX_MOTTO_LENGTH {
            return Err(AppError::BadRequest(format!(
                "Keep the motto under {} characters.",
                MAX_MOTTO_LENGTH
            )));
        }

        TribeRepository::new(self.db)
            .create(name, motto, leader_id, TRIBE_COST, Utc::now())
            .await
    }

    /// Tribe card of a member, `None` for lone wolves.
    pub async fn card_of(&self, user_id: u64) -> Result<Option<TribeCard>, AppError> {
        let repo = TribeRepository::new(self.db);

        let Some(tribe) = repo.find_by_member(user_id).await? else {
            return Ok(None);
        };
        let member_count = repo.count_members(tribe.id).await?;

        Ok(Some(TribeCard {
            tribe,
            member_count,
        }))
    }

    /// Adds `target_id` to the tribe led by `leader_id`.
    pub async fn invite(
        &self,
        leader_id: u64,
        target_id: u64,
        target_is_bot: bool,
    ) -> Result<Tribe, AppError> {
        if target_id == leader_id || target_is_bot {
            return Err(AppError::BadRequest("Invalid invitation.".to_string()));
        }

        let repo = TribeRepository::new(self.db);
        let tribe = repo
            .find_by_member(leader_id)
            .await?
            .filter(|tribe| tribe.leader_id == leader_id)
            .ok_or_else(|| {
                AppError::BadRequest("Only the tribe leader can invite members.".to_string())
            })?;

        if !repo.add_member(tribe.id, target_id, Utc::now()).await? {
            return Err(AppError::BadRequest(format!(
                "<@{}> already belongs to a tribe.",
                target_id
            )));
        }

        Ok(tribe)
    }

    /// Removes the member from their tribe. Leaders cannot leave.
    pub async fn leave(&self, user_id: u64) -> Result<Tribe, AppError> {
        let repo = TribeRepository::new(self.db);

        let tribe = repo
            .find_by_member(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("You are not in a tribe.".to_string()))?;

        if tribe.leader_id == user_id {
            return Err(AppError::BadRequest(
                "The leader cannot leave the tribe.".to_string(),
            ));
        }

        repo.remove_member(user_id).await?;

        Ok(tribe)
    }
}
