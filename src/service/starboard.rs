//! Starboard: reposts messages that collect enough stars.

use sea_orm::DatabaseConnection;

use crate::{
    data::starboard::StarboardRepository,
    error::AppError,
    model::starboard::{CreateStarboardEntryParam, StarboardConfig, StarboardEntry},
};

pub const MIN_THRESHOLD: i32 = 1;
pub const MAX_THRESHOLD: i32 = 100;

/// What a new star on a message leads to.
#[derive(Debug, Clone, PartialEq)]
pub enum StarAction {
    /// Below the threshold, or a star inside the starboard channel itself
    Ignore,
    /// First time over the threshold
    Post,
    /// Already on the starboard; refresh the count
    Update(StarboardEntry),
}

/// Decides what to do with a message in `channel_id` that now has `stars` stars.
pub fn decide(
    config: &StarboardConfig,
    channel_id: u64,
    stars: u64,
    entry: Option<StarboardEntry>,
) -> StarAction {
    if channel_id == config.channel_id || stars < config.threshold.max(0) as u64 {
        return StarAction::Ignore;
    }

    match entry {
        Some(entry) => StarAction::Update(entry),
        None => StarAction::Post,
    }
}

pub struct StarboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StarboardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn configure(
        &self,
        guild_id: u64,
        channel_id: u64,
        threshold: i32,
    ) -> Result<StarboardConfig, AppError> {
        if !(MIN_THRESHOLD..=MAX_THRESHOLD).contains(&threshold) {
            return Err(AppError::BadRequest(format!(
                "The minimum must be between {} and {} stars.",
                MIN_THRESHOLD, MAX_THRESHOLD
            )));
        }

        StarboardRepository::new(self.db)
            .upsert_config(guild_id, channel_id, threshold)
            .await
    }

    pub async fn config(&self, guild_id: u64) -> Result<Option<StarboardConfig>, AppError> {
        StarboardRepository::new(self.db).find_config(guild_id).await
    }

    /// Action for a starred message, looking up whether it was already reposted.
    pub async fn evaluate(
        &self,
        config: &StarboardConfig,
        channel_id: u64,
        message_id: u64,
        stars: u64,
    ) -> Result<StarAction, AppError> {
        if decide(config, channel_id, stars, None) == StarAction::Ignore {
            return Ok(StarAction::Ignore);
        }

        let entry = StarboardRepository::new(self.db).find_entry(message_id).await?;
        Ok(decide(config, channel_id, stars, entry))
    }

    /// Records a repost.
    ///
    /// Fails on a second repost of the same message, so the caller can remove its duplicate.
    pub async fn record(&self, param: CreateStarboardEntryParam) -> Result<StarboardEntry, AppError> {
        StarboardRepository::new(self.db).create_entry(param).await
    }

    pub async fn update_stars(&self, entry_id: i32, stars: u64) -> Result<(), AppError> {
        let stars = i32::try_from(stars).unwrap_or(i32::MAX);
        StarboardRepository::new(self.db).update_stars(entry_id, stars).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> StarboardConfig {
        StarboardConfig {
            id: 1,
            guild_id: 1,
            channel_id: 50,
            threshold: 3,
        }
    }

    fn entry() -> StarboardEntry {
        StarboardEntry {
            id: 7,
            guild_id: 1,
            original_message_id: 10,
            original_channel_id: 20,
            starboard_message_id: 99,
            stars: 3,
        }
    }

    #[test]
    fn posts_once_threshold_is_reached() {
        assert_eq!(decide(&config(), 20, 2, None), StarAction::Ignore);
        assert_eq!(decide(&config(), 20, 3, None), StarAction::Post);
        assert_eq!(
            decide(&config(), 20, 4, Some(entry())),
            StarAction::Update(entry())
        );
    }

    #[test]
    fn ignores_stars_inside_the_starboard() {
        assert_eq!(decide(&config(), 50, 10, None), StarAction::Ignore);
    }
}
