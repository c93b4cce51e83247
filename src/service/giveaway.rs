//! Giveaway lifecycle and winner drawing.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use rand::{seq::IndexedRandom, Rng};
use sea_orm::DatabaseConnection;

use crate::{
    data::giveaway::GiveawayRepository,
    error::AppError,
    model::giveaway::{CreateGiveawayParam, Giveaway},
};

/// Reaction members add to join a giveaway.
pub const GIVEAWAY_EMOJI: &str = "🎉";

/// Draws `winners_count` distinct winners uniformly from `participants`.
///
/// Duplicate participant ids count once. Fewer participants than winners means every
/// participant wins.
pub fn draw_winners<R: Rng + ?Sized>(
    participants: &[u64],
    winners_count: usize,
    rng: &mut R,
) -> Vec<u64> {
    let mut seen = HashSet::new();
    let unique: Vec<u64> = participants
        .iter()
        .copied()
        .filter(|id| seen.insert(*id))
        .collect();

    unique
        .choose_multiple(rng, winners_count.min(unique.len()))
        .copied()
        .collect()
}

pub struct GiveawayService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GiveawayService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateGiveawayParam) -> Result<Giveaway, AppError> {
        if param.winners_count < 1 {
            return Err(AppError::BadRequest(
                "A giveaway needs at least one winner.".to_string(),
            ));
        }

        GiveawayRepository::new(self.db).create(param).await
    }

    pub async fn due(&self, now: DateTime<Utc>) -> Result<Vec<Giveaway>, AppError> {
        GiveawayRepository::new(self.db).get_due(now).await
    }

    /// Active giveaway announced by `message_id`.
    pub async fn find_active(&self, guild_id: u64, message_id: u64) -> Result<Giveaway, AppError> {
        GiveawayRepository::new(self.db)
            .find_active_by_message(guild_id, message_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound("No active giveaway found for that message.".to_string())
            })
    }

    /// Closes a giveaway.
    ///
    /// # Returns
    /// - `Ok(true)` - This call closed it and the caller should announce the winners
    /// - `Ok(false)` - It had already been closed
    pub async fn finish(&self, id: i32) -> Result<bool, AppError> {
        GiveawayRepository::new(self.db).deactivate(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn draws_distinct_winners() {
        let mut rng = StdRng::seed_from_u64(7);
        let participants = [1, 2, 3, 4, 5, 6];

        let winners = draw_winners(&participants, 3, &mut rng);
        let unique: HashSet<_> = winners.iter().collect();

        assert_eq!(winners.len(), 3);
        assert_eq!(unique.len(), 3);
        assert!(winners.iter().all(|w| participants.contains(w)));
    }

    #[test]
    fn caps_winners_at_participant_count() {
        let mut rng = StdRng::seed_from_u64(1);

        let mut winners = draw_winners(&[9, 8, 9, 8], 5, &mut rng);
        winners.sort();

        assert_eq!(winners, vec![8, 9]);
        assert!(draw_winners(&[], 3, &mut rng).is_empty());
    }

    #[test]
    fn every_participant_can_win() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = HashSet::new();

        for _ in 0..200 {
            seen.extend(draw_winners(&[1, 2, 3], 1, &mut rng));
        }

        assert_eq!(seen.len(), 3);
    }
}
