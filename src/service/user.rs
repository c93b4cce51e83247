//! Levels and economy rules.

use std::ops::RangeInclusive;

use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    error::AppError,
    model::user::{xp_threshold, BetOutcome, DailyClaim, Transfer, UserProfile, XpGain},
};

/// Maximum length of a profile bio, in characters.
pub const MAX_BIO_LENGTH: usize = 200;

/// Smallest accepted bet for `/coinflip` and `/dice`.
pub const MIN_BET: i64 = 10;

/// XP granted by `/daily`.
pub const DAILY_XP: RangeInclusive<i64> = 500..=1000;

/// Coins granted by `/daily`.
pub const DAILY_COINS: RangeInclusive<i64> = 100..=300;

/// Rankings show this many members.
pub const RANKING_SIZE: u64 = 10;

/// Applies `amount` XP to a level/XP pair, carrying over into as many levels as needed.
///
/// # Returns
/// - `(level, xp)` - New level and the XP left inside it
pub fn apply_xp(level: i32, xp: i64, amount: i64) -> (i32, i64) {
    let mut level = level.max(1);
    let mut xp = xp + amount.max(0);

    while xp >= xp_threshold(level) {
        xp -= xp_threshold(level);
        level += 1;
    }

    (level, xp)
}

/// Balance change of a settled dice bet: 4 to 6 wins half the stake, 1 to 3 loses it.
pub fn dice_delta(amount: i64, roll: u8) -> i64 {
    if roll >= 4 {
        amount / 2
    } else {
        -amount
    }
}

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Profile of a member, created on first touch.
    pub async fn profile(&self, discord_id: u64) -> Result<UserProfile, AppError> {
        UserRepository::new(self.db).get_or_create(discord_id).await
    }

    /// Grants XP and levels the member up as many times as the XP allows.
    ///
    /// Negative amounts are ignored so lifetime XP never decreases. Concurrent gains for
    /// the same member are all applied.
    ///
    /// # Returns
    /// - `Ok(XpGain)` - Updated profile and the level before the gain
    /// - `Err(AppError)` - Database error
    pub async fn add_xp(&self, discord_id: u64, amount: i64) -> Result<XpGain, AppError> {
        let (profile, previous_level) = UserRepository::new(self.db)
            .update_progress(discord_id, |level, xp| apply_xp(level, xp, amount))
            .await?;

        Ok(XpGain {
            profile,
            previous_level,
        })
    }

    /// Replaces the member's bio. An empty text clears it.
    pub async fn set_bio(&self, discord_id: u64, text: &str) -> Result<UserProfile, AppError> {
        let text = text.trim();
        if text.chars().count() > MAX_BIO_LENGTH {
            return Err(AppError::BadRequest(format!(
                "Your bio can be at most {} characters long.",
                MAX_BIO_LENGTH
            )));
        }

        let repo = UserRepository::new(self.db);
        repo.get_or_create(discord_id).await?;

        let bio = (!text.is_empty()).then(|| text.to_string());
        repo.set_bio(discord_id, bio).await
    }

    pub async fn ranking(&self) -> Result<Vec<UserProfile>, AppError> {
        UserRepository::new(self.db).top_by_level(RANKING_SIZE).await
    }

    pub async fn richest(&self) -> Result<Vec<UserProfile>, AppError> {
        UserRepository::new(self.db).top_by_coins(RANKING_SIZE).await
    }

    /// Sends coins from one member to another.
    ///
    /// # Returns
    /// - `Ok(Transfer)` - Both balances after the transfer
    /// - `Err(AppError::BadRequest)` - Self-payment, non-positive amount or insufficient funds
    pub async fn pay(
        &self,
        sender_id: u64,
        receiver_id: u64,
        amount: i64,
    ) -> Result<Transfer, AppError> {
        if sender_id == receiver_id {
            return Err(AppError::BadRequest("You cannot pay yourself.".to_string()));
        }
        if amount <= 0 {
            return Err(AppError::BadRequest(
                "The amount must be greater than zero.".to_string(),
            ));
        }

        let repo = UserRepository::new(self.db);
        repo.get_or_create(sender_id).await?;
        repo.get_or_create(receiver_id).await?;

        repo.transfer(sender_id, receiver_id, amount)
            .await?
            .ok_or_else(insufficient_funds)
    }

    /// Settles a coin flip the caller already tossed.
    pub async fn coinflip(
        &self,
        discord_id: u64,
        amount: i64,
        won: bool,
    ) -> Result<BetOutcome, AppError> {
        let delta = if won { amount } else { -amount };
        self.settle_bet(discord_id, amount, delta).await
    }

    /// Settles a dice bet for a roll between 1 and 6.
    pub async fn dice(&self, discord_id: u64, amount: i64, roll: u8) -> Result<BetOutcome, AppError> {
        self.settle_bet(discord_id, amount, dice_delta(amount, roll))
            .await
    }

    async fn settle_bet(
        &self,
        discord_id: u64,
        amount: i64,
        delta: i64,
    ) -> Result<BetOutcome, AppError> {
        if amount < MIN_BET {
            return Err(AppError::BadRequest(format!(
                "The minimum bet is DC$ {}.",
                MIN_BET
            )));
        }

        let repo = UserRepository::new(self.db);
        let profile = repo.get_or_create(discord_id).await?;
        if profile.coins < amount {
            return Err(insufficient_funds());
        }

        let profile = if delta < 0 {
            repo.try_spend(discord_id, -delta)
                .await?
                .ok_or_else(insufficient_funds)?
        } else {
            repo.add_coins(discord_id, delta).await?
        };

        Ok(BetOutcome {
            delta,
            balance: profile.coins,
        })
    }

    /// Claims the daily reward when the 24 hour cooldown has passed.
    ///
    /// `xp` and `coins` are the amounts rolled by the caller within `DAILY_XP` and
    /// `DAILY_COINS`.
    pub async fn daily(
        &self,
        discord_id: u64,
        now: DateTime<Utc>,
        xp: i64,
        coins: i64,
    ) -> Result<DailyClaim, AppError> {
        let repo = UserRepository::new(self.db);
        let profile = repo.get_or_create(discord_id).await?;

        if let Some(last) = profile.last_daily {
            let next_claim = last + Duration::hours(24);
            if now < next_claim {
                return Ok(DailyClaim::CoolingDown { next_claim });
            }
        }

        repo.set_last_daily(discord_id, now).await?;
        repo.add_coins(discord_id, coins).await?;
        let gain = self.add_xp(discord_id, xp).await?;

        Ok(DailyClaim::Claimed { xp, coins, gain })
    }
}

fn insufficient_funds() -> AppError {
    AppError::BadRequest("Insufficient funds.".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xp_carries_over_several_levels() {
        // 100 to reach 2, 200 to reach 3, 300 to reach 4
        assert_eq!(apply_xp(1, 0, 650), (4, 50));
        assert_eq!(apply_xp(1, 99, 1), (2, 0));
        assert_eq!(apply_xp(3, 10, 5), (3, 15));
    }

    #[test]
    fn negative_xp_is_ignored() {
        assert_eq!(apply_xp(2, 40, -500), (2, 40));
    }

    #[test]
    fn dice_pays_half_on_high_rolls() {
        assert_eq!(dice_delta(100, 6), 50);
        assert_eq!(dice_delta(15, 4), 7);
        assert_eq!(dice_delta(100, 3), -100);
        assert_eq!(dice_delta(100, 1), -100);
    }
}
