//! Member profile: XP, level, coins and bio.

use chrono::{DateTime, Utc};

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// XP needed to go from `level` to `level + 1`.
pub fn xp_threshold(level: i32) -> i64 {
    level as i64 * 100
}

/// Member profile shared by the levels and economy modules.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub discord_id: u64,
    /// XP accumulated inside the current level
    pub xp: i64,
    pub level: i32,
    pub coins: i64,
    pub last_daily: Option<DateTime<Utc>>,
    pub bio: Option<String>,
}

impl UserProfile {
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        Ok(Self {
            discord_id: parse_u64_from_string(entity.discord_id)?,
            xp: entity.xp,
            level: entity.level,
            coins: entity.coins,
            last_daily: entity.last_daily,
            bio: entity.bio,
        })
    }

    pub fn next_level_xp(&self) -> i64 {
        xp_threshold(self.level)
    }

    /// XP earned over the member's lifetime, including every completed level.
    pub fn total_xp(&self) -> i64 {
        (1..self.level).map(xp_threshold).sum::<i64>() + self.xp
    }

    /// Progress through the current level, clamped to 0..=100.
    pub fn progress_percent(&self) -> u32 {
        let next = self.next_level_xp();
        if next <= 0 {
            return 0;
        }
        ((self.xp.max(0) * 100) / next).clamp(0, 100) as u32
    }
}

/// Result of granting XP to a member.
#[derive(Debug, Clone, PartialEq)]
pub struct XpGain {
    pub profile: UserProfile,
    pub previous_level: i32,
}

impl XpGain {
    pub fn levels_gained(&self) -> i32 {
        self.profile.level - self.previous_level
    }

    pub fn leveled_up(&self) -> bool {
        self.levels_gained() > 0
    }

    /// Levels reached by this gain, in ascending order.
    pub fn reached_levels(&self) -> std::ops::RangeInclusive<i32> {
        (self.previous_level + 1)..=self.profile.level
    }
}

/// Outcome of `/daily`.
#[derive(Debug, Clone, PartialEq)]
pub enum DailyClaim {
    Claimed {
        xp: i64,
        coins: i64,
        gain: XpGain,
    },
    CoolingDown {
        next_claim: DateTime<Utc>,
    },
}

/// Balances after a successful `/pay`.
#[derive(Debug, Clone, PartialEq)]
pub struct Transfer {
    pub sender: UserProfile,
    pub receiver: UserProfile,
    pub amount: i64,
}

/// Result of a settled bet: the signed balance change and the new balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BetOutcome {
    pub delta: i64,
    pub balance: i64,
}

impl BetOutcome {
    pub fn won(&self) -> bool {
        self.delta > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(level: i32, xp: i64) -> UserProfile {
        UserProfile {
            discord_id: 1,
            xp,
            level,
            coins: 0,
            last_daily: None,
            bio: None,
        }
    }

    #[test]
    fn total_xp_counts_completed_levels() {
        assert_eq!(profile(1, 40).total_xp(), 40);
        // 100 (level 1) + 200 (level 2) + 50
        assert_eq!(profile(3, 50).total_xp(), 350);
    }

    #[test]
    fn progress_is_a_percentage_of_the_threshold() {
        assert_eq!(profile(2, 100).progress_percent(), 50);
        assert_eq!(profile(1, 0).progress_percent(), 0);
        assert_eq!(profile(1, 500).progress_percent(), 100);
    }

    #[test]
    fn reached_levels_lists_every_new_level() {
        let gain = XpGain {
            profile: profile(4, 0),
            previous_level: 1,
        };

        assert_eq!(gain.levels_gained(), 3);
        assert_eq!(gain.reached_levels().collect::<Vec<_>>(), vec![2, 3, 4]);
    }
}
