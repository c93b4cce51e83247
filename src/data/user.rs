//! User data repository for profile, XP and coin operations.
//!
//! Rows are created lazily the first time a member touches a feature, so most read paths
//! go through `get_or_create`.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, TransactionTrait,
};
use sea_orm::sea_query::Expr;

use crate::{
    error::AppError,
    model::user::{Transfer, UserProfile},
};

/// Conditional progress writes retried before giving up.
const PROGRESS_ATTEMPTS: usize = 8;

/// Repository providing database operations for member profiles.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a user by their Discord ID.
    ///
    /// # Returns
    /// - `Ok(Some(UserProfile))` - User found
    /// - `Ok(None)` - No profile exists yet for that member
    /// - `Err(AppError)` - Database error or corrupt stored id
    pub async fn find_by_discord_id(&self, discord_id: u64) -> Result<Option<UserProfile>, AppError> {
        let entity = entity::prelude::User::find_by_id(discord_id.to_string())
            .one(self.db)
            .await?;

        entity.map(UserProfile::from_entity).transpose()
    }

    /// Returns the member's profile, creating an empty one (level 1, no XP, no coins) when
    /// none exists.
    ///
    /// A concurrent creation of the same row is tolerated: if the insert fails the row is
    /// read back before giving up.
    pub async fn get_or_create(&self, discord_id: u64) -> Result<UserProfile, AppError> {
        if let Some(user) = self.find_by_discord_id(discord_id).await? {
            return Ok(user);
        }

        let inserted = entity::user::ActiveModel {
            discord_id: ActiveValue::Set(discord_id.to_string()),
            xp: ActiveValue::Set(0),
            level: ActiveValue::Set(1),
            coins: ActiveValue::Set(0),
            last_daily: ActiveValue::Set(None),
            bio: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await;

        match inserted {
            Ok(entity) => UserProfile::from_entity(entity),
            Err(err) => match self.find_by_discord_id(discord_id).await? {
                Some(user) => Ok(user),
                None => Err(err.into()),
            },
        }
    }

    /// Applies an XP change computed by `apply` to the member's level and in-level XP.
    ///
    /// The row is read and written inside one transaction, and the write only lands when
    /// level and XP still hold the values that were read. A concurrent writer makes the
    /// write miss and the whole step is retried, so no gain is ever lost.
    ///
    /// # Arguments
    /// - `discord_id` - Member whose progress changes, created when missing
    /// - `apply` - Maps the stored `(level, xp)` to the new pair
    ///
    /// # Returns
    /// - `Ok((UserProfile, previous_level))` - Progress after the change
    /// - `Err(AppError::InternalError)` - Still contended after `PROGRESS_ATTEMPTS` tries
    pub async fn update_progress<F>(
        &self,
        discord_id: u64,
        apply: F,
    ) -> Result<(UserProfile, i32), AppError>
    where
        F: Fn(i32, i64) -> (i32, i64),
    {
        self.get_or_create(discord_id).await?;

        for _ in 0..PROGRESS_ATTEMPTS {
            let txn = self.db.begin().await?;

            let current = entity::prelude::User::find_by_id(discord_id.to_string())
                .one(&txn)
                .await?
                .ok_or_else(|| AppError::NotFound("Profile not found.".to_string()))?;

            let (level, xp) = apply(current.level, current.xp);
            let previous_level = current.level;
            if level == current.level && xp == current.xp {
                return Ok((UserProfile::from_entity(current)?, previous_level));
            }

            let result = entity::prelude::User::update_many()
                .filter(entity::user::Column::DiscordId.eq(discord_id.to_string()))
                .filter(entity::user::Column::Level.eq(previous_level))
                .filter(entity::user::Column::Xp.eq(current.xp))
                .col_expr(entity::user::Column::Level, Expr::value(level))
                .col_expr(entity::user::Column::Xp, Expr::value(xp))
                .exec(&txn)
                .await?;

            if result.rows_affected == 0 {
                txn.rollback().await?;
                continue;
            }

            let updated = entity::prelude::User::find_by_id(discord_id.to_string())
                .one(&txn)
                .await?
                .ok_or_else(|| AppError::NotFound("Profile not found.".to_string()))?;
            txn.commit().await?;

            return Ok((UserProfile::from_entity(updated)?, previous_level));
        }

        Err(AppError::InternalError(format!(
            "XP update for {} kept conflicting after {} attempts",
            discord_id, PROGRESS_ATTEMPTS
        )))
    }

    /// Adds `delta` coins (negative to remove) to an existing member.
    pub async fn add_coins(&self, discord_id: u64, delta: i64) -> Result<UserProfile, AppError> {
        let txn = self.db.begin().await?;

        let entity = entity::prelude::User::find_by_id(discord_id.to_string())
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound("Profile not found.".to_string()))?;

        let coins = entity.coins + delta;
        let mut active: entity::user::ActiveModel = entity.into();
        active.coins = ActiveValue::Set(coins);
        let entity = active.update(&txn).await?;

        txn.commit().await?;

        UserProfile::from_entity(entity)
    }

    /// Removes `amount` coins only when the member holds at least that many.
    ///
    /// # Returns
    /// - `Ok(Some(UserProfile))` - Coins deducted
    /// - `Ok(None)` - Balance too low, nothing changed
    pub async fn try_spend(&self, discord_id: u64, amount: i64) -> Result<Option<UserProfile>, AppError> {
        let txn = self.db.begin().await?;

        let Some(entity) = entity::prelude::User::find_by_id(discord_id.to_string())
            .one(&txn)
            .await?
        else {
            return Ok(None);
        };

        if entity.coins < amount {
            return Ok(None);
        }

        let coins = entity.coins - amount;
        let mut active: entity::user::ActiveModel = entity.into();
        active.coins = ActiveValue::Set(coins);
        let entity = active.update(&txn).await?;

        txn.commit().await?;

        Ok(Some(UserProfile::from_entity(entity)?))
    }

    /// Moves `amount` coins from `sender_id` to `receiver_id` in one transaction.
    ///
    /// Both profiles must exist. The combined balance of the two members is unchanged.
    ///
    /// # Returns
    /// - `Ok(Some(Transfer))` - Both balances after the transfer
    /// - `Ok(None)` - Sender balance too low, nothing changed
    /// - `Err(AppError::NotFound)` - One of the profiles does not exist
    pub async fn transfer(
        &self,
        sender_id: u64,
        receiver_id: u64,
        amount: i64,
    ) -> Result<Option<Transfer>, AppError> {
        let txn = self.db.begin().await?;

        let sender = entity::prelude::User::find_by_id(sender_id.to_string())
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound("Sender profile not found.".to_string()))?;
        let receiver = entity::prelude::User::find_by_id(receiver_id.to_string())
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound("Receiver profile not found.".to_string()))?;

        if sender.coins < amount {
            return Ok(None);
        }

        let sender_coins = sender.coins - amount;
        let receiver_coins = receiver.coins + amount;

        let mut sender: entity::user::ActiveModel = sender.into();
        sender.coins = ActiveValue::Set(sender_coins);
        let sender = sender.update(&txn).await?;

        let mut receiver: entity::user::ActiveModel = receiver.into();
        receiver.coins = ActiveValue::Set(receiver_coins);
        let receiver = receiver.update(&txn).await?;

        txn.commit().await?;

        Ok(Some(Transfer {
            sender: UserProfile::from_entity(sender)?,
            receiver: UserProfile::from_entity(receiver)?,
            amount,
        }))
    }

    pub async fn set_bio(&self, discord_id: u64, bio: Option<String>) -> Result<UserProfile, AppError> {
        let entity = entity::user::ActiveModel {
            discord_id: ActiveValue::Unchanged(discord_id.to_string()),
            bio: ActiveValue::Set(bio),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        UserProfile::from_entity(entity)
    }

    pub async fn set_last_daily(
        &self,
        discord_id: u64,
        claimed_at: DateTime<Utc>,
    ) -> Result<UserProfile, AppError> {
        let entity = entity::user::ActiveModel {
            discord_id: ActiveValue::Unchanged(discord_id.to_string()),
            last_daily: ActiveValue::Set(Some(claimed_at)),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        UserProfile::from_entity(entity)
    }

    /// Top members ordered by level, then XP inside the level.
    pub async fn top_by_level(&self, limit: u64) -> Result<Vec<UserProfile>, AppError> {
        entity::prelude::User::find()
            .order_by_desc(entity::user::Column::Level)
            .order_by_desc(entity::user::Column::Xp)
            .limit(limit)
            .all(self.db)
            .await?
            .into_iter()
            .map(UserProfile::from_entity)
            .collect()
    }

    /// Top members ordered by coin balance, ignoring empty wallets.
    pub async fn top_by_coins(&self, limit: u64) -> Result<Vec<UserProfile>, AppError> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Coins.gt(0))
            .order_by_desc(entity::user::Column::Coins)
            .limit(limit)
            .all(self.db)
            .await?
            .into_iter()
            .map(UserProfile::from_entity)
            .collect()
    }
}
