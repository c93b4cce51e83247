//! User factory for creating test profile rows.

use crate::factory::helpers::next_snowflake;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .discord_id("123456789")
///     .level(3)
///     .xp(250)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    discord_id: String,
    xp: i64,
    level: i32,
    coins: i64,
    last_daily: Option<DateTime<Utc>>,
    bio: Option<String>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - discord_id: unique generated snowflake
    /// - xp: `0`, level: `1`, coins: `0`
    /// - last_daily: `None`, bio: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            discord_id: next_snowflake(),
            xp: 0,
            level: 1,
            coins: 0,
            last_daily: None,
            bio: None,
        }
    }

    pub fn discord_id(mut self, discord_id: impl Into<String>) -> Self {
        self.discord_id = discord_id.into();
        self
    }

    pub fn xp(mut self, xp: i64) -> Self {
        self.xp = xp;
        self
    }

    pub fn level(mut self, level: i32) -> Self {
        self.level = level;
        self
    }

    pub fn coins(mut self, coins: i64) -> Self {
        self.coins = coins;
        self
    }

    pub fn last_daily(mut self, last_daily: Option<DateTime<Utc>>) -> Self {
        self.last_daily = last_daily;
        self
    }

    pub fn bio(mut self, bio: Option<String>) -> Self {
        self.bio = bio;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            discord_id: ActiveValue::Set(self.discord_id),
            xp: ActiveValue::Set(self.xp),
            level: ActiveValue::Set(self.level),
            coins: ActiveValue::Set(self.coins),
            last_daily: ActiveValue::Set(self.last_daily),
            bio: ActiveValue::Set(self.bio),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user holding the given coin balance.
pub async fn create_user_with_coins(
    db: &DatabaseConnection,
    coins: i64,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).coins(coins).build().await
}
