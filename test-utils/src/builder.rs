use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Add entity tables with `with_table()` or one of the grouped helpers, then call
/// `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, LevelReward};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(LevelReward)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
    /// CREATE INDEX statements executed after every table exists.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. The table is created when `build()` is called.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds an index that entity definitions cannot express, such as a composite unique
    /// key from a migration.
    pub fn with_index(mut self, index: IndexCreateStatement) -> Self {
        self.indexes.push(index);
        self
    }

    /// Adds the challenge tables and the one-completion-per-member index.
    ///
    /// Also adds `User`, completions pay XP.
    pub fn with_challenge_tables(self) -> Self {
        self.with_table(User)
            .with_table(Challenge)
            .with_table(ChallengeCompletion)
            .with_index(challenge_completion_index())
    }

    /// Adds the tables used by profile and economy operations.
    ///
    /// Adds `User` and `LevelReward`. Use this when testing XP, levelling or coin
    /// transfers.
    pub fn with_profile_tables(self) -> Self {
        self.with_table(User).with_table(LevelReward)
    }

    /// Adds the tables used by shop purchases.
    pub fn with_shop_tables(self) -> Self {
        self.with_table(User).with_table(ShopItem)
    }

    /// Adds every table in the schema.
    ///
    /// Use this for router and scheduler tests that touch several features at once.
    pub fn with_all_tables(self) -> Self {
        self.with_table(User)
            .with_table(GuildConfig)
            .with_table(LevelReward)
            .with_table(ShopItem)
            .with_table(Giveaway)
            .with_table(Reminder)
            .with_table(Birthday)
            .with_table(AfkStatus)
            .with_table(Tag)
            .with_table(Ticket)
            .with_table(Poll)
            .with_table(StarboardConfig)
            .with_table(StarboardEntry)
            .with_table(Tribe)
            .with_table(TribeMember)
            .with_table(StatChannel)
            .with_table(NewsFeed)
            .with_table(NotificationConfig)
            .with_table(Goal)
            .with_table(Habit)
            .with_table(JournalEntry)
            .with_table(Challenge)
            .with_table(ChallengeCompletion)
            .with_index(challenge_completion_index())
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements in the order they were added.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}

fn challenge_completion_index() -> IndexCreateStatement {
    Index::create()
        .name("idx_challenge_completion_challenge_user")
        .table(ChallengeCompletion)
        .col(entity::challenge_completion::Column::ChallengeId)
        .col(entity::challenge_completion::Column::UserId)
        .unique()
        .to_owned()
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
