//! Tribe repository.
//!
//! A member belongs to at most one tribe; the unique `user_id` of `tribe_member` enforces it.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection,
    EntityTrait, PaginatorTrait, QueryFilter, TransactionTrait,
};

use crate::{error::AppError, model::tribe::Tribe};

pub struct TribeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TribeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Founds a tribe and pays for it from the leader's in-level XP.
    ///
    /// The membership checks, the XP deduction and both inserts run in one transaction;
    /// any refusal leaves every table untouched.
    ///
    /// # Returns
    /// - `Ok(Tribe)` - The new tribe, with the leader as its first member
    /// - `Err(AppError::BadRequest)` - Leader already in a tribe, name taken or not enough XP
    pub async fn create(
        &self,
        name: &str,
        description: &str,
        leader_id: u64,
        cost: i64,
        now: DateTime<Utc>,
    ) -> Result<Tribe, AppError> {
        let txn = self.db.begin().await?;

        let membership = entity::prelude::TribeMember::find()
            .filter(entity::tribe_member::Column::UserId.eq(leader_id.to_string()))
            .one(&txn)
            .await?;
        if membership.is_some() {
            return Err(AppError::BadRequest(
                "You already belong to a tribe. Leave it first.".to_string(),
            ));
        }

        let taken = entity::prelude::Tribe::find()
            .filter(entity::tribe::Column::Name.eq(name))
            .one(&txn)
            .await?;
        if taken.is_some() {
            return Err(AppError::BadRequest(
                "A tribe with that name already exists.".to_string(),
            ));
        }

        let insufficient = || {
            AppError::BadRequest(format!(
                "Not enough XP. Founding a tribe costs {} XP.",
                cost
            ))
        };
        let user = entity::prelude::User::find_by_id(leader_id.to_string())
            .one(&txn)
            .await?
            .ok_or_else(insufficient)?;
        if user.xp < cost {
            return Err(insufficient());
        }

        let paid = entity::prelude::User::update_many()
            .filter(entity::user::Column::DiscordId.eq(leader_id.to_string()))
            .filter(entity::user::Column::Level.eq(user.level))
            .filter(entity::user::Column::Xp.eq(user.xp))
            .col_expr(entity::user::Column::Xp, Expr::value(user.xp - cost))
            .exec(&txn)
            .await?;
        if paid.rows_affected == 0 {
            return Err(insufficient());
        }

        let tribe = entity::tribe::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            description: ActiveValue::Set(description.to_string()),
            leader_id: ActiveValue::Set(leader_id.to_string()),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        entity::tribe_member::ActiveModel {
            tribe_id: ActiveValue::Set(tribe.id),
            user_id: ActiveValue::Set(leader_id.to_string()),
            joined_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Tribe::from_entity(tribe)
    }

    /// Tribe the member belongs to, if any.
    pub async fn find_by_member(&self, user_id: u64) -> Result<Option<Tribe>, AppError> {
        let Some(membership) = entity::prelude::TribeMember::find()
            .filter(entity::tribe_member::Column::UserId.eq(user_id.to_string()))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        entity::prelude::Tribe::find_by_id(membership.tribe_id)
            .one(self.db)
            .await?
            .map(Tribe::from_entity)
            .transpose()
    }

    pub async fn count_members(&self, tribe_id: i32) -> Result<u64, AppError> {
        let count = entity::prelude::TribeMember::find()
            .filter(entity::tribe_member::Column::TribeId.eq(tribe_id))
            .count(self.db)
            .await?;

        Ok(count)
    }

    /// Adds a member who is not in any tribe yet.
    ///
    /// # Returns
    /// - `Ok(true)` - Member added
    /// - `Ok(false)` - The member already belongs to a tribe
    pub async fn add_member(
        &self,
        tribe_id: i32,
        user_id: u64,
        now: DateTime<Utc>,
    ) -> Result<bool, AppError> {
        let inserted = entity::tribe_member::ActiveModel {
            tribe_id: ActiveValue::Set(tribe_id),
            user_id: ActiveValue::Set(user_id.to_string()),
            joined_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await;

        match inserted {
            Ok(_) => Ok(true),
            Err(err) => match self.find_by_member(user_id).await? {
                Some(_) => Ok(false),
                None => Err(err.into()),
            },
        }
    }

    /// # Returns
    /// - `Ok(true)` - The membership was removed
    /// - `Ok(false)` - The member was in no tribe
    pub async fn remove_member(&self, user_id: u64) -> Result<bool, AppError> {
        let result = entity::prelude::TribeMember::delete_many()
            .filter(entity::tribe_member::Column::UserId.eq(user_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
