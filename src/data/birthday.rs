use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, ExprTrait,
    QueryFilter,
};

use crate::{error::AppError, model::birthday::Birthday};

pub struct BirthdayRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BirthdayRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores or replaces a member's birthday.
    ///
    /// Changing the date keeps `last_celebrated_year`, so moving a birthday does not
    /// allow a second celebration in the same year.
    pub async fn upsert(&self, user_id: u64, day: u32, month: u32) -> Result<Birthday, AppError> {
        let existing = entity::prelude::Birthday::find()
            .filter(entity::birthday::Column::UserId.eq(user_id.to_string()))
            .one(self.db)
            .await?;

        let entity = match existing {
            Some(entity) => {
                let mut active: entity::birthday::ActiveModel = entity.into();
                active.day = ActiveValue::Set(day as i32);
                active.month = ActiveValue::Set(month as i32);
                active.update(self.db).await?
            }
            None => {
                entity::birthday::ActiveModel {
                    user_id: ActiveValue::Set(user_id.to_string()),
                    day: ActiveValue::Set(day as i32),
                    month: ActiveValue::Set(month as i32),
                    last_celebrated_year: ActiveValue::Set(None),
                    ..Default::default()
                }
                .insert(self.db)
                .await?
            }
        };

        Birthday::from_entity(entity)
    }

    /// Every birthday falling on `day`/`month`.
    pub async fn get_on(&self, day: u32, month: u32) -> Result<Vec<Birthday>, AppError> {
        entity::prelude::Birthday::find()
            .filter(entity::birthday::Column::Day.eq(day as i32))
            .filter(entity::birthday::Column::Month.eq(month as i32))
            .all(self.db)
            .await?
            .into_iter()
            .map(Birthday::from_entity)
            .collect()
    }

    /// Birthdays on `day`/`month` not yet celebrated in `year`.
    pub async fn get_uncelebrated_on(
        &self,
        day: u32,
        month: u32,
        year: i32,
    ) -> Result<Vec<Birthday>, AppError> {
        entity::prelude::Birthday::find()
            .filter(entity::birthday::Column::Day.eq(day as i32))
            .filter(entity::birthday::Column::Month.eq(month as i32))
            .filter(
                entity::birthday::Column::LastCelebratedYear
                    .is_null()
                    .or(entity::birthday::Column::LastCelebratedYear.ne(year)),
            )
            .all(self.db)
            .await?
            .into_iter()
            .map(Birthday::from_entity)
            .collect()
    }

    pub async fn mark_celebrated(&self, id: i32, year: i32) -> Result<(), AppError> {
        entity::prelude::Birthday::update_many()
            .filter(entity::birthday::Column::Id.eq(id))
            .col_expr(
                entity::birthday::Column::LastCelebratedYear,
                sea_orm::sea_query::Expr::value(year),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }
}
