use chrono::{DateTime, Datelike, NaiveDate, Utc};
use sea_orm::DatabaseConnection;

use crate::{data::birthday::BirthdayRepository, error::AppError, model::birthday::Birthday};

/// XP gift for a member's birthday.
pub const BIRTHDAY_XP: i64 = 500;

/// Leap year used to validate dates so that 29 February is accepted.
const VALIDATION_YEAR: i32 = 2024;

pub fn is_valid_birthday(day: u32, month: u32) -> bool {
    NaiveDate::from_ymd_opt(VALIDATION_YEAR, month, day).is_some()
}

pub struct BirthdayService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BirthdayService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn set(&self, user_id: u64, day: u32, month: u32) -> Result<Birthday, AppError> {
        if !is_valid_birthday(day, month) {
            return Err(AppError::BadRequest(format!(
                "{:02}/{:02} is not a valid date.",
                day, month
            )));
        }

        BirthdayRepository::new(self.db)
            .upsert(user_id, day, month)
            .await
    }

    /// Every birthday falling on the day of `now`.
    pub async fn today(&self, now: DateTime<Utc>) -> Result<Vec<Birthday>, AppError> {
        BirthdayRepository::new(self.db)
            .get_on(now.day(), now.month())
            .await
    }

    /// Birthdays of today not yet celebrated this year.
    pub async fn to_celebrate(&self, now: DateTime<Utc>) -> Result<Vec<Birthday>, AppError> {
        BirthdayRepository::new(self.db)
            .get_uncelebrated_on(now.day(), now.month(), now.year())
            .await
    }

    pub async fn mark_celebrated(&self, id: i32, year: i32) -> Result<(), AppError> {
        BirthdayRepository::new(self.db)
            .mark_celebrated(id, year)
            .await
    }
}
