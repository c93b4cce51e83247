//! Birthday factory.

use crate::factory::helpers::next_snowflake;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a birthday on `day`/`month` for a generated user, never celebrated.
pub async fn create_birthday(
    db: &DatabaseConnection,
    day: i32,
    month: i32,
) -> Result<entity::birthday::Model, DbErr> {
    create_birthday_for_user(db, next_snowflake(), day, month, None).await
}

/// Creates a birthday for a specific user.
pub async fn create_birthday_for_user(
    db: &DatabaseConnection,
    user_id: impl Into<String>,
    day: i32,
    month: i32,
    last_celebrated_year: Option<i32>,
) -> Result<entity::birthday::Model, DbErr> {
    entity::birthday::ActiveModel {
        user_id: ActiveValue::Set(user_id.into()),
        day: ActiveValue::Set(day),
        month: ActiveValue::Set(month),
        last_celebrated_year: ActiveValue::Set(last_celebrated_year),
        ..Default::default()
    }
    .insert(db)
    .await
}
