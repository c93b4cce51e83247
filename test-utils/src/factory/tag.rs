//! Tag factory.

use crate::factory::helpers::next_snowflake;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a tag named `name` in `guild_id` with zero uses.
///
/// The name is stored as given; callers pass already-normalised names.
pub async fn create_tag(
    db: &DatabaseConnection,
    guild_id: &str,
    name: &str,
    content: &str,
) -> Result<entity::tag::Model, DbErr> {
    entity::tag::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.to_string()),
        author_id: ActiveValue::Set(next_snowflake()),
        name: ActiveValue::Set(name.to_string()),
        content: ActiveValue::Set(content.to_string()),
        uses: ActiveValue::Set(0),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
