//! Tribe factories.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a tribe led by `leader_id` with the leader as its only member.
pub async fn create_tribe(
    db: &DatabaseConnection,
    leader_id: &str,
) -> Result<entity::tribe::Model, DbErr> {
    let tribe = entity::tribe::ActiveModel {
        name: ActiveValue::Set(format!("Tribe {}", next_id())),
        description: ActiveValue::Set("Test motto".to_string()),
        leader_id: ActiveValue::Set(leader_id.to_string()),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    create_tribe_member(db, tribe.id, leader_id).await?;

    Ok(tribe)
}

pub async fn create_tribe_member(
    db: &DatabaseConnection,
    tribe_id: i32,
    user_id: &str,
) -> Result<entity::tribe_member::Model, DbErr> {
    entity::tribe_member::ActiveModel {
        tribe_id: ActiveValue::Set(tribe_id),
        user_id: ActiveValue::Set(user_id.to_string()),
        joined_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
