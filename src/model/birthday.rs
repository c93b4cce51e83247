use crate::{error::AppError, util::parse::parse_u64_from_string};

#[derive(Debug, Clone, PartialEq)]
pub struct Birthday {
    pub id: i32,
    pub user_id: u64,
    pub day: u32,
    pub month: u32,
    /// Year of the last celebration, used to celebrate at most once a year
    pub last_celebrated_year: Option<i32>,
}

impl Birthday {
    pub fn from_entity(entity: entity::birthday::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            user_id: parse_u64_from_string(entity.user_id)?,
            day: entity.day.max(0) as u32,
            month: entity.month.max(0) as u32,
            last_celebrated_year: entity.last_celebrated_year,
        })
    }
}
