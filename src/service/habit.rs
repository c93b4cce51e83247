//! Habits: daily check-ins with streaks and XP.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::habit::HabitRepository,
    error::AppError,
    model::habit::{
        CheckIn, Habit, StreakChange, CHECKIN_BASE_XP, MAX_HABIT_NAME_LENGTH,
        MAX_STREAK_BONUS_XP, STREAK_BONUS_XP,
    },
    service::user::UserService,
};

fn already_checked_in() -> AppError {
    AppError::BadRequest("You already checked in today! Come back tomorrow.".to_string())
}

/// Streak after checking in on `today`.
///
/// Checking in the day after the last check-in extends the streak, any longer gap
/// starts over at 1.
///
/// # Returns
/// - `Err(AppError::BadRequest)` - Already checked in today
pub fn next_streak(
    last_checkin: Option<NaiveDate>,
    today: NaiveDate,
    current_streak: i32,
) -> Result<(i32, StreakChange), AppError> {
    let Some(last) = last_checkin else {
        return Ok((1, StreakChange::Started));
    };

    match (today - last).num_days() {
        days if days <= 0 => Err(already_checked_in()),
        1 => Ok((current_streak + 1, StreakChange::Kept)),
        _ => Ok((
            1,
            StreakChange::Lost {
                previous: current_streak,
            },
        )),
    }
}

/// XP for a check-in that brought the streak to `streak`.
pub fn checkin_xp(streak: i32) -> i64 {
    CHECKIN_BASE_XP + (i64::from(streak) * STREAK_BONUS_XP).min(MAX_STREAK_BONUS_XP)
}

pub struct HabitService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HabitService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: u64,
        name: &str,
        now: DateTime<Utc>,
    ) -> Result<Habit, AppError> {
        let name = name.trim();
        if name.is_empty() || name.chars().count() > MAX_HABIT_NAME_LENGTH {
            return Err(AppError::BadRequest(format!(
                "The name must be short (1 to {} characters).",
                MAX_HABIT_NAME_LENGTH
            )));
        }

        HabitRepository::new(self.db).create(user_id, name, now).await
    }

    pub async fn for_user(&self, user_id: u64) -> Result<Vec<Habit>, AppError> {
        HabitRepository::new(self.db).get_for_user(user_id).await
    }

    /// Checks in a habit of the member for the current UTC day.
    ///
    /// # Returns
    /// - `Ok(CheckIn)` - Updated habit, streak change and XP paid
    /// - `Err(AppError::NotFound)` - Not one of the member's habits
    /// - `Err(AppError::BadRequest)` - Already checked in today
    pub async fn check_in(
        &self,
        user_id: u64,
        habit_id: i32,
        now: DateTime<Utc>,
    ) -> Result<CheckIn, AppError> {
        let repo = HabitRepository::new(self.db);
        let mut habit = repo
            .find_owned(habit_id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Habit not found.".to_string()))?;

        let today = now.date_naive();
        let (streak, change) = next_streak(habit.last_checkin, today, habit.current_streak)?;
        let longest = habit.longest_streak.max(streak);

        if !repo
            .record_checkin(habit.id, habit.last_checkin, today, streak, longest)
            .await?
        {
            return Err(already_checked_in());
        }

        habit.current_streak = streak;
        habit.longest_streak = longest;
        habit.last_checkin = Some(today);

        let xp = checkin_xp(streak);
        let gain = UserService::new(self.db).add_xp(user_id, xp).await?;

        Ok(CheckIn {
            habit,
            change,
            xp,
            gain,
        })
    }
}
