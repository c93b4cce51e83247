//! Reaction polls: answer parsing, closing and vote counting.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    data::poll::PollRepository,
    error::AppError,
    model::poll::{CreatePollParam, Poll, MAX_OPTIONS, MIN_OPTIONS, NUMBER_EMOJIS, OPTION_SEPARATOR},
};

/// Splits the typed answers on `|`, dropping blanks.
pub fn parse_options(raw: &str) -> Result<Vec<String>, AppError> {
    let options: Vec<String> = raw
        .split(OPTION_SEPARATOR)
        .map(str::trim)
        .filter(|option| !option.is_empty())
        .map(str::to_string)
        .collect();

    if options.len() < MIN_OPTIONS {
        return Err(AppError::BadRequest(format!(
            "A poll needs at least {} answers separated by `|`.",
            MIN_OPTIONS
        )));
    }
    if options.len() > MAX_OPTIONS {
        return Err(AppError::BadRequest(format!(
            "A poll can have at most {} answers.",
            MAX_OPTIONS
        )));
    }

    Ok(options)
}

/// Reaction on a poll message as Discord reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionCount {
    pub emoji: String,
    pub count: u64,
    /// The bot's own reaction is part of `count`
    pub me: bool,
}

/// Member votes per answer, in answer order. The bot's own reactions are not votes.
pub fn tally(option_count: usize, reactions: &[ReactionCount]) -> Vec<u64> {
    NUMBER_EMOJIS
        .iter()
        .take(option_count)
        .map(|emoji| {
            reactions
                .iter()
                .find(|reaction| reaction.emoji == *emoji)
                .map(|reaction| reaction.count.saturating_sub(u64::from(reaction.me)))
                .unwrap_or(0)
        })
        .collect()
}

/// Results text, most voted answer first.
pub fn render_results(question: &str, options: &[String], votes: &[u64]) -> String {
    let total: u64 = votes.iter().sum();

    let mut ranked: Vec<(&String, u64)> = options.iter().zip(votes.iter().copied()).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let mut report = format!("**Question:** {}\n\n", question);
    for (option, count) in ranked {
        let percent = if total > 0 { count * 100 / total } else { 0 };
        let bar = "█".repeat((percent / 10) as usize);
        report.push_str(&format!(
            "**{}**: {} vote(s) ({}%)\n`{}`\n",
            option, count, percent, bar
        ));
    }
    report.push_str(&format!("\n👥 **Total votes:** {}", total));

    report
}

pub struct PollService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PollService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreatePollParam) -> Result<Poll, AppError> {
        if param.options.len() < MIN_OPTIONS || param.options.len() > MAX_OPTIONS {
            return Err(AppError::BadRequest(format!(
                "A poll needs between {} and {} answers.",
                MIN_OPTIONS, MAX_OPTIONS
            )));
        }

        PollRepository::new(self.db).create(param, Utc::now()).await
    }

    /// Closes the poll posted as `message_id`.
    ///
    /// Only one caller can close a poll; everyone else gets `NotFound`.
    pub async fn close(&self, guild_id: u64, message_id: u64) -> Result<Poll, AppError> {
        let repo = PollRepository::new(self.db);

        let poll = repo
            .find_by_message(guild_id, message_id)
            .await?
            .filter(|poll| poll.active)
            .ok_or_else(not_found)?;

        if !repo.deactivate(poll.id).await? {
            return Err(not_found());
        }

        Ok(Poll {
            active: false,
            ..poll
        })
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Poll not found or already closed.".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reaction(emoji: &str, count: u64, me: bool) -> ReactionCount {
        ReactionCount {
            emoji: emoji.to_string(),
            count,
            me,
        }
    }

    #[test]
    fn parses_answers() {
        assert_eq!(
            parse_options(" Pizza | Burger || Salad ").unwrap(),
            vec!["Pizza", "Burger", "Salad"]
        );
        assert!(parse_options("Only one").is_err());
        assert!(parse_options("a|b|c|d|e|f|g|h|i|j|k").is_err());
    }

    #[test]
    fn ignores_bot_reactions_and_unrelated_emojis() {
        let reactions = [
            reaction("1️⃣", 4, true),
            reaction("2️⃣", 1, true),
            reaction("🔥", 9, false),
            reaction("3️⃣", 2, false),
        ];

        assert_eq!(tally(3, &reactions), vec![3, 0, 2]);
        assert_eq!(tally(2, &[]), vec![0, 0]);
    }

    #[test]
    fn ranks_results_by_votes() {
        let options = vec!["Tea".to_string(), "Coffee".to_string()];
        let report = render_results("Drink?", &options, &[1, 3]);

        let coffee = report.find("**Coffee**: 3 vote(s) (75%)").unwrap();
        let tea = report.find("**Tea**: 1 vote(s) (25%)").unwrap();
        assert!(coffee < tea);
        assert!(report.ends_with("**Total votes:** 4"));
    }

    #[test]
    fn renders_polls_without_votes() {
        let options = vec!["A".to_string(), "B".to_string()];
        let report = render_results("Q", &options, &[0, 0]);

        assert!(report.contains("**A**: 0 vote(s) (0%)"));
    }
}
