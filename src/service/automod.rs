//! Message filter of the automod module.

use regex::Regex;

use crate::error::AppError;

const INVITE_PATTERN: &str =
    r"(https?://)?(www\.)?(discord\.(gg|io|me|li)|discordapp\.com/invite)/.+[a-z]";

/// Words that get a message removed, matched case-insensitively anywhere in the text.
pub const BLOCKED_WORDS: [&str; 2] = ["scam", "casino"];

/// Why a message was removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    Invite,
    BlockedWord(&'static str),
}

impl Violation {
    /// Reason written to the moderation log.
    pub fn reason(&self) -> String {
        match self {
            Violation::Invite => "Invite link".to_string(),
            Violation::BlockedWord(word) => format!("Blocked word: {}", word),
        }
    }

    /// Short notice shown in the channel.
    pub fn notice(&self) -> &'static str {
        match self {
            Violation::Invite => "**Advertising is not allowed here!**",
            Violation::BlockedWord(_) => "⚠️ Keep the conversation civil.",
        }
    }
}

/// Compiled automod rules, built once per bot process.
pub struct AutoModFilter {
    invite: Regex,
}

impl AutoModFilter {
    pub fn new() -> Result<Self, AppError> {
        let invite = Regex::new(INVITE_PATTERN)
            .map_err(|e| AppError::InternalError(format!("Invalid invite pattern: {}", e)))?;

        Ok(Self { invite })
    }

    /// First rule the message breaks, invites before blocked words.
    pub fn check(&self, content: &str) -> Option<Violation> {
        let content = content.to_lowercase();

        if self.invite.is_match(&content) {
            return Some(Violation::Invite);
        }

        BLOCKED_WORDS
            .iter()
            .find(|word| content.contains(*word))
            .map(|word| Violation::BlockedWord(word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catches_invite_links() {
        let filter = AutoModFilter::new().unwrap();

        assert_eq!(filter.check("join discord.gg/abcdef"), Some(Violation::Invite));
        assert_eq!(
            filter.check("https://DISCORDAPP.com/invite/xyz"),
            Some(Violation::Invite)
        );
        assert_eq!(filter.check("see https://discord.com/channels/1/2"), None);
    }

    #[test]
    fn catches_blocked_words_case_insensitively() {
        let filter = AutoModFilter::new().unwrap();

        assert_eq!(
            filter.check("Best CASINO in town"),
            Some(Violation::BlockedWord("casino"))
        );
        assert_eq!(filter.check("hello everyone"), None);
    }

    #[test]
    fn invites_win_over_words() {
        let filter = AutoModFilter::new().unwrap();

        let violation = filter.check("scam at discord.gg/free").unwrap();
        assert_eq!(violation, Violation::Invite);
        assert_eq!(violation.reason(), "Invite link");
    }
}
