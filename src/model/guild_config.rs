//! Per-guild configuration: channels, auto-role, welcome template and module switches.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::AppError,
    util::parse::{parse_optional_u64, parse_u64_from_string},
};

/// Welcome template stored for guilds that never customised it.
pub const DEFAULT_WELCOME_MESSAGE: &str =
    "Hello {user}, welcome to {server}!\nYou are member #{count}.\nHave fun!";

#[derive(Debug, Clone, PartialEq)]
pub struct GuildConfig {
    pub id: i32,
    pub guild_id: u64,
    pub welcome_channel_id: Option<u64>,
    pub welcome_role_id: Option<u64>,
    pub ticket_category_id: Option<u64>,
    pub log_channel_id: Option<u64>,
    pub daily_channel_id: Option<u64>,
    pub welcome_message_text: String,
    pub module_welcome: bool,
    pub module_levels: bool,
    pub module_economy: bool,
    pub module_music: bool,
    pub module_tickets: bool,
    pub module_automod: bool,
    pub module_giveaways: bool,
}

impl GuildConfig {
    /// Converts an entity model to the domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(GuildConfig)` - The converted configuration
    /// - `Err(AppError::InternalErr(ParseStringId))` - A stored snowflake is not numeric
    pub fn from_entity(entity: entity::guild_config::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            guild_id: parse_u64_from_string(entity.guild_id)?,
            welcome_channel_id: parse_optional_u64(entity.welcome_channel_id)?,
            welcome_role_id: parse_optional_u64(entity.welcome_role_id)?,
            ticket_category_id: parse_optional_u64(entity.ticket_category_id)?,
            log_channel_id: parse_optional_u64(entity.log_channel_id)?,
            daily_channel_id: parse_optional_u64(entity.daily_channel_id)?,
            welcome_message_text: entity.welcome_message_text,
            module_welcome: entity.module_welcome,
            module_levels: entity.module_levels,
            module_economy: entity.module_economy,
            module_music: entity.module_music,
            module_tickets: entity.module_tickets,
            module_automod: entity.module_automod,
            module_giveaways: entity.module_giveaways,
        })
    }

    pub fn into_dto(self) -> GuildConfigDto {
        GuildConfigDto {
            id: self.id,
            guild_id: self.guild_id.to_string(),
            welcome_channel_id: self.welcome_channel_id.map(|id| id.to_string()),
            welcome_role_id: self.welcome_role_id.map(|id| id.to_string()),
            ticket_category_id: self.ticket_category_id.map(|id| id.to_string()),
            log_channel_id: self.log_channel_id.map(|id| id.to_string()),
            daily_channel_id: self.daily_channel_id.map(|id| id.to_string()),
            welcome_message_text: self.welcome_message_text,
            module_welcome: self.module_welcome,
            module_levels: self.module_levels,
            module_economy: self.module_economy,
            module_music: self.module_music,
            module_tickets: self.module_tickets,
            module_automod: self.module_automod,
            module_giveaways: self.module_giveaways,
        }
    }
}

/// Values substituted into a welcome template.
#[derive(Debug, Clone)]
pub struct WelcomePlaceholders<'a> {
    /// `{user}`: mention of the new member
    pub user: &'a str,
    /// `{name}`: plain display name
    pub name: &'a str,
    /// `{server}`: guild name
    pub server: &'a str,
    /// `{count}`: member count including the new member
    pub count: u64,
}

/// Renders a welcome template in a single pass.
///
/// Unknown placeholders and unbalanced braces are kept verbatim, and substituted values
/// are never expanded again.
pub fn render_welcome(template: &str, values: &WelcomePlaceholders<'_>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];

        let Some(end) = tail.find('}') else {
            rest = tail;
            break;
        };

        match &tail[1..end] {
            "user" => out.push_str(values.user),
            "name" => out.push_str(values.name),
            "server" => out.push_str(values.server),
            "count" => out.push_str(&values.count.to_string()),
            _ => {
                out.push('{');
                rest = &tail[1..];
                continue;
            }
        }
        rest = &tail[end + 1..];
    }

    out.push_str(rest);
    out
}

/// Feature module that can be switched off per guild.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuildModule {
    Welcome,
    Levels,
    Economy,
    Music,
    Tickets,
    Automod,
    Giveaways,
}

impl GuildModule {
    pub fn name(&self) -> &'static str {
        match self {
            GuildModule::Welcome => "welcome",
            GuildModule::Levels => "levels",
            GuildModule::Economy => "economy",
            GuildModule::Music => "music",
            GuildModule::Tickets => "tickets",
            GuildModule::Automod => "automod",
            GuildModule::Giveaways => "giveaways",
        }
    }
}

impl GuildConfig {
    pub fn is_enabled(&self, module: GuildModule) -> bool {
        match module {
            GuildModule::Welcome => self.module_welcome,
            GuildModule::Levels => self.module_levels,
            GuildModule::Economy => self.module_economy,
            GuildModule::Music => self.module_music,
            GuildModule::Tickets => self.module_tickets,
            GuildModule::Automod => self.module_automod,
            GuildModule::Giveaways => self.module_giveaways,
        }
    }
}

/// Channel or role slot of a guild configuration that commands can set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuildSetting {
    WelcomeChannel,
    WelcomeRole,
    TicketCategory,
    DailyChannel,
    LogChannel,
}

/// Dashboard fields that can be edited from the web.
#[derive(Debug, Clone)]
pub struct UpdateGuildConfigParam {
    pub guild_id: u64,
    pub welcome_message_text: String,
    pub module_welcome: bool,
    pub module_economy: bool,
    pub module_music: bool,
    pub module_tickets: bool,
    pub module_automod: bool,
}

impl UpdateGuildConfigParam {
    pub fn from_dto(guild_id: u64, dto: UpdateGuildConfigDto) -> Self {
        Self {
            guild_id,
            welcome_message_text: dto.welcome_message_text,
            module_welcome: dto.module_welcome,
            module_economy: dto.module_economy,
            module_music: dto.module_music,
            module_tickets: dto.module_tickets,
            module_automod: dto.module_automod,
        }
    }
}

/// Guild configuration as returned by the dashboard API.
///
/// Snowflakes are serialised as strings since they exceed the precision of JSON numbers
/// in browsers.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct GuildConfigDto {
    pub id: i32,
    pub guild_id: String,
    pub welcome_channel_id: Option<String>,
    pub welcome_role_id: Option<String>,
    pub ticket_category_id: Option<String>,
    pub log_channel_id: Option<String>,
    pub daily_channel_id: Option<String>,
    pub welcome_message_text: String,
    pub module_welcome: bool,
    pub module_levels: bool,
    pub module_economy: bool,
    pub module_music: bool,
    pub module_tickets: bool,
    pub module_automod: bool,
    pub module_giveaways: bool,
}

/// Body of `POST /api/guild/{guild_id}`. Unknown fields are ignored.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct UpdateGuildConfigDto {
    pub welcome_message_text: String,
    pub module_welcome: bool,
    pub module_economy: bool,
    pub module_music: bool,
    pub module_tickets: bool,
    pub module_automod: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values() -> WelcomePlaceholders<'static> {
        WelcomePlaceholders {
            user: "<@42>",
            name: "Ana",
            server: "Dream Club",
            count: 128,
        }
    }

    #[test]
    fn renders_default_template() {
        let text = render_welcome(DEFAULT_WELCOME_MESSAGE, &values());

        assert_eq!(
            text,
            "Hello <@42>, welcome to Dream Club!\nYou are member #128.\nHave fun!"
        );
    }

    #[test]
    fn keeps_unknown_placeholders() {
        let text = render_welcome("{greeting} {name}, see {rules} {", &values());

        assert_eq!(text, "{greeting} Ana, see {rules} {");
    }

    #[test]
    fn does_not_expand_substituted_values() {
        let values = WelcomePlaceholders {
            name: "{server}",
            ..values()
        };

        assert_eq!(render_welcome("{name}@{server}", &values), "{server}@Dream Club");
    }

    #[test]
    fn handles_nested_braces() {
        assert_eq!(render_welcome("{{user}}", &values()), "{<@42>}");
    }
}
