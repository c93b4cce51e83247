//! Environment-based configuration shared by the launcher, the bots and the dashboard.

use std::{fmt, path::PathBuf, str::FromStr, time::Duration};

use crate::error::{config::ConfigError, AppError};
use crate::service::backup::BackupSettings;

const DEFAULT_DATABASE_URL: &str = "sqlite://dreamclub.db?mode=rwc";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_WEB_HOST: &str = "0.0.0.0";
const DEFAULT_WEB_PORT: u16 = 8000;
const DEFAULT_WEB_STATIC_DIR: &str = "static";
const DEFAULT_MAIN_DELAY_SECS: u64 = 5;
const DEFAULT_MUSIC_DELAY_SECS: u64 = 2;
const DEFAULT_BACKUP_DIR: &str = "backups";
const DEFAULT_BACKUP_KEEP: usize = 20;

/// Role of a bot process.
///
/// `MAIN` runs every feature module and the scheduler. `MUSIC_<n>` bots only play audio
/// and use the n-th configured music token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotProfile {
    Main,
    /// 1-based index into the music token list
    Music(usize),
}

impl BotProfile {
    pub fn is_main(&self) -> bool {
        matches!(self, BotProfile::Main)
    }
}

impl fmt::Display for BotProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BotProfile::Main => write!(f, "MAIN"),
            BotProfile::Music(index) => write!(f, "MUSIC_{}", index),
        }
    }
}

impl FromStr for BotProfile {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let profile = value.trim().to_uppercase();

        if profile == "MAIN" {
            return Ok(BotProfile::Main);
        }

        let Some(index) = profile.strip_prefix("MUSIC_") else {
            return Err(ConfigError::UnknownProfile(profile));
        };

        match index.parse::<usize>() {
            Ok(index) if index >= 1 => Ok(BotProfile::Music(index)),
            _ => Err(ConfigError::InvalidEnvVar {
                name: "BOT_PROFILE".to_string(),
                reason: format!("'{}' does not end in a positive index", profile),
            }),
        }
    }
}

pub struct Config {
    pub profile: BotProfile,

    pub main_token: Option<String>,
    /// Raw `DISCORD_TOKENS_MUSICS` value, parsed on demand
    pub music_tokens_raw: String,

    pub database_url: String,
    pub log_level: String,

    pub web_host: String,
    pub web_port: u16,
    pub web_static_dir: PathBuf,

    pub launcher_main_delay: Duration,
    pub launcher_music_delay: Duration,

    pub backup_dir: PathBuf,
    /// Newest backup files kept; older ones are deleted after each backup
    pub backup_keep: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_lookup(|name| std::env::var(name).ok())?)
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let profile = match get("BOT_PROFILE") {
            Some(value) => value.parse()?,
            None => BotProfile::Main,
        };

        let backup_keep = match get("BACKUP_KEEP") {
            Some(value) => match value.parse::<usize>() {
                Ok(keep) if keep >= 1 => keep,
                _ => {
                    return Err(ConfigError::InvalidEnvVar {
                        name: "BACKUP_KEEP".to_string(),
                        reason: format!("'{}' is not a positive number", value),
                    })
                }
            },
            None => DEFAULT_BACKUP_KEEP,
        };

        let web_port = match get("WEB_PORT") {
            Some(value) => value.parse::<u16>().map_err(|e| ConfigError::InvalidEnvVar {
                name: "WEB_PORT".to_string(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_WEB_PORT,
        };

        Ok(Self {
            profile,
            main_token: get("DISCORD_TOKEN_MAIN").or_else(|| get("DISCORD_TOKEN")),
            music_tokens_raw: get("DISCORD_TOKENS_MUSICS").unwrap_or_else(|| "[]".to_string()),
            database_url: get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            log_level: get("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            web_host: get("WEB_HOST").unwrap_or_else(|| DEFAULT_WEB_HOST.to_string()),
            web_port,
            web_static_dir: PathBuf::from(
                get("WEB_STATIC_DIR").unwrap_or_else(|| DEFAULT_WEB_STATIC_DIR.to_string()),
            ),
            launcher_main_delay: seconds(&get, "LAUNCHER_MAIN_DELAY_SECS", DEFAULT_MAIN_DELAY_SECS)?,
            launcher_music_delay: seconds(
                &get,
                "LAUNCHER_MUSIC_DELAY_SECS",
                DEFAULT_MUSIC_DELAY_SECS,
            )?,
            backup_dir: PathBuf::from(
                get("BACKUP_DIR").unwrap_or_else(|| DEFAULT_BACKUP_DIR.to_string()),
            ),
            backup_keep,
        })
    }

    /// Music tokens as the bots read them.
    ///
    /// A JSON list is used as-is. Any other non-empty value that is not `[]` is taken as a
    /// single token.
    pub fn music_tokens(&self) -> Vec<String> {
        match serde_json::from_str::<serde_json::Value>(&self.music_tokens_raw) {
            Ok(serde_json::Value::Array(values)) => values
                .into_iter()
                .filter_map(|value| value.as_str().map(str::to_string))
                .collect(),
            Ok(_) => Vec::new(),
            Err(_) => {
                let raw = self.music_tokens_raw.trim();
                if raw.is_empty() || raw == "[]" {
                    Vec::new()
                } else {
                    vec![raw.to_string()]
                }
            }
        }
    }

    /// Music tokens as the launcher reads them: only a JSON list of strings is accepted.
    pub fn music_tokens_strict(&self) -> Result<Vec<String>, ConfigError> {
        serde_json::from_str::<Vec<String>>(&self.music_tokens_raw).map_err(|e| {
            ConfigError::InvalidEnvVar {
                name: "DISCORD_TOKENS_MUSICS".to_string(),
                reason: e.to_string(),
            }
        })
    }

    /// Selects the gateway token for the configured profile.
    ///
    /// # Returns
    /// - `Ok(String)` - Main token (or the `DISCORD_TOKEN` fallback) for `MAIN`, the n-th
    ///   music token for `MUSIC_<n>`
    /// - `Err(ConfigError::MissingEnvVar)` - `MAIN` has no token configured
    /// - `Err(ConfigError::MusicTokenOutOfRange)` - fewer than n music tokens configured
    pub fn token(&self) -> Result<String, ConfigError> {
        match self.profile {
            BotProfile::Main => self
                .main_token
                .clone()
                .ok_or_else(|| ConfigError::MissingEnvVar("DISCORD_TOKEN_MAIN".to_string())),
            BotProfile::Music(index) => {
                let tokens = self.music_tokens();
                tokens
                    .get(index - 1)
                    .cloned()
                    .ok_or(ConfigError::MusicTokenOutOfRange {
                        profile: self.profile.to_string(),
                        index,
                        available: tokens.len(),
                    })
            }
        }
    }

    pub fn backup_settings(&self) -> BackupSettings {
        BackupSettings {
            dir: self.backup_dir.clone(),
            keep: self.backup_keep,
        }
    }

    pub fn web_address(&self) -> String {
        format!("{}:{}", self.web_host, self.web_port)
    }
}

fn seconds<F>(get: &F, name: &str, default: u64) -> Result<Duration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match get(name) {
        Some(value) => value
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                reason: e.to_string(),
            }),
        None => Ok(Duration::from_secs(default)),
    }
}
