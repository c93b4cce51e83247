use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use crate::config::{BotProfile, Config};

/// A child process the launcher starts.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessSpec {
    /// Label used in logs, such as `MAIN` or `WEB`
    pub name: String,
    pub program: PathBuf,
    pub args: Vec<String>,
    /// Variables added on top of the inherited environment
    pub env: Vec<(String, String)>,
    /// Pause before the next process is started
    pub delay_after: Duration,
}

impl ProcessSpec {
    fn bot(program: &Path, profile: BotProfile, delay_after: Duration) -> Self {
        Self {
            name: profile.to_string(),
            program: program.to_path_buf(),
            args: vec!["bot".to_string()],
            env: vec![("BOT_PROFILE".to_string(), profile.to_string())],
            delay_after,
        }
    }

    fn web(program: &Path) -> Self {
        Self {
            name: "WEB".to_string(),
            program: program.to_path_buf(),
            args: vec!["web".to_string()],
            env: Vec::new(),
            delay_after: Duration::ZERO,
        }
    }
}

/// Processes to start, in order.
///
/// `MAIN` comes first and is followed by the longer pause so that it can apply
/// migrations. A malformed music token list is logged and starts no music bot.
pub fn plan(config: &Config, program: PathBuf) -> Vec<ProcessSpec> {
    let mut specs = vec![ProcessSpec::bot(
        &program,
        BotProfile::Main,
        config.launcher_main_delay,
    )];

    match config.music_tokens_strict() {
        Ok(tokens) => {
            if !tokens.is_empty() {
                tracing::info!("Loading {} music bot(s)", tokens.len());
            }

            specs.extend((1..=tokens.len()).map(|index| {
                ProcessSpec::bot(&program, BotProfile::Music(index), config.launcher_music_delay)
            }));
        }
        Err(e) => tracing::error!("Failed to read music tokens, no music bot started: {}", e),
    }

    specs.push(ProcessSpec::web(&program));

    specs
}
