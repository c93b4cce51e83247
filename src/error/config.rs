use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// Check the `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but its value cannot be used.
    #[error("Invalid value for environment variable {name}: {reason}")]
    InvalidEnvVar {
        /// Name of the offending variable
        name: String,
        /// Why the value was rejected
        reason: String,
    },

    /// `BOT_PROFILE` is neither `MAIN` nor `MUSIC_<n>`.
    #[error("Unknown bot profile '{0}', expected MAIN or MUSIC_<n>")]
    UnknownProfile(String),

    /// A `MUSIC_<n>` profile refers to a token that is not configured.
    #[error("Profile {profile} needs music token #{index} but only {available} are configured")]
    MusicTokenOutOfRange {
        profile: String,
        index: usize,
        available: usize,
    },
}
