use serenity::all::{CommandInteraction, PartialChannel, ResolvedOption, ResolvedValue, Role, User};

use crate::error::AppError;

/// Typed access to the resolved options of a slash command.
pub struct Options<'a> {
    options: Vec<ResolvedOption<'a>>,
}

impl<'a> Options<'a> {
    pub fn new(options: Vec<ResolvedOption<'a>>) -> Self {
        Self { options }
    }

    pub fn of(command: &'a CommandInteraction) -> Self {
        Self::new(command.data.options())
    }

    fn value(&self, name: &str) -> Option<&ResolvedValue<'a>> {
        self.options
            .iter()
            .find(|option| option.name == name)
            .map(|option| &option.value)
    }

    pub fn string(&self, name: &str) -> Option<&'a str> {
        match self.value(name) {
            Some(ResolvedValue::String(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn integer(&self, name: &str) -> Option<i64> {
        match self.value(name) {
            Some(ResolvedValue::Integer(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn user(&self, name: &str) -> Option<&'a User> {
        match self.value(name) {
            Some(ResolvedValue::User(user, _)) => Some(*user),
            _ => None,
        }
    }

    pub fn role(&self, name: &str) -> Option<&'a Role> {
        match self.value(name) {
            Some(ResolvedValue::Role(role)) => Some(*role),
            _ => None,
        }
    }

    pub fn channel(&self, name: &str) -> Option<&'a PartialChannel> {
        match self.value(name) {
            Some(ResolvedValue::Channel(channel)) => Some(*channel),
            _ => None,
        }
    }

    /// First subcommand and its own options.
    pub fn subcommand(&self) -> Option<(&'a str, Options<'a>)> {
        self.options.iter().find_map(|option| match &option.value {
            ResolvedValue::SubCommand(options) => {
                Some((option.name, Options::new(options.clone())))
            }
            _ => None,
        })
    }

    pub fn required_string(&self, name: &str) -> Result<&'a str, AppError> {
        self.string(name).ok_or_else(|| missing(name))
    }

    pub fn required_integer(&self, name: &str) -> Result<i64, AppError> {
        self.integer(name).ok_or_else(|| missing(name))
    }

    pub fn required_user(&self, name: &str) -> Result<&'a User, AppError> {
        self.user(name).ok_or_else(|| missing(name))
    }

    pub fn required_role(&self, name: &str) -> Result<&'a Role, AppError> {
        self.role(name).ok_or_else(|| missing(name))
    }

    pub fn required_channel(&self, name: &str) -> Result<&'a PartialChannel, AppError> {
        self.channel(name).ok_or_else(|| missing(name))
    }
}

fn missing(name: &str) -> AppError {
    AppError::BadRequest(format!("Missing option `{}`.", name))
}
