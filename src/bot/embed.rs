//! Embed palette shared by commands, event handlers and scheduled jobs.

use serenity::all::{Colour, CreateEmbed, CreateEmbedFooter, Timestamp};

pub const DEFAULT: Colour = Colour::from_rgb(147, 112, 219);
pub const SUCCESS: Colour = Colour::from_rgb(87, 242, 135);
pub const ERROR: Colour = Colour::from_rgb(237, 66, 69);
pub const WARNING: Colour = Colour::from_rgb(254, 231, 92);
pub const INFO: Colour = Colour::from_rgb(88, 101, 242);

const FOOTER: &str = "Dream Club";

/// Embed with the default colour, footer and the current timestamp.
pub fn titled(title: impl Into<String>) -> CreateEmbed {
    CreateEmbed::new()
        .title(title)
        .colour(DEFAULT)
        .footer(CreateEmbedFooter::new(FOOTER))
        .timestamp(Timestamp::now())
}

pub fn base(title: impl Into<String>, description: impl Into<String>) -> CreateEmbed {
    titled(title).description(description)
}

pub fn success(description: impl Into<String>) -> CreateEmbed {
    base("✅ Success", description).colour(SUCCESS)
}

pub fn error(description: impl Into<String>) -> CreateEmbed {
    base("❌ Error", description).colour(ERROR)
}

pub fn warning(description: impl Into<String>) -> CreateEmbed {
    base("⚠️ Warning", description).colour(WARNING)
}
