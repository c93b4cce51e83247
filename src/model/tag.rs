use chrono::{DateTime, Utc};

use crate::{error::AppError, util::parse::parse_u64_from_string};

#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub id: i32,
    pub guild_id: u64,
    pub author_id: u64,
    pub name: String,
    pub content: String,
    pub uses: i32,
    pub created_at: DateTime<Utc>,
}

impl Tag {
    pub fn from_entity(entity: entity::tag::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            guild_id: parse_u64_from_string(entity.guild_id)?,
            author_id: parse_u64_from_string(entity.author_id)?,
            name: entity.name,
            content: entity.content,
            uses: entity.uses,
            created_at: entity.created_at,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateTagParam {
    pub guild_id: u64,
    pub author_id: u64,
    pub name: String,
    pub content: String,
}

/// Canonical form of a tag name: trimmed, lower-case, spaces replaced by `_`.
pub fn normalize_tag_name(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

/// Discord shows at most this many autocomplete choices.
pub const MAX_SUGGESTIONS: usize = 25;

/// Tag names containing `partial`, ignoring case, capped at `MAX_SUGGESTIONS`.
pub fn suggest_tag_names<'a>(names: impl IntoIterator<Item = &'a str>, partial: &str) -> Vec<String> {
    let partial = partial.trim().to_lowercase();

    names
        .into_iter()
        .filter(|name| name.to_lowercase().contains(&partial))
        .take(MAX_SUGGESTIONS)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_names() {
        assert_eq!(normalize_tag_name("  House Rules "), "house_rules");
        assert_eq!(normalize_tag_name("FAQ"), "faq");
    }

    #[test]
    fn suggests_names_containing_the_input() {
        let names = ["faq", "house_rules", "rules_voice"];

        assert_eq!(
            suggest_tag_names(names, "RULES"),
            vec!["house_rules".to_string(), "rules_voice".to_string()]
        );
        assert_eq!(suggest_tag_names(names, "").len(), 3);

        let many: Vec<String> = (0..40).map(|i| format!("tag{}", i)).collect();
        assert_eq!(
            suggest_tag_names(many.iter().map(String::as_str), "tag").len(),
            MAX_SUGGESTIONS
        );
    }
}
