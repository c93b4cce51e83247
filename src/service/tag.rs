use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::tag::TagRepository,
    error::AppError,
    model::tag::{normalize_tag_name, suggest_tag_names, CreateTagParam, Tag},
};

pub struct TagService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TagService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a tag under its normalised name.
    ///
    /// # Returns
    /// - `Ok(Tag)` - The stored tag
    /// - `Err(AppError::BadRequest)` - Empty name or content, or the name is taken
    pub async fn create(
        &self,
        guild_id: u64,
        author_id: u64,
        name: &str,
        content: &str,
        now: DateTime<Utc>,
    ) -> Result<Tag, AppError> {
        let name = normalize_tag_name(name);
        if name.is_empty() {
            return Err(AppError::BadRequest("The tag needs a name.".to_string()));
        }
        if content.trim().is_empty() {
            return Err(AppError::BadRequest("The tag needs some content.".to_string()));
        }

        let repo = TagRepository::new(self.db);
        if repo.find(guild_id, &name).await?.is_some() {
            return Err(AppError::BadRequest(format!(
                "A tag named '{}' already exists.",
                name
            )));
        }

        repo.create(
            CreateTagParam {
                guild_id,
                author_id,
                name,
                content: content.to_string(),
            },
            now,
        )
        .await
    }

    /// Fetches a tag and counts the use.
    pub async fn use_tag(&self, guild_id: u64, name: &str) -> Result<Tag, AppError> {
        let name = normalize_tag_name(name);
        TagRepository::new(self.db)
            .use_tag(guild_id, &name)
            .await?
            .ok_or_else(|| tag_not_found(&name))
    }

    pub async fn delete(&self, guild_id: u64, name: &str) -> Result<(), AppError> {
        let name = normalize_tag_name(name);
        if TagRepository::new(self.db).delete(guild_id, &name).await? {
            Ok(())
        } else {
            Err(tag_not_found(&name))
        }
    }

    pub async fn list(&self, guild_id: u64) -> Result<Vec<Tag>, AppError> {
        TagRepository::new(self.db).get_by_guild(guild_id).await
    }

    /// Autocomplete choices for a partially typed tag name.
    pub async fn suggest(&self, guild_id: u64, partial: &str) -> Result<Vec<String>, AppError> {
        let tags = self.list(guild_id).await?;

        Ok(suggest_tag_names(
            tags.iter().map(|tag| tag.name.as_str()),
            partial,
        ))
    }
}

fn tag_not_found(name: &str) -> AppError {
    AppError::NotFound(format!("Tag '{}' not found.", name))
}
