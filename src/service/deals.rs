//! Free game announcements from the GamerPower listing.

use sea_orm::DatabaseConnection;

use crate::{
    data::deals::NotificationConfigRepository,
    error::AppError,
    model::deals::{Deal, NotificationConfig},
};

/// Newest free games for PC and consoles first.
pub const DEALS_URL: &str = "https://www.gamerpower.com/api/giveaways?type=game&platform=pc.ps4.ps5.xbox-one.xbox-series-xs&sort-by=date";

const MAX_DESCRIPTION_LENGTH: usize = 200;

/// Whether a guild has not seen this listing yet.
pub fn needs_post(config: &NotificationConfig, deal_id: u64) -> bool {
    config.free_games_channel_id.is_some()
        && config.last_game_id.as_deref() != Some(deal_id.to_string().as_str())
}

/// Description cut to the embed teaser length.
pub fn teaser(description: &str) -> String {
    if description.chars().count() <= MAX_DESCRIPTION_LENGTH {
        return description.to_string();
    }

    let cut: String = description.chars().take(MAX_DESCRIPTION_LENGTH).collect();
    format!("{}...", cut.trim_end())
}

/// Newest listing, `None` when the API returned no games.
pub async fn fetch_latest_deal(web: &reqwest::Client) -> Result<Option<Deal>, AppError> {
    let deals: Vec<Deal> = web
        .get(DEALS_URL)
        .header(reqwest::header::ACCEPT, "application/json")
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    Ok(deals.into_iter().next())
}

pub struct DealsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DealsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn configure(
        &self,
        guild_id: u64,
        channel_id: u64,
        role_id: Option<u64>,
    ) -> Result<NotificationConfig, AppError> {
        NotificationConfigRepository::new(self.db)
            .set_channel(guild_id, channel_id, role_id)
            .await
    }

    /// Guilds that have not been told about `deal` yet.
    pub async fn pending(&self, deal: &Deal) -> Result<Vec<NotificationConfig>, AppError> {
        let configs = NotificationConfigRepository::new(self.db)
            .get_with_channel()
            .await?;

        Ok(configs
            .into_iter()
            .filter(|config| needs_post(config, deal.id))
            .collect())
    }

    pub async fn mark_posted(&self, guild_id: u64, deal_id: u64) -> Result<(), AppError> {
        NotificationConfigRepository::new(self.db)
            .set_last_game(guild_id, &deal_id.to_string())
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(channel: Option<u64>, last: Option<&str>) -> NotificationConfig {
        NotificationConfig {
            id: 1,
            guild_id: 10,
            free_games_channel_id: channel,
            mention_role_id: None,
            last_game_id: last.map(str::to_string),
        }
    }

    #[test]
    fn posts_each_listing_once() {
        assert!(needs_post(&config(Some(5), None), 3107));
        assert!(needs_post(&config(Some(5), Some("3100")), 3107));
        assert!(!needs_post(&config(Some(5), Some("3107")), 3107));
        assert!(!needs_post(&config(None, None), 3107));
    }

    #[test]
    fn shortens_long_descriptions() {
        assert_eq!(teaser("Short one"), "Short one");

        let long = "word ".repeat(60);
        let short = teaser(&long);
        assert!(short.ends_with("..."));
        assert!(short.chars().count() <= MAX_DESCRIPTION_LENGTH + 3);
    }

    #[test]
    fn reads_api_listings() {
        let json = r#"[{
            "id": 3107,
            "title": "Space Game (Epic Games) Giveaway",
            "worth": "$19.99",
            "image": "https://www.gamerpower.com/offers/1/3107.jpg",
            "description": "Grab it free.",
            "open_giveaway_url": "https://www.gamerpower.com/open/space-game",
            "platforms": "PC, Epic Games Store",
            "end_date": "2026-03-12 23:59:00",
            "users": 1200
        }]"#;

        let deals: Vec<Deal> = serde_json::from_str(json).unwrap();
        assert_eq!(deals[0].id, 3107);
        assert_eq!(deals[0].platforms, "PC, Epic Games Store");

        let minimal: Deal = serde_json::from_str(
            r#"{"id": 1, "title": "X", "open_giveaway_url": "https://g.example"}"#,
        )
        .unwrap();
        assert_eq!(minimal.worth, "N/A");
        assert_eq!(minimal.image, None);
    }
}
