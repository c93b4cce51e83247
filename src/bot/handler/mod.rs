use sea_orm::DatabaseConnection;
use serenity::all::{
    ChannelId, Context, EventHandler, GuildChannel, GuildId, Interaction, Member, Message,
    MessageId, MessageUpdateEvent, Reaction, Ready, User, VoiceState,
};
use serenity::async_trait;

use crate::bot::command::{starboard, ticket};
use crate::config::BotProfile;
use crate::music::player::MusicPlayer;
use crate::service::automod::AutoModFilter;
use crate::service::backup::BackupSettings;

pub mod interaction;
pub mod logger;
pub mod member;
pub mod message;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
    pub profile: BotProfile,
    pub music: MusicPlayer,
    pub automod: AutoModFilter,
    pub backups: BackupSettings,
    /// Client for feeds and deal listings
    pub web: reqwest::Client,
}

impl Handler {
    pub fn new(
        db: DatabaseConnection,
        profile: BotProfile,
        music: MusicPlayer,
        automod: AutoModFilter,
        backups: BackupSettings,
        web: reqwest::Client,
    ) -> Self {
        Self {
            db,
            profile,
            music,
            automod,
            backups,
            web,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready, self.profile).await;
    }

    /// Called when a member joins a guild
    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        if !self.profile.is_main() {
            return;
        }

        logger::handle_member_join(&self.db, &ctx, &new_member).await;
        member::handle_guild_member_addition(&self.db, ctx, new_member).await;
    }

    /// Called when a member leaves or is removed from a guild
    async fn guild_member_removal(
        &self,
        ctx: Context,
        guild_id: GuildId,
        user: User,
        member_data_if_available: Option<Member>,
    ) {
        if !self.profile.is_main() {
            return;
        }

        logger::handle_member_leave(&self.db, ctx, guild_id, user, member_data_if_available)
            .await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        if !self.profile.is_main() {
            return;
        }

        message::handle_message(&self.db, &self.automod, ctx, message).await;
    }

    async fn message_update(
        &self,
        ctx: Context,
        old_if_available: Option<Message>,
        new: Option<Message>,
        event: MessageUpdateEvent,
    ) {
        if !self.profile.is_main() {
            return;
        }

        logger::handle_message_update(&self.db, ctx, old_if_available, new, event).await;
    }

    async fn message_delete(
        &self,
        ctx: Context,
        channel_id: ChannelId,
        deleted_message_id: MessageId,
        guild_id: Option<GuildId>,
    ) {
        if !self.profile.is_main() {
            return;
        }

        logger::handle_message_delete(&self.db, ctx, channel_id, deleted_message_id, guild_id)
            .await;
    }

    /// Called when a reaction is added to a message
    async fn reaction_add(&self, ctx: Context, add_reaction: Reaction) {
        if !self.profile.is_main() {
            return;
        }

        starboard::handle_reaction_add(&self.db, &ctx, &add_reaction).await;
    }

    /// Called when a channel is deleted
    async fn channel_delete(
        &self,
        _ctx: Context,
        channel: GuildChannel,
        _messages: Option<Vec<Message>>,
    ) {
        if !self.profile.is_main() {
            return;
        }

        ticket::handle_channel_delete(&self.db, &channel).await;
    }

    /// Called when a member joins, leaves or moves between voice channels
    async fn voice_state_update(&self, ctx: Context, old: Option<VoiceState>, new: VoiceState) {
        if !self.profile.is_main() {
            return;
        }

        logger::handle_voice_state_update(&self.db, ctx, old, new).await;
    }

    /// Called for slash commands and button presses
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction(self, ctx, interaction).await;
    }
}
