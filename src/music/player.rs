//! Songbird driver for the per-guild queues.
//!
//! Every guild owns one `MusicQueue` plus the handle of the track Songbird is playing.
//! Track end events feed back into the queue, tagged with the generation they were
//! started with so that tracks replaced by a skip or stop do not advance twice.

use std::{collections::HashMap, sync::Arc, time::Duration};

use serenity::{all::GuildId, async_trait};
use songbird::{
    input::{Compose, YoutubeDl},
    tracks::TrackHandle,
    Call, Event, EventContext, EventHandler as VoiceEventHandler, TrackEvent,
};
use tokio::sync::Mutex;

use crate::{
    error::AppError,
    music::queue::{LoopMode, MusicQueue, Playback, PlayerState, Track},
};

/// Outcome of `/play`.
#[derive(Debug, Clone)]
pub enum Enqueued {
    /// The player was idle and the track started
    Playing(Track),
    /// The track waits at the given 1-based position
    Queued { track: Track, position: usize },
}

/// State shown by `/nowplaying`.
#[derive(Debug, Clone)]
pub struct NowPlaying {
    pub track: Track,
    pub position: Duration,
    pub state: PlayerState,
    pub loop_mode: LoopMode,
    pub next: Option<Track>,
}

/// Copy of a guild queue for `/queue`.
#[derive(Debug, Clone)]
pub struct QueueSnapshot {
    pub current: Option<Track>,
    pub upcoming: Vec<Track>,
    pub loop_mode: LoopMode,
}

#[derive(Default)]
struct GuildPlayer {
    queue: MusicQueue,
    handle: Option<TrackHandle>,
}

/// Shared music player for every guild the bot plays in.
///
/// Cheap to clone; all clones share the same queues.
#[derive(Clone)]
pub struct MusicPlayer {
    guilds: Arc<Mutex<HashMap<GuildId, GuildPlayer>>>,
    http: reqwest::Client,
}

impl MusicPlayer {
    pub fn new(http: reqwest::Client) -> Self {
        Self {
            guilds: Arc::new(Mutex::new(HashMap::new())),
            http,
        }
    }

    /// Looks up a URL or a search query.
    ///
    /// # Returns
    /// - `Ok(Track)` - Title, playable URL and duration of the first match
    /// - `Err(AppError::BadRequest)` - Nothing could be resolved
    pub async fn resolve(&self, query: &str, requester: u64) -> Result<Track, AppError> {
        let query = query.trim();
        let is_url = query.starts_with("http://") || query.starts_with("https://");

        let mut source = if is_url {
            YoutubeDl::new(self.http.clone(), query.to_string())
        } else {
            YoutubeDl::new_search(self.http.clone(), query.to_string())
        };

        let metadata = source.aux_metadata().await.map_err(|e| {
            tracing::warn!("Failed to resolve '{}': {}", query, e);
            AppError::BadRequest(format!("I could not find anything for '{}'.", query))
        })?;

        Ok(Track {
            title: metadata.title.unwrap_or_else(|| query.to_string()),
            url: metadata
                .source_url
                .unwrap_or_else(|| query.to_string()),
            duration: metadata.duration,
            requester,
        })
    }

    /// Adds a track, starting playback when the guild's player is idle.
    pub async fn enqueue(
        &self,
        guild_id: GuildId,
        call: Arc<Mutex<Call>>,
        track: Track,
    ) -> Result<Enqueued, AppError> {
        let mut guilds = self.guilds.lock().await;
        let player = guilds.entry(guild_id).or_default();

        match player.queue.enqueue(track.clone()) {
            Some(playback) => {
                self.start(guild_id, call, player, playback).await?;
                Ok(Enqueued::Playing(track))
            }
            None => Ok(Enqueued::Queued {
                track,
                position: player.queue.len(),
            }),
        }
    }

    /// Skips the current track.
    ///
    /// # Returns
    /// - `Ok(Some(Track))` - Track now playing
    /// - `Ok(None)` - The queue is empty and the player stopped
    pub async fn skip(
        &self,
        guild_id: GuildId,
        call: Arc<Mutex<Call>>,
    ) -> Result<Option<Track>, AppError> {
        let mut guilds = self.guilds.lock().await;
        let player = guilds.get_mut(&guild_id).ok_or_else(nothing_playing)?;

        let next = player.queue.skip()?;
        if let Some(handle) = player.handle.take() {
            let _ = handle.stop();
        }

        match next {
            Some(playback) => {
                let track = playback.track.clone();
                self.start(guild_id, call, player, playback).await?;
                Ok(Some(track))
            }
            None => Ok(None),
        }
    }

    pub async fn pause(&self, guild_id: GuildId) -> Result<(), AppError> {
        let mut guilds = self.guilds.lock().await;
        let player = guilds.get_mut(&guild_id).ok_or_else(nothing_playing)?;

        player.queue.pause()?;
        if let Some(handle) = &player.handle {
            handle.pause().map_err(control_error)?;
        }

        Ok(())
    }

    pub async fn resume(&self, guild_id: GuildId) -> Result<(), AppError> {
        let mut guilds = self.guilds.lock().await;
        let player = guilds.get_mut(&guild_id).ok_or_else(nothing_playing)?;

        player.queue.resume()?;
        if let Some(handle) = &player.handle {
            handle.play().map_err(control_error)?;
        }

        Ok(())
    }

    /// Stops playback and forgets the guild's queue.
    pub async fn stop(&self, guild_id: GuildId) {
        let mut guilds = self.guilds.lock().await;

        if let Some(mut player) = guilds.remove(&guild_id) {
            player.queue.stop();
            if let Some(handle) = player.handle.take() {
                let _ = handle.stop();
            }
        }
    }

    pub async fn set_loop_mode(&self, guild_id: GuildId, mode: LoopMode) {
        let mut guilds = self.guilds.lock().await;
        guilds.entry(guild_id).or_default().queue.set_loop_mode(mode);
    }

    pub async fn snapshot(&self, guild_id: GuildId) -> QueueSnapshot {
        let guilds = self.guilds.lock().await;

        match guilds.get(&guild_id) {
            Some(player) => QueueSnapshot {
                current: player.queue.current().cloned(),
                upcoming: player.queue.upcoming().cloned().collect(),
                loop_mode: player.queue.loop_mode(),
            },
            None => QueueSnapshot {
                current: None,
                upcoming: Vec::new(),
                loop_mode: LoopMode::default(),
            },
        }
    }

    pub async fn now_playing(&self, guild_id: GuildId) -> Option<NowPlaying> {
        let guilds = self.guilds.lock().await;
        let player = guilds.get(&guild_id)?;
        let track = player.queue.current()?.clone();

        let position = match &player.handle {
            Some(handle) => handle
                .get_info()
                .await
                .map(|info| info.position)
                .unwrap_or_default(),
            None => Duration::ZERO,
        };

        Some(NowPlaying {
            track,
            position,
            state: player.queue.state(),
            loop_mode: player.queue.loop_mode(),
            next: player.queue.next_up().cloned(),
        })
    }

    async fn start(
        &self,
        guild_id: GuildId,
        call: Arc<Mutex<Call>>,
        player: &mut GuildPlayer,
        playback: Playback,
    ) -> Result<(), AppError> {
        let source = YoutubeDl::new(self.http.clone(), playback.track.url.clone());
        let handle = call.lock().await.play_input(source.into());

        for event in [TrackEvent::End, TrackEvent::Error] {
            handle
                .add_event(
                    Event::Track(event),
                    TrackEndNotifier {
                        player: self.clone(),
                        guild_id,
                        call: call.clone(),
                        generation: playback.generation,
                    },
                )
                .map_err(control_error)?;
        }

        tracing::info!("Now playing '{}' in guild {}", playback.track.title, guild_id);
        player.handle = Some(handle);

        Ok(())
    }

    async fn on_track_end(&self, guild_id: GuildId, call: Arc<Mutex<Call>>, generation: u64) {
        let mut guilds = self.guilds.lock().await;
        let Some(player) = guilds.get_mut(&guild_id) else {
            return;
        };

        match player.queue.on_track_end(generation) {
            Some(playback) => {
                if let Err(e) = self.start(guild_id, call, player, playback).await {
                    tracing::error!("Failed to start next track in guild {}: {:?}", guild_id, e);
                }
            }
            None => {
                if player.queue.state() == PlayerState::Idle {
                    player.handle = None;
                }
            }
        }
    }
}

struct TrackEndNotifier {
    player: MusicPlayer,
    guild_id: GuildId,
    call: Arc<Mutex<Call>>,
    generation: u64,
}

#[async_trait]
impl VoiceEventHandler for TrackEndNotifier {
    async fn act(&self, _ctx: &EventContext<'_>) -> Option<Event> {
        self.player
            .on_track_end(self.guild_id, self.call.clone(), self.generation)
            .await;

        None
    }
}

fn nothing_playing() -> AppError {
    AppError::BadRequest("Nothing is playing.".to_string())
}

fn control_error(err: songbird::error::ControlError) -> AppError {
    AppError::InternalError(format!("Track control failed: {}", err))
}
