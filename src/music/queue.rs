//! Per-guild music queue state machine.
//!
//! States move `Idle -> Playing <-> Paused`, back to `Idle` when the queue drains and
//! to `Idle` from anywhere on stop. Every track start bumps a generation counter so
//! that end events of replaced tracks can be told apart from the current one.

use std::{collections::VecDeque, fmt, str::FromStr, time::Duration};

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerState {
    #[default]
    Idle,
    Playing,
    Paused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopMode {
    /// Advance to the next track
    #[default]
    Normal,
    /// Repeat the current track
    Track,
    /// Send finished tracks to the back of the queue
    Queue,
}

impl fmt::Display for LoopMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LoopMode::Normal => "off",
            LoopMode::Track => "track",
            LoopMode::Queue => "queue",
        })
    }
}

impl FromStr for LoopMode {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "off" | "normal" | "none" => Ok(LoopMode::Normal),
            "track" | "song" => Ok(LoopMode::Track),
            "queue" | "all" => Ok(LoopMode::Queue),
            other => Err(AppError::BadRequest(format!(
                "Unknown loop mode '{}'. Use off, track or queue.",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub title: String,
    /// URL the audio is fetched from
    pub url: String,
    pub duration: Option<Duration>,
    pub requester: u64,
}

/// Track to hand to the audio driver together with the generation it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct Playback {
    pub track: Track,
    pub generation: u64,
}

#[derive(Debug, Clone, Default)]
pub struct MusicQueue {
    state: PlayerState,
    loop_mode: LoopMode,
    current: Option<Track>,
    upcoming: VecDeque<Track>,
    generation: u64,
}

impl MusicQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn loop_mode(&self) -> LoopMode {
        self.loop_mode
    }

    pub fn set_loop_mode(&mut self, mode: LoopMode) {
        self.loop_mode = mode;
    }

    pub fn current(&self) -> Option<&Track> {
        self.current.as_ref()
    }

    pub fn upcoming(&self) -> impl Iterator<Item = &Track> {
        self.upcoming.iter()
    }

    pub fn next_up(&self) -> Option<&Track> {
        self.upcoming.front()
    }

    pub fn len(&self) -> usize {
        self.upcoming.len()
    }

    pub fn is_empty(&self) -> bool {
        self.upcoming.is_empty()
    }

    /// Generation of the track currently playing.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Adds a track to the back of the queue.
    ///
    /// # Returns
    /// - `Some(Playback)` - The player was idle and this track starts now
    /// - `None` - Something is playing or paused; the track waits its turn
    pub fn enqueue(&mut self, track: Track) -> Option<Playback> {
        self.upcoming.push_back(track);

        if self.state() == PlayerState::Idle {
            self.advance()
        } else {
            None
        }
    }

    /// Handles the end of the track of `generation`.
    ///
    /// End events of tracks that were already replaced are ignored.
    ///
    /// # Returns
    /// - `Some(Playback)` - Next track to play, following the loop mode
    /// - `None` - Stale event or the queue drained and the player is idle
    pub fn on_track_end(&mut self, generation: u64) -> Option<Playback> {
        if generation != self.generation || self.state() == PlayerState::Idle {
            return None;
        }

        match self.loop_mode {
            LoopMode::Track => {
                if let Some(track) = self.current.clone() {
                    return Some(self.start(track));
                }
            }
            LoopMode::Queue => {
                if let Some(track) = self.current.take() {
                    self.upcoming.push_back(track);
                }
            }
            LoopMode::Normal => {}
        }

        self.advance()
    }

    /// Skips the current track. Track repeat does not apply to skips.
    pub fn skip(&mut self) -> Result<Option<Playback>, AppError> {
        if self.current.is_none() {
            return Err(AppError::BadRequest("Nothing is playing.".to_string()));
        }

        if self.loop_mode == LoopMode::Queue {
            if let Some(track) = self.current.take() {
                self.upcoming.push_back(track);
            }
        }

        Ok(self.advance())
    }

    pub fn pause(&mut self) -> Result<(), AppError> {
        match self.state() {
            PlayerState::Playing => {
                self.state = PlayerState::Paused;
                Ok(())
            }
            PlayerState::Paused => Err(AppError::BadRequest("Already paused.".to_string())),
            PlayerState::Idle => Err(AppError::BadRequest("Nothing is playing.".to_string())),
        }
    }

    pub fn resume(&mut self) -> Result<(), AppError> {
        match self.state() {
            PlayerState::Paused => {
                self.state = PlayerState::Playing;
                Ok(())
            }
            PlayerState::Playing => Err(AppError::BadRequest("Already playing.".to_string())),
            PlayerState::Idle => Err(AppError::BadRequest("Nothing is playing.".to_string())),
        }
    }

    /// Clears everything and returns to idle.
    pub fn stop(&mut self) {
        self.current = None;
        self.upcoming.clear();
        self.state = PlayerState::Idle;
        self.generation += 1;
    }

    fn advance(&mut self) -> Option<Playback> {
        match self.upcoming.pop_front() {
            Some(track) => Some(self.start(track)),
            None => {
                self.current = None;
                self.state = PlayerState::Idle;
                None
            }
        }
    }

    fn start(&mut self, track: Track) -> Playback {
        self.generation += 1;
        self.current = Some(track.clone());
        self.state = PlayerState::Playing;

        Playback {
            track,
            generation: self.generation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(title: &str) -> Track {
        Track {
            title: title.to_string(),
            url: format!("https://example.com/{}", title),
            duration: Some(Duration::from_secs(180)),
            requester: 1,
        }
    }

    fn title(playback: Option<Playback>) -> Option<String> {
        playback.map(|p| p.track.title)
    }

    #[test]
    fn first_track_starts_immediately() {
        let mut queue = MusicQueue::new();
        assert_eq!(queue.state(), PlayerState::Idle);

        assert_eq!(title(queue.enqueue(track("a"))), Some("a".to_string()));
        assert_eq!(queue.state(), PlayerState::Playing);

        assert!(queue.enqueue(track("b")).is_none());
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn drains_to_idle() {
        let mut queue = MusicQueue::new();
        queue.enqueue(track("a"));
        queue.enqueue(track("b"));

        let next = queue.on_track_end(queue.generation());
        assert_eq!(title(next), Some("b".to_string()));

        assert!(queue.on_track_end(queue.generation()).is_none());
        assert_eq!(queue.state(), PlayerState::Idle);
        assert!(queue.current().is_none());
    }

    #[test]
    fn track_loop_repeats_current() {
        let mut queue = MusicQueue::new();
        queue.enqueue(track("a"));
        queue.enqueue(track("b"));
        queue.set_loop_mode(LoopMode::Track);

        assert_eq!(title(queue.on_track_end(queue.generation())), Some("a".to_string()));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn queue_loop_rotates() {
        let mut queue = MusicQueue::new();
        queue.enqueue(track("a"));
        queue.enqueue(track("b"));
        queue.set_loop_mode(LoopMode::Queue);

        assert_eq!(title(queue.on_track_end(queue.generation())), Some("b".to_string()));
        assert_eq!(title(queue.on_track_end(queue.generation())), Some("a".to_string()));
        assert_eq!(title(queue.on_track_end(queue.generation())), Some("b".to_string()));
    }

    #[test]
    fn single_track_queue_loop_keeps_playing() {
        let mut queue = MusicQueue::new();
        queue.enqueue(track("a"));
        queue.set_loop_mode(LoopMode::Queue);

        assert_eq!(title(queue.on_track_end(queue.generation())), Some("a".to_string()));
        assert_eq!(queue.state(), PlayerState::Playing);
    }

    #[test]
    fn stale_end_events_are_ignored() {
        let mut queue = MusicQueue::new();
        queue.enqueue(track("a"));
        let old = queue.generation();
        queue.enqueue(track("b"));

        queue.skip().unwrap();
        assert!(queue.on_track_end(old).is_none());
        assert_eq!(queue.current().map(|t| t.title.as_str()), Some("b"));
    }

    #[test]
    fn skip_ignores_track_loop() {
        let mut queue = MusicQueue::new();
        queue.enqueue(track("a"));
        queue.enqueue(track("b"));
        queue.set_loop_mode(LoopMode::Track);

        assert_eq!(title(queue.skip().unwrap()), Some("b".to_string()));
        assert!(queue.skip().unwrap().is_none());
        assert_eq!(queue.state(), PlayerState::Idle);
        assert!(queue.skip().is_err());
    }

    #[test]
    fn pause_and_resume() {
        let mut queue = MusicQueue::new();
        assert!(queue.pause().is_err());

        queue.enqueue(track("a"));
        queue.pause().unwrap();
        assert_eq!(queue.state(), PlayerState::Paused);
        assert!(queue.pause().is_err());

        // Tracks added while paused wait
        assert!(queue.enqueue(track("b")).is_none());

        queue.resume().unwrap();
        assert_eq!(queue.state(), PlayerState::Playing);
        assert!(queue.resume().is_err());
    }

    #[test]
    fn stop_clears_from_any_state() {
        let mut queue = MusicQueue::new();
        queue.enqueue(track("a"));
        queue.enqueue(track("b"));
        queue.pause().unwrap();
        let generation = queue.generation();

        queue.stop();

        assert_eq!(queue.state(), PlayerState::Idle);
        assert!(queue.is_empty());
        assert!(queue.current().is_none());
        assert!(queue.on_track_end(generation).is_none());
    }

    #[test]
    fn parses_loop_modes() {
        assert_eq!("off".parse::<LoopMode>().unwrap(), LoopMode::Normal);
        assert_eq!("Track".parse::<LoopMode>().unwrap(), LoopMode::Track);
        assert_eq!("queue".parse::<LoopMode>().unwrap(), LoopMode::Queue);
        assert!("shuffle".parse::<LoopMode>().is_err());
    }
}
