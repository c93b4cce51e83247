//! Music playback: per-guild queues, formatting and the Songbird player.
//!
//! `queue` holds the pure state machine, `player` drives Songbird from it and
//! `format` renders the now-playing embed pieces.

pub mod format;
pub mod player;
pub mod queue;
