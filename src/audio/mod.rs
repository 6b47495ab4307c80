//! Audio collaborator
//!
//! The simulation only emits [`GameEvent`]s; this module turns them into
//! fire-and-forget sound calls. Nothing here can stall or fail a frame.

pub mod music;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use music::{MELODY, MusicSequencer, NOTE_INTERVAL_MS, Note};
#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Cheerful upward bounce
    Jump,
    /// Short bright ping when a stump is cleared
    Score,
    /// Descending buzz
    GameOver,
}

/// Receiver for simulation side effects
pub trait AudioSink {
    fn on_jump(&mut self);
    fn on_score(&mut self);
    fn on_game_over(&mut self);
    fn on_run_start(&mut self);
    fn on_run_stop(&mut self);
}

/// Forward a batch of simulation events to an audio sink
pub fn dispatch<A: AudioSink + ?Sized>(events: &[GameEvent], sink: &mut A) {
    for event in events {
        match event {
            GameEvent::RunStarted => sink.on_run_start(),
            GameEvent::Jumped => sink.on_jump(),
            GameEvent::Scored { .. } => sink.on_score(),
            GameEvent::GameOver { .. } => {
                sink.on_game_over();
                sink.on_run_stop();
            }
            GameEvent::SpeedUp { .. } => {}
        }
    }
}

/// Sink that plays nothing (native build, tests)
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn on_jump(&mut self) {}
    fn on_score(&mut self) {}
    fn on_game_over(&mut self) {}
    fn on_run_start(&mut self) {}
    fn on_run_stop(&mut self) {}
}
