//! Game loop owner
//!
//! A `Session` holds the simulation plus its collaborators and is driven by
//! two kinds of calls: input intents between frames and one `frame()` per
//! display refresh. Both take `&mut self`, so input can never land in the
//! middle of an update.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::audio::{self, AudioSink};
use crate::highscores::HighScore;
use crate::persistence::Persistence;
use crate::platform::InputAction;
use crate::sim::{self, GameEvent, GamePhase, GameState, autopilot};

pub struct Session<P: Persistence, A: AudioSink> {
    state: GameState,
    rng: Pcg32,
    high_score: HighScore,
    store: P,
    audio: A,
    /// Input is ignored until the player has a nickname
    input_enabled: bool,
    /// Demo mode - the autopilot presses jump
    pub autopilot: bool,
}

impl<P: Persistence, A: AudioSink> Session<P, A> {
    /// Create an idle session, reading the stored high score
    pub fn new(store: P, audio: A, seed: u64) -> Self {
        let high_score = HighScore::load(&store);
        Self {
            state: GameState::new(high_score.best()),
            rng: Pcg32::seed_from_u64(seed),
            high_score,
            store,
            audio,
            input_enabled: true,
            autopilot: false,
        }
    }

    /// Open or close the input gate (nickname prompt visible = closed)
    pub fn set_input_enabled(&mut self, enabled: bool) {
        self.input_enabled = enabled;
    }

    pub fn input_enabled(&self) -> bool {
        self.input_enabled
    }

    /// Apply an input intent; gated input is silently dropped
    pub fn handle_input(&mut self, action: InputAction) {
        match action {
            InputAction::Jump => self.jump_input(),
            InputAction::Restart => self.restart_input(),
            InputAction::ToggleAutopilot => {
                self.autopilot = !self.autopilot;
                log::info!("Autopilot: {}", self.autopilot);
            }
        }
    }

    /// Jump / start / restart depending on phase
    pub fn jump_input(&mut self) {
        if !self.input_enabled {
            return;
        }
        sim::press_jump(&mut self.state);
        self.flush_events();
    }

    /// Restart button
    pub fn restart_input(&mut self) {
        sim::restart(&mut self.state);
        self.flush_events();
    }

    /// End the current run without a collision (headless time limit)
    pub fn forfeit(&mut self) {
        sim::end_run(&mut self.state);
        self.flush_events();
    }

    /// Advance one frame and deliver its side effects
    pub fn frame(&mut self) {
        if self.autopilot && self.input_enabled && autopilot::wants_jump(&self.state) {
            sim::press_jump(&mut self.state);
        }
        sim::tick(&mut self.state, &mut self.rng);
        self.flush_events();
    }

    fn flush_events(&mut self) {
        let events = self.state.drain_events();
        if events.is_empty() {
            return;
        }
        for event in &events {
            if let GameEvent::GameOver { score, .. } = *event {
                if self.high_score.submit(score, &mut self.store) {
                    log::info!("New high score: {}", score);
                }
            }
        }
        audio::dispatch(&events, &mut self.audio);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access for collaborators that resize the player sprite
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> u64 {
        self.state.run.score
    }

    pub fn high_score(&self) -> u64 {
        self.high_score.best()
    }

    pub fn audio_mut(&mut self) -> &mut A {
        &mut self.audio
    }

    pub fn store_mut(&mut self) -> &mut P {
        &mut self.store
    }
}
