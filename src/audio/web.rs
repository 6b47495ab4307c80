//! Web Audio implementation
//!
//! Procedurally generated sound effects and a looping melody - no external
//! files needed! Every Web Audio call is allowed to fail; failures just mean
//! silence.

use wasm_bindgen::prelude::*;
use web_sys::{AudioContext, AudioNode, GainNode, OscillatorNode, OscillatorType};

use super::{AudioSink, MusicSequencer, NOTE_INTERVAL_MS, SoundEffect};
use crate::settings::Settings;

/// Master gain when sound is on
const MASTER_VOLUME: f32 = 0.3;
/// Music bus gain when music is on
const MUSIC_VOLUME: f32 = 0.15;

/// Handle to the running melody interval
struct MusicTask {
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

/// Audio manager for the game
pub struct AudioManager {
    ctx: Option<AudioContext>,
    master: Option<GainNode>,
    music_bus: Option<GainNode>,
    sound_enabled: bool,
    music_enabled: bool,
    music: Option<MusicTask>,
}

impl AudioManager {
    pub fn new(settings: &Settings) -> Self {
        // May fail outside a secure context
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }

        let master = ctx.as_ref().and_then(|ctx| {
            let gain = ctx.create_gain().ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;
            Some(gain)
        });
        let music_bus = ctx.as_ref().zip(master.as_ref()).and_then(|(ctx, master)| {
            let gain = ctx.create_gain().ok()?;
            gain.connect_with_audio_node(master).ok()?;
            Some(gain)
        });

        let mut manager = Self {
            ctx,
            master,
            music_bus,
            sound_enabled: settings.sound_enabled,
            music_enabled: settings.music_enabled,
            music: None,
        };
        manager.apply_volumes();
        manager
    }

    /// Resume audio context (required after user gesture)
    pub fn resume(&self) {
        if let Some(ctx) = &self.ctx {
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }
        }
    }

    pub fn set_sound_enabled(&mut self, enabled: bool) {
        self.sound_enabled = enabled;
        self.apply_volumes();
    }

    /// Switch music on/off; turning it on mid-run restarts the melody
    pub fn set_music_enabled(&mut self, enabled: bool, run_active: bool) {
        self.music_enabled = enabled;
        self.apply_volumes();
        if enabled && run_active {
            self.start_music();
        } else if !enabled {
            self.stop_music();
        }
    }

    fn apply_volumes(&self) {
        if let Some(master) = &self.master {
            let vol = if self.sound_enabled { MASTER_VOLUME } else { 0.0 };
            master.gain().set_value(vol);
        }
        if let Some(bus) = &self.music_bus {
            let vol = if self.music_enabled { MUSIC_VOLUME } else { 0.0 };
            bus.gain().set_value(vol);
        }
    }

    /// Play a sound effect
    pub fn play(&self, effect: SoundEffect) {
        if !self.sound_enabled {
            return;
        }
        let (Some(ctx), Some(master)) = (&self.ctx, &self.master) else {
            return;
        };
        self.resume();

        match effect {
            SoundEffect::Jump => play_jump(ctx, master),
            SoundEffect::Score => play_score(ctx, master),
            SoundEffect::GameOver => play_game_over(ctx, master),
        }
    }

    /// Start the looping melody on its own interval timer
    pub fn start_music(&mut self) {
        if !self.music_enabled {
            return;
        }
        self.stop_music();

        let (Some(ctx), Some(bus)) = (self.ctx.clone(), self.music_bus.clone()) else {
            return;
        };
        let Some(window) = web_sys::window() else {
            return;
        };
        self.resume();

        let mut sequencer = MusicSequencer::default();
        let mut play_next = move || {
            if let Some(note) = sequencer.next_note() {
                play_note(&ctx, &bus, note.freq, note.duration);
            }
        };
        play_next();

        let callback = Closure::<dyn FnMut()>::new(play_next);
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            NOTE_INTERVAL_MS,
        ) {
            Ok(handle) => {
                self.music = Some(MusicTask {
                    handle,
                    _callback: callback,
                });
            }
            Err(e) => log::warn!("Failed to schedule music: {:?}", e),
        }
    }

    pub fn stop_music(&mut self) {
        if let Some(task) = self.music.take() {
            if let Some(window) = web_sys::window() {
                window.clear_interval_with_handle(task.handle);
            }
        }
    }
}

impl Drop for AudioManager {
    fn drop(&mut self) {
        self.stop_music();
    }
}

impl AudioSink for AudioManager {
    fn on_jump(&mut self) {
        self.play(SoundEffect::Jump);
    }

    fn on_score(&mut self) {
        self.play(SoundEffect::Score);
    }

    fn on_game_over(&mut self) {
        self.play(SoundEffect::GameOver);
    }

    fn on_run_start(&mut self) {
        self.start_music();
    }

    fn on_run_stop(&mut self) {
        self.stop_music();
    }
}

// === Sound generators ===

/// Create an oscillator routed through its own gain node into `out`
fn create_osc(
    ctx: &AudioContext,
    out: &AudioNode,
    freq: f32,
    osc_type: OscillatorType,
) -> Option<(OscillatorNode, GainNode)> {
    let osc = ctx.create_oscillator().ok()?;
    let gain = ctx.create_gain().ok()?;

    osc.set_type(osc_type);
    osc.frequency().set_value(freq);
    osc.connect_with_audio_node(&gain).ok()?;
    gain.connect_with_audio_node(out).ok()?;

    Some((osc, gain))
}

/// Pitch sweep with an exponential fade
fn sweep(
    ctx: &AudioContext,
    out: &AudioNode,
    osc_type: OscillatorType,
    (from, to, sweep_secs): (f32, f32, f64),
    peak: f32,
    length: f64,
) {
    let Some((osc, gain)) = create_osc(ctx, out, from, osc_type) else {
        return;
    };
    let t = ctx.current_time();

    osc.frequency().set_value_at_time(from, t).ok();
    osc.frequency()
        .exponential_ramp_to_value_at_time(to, t + sweep_secs)
        .ok();
    gain.gain().set_value_at_time(peak, t).ok();
    gain.gain()
        .exponential_ramp_to_value_at_time(0.01, t + length)
        .ok();

    osc.start_with_when(t).ok();
    osc.stop_with_when(t + length).ok();
}

/// Jump - cheerful bounce
fn play_jump(ctx: &AudioContext, out: &AudioNode) {
    sweep(ctx, out, OscillatorType::Sine, (400.0, 600.0, 0.1), 0.2, 0.1);
}

/// Score - positive ping
fn play_score(ctx: &AudioContext, out: &AudioNode) {
    sweep(ctx, out, OscillatorType::Sine, (800.0, 1200.0, 0.05), 0.15, 0.15);
}

/// Game over - descending tone
fn play_game_over(ctx: &AudioContext, out: &AudioNode) {
    sweep(ctx, out, OscillatorType::Sawtooth, (400.0, 100.0, 0.5), 0.2, 0.5);
}

/// Melody note with a short linear attack and release
fn play_note(ctx: &AudioContext, out: &AudioNode, freq: f32, duration: f64) {
    let Some((osc, gain)) = create_osc(ctx, out, freq, OscillatorType::Sine) else {
        return;
    };
    let t = ctx.current_time();

    gain.gain().set_value_at_time(0.0, t).ok();
    gain.gain().linear_ramp_to_value_at_time(0.1, t + 0.05).ok();
    gain.gain().linear_ramp_to_value_at_time(0.0, t + duration).ok();

    osc.start_with_when(t).ok();
    osc.stop_with_when(t + duration).ok();
}
