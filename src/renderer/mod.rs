//! Rendering module
//!
//! Read-only consumers of the simulation state. Drawing never feeds back into
//! the simulation; decorative motion is derived from the wall clock.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod parallax;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;

use crate::sim::GameState;

/// Draws one frame of the current state
pub trait Renderer {
    /// `time_ms` is a wall-clock timestamp used only for decorative drift
    fn draw(&mut self, state: &GameState, time_ms: f64);
}
