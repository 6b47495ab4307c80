//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform dependencies:
//! - One call to `tick` per displayed frame, constants are per-frame units
//! - Randomness only through an injected `rand::Rng`
//! - Obstacles processed in spawn order
//! - Side effects are reported as `GameEvent`s, never performed

pub mod autopilot;
pub mod collision;
pub mod difficulty;
pub mod physics;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{Rect, collides};
pub use difficulty::DifficultyController;
pub use spawner::{ObstacleSpawner, spawn_obstacle};
pub use state::{GameEvent, GamePhase, GameState, Obstacle, Player, RunState};
pub use tick::{end_run, press_jump, restart, start_run, tick};
