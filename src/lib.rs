//! Stump Runner - A side-scrolling endless runner
//!
//! Core modules:
//! - `sim`: Simulation core (physics, spawning, collisions, difficulty, run lifecycle)
//! - `session`: Game loop owner wiring the sim to its collaborators
//! - `renderer`: Canvas 2D drawing of the current frame
//! - `platform`: Browser input mapping and storage
//! - `persistence`: High score / settings storage backends
//! - `audio`: Sound effects and background melody

pub mod audio;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use highscores::HighScore;
pub use session::Session;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (canvas pixels)
    pub const PLAYFIELD_WIDTH: f32 = 1000.0;
    pub const PLAYFIELD_HEIGHT: f32 = 400.0;
    /// Ground line: y coordinate where terrain starts
    pub const GROUND_LINE: f32 = PLAYFIELD_HEIGHT - 50.0;

    /// Player defaults (the runner never moves horizontally)
    pub const PLAYER_X: f32 = 50.0;
    pub const PLAYER_WIDTH: f32 = 80.0;
    pub const PLAYER_HEIGHT: f32 = 80.0;

    /// Downward acceleration (units/frame²)
    pub const GRAVITY: f32 = 0.4;
    /// Vertical velocity applied on jump (units/frame, negative = up)
    pub const JUMP_IMPULSE: f32 = -11.0;

    /// Frames between obstacle spawns
    pub const OBSTACLE_INTERVAL: u32 = 100;
    /// Obstacle height range (inclusive)
    pub const OBSTACLE_MIN_HEIGHT: f32 = 35.0;
    pub const OBSTACLE_MAX_HEIGHT: f32 = 55.0;
    /// Obstacle width range (inclusive)
    pub const OBSTACLE_MIN_WIDTH: f32 = 30.0;
    pub const OBSTACLE_MAX_WIDTH: f32 = 40.0;

    /// Hitbox insets - collision rects are smaller than the drawn sprites
    pub const PLAYER_HITBOX_INSET: f32 = 10.0;
    pub const OBSTACLE_HITBOX_INSET: f32 = 8.0;

    /// Scroll speed at the start of every run (units/frame)
    pub const BASE_SCROLL_SPEED: f32 = 3.0;
    /// Scroll speed gained at each milestone
    pub const SPEED_STEP: f32 = 0.5;
    /// Score multiple that triggers a speed increase
    pub const SPEED_MILESTONE: u64 = 10;
}
