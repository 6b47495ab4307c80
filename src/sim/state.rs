//! Game state and core simulation types
//!
//! Everything a run needs lives in [`GameState`]; the loop owns it and lends
//! it to the subsystems by reference.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::difficulty::DifficultyController;
use super::spawner::ObstacleSpawner;
use crate::consts::*;

/// Current phase of the run lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first jump input
    Idle,
    /// Simulation advances every frame
    Running,
    /// Run ended, simulation frozen until restart
    GameOver,
}

/// Semantic events emitted by the simulation for side-effect collaborators
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// A new run began (music start)
    RunStarted,
    /// Player left the ground
    Jumped,
    /// An obstacle scrolled off the left edge
    Scored { score: u64 },
    /// Scroll speed stepped up at a milestone
    SpeedUp { speed: f32 },
    /// Player hit an obstacle
    GameOver { score: u64, new_high_score: bool },
}

/// The runner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner; x never changes during a run
    pub pos: Vec2,
    pub size: Vec2,
    pub velocity_y: f32,
    pub jumping: bool,
    pub grounded: bool,
}

impl Default for Player {
    fn default() -> Self {
        let size = Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT);
        Self {
            pos: Vec2::new(PLAYER_X, GROUND_LINE - size.y),
            size,
            velocity_y: 0.0,
            jumping: false,
            grounded: true,
        }
    }
}

impl Player {
    /// Resting y coordinate for the current height
    #[inline]
    pub fn ground_y(&self) -> f32 {
        GROUND_LINE - self.size.y
    }

    /// Put the player back on the ground, at rest
    pub fn reset(&mut self) {
        self.pos = Vec2::new(PLAYER_X, self.ground_y());
        self.velocity_y = 0.0;
        self.jumping = false;
        self.grounded = true;
    }

    /// Resize to match a loaded sprite, keeping the height fixed
    ///
    /// Width follows the sprite's aspect ratio. Degenerate dimensions are
    /// ignored and the fallback rectangle size is kept. A grounded player is
    /// re-seated on the ground; an airborne one finishes its jump.
    pub fn fit_to_sprite(&mut self, natural_width: f32, natural_height: f32) {
        if !(natural_width > 0.0 && natural_height > 0.0) {
            return;
        }
        let scale = PLAYER_HEIGHT / natural_height;
        self.size = Vec2::new(natural_width * scale, PLAYER_HEIGHT);
        if self.grounded {
            self.pos.y = self.ground_y();
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }
}

/// A tree stump resting on the ground
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Obstacle {
    /// Obstacle of the given size standing on the ground at `x`
    pub fn on_ground(x: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, GROUND_LINE - height),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Right edge has passed the left boundary
    #[inline]
    pub fn is_off_screen(&self) -> bool {
        self.right() < 0.0
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }
}

/// Per-run counters, reset on every start
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunState {
    pub score: u64,
    /// Horizontal obstacle speed (units/frame), never below the base speed
    pub scroll_speed: f32,
    pub difficulty: DifficultyController,
}

impl Default for RunState {
    fn default() -> Self {
        Self {
            score: 0,
            scroll_speed: BASE_SCROLL_SPEED,
            difficulty: DifficultyController::default(),
        }
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    pub player: Player,
    /// Live obstacles in spawn order (= screen order, left to right)
    pub obstacles: Vec<Obstacle>,
    pub run: RunState,
    pub spawner: ObstacleSpawner,
    /// Best score known when the current run ended (or started)
    pub high_score: u64,
    /// Frames simulated in the current run
    pub time_ticks: u64,
    /// Events produced since the last drain
    pub events: Vec<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(0)
    }
}

impl GameState {
    /// Create an idle game with a previously stored high score
    pub fn new(high_score: u64) -> Self {
        Self {
            phase: GamePhase::Idle,
            player: Player::default(),
            obstacles: Vec::new(),
            run: RunState::default(),
            spawner: ObstacleSpawner::default(),
            high_score,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Re-initialize run state, player and obstacles for a fresh run
    pub fn reset_run(&mut self) {
        self.player.reset();
        self.obstacles.clear();
        self.run = RunState::default();
        self.spawner = ObstacleSpawner::default();
        self.time_ticks = 0;
    }

    /// Take all pending events, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }
}
