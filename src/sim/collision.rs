//! Collision detection between the runner and obstacles
//!
//! Plain axis-aligned boxes, but both hitboxes are shrunk before the overlap
//! test so near-miss grazes of the drawn sprites don't end the run.

use glam::Vec2;

use super::state::{Obstacle, Player};
use crate::consts::{OBSTACLE_HITBOX_INSET, PLAYER_HITBOX_INSET};

/// Axis-aligned rectangle in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Shrink by `amount` on every side
    #[inline]
    pub fn inset(self, amount: f32) -> Self {
        Self {
            min: self.min + Vec2::splat(amount),
            max: self.max - Vec2::splat(amount),
        }
    }

    /// Strict overlap; touching edges do not count
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Effective player hitbox
#[inline]
pub fn player_hitbox(player: &Player) -> Rect {
    player.bounds().inset(PLAYER_HITBOX_INSET)
}

/// Effective obstacle hitbox
#[inline]
pub fn obstacle_hitbox(obstacle: &Obstacle) -> Rect {
    obstacle.bounds().inset(OBSTACLE_HITBOX_INSET)
}

/// Check whether the player touches an obstacle
pub fn collides(player: &Player, obstacle: &Obstacle) -> bool {
    player_hitbox(player).overlaps(&obstacle_hitbox(obstacle))
}
