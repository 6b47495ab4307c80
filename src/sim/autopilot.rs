//! Demo-mode autopilot
//!
//! Jumps when the nearest stump ahead comes within a lead distance that
//! grows with scroll speed. Good enough to play long attract-mode runs.

use super::collision::{obstacle_hitbox, player_hitbox};
use super::state::{GamePhase, GameState};

/// Frames of lead time before an obstacle reaches the player's front edge
const LEAD_FRAMES: f32 = 12.0;

/// Decide whether a jump should be issued this frame
pub fn wants_jump(state: &GameState) -> bool {
    if state.phase != GamePhase::Running || !state.player.grounded {
        return false;
    }
    let front = state.player.pos.x + state.player.size.x;
    let lead = state.run.scroll_speed * LEAD_FRAMES;
    let back = player_hitbox(&state.player).min.x;

    // Stumps whose hitbox already cleared the player are ignored
    state
        .obstacles
        .iter()
        .filter(|o| obstacle_hitbox(o).max.x > back)
        .map(|o| o.pos.x - front)
        .reduce(f32::min)
        .is_some_and(|gap| gap <= lead)
}
