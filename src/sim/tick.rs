//! Run lifecycle and the per-frame simulation step
//!
//! Idle -> Running -> GameOver -> Running ... Input handlers call
//! [`press_jump`] / [`restart`] between frames; the frame callback calls
//! [`tick`] once per display refresh.

use rand::Rng;

use super::collision::collides;
use super::state::{GameEvent, GamePhase, GameState};

/// Reset everything for a new run and enter Running
pub fn start_run(state: &mut GameState) {
    state.reset_run();
    state.phase = GamePhase::Running;
    state.events.push(GameEvent::RunStarted);
    log::info!("Run started (high score {})", state.high_score);
}

/// Handle a jump intent (key, click or tap)
///
/// Starts a run from Idle or GameOver; while Running it jumps if grounded.
pub fn press_jump(state: &mut GameState) {
    match state.phase {
        GamePhase::Idle | GamePhase::GameOver => start_run(state),
        GamePhase::Running => {
            if state.player.jump() {
                state.events.push(GameEvent::Jumped);
            }
        }
    }
}

/// Handle the restart button; only meaningful after a run ended
pub fn restart(state: &mut GameState) {
    if state.phase == GamePhase::GameOver {
        start_run(state);
    }
}

/// Advance the game state by one frame
pub fn tick<R: Rng + ?Sized>(state: &mut GameState, rng: &mut R) {
    if state.phase != GamePhase::Running {
        return;
    }
    state.time_ticks += 1;

    state.player.integrate();

    if let Some(obstacle) = state.spawner.tick(rng) {
        state.obstacles.push(obstacle);
    }

    // Speed is sampled once so a milestone reached mid-frame only affects
    // the next frame
    let speed = state.run.scroll_speed;
    let mut i = 0;
    while i < state.obstacles.len() {
        let obstacle = &mut state.obstacles[i];
        obstacle.pos.x -= speed;

        if collides(&state.player, obstacle) {
            end_run(state);
            return;
        }

        if obstacle.is_off_screen() {
            state.obstacles.remove(i);
            score_point(state);
            continue;
        }
        i += 1;
    }
}

fn score_point(state: &mut GameState) {
    state.run.score += 1;
    let score = state.run.score;
    state.events.push(GameEvent::Scored { score });

    let run = &mut state.run;
    if let Some(speed) = run.difficulty.apply(score, &mut run.scroll_speed) {
        log::debug!("Score {}: scroll speed now {}", score, speed);
        state.events.push(GameEvent::SpeedUp { speed });
    }
}

/// Enter GameOver with the current score, as a collision would
pub fn end_run(state: &mut GameState) {
    if state.phase != GamePhase::Running {
        return;
    }
    state.phase = GamePhase::GameOver;
    let score = state.run.score;
    let new_high_score = score > state.high_score;
    if new_high_score {
        state.high_score = score;
    }
    state.events.push(GameEvent::GameOver {
        score,
        new_high_score,
    });
    log::info!(
        "Game over: score {} after {} frames{}",
        score,
        state.time_ticks,
        if new_high_score { " (new high score)" } else { "" }
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::Obstacle;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn running_state() -> GameState {
        let mut state = GameState::new(0);
        press_jump(&mut state);
        state.drain_events();
        state
    }

    /// An obstacle already past the player, about to leave the screen
    fn leaving_obstacle() -> Obstacle {
        Obstacle::on_ground(-30.0, 30.0, 40.0)
    }

    #[test]
    fn test_idle_to_running() {
        let mut state = GameState::new(5);
        let mut rng = Pcg32::seed_from_u64(1);

        // Ticking while idle does nothing
        tick(&mut state, &mut rng);
        assert_eq!(state.time_ticks, 0);

        press_jump(&mut state);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.drain_events(), vec![GameEvent::RunStarted]);
        // The start press is not also a jump
        assert!(state.player.grounded);
    }

    #[test]
    fn test_jump_only_when_grounded() {
        let mut state = running_state();
        let mut rng = Pcg32::seed_from_u64(1);

        press_jump(&mut state);
        assert_eq!(state.drain_events(), vec![GameEvent::Jumped]);
        tick(&mut state, &mut rng);

        let velocity = state.player.velocity_y;
        press_jump(&mut state);
        assert!(state.drain_events().is_empty());
        assert_eq!(state.player.velocity_y, velocity);
    }

    #[test]
    fn test_first_obstacle_on_tick_101() {
        let mut state = running_state();
        let mut rng = Pcg32::seed_from_u64(3);

        for _ in 0..100 {
            tick(&mut state, &mut rng);
        }
        assert!(state.obstacles.is_empty());

        tick(&mut state, &mut rng);
        assert_eq!(state.obstacles.len(), 1);
        // Spawned at the right edge and scrolled once in the same frame
        assert_eq!(state.obstacles[0].pos.x, PLAYFIELD_WIDTH - BASE_SCROLL_SPEED);
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_score_when_obstacle_leaves() {
        let mut state = running_state();
        let mut rng = Pcg32::seed_from_u64(4);
        state.obstacles.push(Obstacle::on_ground(-26.0, 30.0, 40.0));

        // Right edge at 4 -> 1: still visible
        tick(&mut state, &mut rng);
        assert_eq!(state.run.score, 0);
        assert_eq!(state.obstacles.len(), 1);

        // Right edge at -2: gone
        tick(&mut state, &mut rng);
        assert_eq!(state.run.score, 1);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.drain_events(), vec![GameEvent::Scored { score: 1 }]);
    }

    #[test]
    fn test_several_obstacles_leave_same_frame() {
        let mut state = running_state();
        let mut rng = Pcg32::seed_from_u64(4);
        state.obstacles.push(leaving_obstacle());
        state.obstacles.push(leaving_obstacle());
        state.obstacles.push(Obstacle::on_ground(600.0, 30.0, 40.0));

        tick(&mut state, &mut rng);
        assert_eq!(state.run.score, 2);
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.obstacles[0].pos.x, 597.0);
    }

    #[test]
    fn test_milestone_speed_applies_next_frame() {
        let mut state = running_state();
        let mut rng = Pcg32::seed_from_u64(4);
        state.run.score = 9;
        state.obstacles.push(leaving_obstacle());
        state.obstacles.push(Obstacle::on_ground(600.0, 30.0, 40.0));

        tick(&mut state, &mut rng);
        assert_eq!(state.run.score, 10);
        assert_eq!(state.run.scroll_speed, 3.5);
        // The remaining obstacle still moved at the old speed this frame
        assert_eq!(state.obstacles[0].pos.x, 597.0);
        let events = state.drain_events();
        assert!(events.contains(&GameEvent::SpeedUp { speed: 3.5 }));

        // Score stays at 10 for many frames: no further increase
        for _ in 0..20 {
            tick(&mut state, &mut rng);
        }
        assert_eq!(state.run.score, 10);
        assert_eq!(state.run.scroll_speed, 3.5);
        assert_eq!(state.obstacles[0].pos.x, 597.0 - 20.0 * 3.5);
    }

    #[test]
    fn test_collision_ends_run_and_stops_processing() {
        let mut state = running_state();
        let mut rng = Pcg32::seed_from_u64(4);
        state.run.score = 3;
        // First obstacle sits on the player; the second would have scored
        state.obstacles.push(Obstacle::on_ground(80.0, 30.0, 40.0));
        state.obstacles.push(leaving_obstacle());

        tick(&mut state, &mut rng);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.run.score, 3);
        assert_eq!(state.obstacles.len(), 2);
        assert_eq!(state.high_score, 3);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::GameOver {
                score: 3,
                new_high_score: true
            }]
        );

        // Frozen after game over
        let frozen_x = state.obstacles[0].pos.x;
        tick(&mut state, &mut rng);
        assert_eq!(state.obstacles[0].pos.x, frozen_x);
    }

    #[test]
    fn test_high_score_kept_when_not_beaten() {
        let mut state = GameState::new(50);
        press_jump(&mut state);
        state.run.score = 50;
        state.obstacles.push(Obstacle::on_ground(80.0, 30.0, 40.0));
        state.drain_events();

        tick(&mut state, &mut Pcg32::seed_from_u64(0));
        assert_eq!(state.high_score, 50);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::GameOver {
                score: 50,
                new_high_score: false
            }]
        );
    }

    #[test]
    fn test_restart_resets_run() {
        let mut state = running_state();
        let mut rng = Pcg32::seed_from_u64(4);
        state.run.score = 12;
        state.run.scroll_speed = 3.5;
        state.run.difficulty.last_milestone = 10;
        state.obstacles.push(Obstacle::on_ground(80.0, 30.0, 40.0));
        tick(&mut state, &mut rng);
        assert_eq!(state.phase, GamePhase::GameOver);

        // Restart button is ignored while running
        let mut running = running_state();
        restart(&mut running);
        assert!(running.drain_events().is_empty());

        restart(&mut state);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.run.score, 0);
        assert_eq!(state.run.scroll_speed, BASE_SCROLL_SPEED);
        assert_eq!(state.run.difficulty.last_milestone, 0);
        assert!(state.obstacles.is_empty());
        assert!(state.player.grounded);
        assert_eq!(state.player.pos.y, GROUND_LINE - state.player.size.y);
        assert_eq!(state.high_score, 12);
    }

    #[test]
    fn test_jump_after_game_over_restarts() {
        let mut state = running_state();
        state.obstacles.push(Obstacle::on_ground(80.0, 30.0, 40.0));
        tick(&mut state, &mut Pcg32::seed_from_u64(0));
        state.drain_events();

        press_jump(&mut state);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.drain_events(), vec![GameEvent::RunStarted]);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = running_state();
        let mut state2 = running_state();
        let mut rng1 = Pcg32::seed_from_u64(99999);
        let mut rng2 = Pcg32::seed_from_u64(99999);

        for frame in 0..600 {
            if frame % 37 == 0 {
                press_jump(&mut state1);
                press_jump(&mut state2);
            }
            tick(&mut state1, &mut rng1);
            tick(&mut state2, &mut rng2);
        }

        assert_eq!(state1.phase, state2.phase);
        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.obstacles, state2.obstacles);
        assert_eq!(state1.run.score, state2.run.score);
    }
}
