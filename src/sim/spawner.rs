//! Obstacle spawning
//!
//! A frame counter drops a new stump just past the right edge every
//! `OBSTACLE_INTERVAL + 1` frames. Sizes come from the injected RNG.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::Obstacle;
use crate::consts::*;

/// Frame countdown driving obstacle creation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObstacleSpawner {
    /// Frames since the last spawn
    pub timer: u32,
}

impl ObstacleSpawner {
    /// Advance one frame; returns a new obstacle when the interval elapses
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Obstacle> {
        self.timer += 1;
        if self.timer > OBSTACLE_INTERVAL {
            self.timer = 0;
            Some(spawn_obstacle(rng))
        } else {
            None
        }
    }
}

/// Create a randomly sized stump at the right edge of the playfield
pub fn spawn_obstacle<R: Rng + ?Sized>(rng: &mut R) -> Obstacle {
    let height = rng.random_range(OBSTACLE_MIN_HEIGHT..=OBSTACLE_MAX_HEIGHT);
    let width = rng.random_range(OBSTACLE_MIN_WIDTH..=OBSTACLE_MAX_WIDTH);
    Obstacle::on_ground(PLAYFIELD_WIDTH, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_first_spawn_on_frame_101() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut spawner = ObstacleSpawner::default();
        for frame in 1..=100 {
            assert!(spawner.tick(&mut rng).is_none(), "spawned early on frame {frame}");
        }
        assert!(spawner.tick(&mut rng).is_some());
        assert_eq!(spawner.timer, 0);
    }

    #[test]
    fn test_steady_cadence() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut spawner = ObstacleSpawner::default();
        let spawned = (0..1010).filter(|_| spawner.tick(&mut rng).is_some()).count();
        assert_eq!(spawned, 10);
    }

    #[test]
    fn test_same_seed_same_obstacles() {
        let mut a = Pcg32::seed_from_u64(99);
        let mut b = Pcg32::seed_from_u64(99);
        for _ in 0..20 {
            assert_eq!(spawn_obstacle(&mut a), spawn_obstacle(&mut b));
        }
    }

    proptest! {
        #[test]
        fn prop_obstacle_dimensions_in_range(seed in any::<u64>()) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let obstacle = spawn_obstacle(&mut rng);
            prop_assert!((35.0..=55.0).contains(&obstacle.size.y));
            prop_assert!((30.0..=40.0).contains(&obstacle.size.x));
            prop_assert_eq!(obstacle.pos.x, PLAYFIELD_WIDTH);
            prop_assert_eq!(obstacle.pos.y + obstacle.size.y, GROUND_LINE);
        }
    }
}
