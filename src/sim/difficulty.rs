//! Difficulty progression
//!
//! Scroll speed steps up once per score milestone (every 10 points).

use serde::{Deserialize, Serialize};

use crate::consts::{SPEED_MILESTONE, SPEED_STEP};

/// Tracks which milestone was last rewarded with a speed increase
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DifficultyController {
    pub last_milestone: u64,
}

impl DifficultyController {
    /// Check the current score and bump `scroll_speed` on a fresh milestone
    ///
    /// Returns the new speed when an increase was applied. Calling again at
    /// the same score never applies the milestone twice.
    pub fn apply(&mut self, score: u64, scroll_speed: &mut f32) -> Option<f32> {
        if score == 0 || score % SPEED_MILESTONE != 0 || score == self.last_milestone {
            return None;
        }
        *scroll_speed += SPEED_STEP;
        self.last_milestone = score;
        Some(*scroll_speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::BASE_SCROLL_SPEED;
    use proptest::prelude::*;

    #[test]
    fn test_zero_score_never_speeds_up() {
        let mut controller = DifficultyController::default();
        let mut speed = BASE_SCROLL_SPEED;
        assert_eq!(controller.apply(0, &mut speed), None);
        assert_eq!(speed, 3.0);
    }

    #[test]
    fn test_milestone_applies_once() {
        let mut controller = DifficultyController::default();
        let mut speed = BASE_SCROLL_SPEED;

        for score in 1..10 {
            assert_eq!(controller.apply(score, &mut speed), None);
        }
        assert_eq!(controller.apply(10, &mut speed), Some(3.5));
        // Same score checked on following frames
        for _ in 0..5 {
            assert_eq!(controller.apply(10, &mut speed), None);
        }
        assert_eq!(speed, 3.5);
        assert_eq!(controller.last_milestone, 10);

        assert_eq!(controller.apply(20, &mut speed), Some(4.0));
    }

    proptest! {
        #[test]
        fn prop_speed_matches_milestones(final_score in 0u64..500, repeats in 1usize..4) {
            let mut controller = DifficultyController::default();
            let mut speed = BASE_SCROLL_SPEED;
            for score in 0..=final_score {
                for _ in 0..repeats {
                    controller.apply(score, &mut speed);
                }
            }
            let expected = BASE_SCROLL_SPEED + (final_score / 10) as f32 * SPEED_STEP;
            prop_assert!((speed - expected).abs() < 1e-3);
            prop_assert!(speed >= BASE_SCROLL_SPEED);
        }
    }
}
