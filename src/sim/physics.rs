//! Vertical player physics
//!
//! Per-frame integration: gravity first, then position, then the ground clamp.

use super::state::Player;
use crate::consts::{GRAVITY, JUMP_IMPULSE};

impl Player {
    /// Advance one frame of gravity and resolve landing
    pub fn integrate(&mut self) {
        self.velocity_y += GRAVITY;
        self.pos.y += self.velocity_y;

        let ground_y = self.ground_y();
        if self.pos.y >= ground_y {
            self.pos.y = ground_y;
            self.velocity_y = 0.0;
            self.jumping = false;
            self.grounded = true;
        } else {
            self.grounded = false;
        }
    }

    /// Apply the jump impulse if standing on the ground
    ///
    /// Airborne presses are ignored. Returns whether the jump happened.
    pub fn jump(&mut self) -> bool {
        if !self.grounded {
            return false;
        }
        self.velocity_y = JUMP_IMPULSE;
        self.jumping = true;
        self.grounded = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::GROUND_LINE;
    use proptest::prelude::*;

    #[test]
    fn test_resting_player_stays_grounded() {
        let mut player = Player::default();
        for _ in 0..10 {
            player.integrate();
        }
        assert!(player.grounded);
        assert_eq!(player.velocity_y, 0.0);
        assert_eq!(player.pos.y, GROUND_LINE - player.size.y);
    }

    #[test]
    fn test_jump_arc_lands() {
        let mut player = Player::default();
        assert!(player.jump());
        assert_eq!(player.velocity_y, -11.0);
        assert!(player.jumping);
        assert!(!player.grounded);

        player.integrate();
        assert!(player.pos.y < player.ground_y());
        assert!(!player.grounded);

        let mut frames = 1;
        while !player.grounded {
            player.integrate();
            frames += 1;
            assert!(frames < 200, "player never landed");
        }
        // v0 = -11, g = 0.4: roughly 55 frames of airtime
        assert!((54..=57).contains(&frames), "airtime was {frames}");
        assert!(!player.jumping);
        assert_eq!(player.velocity_y, 0.0);
    }

    #[test]
    fn test_jump_while_airborne_is_noop() {
        let mut player = Player::default();
        assert!(player.jump());
        player.integrate();
        let before = player.clone();

        assert!(!player.jump());
        assert_eq!(player.velocity_y, before.velocity_y);
        assert_eq!(player.pos, before.pos);
        assert_eq!(player.jumping, before.jumping);
        assert_eq!(player.grounded, before.grounded);
    }

    proptest! {
        #[test]
        fn prop_never_sinks_below_ground(presses in proptest::collection::vec(any::<bool>(), 1..400)) {
            let mut player = Player::default();
            for press in presses {
                if press {
                    player.jump();
                }
                player.integrate();
                prop_assert!(player.pos.y <= player.ground_y());
                if player.grounded {
                    prop_assert_eq!(player.pos.y, player.ground_y());
                    prop_assert_eq!(player.velocity_y, 0.0);
                }
            }
        }
    }
}
