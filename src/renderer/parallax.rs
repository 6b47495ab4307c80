//! Decorative parallax offsets
//!
//! Stateless: every offset is a function of the wall clock and the current
//! scroll speed, so pausing the sim freezes nothing but the stumps.

use crate::consts::PLAYFIELD_WIDTH;

/// A drifting background element (cloud or bird)
#[derive(Debug, Clone, Copy)]
pub struct DriftLayer {
    /// Extra x offset so layers don't bunch up
    pub phase_x: f32,
    pub y: f32,
    /// Larger divisor = slower layer
    pub divisor: f32,
    pub scale: f32,
}

/// Clouds drift at half the scroll speed
pub const CLOUD_SPEED_FACTOR: f32 = 0.5;
/// Birds drift a little slower than clouds
pub const BIRD_SPEED_FACTOR: f32 = 0.4;

pub const CLOUDS: [DriftLayer; 4] = [
    DriftLayer { phase_x: 0.0, y: 60.0, divisor: 25.0, scale: 1.0 },
    DriftLayer { phase_x: 300.0, y: 100.0, divisor: 30.0, scale: 0.8 },
    DriftLayer { phase_x: 600.0, y: 80.0, divisor: 35.0, scale: 1.2 },
    DriftLayer { phase_x: 900.0, y: 120.0, divisor: 28.0, scale: 0.9 },
];

pub const BIRDS: [DriftLayer; 3] = [
    DriftLayer { phase_x: 0.0, y: 100.0, divisor: 40.0, scale: 1.0 },
    DriftLayer { phase_x: 200.0, y: 140.0, divisor: 35.0, scale: 1.0 },
    DriftLayer { phase_x: 500.0, y: 120.0, divisor: 45.0, scale: 1.0 },
];

/// Ground decorations (flowers, mushrooms) wrap over this span
pub const GROUND_DECOR_SPAN: f32 = PLAYFIELD_WIDTH + 200.0;
/// Wrap span for clouds
pub const CLOUD_SPAN: f32 = PLAYFIELD_WIDTH + 200.0;
/// Wrap span for birds
pub const BIRD_SPAN: f32 = PLAYFIELD_WIDTH + 300.0;
/// Spacing of grass blades
pub const GRASS_SPACING: f32 = 15.0;

/// Offset of a layer moving at `speed / divisor` units per millisecond,
/// wrapped into `[0, span)`
pub fn wrapped_offset(time_ms: f64, speed: f32, divisor: f32, span: f32) -> f32 {
    if divisor <= 0.0 || span <= 0.0 {
        return 0.0;
    }
    let distance = time_ms * speed as f64 / divisor as f64;
    distance.rem_euclid(span as f64) as f32
}

/// Screen x of a drifting layer, moving right to left
pub fn drift_x(layer: &DriftLayer, time_ms: f64, speed: f32, span: f32) -> f32 {
    PLAYFIELD_WIDTH - wrapped_offset(time_ms, speed, layer.divisor, span) + layer.phase_x
}

/// Screen x of a ground decoration anchored at `anchor`, or `None` when it
/// is outside the visible band
pub fn ground_decor_x(anchor: f32, time_ms: f64, speed: f32, running: bool) -> Option<f32> {
    let offset = if running {
        wrapped_offset(time_ms, speed, 50.0, PLAYFIELD_WIDTH)
    } else {
        0.0
    };
    let x = (anchor - offset + PLAYFIELD_WIDTH * 2.0).rem_euclid(GROUND_DECOR_SPAN);
    (x > -50.0 && x < PLAYFIELD_WIDTH + 50.0).then_some(x)
}

/// Horizontal shift of the grass blade pattern
pub fn grass_offset(time_ms: f64, speed: f32, running: bool) -> f32 {
    if running {
        wrapped_offset(time_ms, speed, 50.0, GRASS_SPACING * 2.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_offset_stays_in_span() {
        for t in [0.0, 1.0, 999.0, 1.7e12] {
            let off = wrapped_offset(t, 3.0, 25.0, CLOUD_SPAN);
            assert!((0.0..CLOUD_SPAN).contains(&off), "offset {off} at t={t}");
        }
    }

    #[test]
    fn test_faster_scroll_drifts_further() {
        let slow = wrapped_offset(1000.0, 3.0, 25.0, 1e6);
        let fast = wrapped_offset(1000.0, 6.0, 25.0, 1e6);
        assert_eq!(slow, 120.0);
        assert_eq!(fast, 240.0);
    }

    #[test]
    fn test_degenerate_layers_do_not_move() {
        assert_eq!(wrapped_offset(1234.0, 3.0, 0.0, 100.0), 0.0);
        assert_eq!(wrapped_offset(1234.0, 3.0, 10.0, 0.0), 0.0);
    }

    #[test]
    fn test_ground_decor_static_when_not_running() {
        // (120 + 2 * width) wrapped into the decor span
        assert_eq!(ground_decor_x(120.0, 5e6, 3.0, false), Some(920.0));
        assert_eq!(grass_offset(5e6, 3.0, false), 0.0);
    }

    #[test]
    fn test_ground_decor_culled_off_screen() {
        // anchor 300 wraps to 1100, right of the visible band
        assert_eq!(ground_decor_x(300.0, 0.0, 3.0, false), None);
        assert_eq!(ground_decor_x(100.0, 0.0, 3.0, false), Some(900.0));
    }

    #[test]
    fn test_drift_starts_at_right_edge() {
        let x = drift_x(&CLOUDS[1], 0.0, 3.0, CLOUD_SPAN);
        assert_eq!(x, PLAYFIELD_WIDTH + 300.0);
    }
}
