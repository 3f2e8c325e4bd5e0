//! Collision predicates and the paddle rebound heuristic
//!
//! The ball-vs-brick test is a point-in-rect check against the ball *center*
//! (radius ignored), and the paddle test only watches the lower boundary
//! crossing. Both are deliberate simplifications: tightening them would alter
//! observable gameplay, so they stay as-is.

use glam::Vec2;

/// Strict point-in-rect test (exclusive on all edges)
#[inline]
pub fn point_in_rect(point: Vec2, origin: Vec2, size: Vec2) -> bool {
    point.x > origin.x
        && point.x < origin.x + size.x
        && point.y > origin.y
        && point.y < origin.y + size.y
}

/// Normalized horizontal contact position on the paddle, 0 at the left edge,
/// 1 at the right edge
#[inline]
pub fn hit_point(ball_x: f32, paddle_x: f32, paddle_width: f32) -> f32 {
    (ball_x - paddle_x) / paddle_width
}

/// Rebound velocity after a paddle hit
///
/// The vertical component is always `-speed` (full-speed bounce upward); the
/// horizontal component scales with contact position, `(hit_point - 0.5) *
/// speed * 2`, so a center hit goes straight up and an edge hit leaves at the
/// steepest angle. A simple angle-control heuristic, not physical reflection.
#[inline]
pub fn paddle_rebound(ball_x: f32, paddle_x: f32, paddle_width: f32, speed: f32) -> Vec2 {
    let hit = hit_point(ball_x, paddle_x, paddle_width);
    Vec2::new((hit - 0.5) * speed * 2.0, -speed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_point_in_rect() {
        let origin = Vec2::new(10.0, 20.0);
        let size = Vec2::new(50.0, 30.0);

        assert!(point_in_rect(Vec2::new(35.0, 35.0), origin, size));
        assert!(!point_in_rect(Vec2::new(5.0, 35.0), origin, size));
        assert!(!point_in_rect(Vec2::new(35.0, 55.0), origin, size));
        // Edges are exclusive
        assert!(!point_in_rect(Vec2::new(10.0, 35.0), origin, size));
        assert!(!point_in_rect(Vec2::new(60.0, 35.0), origin, size));
    }

    #[test]
    fn test_rebound_center_goes_straight_up() {
        let v = paddle_rebound(400.0, 350.0, 100.0, 5.0);
        assert_eq!(v, Vec2::new(0.0, -5.0));
    }

    #[test]
    fn test_rebound_edges_are_maximal() {
        // Leftmost contact: full speed to the left
        let left = paddle_rebound(350.0, 350.0, 100.0, 5.0);
        assert_eq!(left, Vec2::new(-5.0, -5.0));

        // Rightmost contact: full speed to the right
        let right = paddle_rebound(450.0, 350.0, 100.0, 5.0);
        assert_eq!(right, Vec2::new(5.0, -5.0));
    }

    proptest! {
        /// Rebound dx stays within [-speed, +speed] for any in-span contact,
        /// and dy is always -speed
        #[test]
        fn prop_rebound_bounded(
            paddle_x in 0.0f32..700.0,
            t in 0.0f32..=1.0,
            speed in 1.0f32..20.0,
        ) {
            let width = 100.0;
            let ball_x = paddle_x + t * width;
            let v = paddle_rebound(ball_x, paddle_x, width, speed);
            prop_assert!(v.x >= -speed - 1e-3);
            prop_assert!(v.x <= speed + 1e-3);
            prop_assert_eq!(v.y, -speed);
        }

        /// Rebound is a deterministic function of the contact position
        #[test]
        fn prop_rebound_deterministic(ball_x in 300.0f32..500.0) {
            let a = paddle_rebound(ball_x, 350.0, 100.0, 5.0);
            let b = paddle_rebound(ball_x, 350.0, 100.0, 5.0);
            prop_assert_eq!(a, b);
        }
    }
}
