//! Overlap detection between actors
//!
//! Actors are drawn as circles inscribed in square bounding boxes, so the
//! overlap test treats each as a circle whose diameter is the box width.
//! Distance is measured between top-left corners, not centers. For equal
//! sizes this matches a center test; for different sizes the hit boundary
//! is offset toward the smaller actor's top-left. Hit boxes depend on this,
//! so it stays as is.

use super::object::{Body, GameObject};

/// Squared corner distance within squared sum of radii
#[inline]
pub fn circle_overlap(a: &GameObject, b: &GameObject) -> bool {
    let radius_sum = a.width() / 2.0 + b.width() / 2.0;
    let delta = a.pos - b.pos;
    delta.length_squared() <= radius_sum * radius_sum
}

/// `circle_overlap` for any two bodies
#[inline]
pub fn overlaps<A, B>(a: &A, b: &B) -> bool
where
    A: Body + ?Sized,
    B: Body + ?Sized,
{
    circle_overlap(a.body(), b.body())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    #[test]
    fn test_touching_counts_as_overlap() {
        let a = GameObject::square(Vec2::new(0.0, 0.0), 20.0);
        // Radii sum to 20: exactly 20 apart is a hit, 21 is a miss
        let b = GameObject::square(Vec2::new(20.0, 0.0), 20.0);
        let c = GameObject::square(Vec2::new(21.0, 0.0), 20.0);
        assert!(circle_overlap(&a, &b));
        assert!(!circle_overlap(&a, &c));
    }

    #[test]
    fn test_diagonal_uses_euclidean_distance() {
        let a = GameObject::square(Vec2::new(0.0, 0.0), 20.0);
        // 15,15 is ~21.2 apart
        let b = GameObject::square(Vec2::new(15.0, 15.0), 20.0);
        let c = GameObject::square(Vec2::new(14.0, 14.0), 20.0);
        assert!(!circle_overlap(&a, &b));
        assert!(circle_overlap(&a, &c));
    }

    #[test]
    fn test_corner_metric_differs_from_center_metric() {
        // Player 30 wide at origin, dot 20 wide whose center sits 24 right of
        // the player's center: centers are within 25 (overlap by center
        // distance), but corners are 29 apart, so no hit
        let player = GameObject::square(Vec2::new(0.0, 0.0), 30.0);
        let dot = GameObject::square(Vec2::new(29.0, 0.0), 20.0);
        let center_gap = (player.pos + player.size / 2.0 - (dot.pos + dot.size / 2.0)).length();
        assert!(center_gap <= 25.0);
        assert!(!circle_overlap(&player, &dot));
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric_for_equal_sizes(
            px in -100.0f32..500.0, py in -100.0f32..500.0,
            dx in -100.0f32..500.0, dy in -100.0f32..500.0,
            side in 1.0f32..60.0,
        ) {
            let p = GameObject::square(Vec2::new(px, py), side);
            let d = GameObject::square(Vec2::new(dx, dy), side);
            prop_assert_eq!(circle_overlap(&p, &d), circle_overlap(&d, &p));
        }

        #[test]
        fn prop_object_overlaps_itself(x in -100.0f32..500.0, y in -100.0f32..500.0) {
            let p = GameObject::square(Vec2::new(x, y), 20.0);
            prop_assert!(overlaps(&p, &p));
        }
    }
}
