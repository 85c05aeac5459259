//! Planar collision predicates.
//!
//! These classify the body's planar footprint against wall segments, goal
//! discs and the window border. A ball is compared by its centroid, the
//! elongated shapes by their head-to-tail segment.
//!
//! Walls and the window border are tested against `radius + granularity/√2`.
//! The slack covers the half-diagonal of a grid cell, so a body snapped to a
//! cell centre is never classified free when some point of the cell would
//! collide. Goals get no slack.

use std::f64::consts::SQRT_2;

use drone_spatial::{point_segment_distance, segment_distance};
use drone_types::{Drone, GoalDisc, Wall, Window};

/// Distance below which a wall counts as touched.
#[must_use]
pub fn wall_clearance(drone: &Drone, granularity: u32) -> f64 {
    drone.radius() + f64::from(granularity) / SQRT_2
}

fn footprint_distance(drone: &Drone, wall: &Wall) -> f64 {
    if drone.shape().is_ball() {
        point_segment_distance(&drone.planar_centroid(), wall)
    } else {
        segment_distance(&drone.head_and_tail(), wall)
    }
}

/// Checks whether the body touches any wall.
///
/// # Example
///
/// ```
/// use drone_maze::touches_wall;
/// use drone_types::{BodyShape, Drone, Wall};
/// use nalgebra::Point3;
///
/// let walls = [Wall::from_coords(10.0, 0.0, 10.0, 20.0)];
/// let ball = Drone::new(Point3::new(5.0, 5.0, 0.0), 0.0, 2.0, 0.0)
///     .unwrap()
///     .with_shape(BodyShape::Ball);
///
/// // clearance is 2 + 1/√2 ≈ 2.71
/// assert!(!touches_wall(&ball, &walls, 1));
///
/// let mut near = ball.clone();
/// near.set_position(Point3::new(7.5, 5.0, 0.0));
/// assert!(touches_wall(&near, &walls, 1));
/// ```
#[must_use]
pub fn touches_wall(drone: &Drone, walls: &[Wall], granularity: u32) -> bool {
    let clearance = wall_clearance(drone, granularity);
    walls
        .iter()
        .any(|wall| footprint_distance(drone, wall) <= clearance)
}

/// Checks whether the body touches any goal disc.
#[must_use]
pub fn touches_goal(drone: &Drone, goals: &[GoalDisc]) -> bool {
    let radius = drone.radius();
    goals.iter().any(|goal| {
        let distance = if drone.shape().is_ball() {
            (drone.planar_centroid() - goal.center).norm()
        } else {
            point_segment_distance(&goal.center, &drone.head_and_tail())
        };
        distance <= radius + goal.radius
    })
}

/// Checks whether the body stays clear of the window border.
///
/// The four edges of the window are treated as walls. A footprint that
/// clears every edge but sits outside the rectangle is also rejected.
#[must_use]
pub fn within_window(drone: &Drone, window: &Window, granularity: u32) -> bool {
    let c = drone.planar_centroid();
    let inside = (0.0..=window.width).contains(&c.x) && (0.0..=window.height).contains(&c.y);
    inside && !touches_wall(drone, &window.edges(), granularity)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use drone_types::BodyShape;
    use nalgebra::Point3;

    fn body(x: f64, y: f64, length: f64, width: f64, shape: BodyShape) -> Drone {
        Drone::new(Point3::new(x, y, 0.0), length, width, 0.0)
            .unwrap()
            .with_shape(shape)
    }

    #[test]
    fn test_clearance() {
        let drone = body(0.0, 0.0, 0.0, 4.0, BodyShape::Ball);
        assert_relative_eq!(wall_clearance(&drone, 2), 4.0 + SQRT_2, epsilon = 1e-12);
    }

    #[test]
    fn test_capsule_reaches_wall_with_its_tip() {
        let walls = [Wall::from_coords(10.0, 0.0, 10.0, 20.0)];
        // Tip at x = 8, radius 1, clearance 1 + 0.707
        let horizontal = body(5.0, 5.0, 6.0, 1.0, BodyShape::Horizontal);
        assert!(!touches_wall(&horizontal, &walls, 1));

        let longer = body(5.0, 5.0, 8.0, 1.0, BodyShape::Horizontal);
        assert!(touches_wall(&longer, &walls, 1));

        // Same length but vertical: the segment stays at x = 5
        let vertical = body(5.0, 5.0, 8.0, 1.0, BodyShape::Vertical);
        assert!(!touches_wall(&vertical, &walls, 1));
    }

    #[test]
    fn test_crossing_wall_touches() {
        let walls = [Wall::from_coords(5.0, 0.0, 5.0, 10.0)];
        let drone = body(5.0, 5.0, 4.0, 0.0, BodyShape::Horizontal);
        assert!(touches_wall(&drone, &walls, 1));
    }

    #[test]
    fn test_no_walls() {
        let drone = body(5.0, 5.0, 4.0, 1.0, BodyShape::Horizontal);
        assert!(!touches_wall(&drone, &[], 10));
    }

    #[test]
    fn test_granularity_widens_clearance() {
        let walls = [Wall::from_coords(0.0, 10.0, 20.0, 10.0)];
        let drone = body(5.0, 7.0, 0.0, 1.0, BodyShape::Ball);
        assert!(!touches_wall(&drone, &walls, 1));
        assert!(touches_wall(&drone, &walls, 4));
    }

    #[test]
    fn test_touches_goal_ball() {
        let goals = [GoalDisc::new(10.0, 10.0, 1.0)];
        let near = body(10.0, 7.5, 0.0, 1.5, BodyShape::Ball);
        assert!(touches_goal(&near, &goals));

        let far = body(10.0, 7.4, 0.0, 1.5, BodyShape::Ball);
        assert!(!touches_goal(&far, &goals));
    }

    #[test]
    fn test_full_width_is_the_clearance() {
        // 2.5 from the wall and from the goal centre
        let ball = body(7.5, 5.0, 0.0, 2.0, BodyShape::Ball);
        let walls = [Wall::from_coords(10.0, 0.0, 10.0, 10.0)];
        assert!(touches_wall(&ball, &walls, 1));
        assert!(touches_goal(&ball, &[GoalDisc::new(10.0, 5.0, 1.0)]));

        let mut clear = ball.clone();
        clear.set_position(Point3::new(7.0, 5.0, 0.0));
        assert!(!touches_wall(&clear, &walls, 1));
        assert!(!touches_goal(&clear, &[GoalDisc::new(10.0, 5.0, 0.9)]));
    }

    #[test]
    fn test_touches_goal_capsule_uses_segment() {
        let goals = [GoalDisc::new(10.0, 10.0, 1.0)];
        let vertical = body(10.0, 5.0, 8.0, 1.0, BodyShape::Vertical);
        assert!(touches_goal(&vertical, &goals));

        let horizontal = body(10.0, 5.0, 8.0, 1.0, BodyShape::Horizontal);
        assert!(!touches_goal(&horizontal, &goals));
    }

    #[test]
    fn test_touches_any_of_several_goals() {
        let goals = [GoalDisc::new(0.0, 0.0, 0.5), GoalDisc::new(50.0, 50.0, 0.5)];
        let drone = body(50.0, 49.0, 0.0, 1.0, BodyShape::Ball);
        assert!(touches_goal(&drone, &goals));
    }

    #[test]
    fn test_within_window() {
        let window = Window::new(20.0, 20.0, 1.0);
        assert!(within_window(
            &body(10.0, 10.0, 4.0, 1.0, BodyShape::Horizontal),
            &window,
            1
        ));
        assert!(!within_window(
            &body(1.0, 10.0, 0.0, 1.0, BodyShape::Ball),
            &window,
            1
        ));
        assert!(!within_window(
            &body(10.0, 18.0, 2.0, 1.0, BodyShape::Vertical),
            &window,
            1
        ));
        assert!(!within_window(
            &body(25.0, 10.0, 0.0, 1.0, BodyShape::Ball),
            &window,
            1
        ));
    }
}
