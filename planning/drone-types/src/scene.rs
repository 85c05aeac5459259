//! Scene input: the window, obstacles and goals the body is planned through.
//!
//! These are the values an external configuration loader produces. They are
//! validated once, here, so the geometry kernel never has to check for
//! non-finite input.

use drone_spatial::{Aabb, Segment2};
use nalgebra::{Point2, Point3, Vector3};

use crate::drone::Drone;
use crate::error::SceneError;

/// Half-size of the box inflated around each 3D goal point.
pub const DEFAULT_GOAL_TOLERANCE: f64 = 0.05;

/// An axis-aligned box obstacle defined by two diagonal corners.
///
/// # Example
///
/// ```
/// use drone_types::Obstacle;
///
/// let obstacle = Obstacle::from_coords(8.0, 8.0, 8.0, 5.0, 5.0, 5.0);
/// assert_eq!(obstacle.aabb().min.x, 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Obstacle {
    corners: [Point3<f64>; 2],
}

impl Obstacle {
    /// Creates an obstacle from two corners in any order.
    #[must_use]
    pub const fn new(a: Point3<f64>, b: Point3<f64>) -> Self {
        Self { corners: [a, b] }
    }

    /// Creates an obstacle from `(x1, y1, z1, x2, y2, z2)`.
    #[must_use]
    pub fn from_coords(x1: f64, y1: f64, z1: f64, x2: f64, y2: f64, z2: f64) -> Self {
        Self::new(Point3::new(x1, y1, z1), Point3::new(x2, y2, z2))
    }

    /// The corners as given.
    #[must_use]
    pub const fn corners(&self) -> [Point3<f64>; 2] {
        self.corners
    }

    /// The obstacle's box.
    #[must_use]
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.corners[0], self.corners[1])
    }

    fn is_finite(&self) -> bool {
        self.corners
            .iter()
            .all(|corner| corner.iter().all(|c| c.is_finite()))
    }
}

/// A 3D goal point. The planner inflates it into a small box.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GoalRegion {
    /// Goal location.
    pub center: Point3<f64>,
}

impl GoalRegion {
    /// Creates a goal at `center`.
    #[must_use]
    pub const fn new(center: Point3<f64>) -> Self {
        Self { center }
    }

    /// Creates a goal at `(x, y, z)`.
    #[must_use]
    pub fn at(x: f64, y: f64, z: f64) -> Self {
        Self::new(Point3::new(x, y, z))
    }

    /// The goal inflated by `tolerance` on every side.
    #[must_use]
    pub fn inflated(&self, tolerance: f64) -> Aabb {
        Aabb::from_center(self.center, Vector3::repeat(tolerance))
    }
}

/// A planar goal: a disc of radius `radius` around `center`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GoalDisc {
    /// Disc centre.
    pub center: Point2<f64>,
    /// Disc radius.
    pub radius: f64,
}

impl GoalDisc {
    /// Creates a disc from `(x, y, r)`.
    #[must_use]
    pub fn new(x: f64, y: f64, radius: f64) -> Self {
        Self {
            center: Point2::new(x, y),
            radius,
        }
    }
}

/// A planar wall, given as `(x1, y1, x2, y2)` by scene loaders.
pub type Wall = Segment2;

/// Dimensions of the bounded region anchored at the origin.
///
/// # Example
///
/// ```
/// use drone_types::Window;
///
/// let window = Window::new(30.0, 30.0, 30.0);
/// assert_eq!(window.edges().len(), 4);
/// assert_eq!(window.bounds().max.z, 30.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Window {
    /// Extent along X.
    pub width: f64,
    /// Extent along Y.
    pub height: f64,
    /// Extent along Z. Ignored by the planar predicates.
    pub depth: f64,
}

impl Window {
    /// Creates a window of the given size.
    #[must_use]
    pub const fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// The box `[0, width] x [0, height] x [0, depth]`.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        Aabb::new(
            Point3::origin(),
            Point3::new(self.width, self.height, self.depth),
        )
    }

    /// The four planar border segments: bottom, left, right, top.
    #[must_use]
    pub fn edges(&self) -> [Wall; 4] {
        let (w, h) = (self.width, self.height);
        [
            Segment2::from_coords(0.0, 0.0, w, 0.0),
            Segment2::from_coords(0.0, 0.0, 0.0, h),
            Segment2::from_coords(w, 0.0, w, h),
            Segment2::from_coords(0.0, h, w, h),
        ]
    }

    /// Checks that every dimension is finite and positive.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::InvalidWindow`] otherwise.
    pub fn validate(&self) -> Result<(), SceneError> {
        let ok = [self.width, self.height, self.depth]
            .iter()
            .all(|d| d.is_finite() && *d > 0.0);
        if ok {
            Ok(())
        } else {
            Err(SceneError::InvalidWindow {
                width: self.width,
                height: self.height,
                depth: self.depth,
            })
        }
    }
}

/// Everything the grid transform needs.
///
/// # Example
///
/// ```
/// use drone_types::{Drone, GoalRegion, Obstacle, Scene, Window};
/// use nalgebra::Point3;
///
/// let drone = Drone::new(Point3::new(2.0, 2.0, 2.0), 1.0, 1.0, 0.2).unwrap();
/// let scene = Scene::new(drone, Window::new(30.0, 30.0, 30.0), 1)
///     .with_goal(GoalRegion::at(20.0, 20.0, 20.0))
///     .with_obstacle(Obstacle::from_coords(10.0, 0.0, 0.0, 12.0, 30.0, 30.0));
///
/// assert!(scene.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scene {
    /// Body at its start pose.
    pub drone: Drone,
    /// Box obstacles.
    pub obstacles: Vec<Obstacle>,
    /// Goal points; reaching any one is success.
    pub goals: Vec<GoalRegion>,
    /// Bounded region.
    pub window: Window,
    /// Grid pitch in world units.
    pub granularity: u32,
}

impl Scene {
    /// Creates a scene with no obstacles and no goals.
    #[must_use]
    pub const fn new(drone: Drone, window: Window, granularity: u32) -> Self {
        Self {
            drone,
            obstacles: Vec::new(),
            goals: Vec::new(),
            window,
            granularity,
        }
    }

    /// Adds an obstacle.
    #[must_use]
    pub fn with_obstacle(mut self, obstacle: Obstacle) -> Self {
        self.obstacles.push(obstacle);
        self
    }

    /// Adds several obstacles.
    #[must_use]
    pub fn with_obstacles(mut self, obstacles: impl IntoIterator<Item = Obstacle>) -> Self {
        self.obstacles.extend(obstacles);
        self
    }

    /// Adds a goal.
    #[must_use]
    pub fn with_goal(mut self, goal: GoalRegion) -> Self {
        self.goals.push(goal);
        self
    }

    /// Adds several goals.
    #[must_use]
    pub fn with_goals(mut self, goals: impl IntoIterator<Item = GoalRegion>) -> Self {
        self.goals.extend(goals);
        self
    }

    /// Grid pitch as a float.
    #[must_use]
    pub fn pitch(&self) -> f64 {
        f64::from(self.granularity)
    }

    /// Checks the whole scene at the input boundary.
    ///
    /// # Errors
    ///
    /// Returns the first [`SceneError`] found: body, window, granularity,
    /// obstacles, then goals.
    pub fn validate(&self) -> Result<(), SceneError> {
        self.drone.validate()?;
        self.window.validate()?;
        if self.granularity < 1 {
            return Err(SceneError::InvalidGranularity(self.granularity));
        }
        if !self.obstacles.iter().all(Obstacle::is_finite) {
            return Err(SceneError::non_finite("obstacle"));
        }
        if !self
            .goals
            .iter()
            .all(|g| g.center.iter().all(|c| c.is_finite()))
        {
            return Err(SceneError::non_finite("goal"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    fn drone() -> Drone {
        Drone::new(Point3::new(2.0, 2.0, 2.0), 1.0, 1.0, 0.2).unwrap()
    }

    #[test]
    fn test_obstacle_orders_corners() {
        let obstacle = Obstacle::from_coords(8.0, 1.0, 8.0, 5.0, 9.0, 5.0);
        assert_eq!(obstacle.aabb().min, Point3::new(5.0, 1.0, 5.0));
        assert_eq!(obstacle.aabb().max, Point3::new(8.0, 9.0, 8.0));
    }

    #[test]
    fn test_goal_inflation() {
        let bbox = GoalRegion::at(20.0, 20.0, 20.0).inflated(DEFAULT_GOAL_TOLERANCE);
        assert!(bbox.contains_point(&Point3::new(20.04, 19.96, 20.0)));
        assert!(!bbox.contains_point(&Point3::new(20.06, 20.0, 20.0)));
    }

    #[test]
    fn test_window_edges() {
        let edges = Window::new(4.0, 3.0, 1.0).edges();
        assert_eq!(edges[2], Segment2::from_coords(4.0, 0.0, 4.0, 3.0));
        assert_eq!(edges[3], Segment2::from_coords(0.0, 3.0, 4.0, 3.0));
    }

    #[test]
    fn test_validate_ok() {
        let scene = Scene::new(drone(), Window::new(30.0, 30.0, 30.0), 2)
            .with_goal(GoalRegion::at(1.0, 1.0, 1.0))
            .with_obstacles([Obstacle::from_coords(0.0, 0.0, 0.0, 1.0, 1.0, 1.0)]);
        assert!(scene.validate().is_ok());
        assert_eq!(scene.pitch(), 2.0);
    }

    #[test]
    fn test_validate_granularity() {
        let scene = Scene::new(drone(), Window::new(30.0, 30.0, 30.0), 0);
        assert_eq!(scene.validate(), Err(SceneError::InvalidGranularity(0)));
    }

    #[test]
    fn test_validate_window() {
        let scene = Scene::new(drone(), Window::new(30.0, 0.0, 30.0), 1);
        assert!(matches!(
            scene.validate(),
            Err(SceneError::InvalidWindow { .. })
        ));
    }

    #[test]
    fn test_validate_non_finite_inputs() {
        let base = Scene::new(drone(), Window::new(30.0, 30.0, 30.0), 1);

        let bad_obstacle = base
            .clone()
            .with_obstacle(Obstacle::from_coords(0.0, f64::NAN, 0.0, 1.0, 1.0, 1.0));
        assert_eq!(
            bad_obstacle.validate(),
            Err(SceneError::non_finite("obstacle"))
        );

        let bad_goal = base.with_goal(GoalRegion::at(f64::INFINITY, 0.0, 0.0));
        assert_eq!(bad_goal.validate(), Err(SceneError::non_finite("goal")));
    }
}
