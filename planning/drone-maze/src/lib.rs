//! Collision predicates and the scene-to-grid transform.
//!
//! This crate turns a continuous [`Scene`](drone_types::Scene) into the
//! discrete [`Maze`](drone_types::Maze) that search runs on.
//!
//! - [`transform_to_maze`] / [`GridTransform`] - label every cell of the grid
//!   from the body's extent box, using an obstacle bounding volume hierarchy
//! - [`touches_wall`], [`touches_goal`], [`within_window`] - planar
//!   predicates for bodies described by a centroid or a head-to-tail segment
//!
//! # Example
//!
//! ```
//! use drone_maze::transform_to_maze;
//! use drone_spatial::VoxelCoord;
//! use drone_types::{Cell, Drone, GoalRegion, Obstacle, Scene, Window};
//! use nalgebra::Point3;
//!
//! let drone = Drone::new(Point3::new(2.0, 2.0, 2.0), 1.0, 1.0, 1.0).unwrap();
//! let scene = Scene::new(drone, Window::new(10.0, 10.0, 10.0), 1)
//!     .with_obstacle(Obstacle::from_coords(5.0, 0.0, 0.0, 5.0, 10.0, 10.0))
//!     .with_goal(GoalRegion::at(8.0, 8.0, 8.0));
//!
//! let maze = transform_to_maze(&scene, 0.05).unwrap();
//! assert_eq!(maze.get(VoxelCoord::new(5, 3, 3)), Some(Cell::Wall));
//! assert_eq!(maze.get(VoxelCoord::new(8, 8, 8)), Some(Cell::Goal));
//! ```
//!
//! # Logging
//!
//! The transform emits `tracing` events: grid dimensions and label counts at
//! `info`, index statistics at `debug`, rejected start poses at `warn`.

#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod collision;
pub mod error;
pub mod transform;

pub use collision::{touches_goal, touches_wall, wall_clearance, within_window};
pub use error::{InfeasibleReason, TransformError};
pub use transform::{GridTransform, MAX_GRID_CELLS, transform_to_maze};

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod integration_tests {
    use super::*;
    use drone_spatial::VoxelCoord;
    use drone_types::{BodyShape, Cell, Drone, GoalDisc, GoalRegion, Obstacle, Scene, Wall, Window};
    use nalgebra::Point3;

    #[test]
    fn test_wall_slab_splits_grid() {
        let drone = Drone::new(Point3::new(2.0, 2.0, 2.0), 1.0, 1.0, 1.0).unwrap();
        let scene = Scene::new(drone, Window::new(10.0, 10.0, 10.0), 1)
            .with_obstacle(Obstacle::from_coords(5.0, 0.0, 0.0, 6.0, 10.0, 10.0))
            .with_goal(GoalRegion::at(8.0, 8.0, 8.0));
        let maze = transform_to_maze(&scene, 0.05).unwrap();

        // Bodies span x ± 0.5, so the slab 5..6 blocks x = 5 and x = 6.
        for y in 1..=9 {
            for z in 1..=9 {
                for x in 5..=6 {
                    assert_eq!(maze.get(VoxelCoord::new(x, y, z)), Some(Cell::Wall));
                }
            }
        }
        assert!(maze.is_walkable(VoxelCoord::new(4, 5, 5)));
        assert!(maze.is_walkable(VoxelCoord::new(7, 5, 5)));
    }

    #[test]
    fn test_planar_and_grid_views_agree_on_window() {
        let window = Window::new(20.0, 20.0, 20.0);
        let inside = Drone::new(Point3::new(10.0, 10.0, 10.0), 2.0, 1.0, 1.0)
            .unwrap()
            .with_shape(BodyShape::Horizontal);
        assert!(within_window(&inside, &window, 1));
        assert!(window.bounds().contains_box(&inside.extent_box()));

        let mut outside = inside.clone();
        outside.set_position(Point3::new(-5.0, 10.0, 10.0));
        assert!(!within_window(&outside, &window, 1));
        assert!(!window.bounds().contains_box(&outside.extent_box()));
    }

    #[test]
    fn test_planar_goal_and_walls() {
        let drone = Drone::new(Point3::new(5.0, 5.0, 0.0), 0.0, 1.0, 0.0)
            .unwrap()
            .with_shape(BodyShape::Ball);
        let walls: Vec<Wall> = Window::new(10.0, 10.0, 1.0).edges().to_vec();
        assert!(!touches_wall(&drone, &walls, 1));
        assert!(touches_goal(&drone, &[GoalDisc::new(5.0, 6.0, 0.5)]));
        assert!(!touches_goal(&drone, &[GoalDisc::new(5.0, 7.0, 0.5)]));
    }
}
