//! Core types for drone path planning: the body, the scene, the grid.
//!
//! # Overview
//!
//! - **Body**: the rigid shape being planned for ([`Drone`], [`BodyShape`])
//! - **Scene**: window, obstacles and goals handed over by a loader
//!   ([`Scene`], [`Window`], [`Obstacle`], [`GoalRegion`], [`GoalDisc`])
//! - **Grid**: the labelled occupancy grid search runs on ([`Maze`], [`Cell`])
//! - **Configuration**: heuristic, algorithm and goal tolerance
//!   ([`PlannerConfig`], [`Heuristic`], [`SearchMethod`])
//! - **Errors**: [`SceneError`] for malformed input, [`MazeError`] for grids
//!   that break their invariants
//!
//! # Example
//!
//! ```
//! use drone_types::{Drone, GoalRegion, Heuristic, PlannerConfig, Scene, Window};
//! use nalgebra::Point3;
//!
//! let drone = Drone::new(Point3::new(2.0, 2.0, 2.0), 1.0, 1.0, 0.2).unwrap();
//! let scene = Scene::new(drone, Window::new(30.0, 30.0, 30.0), 1)
//!     .with_goal(GoalRegion::at(20.0, 20.0, 20.0));
//! scene.validate().unwrap();
//!
//! let config = PlannerConfig::default().with_heuristic(Heuristic::Manhattan);
//! assert!(config.validate().is_empty());
//!
//! // Grids are produced from scenes by the drone-maze crate.
//! ```
//!
//! # Feature Flags
//!
//! - `serde`: Enables serialization/deserialization for all types

#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod cell;
pub mod config;
pub mod drone;
pub mod error;
pub mod maze;
pub mod scene;

// Re-export main types at crate root for convenience
pub use cell::Cell;
pub use config::{Heuristic, PlannerConfig, SearchMethod};
pub use drone::{BodyShape, Drone};
pub use error::{MazeError, SceneError};
pub use maze::Maze;
pub use scene::{DEFAULT_GOAL_TOLERANCE, GoalDisc, GoalRegion, Obstacle, Scene, Wall, Window};
