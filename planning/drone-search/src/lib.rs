//! Best-first search for drone path planning.
//!
//! The engines in this crate are generic over [`SearchState`], a small
//! contract any node type can implement: neighbour generation, a goal test,
//! a cached admissible heuristic, a cost, a creation-order tiebreak and an
//! identity key. [`MazeState`] implements it over the occupancy grids built
//! by `drone-maze`.
//!
//! - [`astar`] - A* with a binary-heap frontier and a cost-aware visited map
//! - [`breadth_first`] - uninformed baseline, used to check A* optimality
//! - [`plan`] - scene in, path out: transform, then search
//!
//! # Example
//!
//! ```
//! use drone_search::plan;
//! use drone_spatial::VoxelCoord;
//! use drone_types::{Drone, GoalRegion, PlannerConfig, Scene, Window};
//! use nalgebra::Point3;
//!
//! let drone = Drone::new(Point3::new(2.0, 2.0, 2.0), 1.0, 1.0, 0.2).unwrap();
//! let scene = Scene::new(drone, Window::new(30.0, 30.0, 30.0), 1)
//!     .with_goal(GoalRegion::at(20.0, 20.0, 20.0));
//!
//! let outcome = plan(&scene, &PlannerConfig::default()).unwrap();
//! let path = outcome.path().unwrap();
//! assert_eq!(path.first(), Some(&VoxelCoord::new(2, 2, 2)));
//! assert_eq!(path.last(), Some(&VoxelCoord::new(20, 20, 20)));
//! assert_eq!(outcome.steps(), Some(54));
//! ```
//!
//! # Tiebreaking
//!
//! States are ordered by `f = g + h`, then by a creation index drawn from a
//! [`TiebreakCounter`]. The process-wide counter is never reset, so indices
//! keep growing across searches; only their relative order matters, and
//! repeated searches on the same grid return the same path.
//!
//! # Logging
//!
//! Search outcomes are logged through `tracing` at `info`, search starts at
//! `debug`, and non-fatal configuration issues at `warn`.

#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod astar;
pub mod bfs;
pub mod error;
pub mod heuristics;
pub mod maze_state;
pub mod outcome;
pub mod planner;
pub mod state;

pub use astar::astar;
pub use bfs::breadth_first;
pub use error::PlanError;
pub use maze_state::{GoalSet, MazeContext, MazeKey, MazeState};
pub use outcome::{SearchOutcome, SearchStats};
pub use planner::{PlanOutcome, plan, search_maze};
pub use state::{SearchState, TiebreakCounter};
