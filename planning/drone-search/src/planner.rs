//! Scene-to-path entry points.
//!
//! [`plan`] runs the whole pipeline: validate and transform the scene, then
//! search the grid with the configured method. [`search_maze`] skips the
//! transform for callers that already hold a grid.

use drone_maze::transform_to_maze;
use drone_spatial::VoxelCoord;
use drone_types::{Maze, PlannerConfig, Scene, SearchMethod};
use nalgebra::Point3;
use tracing::{info, warn};

use crate::astar::astar;
use crate::bfs::breadth_first;
use crate::error::PlanError;
use crate::maze_state::MazeContext;
use crate::outcome::{SearchOutcome, SearchStats};

/// The grid a plan was computed on and the path found through it.
#[derive(Debug, Clone)]
pub struct PlanOutcome {
    maze: Maze,
    path: Option<Vec<VoxelCoord>>,
    stats: SearchStats,
}

impl PlanOutcome {
    /// The labelled grid.
    #[must_use]
    pub const fn maze(&self) -> &Maze {
        &self.maze
    }

    /// Cells from the start to a goal, both inclusive, or `None` when no goal
    /// is reachable.
    #[must_use]
    pub fn path(&self) -> Option<&[VoxelCoord]> {
        self.path.as_deref()
    }

    /// Returns `true` if a goal was reached.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        self.path.is_some()
    }

    /// Number of moves on the path.
    #[must_use]
    pub fn steps(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len().saturating_sub(1))
    }

    /// The path as body centroids in world coordinates.
    #[must_use]
    pub fn world_path(&self) -> Option<Vec<Point3<f64>>> {
        self.path
            .as_ref()
            .map(|p| p.iter().map(|c| self.maze.to_world(*c)).collect())
    }

    /// Search statistics.
    #[must_use]
    pub const fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Splits the outcome into grid, path and statistics.
    #[must_use]
    pub fn into_parts(self) -> (Maze, Option<Vec<VoxelCoord>>, SearchStats) {
        (self.maze, self.path, self.stats)
    }
}

/// Searches `maze` from its start cell for any goal-labelled cell.
///
/// Uses the global tiebreak counter.
///
/// # Example
///
/// ```
/// use drone_search::search_maze;
/// use drone_types::{Maze, PlannerConfig, SearchMethod};
///
/// let maze = Maze::from_layers(&[["P  ", "%% ", ".  "]], 1).unwrap();
///
/// let astar = search_maze(&maze, &PlannerConfig::default());
/// let bfs = search_maze(&maze, &PlannerConfig::default().with_method(SearchMethod::BreadthFirst));
/// assert_eq!(astar.steps(), Some(6));
/// assert_eq!(astar.steps(), bfs.steps());
/// ```
#[must_use]
pub fn search_maze(maze: &Maze, config: &PlannerConfig) -> SearchOutcome<VoxelCoord> {
    let context = MazeContext::new(maze, config.heuristic());
    let outcome = match config.method() {
        SearchMethod::AStar => astar(context.start()),
        SearchMethod::BreadthFirst => breadth_first(context.start()),
    };
    outcome.map(|state| state.cell())
}

/// Plans a path for the scene's body to any of its goals.
///
/// Configuration issues that do not prevent planning are logged at `warn`.
///
/// # Errors
///
/// Returns [`PlanError::Transform`] if the scene is invalid, the goal
/// tolerance is invalid, the grid is too large, or the start pose collides.
/// An unreachable goal is not an error.
///
/// # Example
///
/// ```
/// use drone_search::plan;
/// use drone_types::{Drone, GoalRegion, PlannerConfig, Scene, Window};
/// use nalgebra::Point3;
///
/// let drone = Drone::new(Point3::new(2.0, 2.0, 2.0), 1.0, 1.0, 0.2).unwrap();
/// let scene = Scene::new(drone, Window::new(10.0, 10.0, 10.0), 1)
///     .with_goal(GoalRegion::at(6.0, 2.0, 2.0));
///
/// let outcome = plan(&scene, &PlannerConfig::default()).unwrap();
/// assert_eq!(outcome.steps(), Some(4));
/// ```
pub fn plan(scene: &Scene, config: &PlannerConfig) -> Result<PlanOutcome, PlanError> {
    for issue in config.validate() {
        warn!(issue = %issue, "Planner configuration issue");
    }

    let maze = transform_to_maze(scene, config.goal_tolerance())?;
    let (path, stats) = search_maze(&maze, config).into_parts();

    info!(
        method = config.method().name(),
        heuristic = config.heuristic().name(),
        found = path.is_some(),
        length = path.as_ref().map_or(0, Vec::len),
        "Planning complete"
    );

    Ok(PlanOutcome { maze, path, stats })
}
