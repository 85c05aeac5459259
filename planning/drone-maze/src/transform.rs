//! Scene to occupancy-grid transform.
//!
//! Every integer cell `(i, j, k)` in `[0, floor(dim / g)]` places the body at
//! world position `(i·g, j·g, k·g)` and labels the cell from the body's
//! extent box:
//!
//! 1. `Wall` if the box leaves the window or overlaps any obstacle
//! 2. `Goal` if the box overlaps any inflated goal
//! 3. `Free` otherwise
//!
//! The cell nearest the body's original centroid is then labelled `Start`,
//! overriding whatever it was. Obstacles are looked up through an
//! [`AabbTree`], so the per-cell cost is logarithmic in the obstacle count.

use drone_spatial::{Aabb, AabbTree, VoxelCoord};
use drone_types::{Cell, Maze, MazeError, Scene};
use tracing::{debug, info, warn};

use crate::error::{InfeasibleReason, TransformError};

/// Largest number of cells the transform will allocate.
pub const MAX_GRID_CELLS: u64 = 1 << 30;

/// A scene prepared for labelling: obstacles indexed, goals inflated.
///
/// # Example
///
/// ```
/// use drone_maze::GridTransform;
/// use drone_spatial::VoxelCoord;
/// use drone_types::{Cell, Drone, GoalRegion, Scene, Window};
/// use nalgebra::Point3;
///
/// let drone = Drone::new(Point3::new(2.0, 2.0, 2.0), 1.0, 1.0, 0.2).unwrap();
/// let scene = Scene::new(drone, Window::new(30.0, 30.0, 30.0), 1)
///     .with_goal(GoalRegion::at(20.0, 20.0, 20.0));
///
/// let transform = GridTransform::new(&scene, 0.05).unwrap();
/// assert_eq!(transform.extent().unwrap(), VoxelCoord::new(30, 30, 30));
/// assert_eq!(transform.label(VoxelCoord::new(0, 5, 5)), Cell::Wall);
/// assert_eq!(transform.label(VoxelCoord::new(20, 20, 20)), Cell::Goal);
/// ```
#[derive(Debug, Clone)]
pub struct GridTransform<'a> {
    scene: &'a Scene,
    obstacles: AabbTree,
    goals: Vec<Aabb>,
    window: Aabb,
}

impl<'a> GridTransform<'a> {
    /// Validates the scene and builds the obstacle index.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::InvalidScene`] if the scene fails
    /// validation, or [`TransformError::InvalidGoalTolerance`] for a negative
    /// or non-finite tolerance.
    pub fn new(scene: &'a Scene, goal_tolerance: f64) -> Result<Self, TransformError> {
        scene.validate()?;
        if !goal_tolerance.is_finite() || goal_tolerance < 0.0 {
            return Err(TransformError::InvalidGoalTolerance(goal_tolerance));
        }

        let boxes: Vec<Aabb> = scene.obstacles.iter().map(|o| o.aabb()).collect();
        let obstacles = AabbTree::build(&boxes);
        let stats = obstacles.stats();
        debug!(
            obstacles = obstacles.len(),
            depth = stats.max_depth,
            leaves = stats.leaf_count,
            "Built obstacle index"
        );

        Ok(Self {
            scene,
            obstacles,
            goals: scene
                .goals
                .iter()
                .map(|g| g.inflated(goal_tolerance))
                .collect(),
            window: scene.window.bounds(),
        })
    }

    /// Largest cell index on each axis: `floor(dim / granularity)`.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::GridTooLarge`] if the grid exceeds
    /// [`MAX_GRID_CELLS`].
    pub fn extent(&self) -> Result<VoxelCoord, TransformError> {
        let pitch = self.scene.pitch();
        let window = &self.scene.window;
        let axes = [window.width, window.height, window.depth].map(|d| (d / pitch).floor());

        let cells = axes.iter().map(|a| a + 1.0).product::<f64>();
        if cells > to_f64(MAX_GRID_CELLS) {
            return Err(TransformError::GridTooLarge {
                cells: to_u64_saturating(cells),
                limit: MAX_GRID_CELLS,
            });
        }

        let [x, y, z] = axes.map(to_index);
        Ok(VoxelCoord::new(x, y, z))
    }

    /// Cell nearest the body's original centroid.
    #[must_use]
    pub fn start_cell(&self) -> VoxelCoord {
        let pitch = self.scene.pitch();
        let c = self.scene.drone.centroid();
        VoxelCoord::new(
            to_index((c.x / pitch).round()),
            to_index((c.y / pitch).round()),
            to_index((c.z / pitch).round()),
        )
    }

    /// Checks the body at its original centroid.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::Infeasible`] if the body leaves the window
    /// or overlaps an obstacle.
    pub fn check_start(&self) -> Result<(), TransformError> {
        let body = self.scene.drone.extent_box();
        if !self.window.contains_box(&body) {
            return Err(TransformError::infeasible(InfeasibleReason::OutOfBounds));
        }
        if let Some(&obstacle) = self.obstacles.query(&body).first() {
            return Err(TransformError::infeasible(
                InfeasibleReason::ObstacleOverlap { obstacle },
            ));
        }
        Ok(())
    }

    /// Classifies a body extent box.
    #[must_use]
    pub fn classify(&self, body: &Aabb) -> Cell {
        if !self.window.contains_box(body) || self.obstacles.intersects_any(body) {
            Cell::Wall
        } else if self.goals.iter().any(|goal| goal.intersects(body)) {
            Cell::Goal
        } else {
            Cell::Free
        }
    }

    /// Label of `coord` with the body centred on it, before the start
    /// override.
    #[must_use]
    pub fn label(&self, coord: VoxelCoord) -> Cell {
        let center = coord.to_world(self.scene.pitch());
        self.classify(&Aabb::from_center(center, self.scene.drone.half_extents()))
    }

    /// Labels every cell and returns the finished grid.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::Infeasible`] if the start pose is
    /// infeasible, or [`TransformError::GridTooLarge`] if the grid is too
    /// large to allocate.
    pub fn build(&self) -> Result<Maze, TransformError> {
        if let Err(err) = self.check_start() {
            warn!(error = %err, "Start pose rejected");
            return Err(err);
        }

        let extent = self.extent()?;
        let start = self.start_cell();
        info!(
            extent = ?extent.as_tuple(),
            granularity = self.scene.granularity,
            obstacles = self.obstacles.len(),
            goals = self.goals.len(),
            "Building occupancy grid"
        );

        let maze = Maze::from_fn(extent, self.scene.granularity, start, |coord| {
            self.label(coord)
        })
        .map_err(|err| match err {
            MazeError::MissingStart => TransformError::infeasible(InfeasibleReason::OffGrid),
            _ => TransformError::GridTooLarge {
                cells: maze_volume(extent),
                limit: MAX_GRID_CELLS,
            },
        })?;

        info!(
            cells = maze.len(),
            walls = maze.count(Cell::Wall),
            goals = maze.count(Cell::Goal),
            start = ?start.as_tuple(),
            "Occupancy grid complete"
        );
        if maze.count(Cell::Goal) == 0 {
            warn!("No cell reaches a goal region");
        }

        Ok(maze)
    }
}

/// Turns a scene into an occupancy grid.
///
/// # Errors
///
/// Fails on an invalid scene, an infeasible start pose, or a grid that is
/// too large. No partial grid is returned.
///
/// # Example
///
/// ```
/// use drone_maze::transform_to_maze;
/// use drone_spatial::VoxelCoord;
/// use drone_types::{Cell, Drone, GoalRegion, Scene, Window};
/// use nalgebra::Point3;
///
/// let drone = Drone::new(Point3::new(2.0, 2.0, 2.0), 1.0, 1.0, 0.2).unwrap();
/// let scene = Scene::new(drone, Window::new(30.0, 30.0, 30.0), 1)
///     .with_goal(GoalRegion::at(20.0, 20.0, 20.0));
///
/// let maze = transform_to_maze(&scene, 0.05).unwrap();
/// assert_eq!(maze.get(VoxelCoord::new(2, 2, 2)), Some(Cell::Start));
/// assert_eq!(maze.goals(), vec![VoxelCoord::new(20, 20, 20)]);
/// ```
pub fn transform_to_maze(scene: &Scene, goal_tolerance: f64) -> Result<Maze, TransformError> {
    GridTransform::new(scene, goal_tolerance)?.build()
}

fn maze_volume(extent: VoxelCoord) -> u64 {
    drone_spatial::GridBounds::from_extent(extent).volume()
}

#[allow(clippy::cast_precision_loss)]
const fn to_f64(value: u64) -> f64 {
    value as f64
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u64_saturating(value: f64) -> u64 {
    value as u64
}

/// Converts an already-rounded float to a cell index. Out-of-range values
/// saturate, and the grid bounds check rejects them afterwards.
#[allow(clippy::cast_possible_truncation)]
fn to_index(value: f64) -> i32 {
    value as i32
}
