//! [`SearchState`] over an occupancy grid.
//!
//! A [`MazeContext`] bundles what every state of one search shares: the
//! grid, the goal set, the heuristic and the tiebreak counter. States borrow
//! the context and carry only their cell, cost, cached heuristic and
//! tiebreak index.

use std::fmt;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::Arc;

use drone_spatial::VoxelCoord;
use drone_types::{Heuristic, Maze};

use crate::heuristics::nearest_goal_estimate;
use crate::state::{SearchState, TiebreakCounter};

/// The cells a search may stop at.
///
/// Cells are kept sorted and deduplicated, and the set carries a content
/// fingerprint so state keys hash in constant time.
///
/// # Example
///
/// ```
/// use drone_search::GoalSet;
/// use drone_spatial::VoxelCoord;
///
/// let goals = GoalSet::new([VoxelCoord::new(3, 0, 0), VoxelCoord::new(1, 0, 0), VoxelCoord::new(3, 0, 0)]);
/// assert_eq!(goals.len(), 2);
/// assert!(goals.contains(VoxelCoord::new(1, 0, 0)));
/// assert_eq!(goals, GoalSet::new([VoxelCoord::new(1, 0, 0), VoxelCoord::new(3, 0, 0)]));
/// ```
#[derive(Debug, Clone, Eq)]
pub struct GoalSet {
    cells: Vec<VoxelCoord>,
    fingerprint: u64,
}

impl GoalSet {
    /// Builds a goal set from any collection of cells.
    #[must_use]
    pub fn new(cells: impl IntoIterator<Item = VoxelCoord>) -> Self {
        let mut cells: Vec<VoxelCoord> = cells.into_iter().collect();
        cells.sort_unstable();
        cells.dedup();

        let mut hasher = DefaultHasher::new();
        cells.hash(&mut hasher);
        Self {
            cells,
            fingerprint: hasher.finish(),
        }
    }

    /// Every goal-labelled cell of `maze`.
    #[must_use]
    pub fn from_maze(maze: &Maze) -> Self {
        Self::new(maze.goals())
    }

    /// Number of goal cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if there are no goals.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns `true` if `cell` is a goal.
    #[must_use]
    pub fn contains(&self, cell: VoxelCoord) -> bool {
        self.cells.binary_search(&cell).is_ok()
    }

    /// The goal cells in sorted order.
    #[must_use]
    pub fn as_slice(&self) -> &[VoxelCoord] {
        &self.cells
    }

    /// Content hash, equal for equal sets.
    #[must_use]
    pub const fn fingerprint(&self) -> u64 {
        self.fingerprint
    }
}

impl PartialEq for GoalSet {
    fn eq(&self, other: &Self) -> bool {
        self.fingerprint == other.fingerprint && self.cells == other.cells
    }
}

impl Hash for GoalSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.fingerprint.hash(state);
    }
}

/// Identity of a [`MazeState`]: its cell and the goals still to reach.
#[derive(Debug, Clone)]
pub struct MazeKey {
    cell: VoxelCoord,
    goals: Arc<GoalSet>,
}

impl MazeKey {
    /// The cell.
    #[must_use]
    pub const fn cell(&self) -> VoxelCoord {
        self.cell
    }

    /// The goal set.
    #[must_use]
    pub fn goals(&self) -> &GoalSet {
        &self.goals
    }
}

impl PartialEq for MazeKey {
    fn eq(&self, other: &Self) -> bool {
        self.cell == other.cell
            && (Arc::ptr_eq(&self.goals, &other.goals) || self.goals == other.goals)
    }
}

impl Eq for MazeKey {}

impl Hash for MazeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.cell.hash(state);
        self.goals.hash(state);
    }
}

/// Shared inputs of one grid search.
///
/// By default the goal set is every goal-labelled cell of the grid and
/// tiebreak indices come from [`TiebreakCounter::global`].
///
/// # Example
///
/// ```
/// use drone_search::{MazeContext, SearchState};
/// use drone_spatial::VoxelCoord;
/// use drone_types::{Heuristic, Maze};
///
/// let maze = Maze::from_layers(&[["P  .", "   ."]], 1).unwrap();
/// let context = MazeContext::new(&maze, Heuristic::Manhattan);
/// assert_eq!(context.goals().len(), 2);
///
/// let start = context.start();
/// assert_eq!(start.cell(), VoxelCoord::new(0, 0, 0));
/// assert_eq!(start.cost(), 0);
/// assert!((start.heuristic() - 3.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct MazeContext<'a> {
    maze: &'a Maze,
    goals: Arc<GoalSet>,
    heuristic: Heuristic,
    counter: &'a TiebreakCounter,
}

impl<'a> MazeContext<'a> {
    /// Creates a context searching `maze` for its goal-labelled cells.
    #[must_use]
    pub fn new(maze: &'a Maze, heuristic: Heuristic) -> Self {
        Self {
            maze,
            goals: Arc::new(GoalSet::from_maze(maze)),
            heuristic,
            counter: TiebreakCounter::global(),
        }
    }

    /// Replaces the goal set.
    #[must_use]
    pub fn with_goals(mut self, goals: impl IntoIterator<Item = VoxelCoord>) -> Self {
        self.goals = Arc::new(GoalSet::new(goals));
        self
    }

    /// Draws tiebreak indices from `counter` instead of the global one.
    #[must_use]
    pub const fn with_counter(mut self, counter: &'a TiebreakCounter) -> Self {
        self.counter = counter;
        self
    }

    /// The grid being searched.
    #[must_use]
    pub const fn maze(&self) -> &'a Maze {
        self.maze
    }

    /// The goal set.
    #[must_use]
    pub fn goals(&self) -> &GoalSet {
        &self.goals
    }

    /// The heuristic states are built with.
    #[must_use]
    pub const fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    /// The root state at the grid's start cell.
    #[must_use]
    pub fn start(&self) -> MazeState<'_> {
        MazeState::new(self, self.maze.start(), 0)
    }

    /// A state at an arbitrary cell with the given accumulated cost.
    #[must_use]
    pub fn state_at(&self, cell: VoxelCoord, cost: u32) -> MazeState<'_> {
        MazeState::new(self, cell, cost)
    }
}

/// A grid cell reached at a known cost.
#[derive(Clone)]
pub struct MazeState<'a> {
    context: &'a MazeContext<'a>,
    cell: VoxelCoord,
    cost: u32,
    heuristic: f64,
    tiebreak: u64,
}

impl<'a> MazeState<'a> {
    fn new(context: &'a MazeContext<'a>, cell: VoxelCoord, cost: u32) -> Self {
        let mut state = Self {
            context,
            cell,
            cost,
            heuristic: 0.0,
            tiebreak: context.counter.next_index(),
        };
        state.heuristic = state.compute_heuristic();
        state
    }

    /// The cell this state occupies.
    #[must_use]
    pub const fn cell(&self) -> VoxelCoord {
        self.cell
    }
}

impl fmt::Debug for MazeState<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MazeState")
            .field("cell", &self.cell)
            .field("cost", &self.cost)
            .field("heuristic", &self.heuristic)
            .field("tiebreak", &self.tiebreak)
            .finish_non_exhaustive()
    }
}

impl SearchState for MazeState<'_> {
    type Key = MazeKey;

    fn neighbors(&self) -> Vec<Self> {
        self.context
            .maze
            .neighbors(self.cell)
            .map(|cell| Self::new(self.context, cell, self.cost + 1))
            .collect()
    }

    fn is_goal(&self) -> bool {
        self.context.goals.contains(self.cell)
    }

    fn compute_heuristic(&self) -> f64 {
        nearest_goal_estimate(
            self.context.heuristic,
            self.cell,
            self.context.goals.as_slice(),
        )
    }

    fn heuristic(&self) -> f64 {
        self.heuristic
    }

    fn cost(&self) -> u32 {
        self.cost
    }

    fn tiebreak(&self) -> u64 {
        self.tiebreak
    }

    fn key(&self) -> MazeKey {
        MazeKey {
            cell: self.cell,
            goals: Arc::clone(&self.context.goals),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    fn coords(states: &[MazeState<'_>]) -> Vec<VoxelCoord> {
        states.iter().map(MazeState::cell).collect()
    }

    #[test]
    fn test_goal_set_sorted_and_deduplicated() {
        let goals = GoalSet::new([
            VoxelCoord::new(2, 0, 0),
            VoxelCoord::new(0, 0, 0),
            VoxelCoord::new(2, 0, 0),
        ]);
        assert_eq!(
            goals.as_slice(),
            &[VoxelCoord::new(0, 0, 0), VoxelCoord::new(2, 0, 0)]
        );
        assert!(!goals.contains(VoxelCoord::new(1, 0, 0)));
    }

    #[test]
    fn test_goal_set_fingerprint_ignores_order() {
        let a = GoalSet::new([VoxelCoord::new(1, 2, 3), VoxelCoord::new(4, 5, 6)]);
        let b = GoalSet::new([VoxelCoord::new(4, 5, 6), VoxelCoord::new(1, 2, 3)]);
        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_eq!(a, b);
        assert_ne!(a, GoalSet::new([VoxelCoord::new(1, 2, 3)]));
    }

    #[test]
    fn test_neighbors_cost_one_more() {
        let maze = Maze::from_layers(&[[" % ", " P ", "   "]], 1).unwrap();
        let counter = TiebreakCounter::new();
        let context = MazeContext::new(&maze, Heuristic::Manhattan).with_counter(&counter);

        let start = context.start();
        let next = start.neighbors();
        assert_eq!(
            coords(&next),
            vec![
                VoxelCoord::new(2, 1, 0),
                VoxelCoord::new(0, 1, 0),
                VoxelCoord::new(1, 2, 0),
            ]
        );
        assert!(next.iter().all(|s| s.cost() == 1));
    }

    #[test]
    fn test_tiebreak_follows_creation_order() {
        let maze = Maze::from_layers(&[["   ", " P ", "   "]], 1).unwrap();
        let counter = TiebreakCounter::new();
        let context = MazeContext::new(&maze, Heuristic::Zero).with_counter(&counter);

        let start = context.start();
        assert_eq!(start.tiebreak(), 0);
        let next = start.neighbors();
        let indices: Vec<u64> = next.iter().map(|s| s.tiebreak()).collect();
        assert_eq!(indices, vec![1, 2, 3, 4]);
        assert_eq!(counter.peek(), 5);
    }

    #[test]
    fn test_heuristic_cached_at_construction() {
        let maze = Maze::from_layers(&[["P   ."]], 1).unwrap();
        let context = MazeContext::new(&maze, Heuristic::Manhattan);

        let start = context.start();
        assert_eq!(start.heuristic(), 4.0);
        assert_eq!(start.heuristic(), start.compute_heuristic());
        assert_eq!(start.f_score(), 4.0);

        let later = context.state_at(VoxelCoord::new(3, 0, 0), 3);
        assert_eq!(later.heuristic(), 1.0);
        assert_eq!(later.f_score(), 4.0);
    }

    #[test]
    fn test_is_goal() {
        let maze = Maze::from_layers(&[["P ."]], 1).unwrap();
        let context = MazeContext::new(&maze, Heuristic::Manhattan);
        assert!(!context.start().is_goal());
        assert!(context.state_at(VoxelCoord::new(2, 0, 0), 2).is_goal());

        let redirected = context.clone().with_goals([VoxelCoord::new(1, 0, 0)]);
        assert!(!redirected.state_at(VoxelCoord::new(2, 0, 0), 2).is_goal());
        assert!(redirected.state_at(VoxelCoord::new(1, 0, 0), 1).is_goal());
    }

    #[test]
    fn test_key_ignores_cost_and_tiebreak() {
        let maze = Maze::from_layers(&[["P ."]], 1).unwrap();
        let context = MazeContext::new(&maze, Heuristic::Manhattan);

        let cheap = context.state_at(VoxelCoord::new(1, 0, 0), 1);
        let dear = context.state_at(VoxelCoord::new(1, 0, 0), 7);
        assert_ne!(cheap.tiebreak(), dear.tiebreak());
        assert_eq!(cheap.key(), dear.key());
        assert_ne!(cheap.key(), context.start().key());
    }

    #[test]
    fn test_key_includes_goal_set() {
        let maze = Maze::from_layers(&[["P ."]], 1).unwrap();
        let all = MazeContext::new(&maze, Heuristic::Manhattan);
        let other = all.clone().with_goals([VoxelCoord::new(0, 0, 0)]);
        let same = all.clone().with_goals([VoxelCoord::new(2, 0, 0)]);

        let cell = VoxelCoord::new(1, 0, 0);
        assert_ne!(all.state_at(cell, 1).key(), other.state_at(cell, 1).key());
        // Distinct allocations with equal contents compare equal
        assert_eq!(all.state_at(cell, 1).key(), same.state_at(cell, 1).key());
    }
}
