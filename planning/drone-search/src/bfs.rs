//! Breadth-first search over any [`SearchState`].
//!
//! Ignores the heuristic and the tiebreak order and expands states in the
//! order they were discovered. With unit step costs the first goal reached is
//! at minimum depth, which makes this the reference A* is checked against.

use std::collections::VecDeque;
use std::time::Instant;

use hashbrown::HashSet;
use tracing::{debug, info};

use crate::astar::reconstruct;
use crate::outcome::{SearchOutcome, SearchStats};
use crate::state::SearchState;

/// Name reported in [`SearchStats::algorithm`].
pub const ALGORITHM: &str = "bfs";

/// Runs breadth-first search from `start`.
///
/// # Example
///
/// ```
/// use drone_search::{MazeContext, breadth_first};
/// use drone_types::{Heuristic, Maze};
///
/// let maze = Maze::from_layers(&[["P % .", "     "]], 1).unwrap();
/// let context = MazeContext::new(&maze, Heuristic::Zero);
///
/// let outcome = breadth_first(context.start());
/// assert_eq!(outcome.steps(), Some(6));
/// assert_eq!(outcome.stats().algorithm(), "bfs");
/// ```
#[must_use]
pub fn breadth_first<S>(start: S) -> SearchOutcome<S>
where
    S: SearchState + Clone,
{
    let started = Instant::now();

    let mut seen: HashSet<S::Key> = HashSet::new();
    let mut arena: Vec<(S, Option<usize>)> = Vec::new();
    let mut frontier = VecDeque::new();

    debug!("Starting breadth-first search");
    seen.insert(start.key());
    frontier.push_back((start, None));

    while let Some((state, parent)) = frontier.pop_front() {
        if state.is_goal() {
            let cost = state.cost();
            let path = reconstruct(&arena, state, parent);
            let stats = SearchStats::new(ALGORITHM)
                .with_expanded(arena.len())
                .with_generated(seen.len())
                .with_frontier_size(frontier.len())
                .with_elapsed(started.elapsed());
            info!(cost, expanded = stats.expanded(), "BFS reached goal");
            return SearchOutcome::found(path, stats);
        }

        let index = arena.len();
        for neighbor in state.neighbors() {
            if seen.insert(neighbor.key()) {
                frontier.push_back((neighbor, Some(index)));
            }
        }
        arena.push((state, parent));
    }

    let stats = SearchStats::new(ALGORITHM)
        .with_expanded(arena.len())
        .with_generated(seen.len())
        .with_elapsed(started.elapsed());
    info!(
        expanded = stats.expanded(),
        "BFS exhausted the frontier without reaching a goal"
    );
    SearchOutcome::exhausted(stats)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::astar::astar;
    use crate::maze_state::MazeContext;
    use drone_spatial::VoxelCoord;
    use drone_types::{Heuristic, Maze};

    #[test]
    fn test_bfs_matches_astar_length() {
        let maze = Maze::from_layers(
            &[[
                "P        ", //
                " %% % %% ", //
                " %  %  % ", //
                " % %%% % ", //
                "   %  .% ",
            ]],
            1,
        )
        .unwrap();
        let context = MazeContext::new(&maze, Heuristic::Manhattan);

        let bfs = breadth_first(context.start());
        let best = astar(context.start());
        assert_eq!(bfs.steps(), best.steps());
        assert!(bfs.is_found());
    }

    #[test]
    fn test_bfs_no_path() {
        let maze = Maze::from_layers(&[["P%."]], 1).unwrap();
        let context = MazeContext::new(&maze, Heuristic::Zero);

        let outcome = breadth_first(context.start());
        assert!(!outcome.is_found());
        assert_eq!(outcome.stats().expanded(), 1);
        assert_eq!(outcome.stats().generated(), 1);
    }

    #[test]
    fn test_bfs_visits_each_cell_once() {
        let maze = Maze::from_layers(&[["P  ", "   ", "   "], ["   ", "   ", "   "]], 1).unwrap();
        let context = MazeContext::new(&maze, Heuristic::Zero);

        let outcome = breadth_first(context.start());
        assert_eq!(outcome.stats().expanded(), 18);
        assert_eq!(outcome.stats().generated(), 18);
    }

    #[test]
    fn test_bfs_path_is_connected() {
        let maze = Maze::from_layers(&[["P  ", "%% ", ".  "]], 1).unwrap();
        let context = MazeContext::new(&maze, Heuristic::Zero);

        let outcome = breadth_first(context.start());
        let path: Vec<VoxelCoord> = outcome.path().unwrap().iter().map(|s| s.cell()).collect();
        assert_eq!(path.first(), Some(&maze.start()));
        assert_eq!(path.last(), Some(&VoxelCoord::new(0, 2, 0)));
        for pair in path.windows(2) {
            assert_eq!(pair[0].manhattan_distance(pair[1]), 1);
        }
    }
}
