//! A* over any [`SearchState`].
//!
//! The frontier is a binary heap ordered by [`SearchState::priority_cmp`].
//! The visited map records, per state key, the best cost seen so far and the
//! arena index of the expanded state it was reached from. A neighbour is
//! discarded when its key is already known at an equal or lower cost;
//! otherwise it is queued and its visited entry overwritten.
//!
//! Expanded states are kept in an arena. A popped state takes its predecessor
//! from its visited entry, and the path is rebuilt by following those arena
//! indices back to the root.
//!
//! # Example
//!
//! ```
//! use drone_search::{MazeContext, astar};
//! use drone_types::{Heuristic, Maze};
//!
//! let maze = Maze::from_layers(&[["P  ", "%% ", ".  "]], 1).unwrap();
//! let context = MazeContext::new(&maze, Heuristic::Manhattan);
//!
//! let outcome = astar(context.start());
//! assert_eq!(outcome.steps(), Some(6));
//! ```

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Instant;

use hashbrown::HashMap;
use tracing::{debug, info};

use crate::outcome::{SearchOutcome, SearchStats};
use crate::state::SearchState;

/// Name reported in [`SearchStats::algorithm`].
pub const ALGORITHM: &str = "astar";

/// Frontier entry, ordered lowest priority first.
struct Queued<S>(S);

impl<S: SearchState> PartialEq for Queued<S> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<S: SearchState> Eq for Queued<S> {}

impl<S: SearchState> Ord for Queued<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap pops the lowest priority first
        other.0.priority_cmp(&self.0)
    }
}

impl<S: SearchState> PartialOrd for Queued<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Runs A* from `start` until a goal state is popped or the frontier is
/// empty.
///
/// With an admissible and consistent heuristic and unit step costs the
/// returned path is cost-optimal. Among equally cheap paths, the one found
/// depends only on the tiebreak indices, so repeated runs agree.
#[must_use]
pub fn astar<S>(start: S) -> SearchOutcome<S>
where
    S: SearchState + Clone,
{
    let started = Instant::now();

    let mut visited: HashMap<S::Key, (Option<usize>, u32)> = HashMap::new();
    let mut arena: Vec<(S, Option<usize>)> = Vec::new();
    let mut frontier = BinaryHeap::new();
    let mut generated = 1usize;

    debug!(h = start.heuristic(), "Starting A*");
    visited.insert(start.key(), (None, start.cost()));
    frontier.push(Queued(start));

    while let Some(Queued(state)) = frontier.pop() {
        let Some(&(parent, best)) = visited.get(&state.key()) else {
            continue;
        };
        // A cheaper copy of this state was queued after this one
        if best < state.cost() {
            continue;
        }

        if state.is_goal() {
            let cost = state.cost();
            let path = reconstruct(&arena, state, parent);
            let stats = SearchStats::new(ALGORITHM)
                .with_expanded(arena.len())
                .with_generated(generated)
                .with_frontier_size(frontier.len())
                .with_elapsed(started.elapsed());
            info!(
                cost,
                expanded = stats.expanded(),
                generated,
                elapsed_us = stats.elapsed().as_micros(),
                "A* reached goal"
            );
            return SearchOutcome::found(path, stats);
        }

        let index = arena.len();
        for neighbor in state.neighbors() {
            let key = neighbor.key();
            if visited
                .get(&key)
                .is_some_and(|&(_, best)| best <= neighbor.cost())
            {
                continue;
            }
            visited.insert(key, (Some(index), neighbor.cost()));
            frontier.push(Queued(neighbor));
            generated += 1;
        }
        arena.push((state, parent));
    }

    let stats = SearchStats::new(ALGORITHM)
        .with_expanded(arena.len())
        .with_generated(generated)
        .with_elapsed(started.elapsed());
    info!(
        expanded = stats.expanded(),
        visited = visited.len(),
        "A* exhausted the frontier without reaching a goal"
    );
    SearchOutcome::exhausted(stats)
}

/// Walks parent indices from `last` back to the root and returns the path in
/// root-to-goal order.
pub(crate) fn reconstruct<S: Clone>(
    arena: &[(S, Option<usize>)],
    last: S,
    mut parent: Option<usize>,
) -> Vec<S> {
    let mut path = vec![last];
    while let Some((state, next)) = parent.and_then(|i| arena.get(i)) {
        path.push(state.clone());
        parent = *next;
    }
    path.reverse();
    path
}
