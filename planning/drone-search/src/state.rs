//! The search-state contract and creation-order tiebreaking.
//!
//! Any node type the engines in this crate can explore implements
//! [`SearchState`]. A state is immutable once built: its cost, heuristic and
//! tiebreak index are fixed by its constructor. Reaching a known position more
//! cheaply produces a new state rather than updating the old one.

use std::cmp::Ordering;
use std::hash::Hash;
use std::sync::atomic::{self, AtomicU64};

/// A node in a search space.
///
/// Implementors supply neighbour generation, the goal test, an admissible
/// heuristic and an identity key. The provided methods derive the priority
/// order used by the A* frontier.
///
/// # Example
///
/// ```
/// use drone_search::{SearchState, TiebreakCounter, astar};
///
/// // Counting up from 0 to 5 on a number line.
/// #[derive(Clone)]
/// struct Step<'a> {
///     value: i32,
///     cost: u32,
///     tiebreak: u64,
///     counter: &'a TiebreakCounter,
/// }
///
/// impl<'a> Step<'a> {
///     fn new(value: i32, cost: u32, counter: &'a TiebreakCounter) -> Self {
///         Self { value, cost, tiebreak: counter.next_index(), counter }
///     }
/// }
///
/// impl SearchState for Step<'_> {
///     type Key = i32;
///
///     fn neighbors(&self) -> Vec<Self> {
///         [self.value - 1, self.value + 1]
///             .into_iter()
///             .map(|v| Step::new(v, self.cost + 1, self.counter))
///             .collect()
///     }
///     fn is_goal(&self) -> bool { self.value == 5 }
///     fn compute_heuristic(&self) -> f64 { f64::from((5 - self.value).abs()) }
///     fn heuristic(&self) -> f64 { self.compute_heuristic() }
///     fn cost(&self) -> u32 { self.cost }
///     fn tiebreak(&self) -> u64 { self.tiebreak }
///     fn key(&self) -> i32 { self.value }
/// }
///
/// let counter = TiebreakCounter::new();
/// let outcome = astar(Step::new(0, 0, &counter));
/// assert_eq!(outcome.path().map(<[_]>::len), Some(6));
/// ```
pub trait SearchState: Sized {
    /// Identity used by the visited map.
    ///
    /// Two states with equal keys are the same node no matter how they were
    /// reached, so the key must not include the cost, heuristic or tiebreak.
    type Key: Hash + Eq + Clone;

    /// Every state reachable in one step, each costing `self.cost() + 1`.
    fn neighbors(&self) -> Vec<Self>;

    /// Returns `true` if this state satisfies the search.
    fn is_goal(&self) -> bool;

    /// Estimates the remaining cost from this state to a goal.
    ///
    /// Constructors call this once and cache the result. It must never
    /// overestimate, or A* loses its optimality guarantee.
    fn compute_heuristic(&self) -> f64;

    /// The heuristic value cached at construction.
    fn heuristic(&self) -> f64;

    /// Accumulated path cost from the root.
    fn cost(&self) -> u32;

    /// Creation-order index, strictly increasing across constructed states.
    fn tiebreak(&self) -> u64;

    /// Identity of this state for the visited map.
    fn key(&self) -> Self::Key;

    /// Estimated total cost `g + h`.
    fn f_score(&self) -> f64 {
        f64::from(self.cost()) + self.heuristic()
    }

    /// Priority order: lower `f` first, then older states first.
    fn priority_cmp(&self, other: &Self) -> Ordering {
        self.f_score()
            .total_cmp(&other.f_score())
            .then_with(|| self.tiebreak().cmp(&other.tiebreak()))
    }
}

static GLOBAL: TiebreakCounter = TiebreakCounter::new();

/// Monotonic source of creation-order indices.
///
/// [`TiebreakCounter::global`] is shared by the whole process and is never
/// reset, so indices keep increasing across repeated searches. Callers that
/// want indices starting from zero (for reproducible logs or tests) own a
/// counter of their own.
///
/// # Example
///
/// ```
/// use drone_search::TiebreakCounter;
///
/// let counter = TiebreakCounter::new();
/// assert_eq!(counter.next_index(), 0);
/// assert_eq!(counter.next_index(), 1);
/// assert_eq!(counter.peek(), 2);
///
/// let a = TiebreakCounter::global().next_index();
/// let b = TiebreakCounter::global().next_index();
/// assert!(b > a);
/// ```
#[derive(Debug, Default)]
pub struct TiebreakCounter {
    next: AtomicU64,
}

impl TiebreakCounter {
    /// Creates a counter starting at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next: AtomicU64::new(0),
        }
    }

    /// The process-wide counter.
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Hands out the next index.
    pub fn next_index(&self) -> u64 {
        self.next.fetch_add(1, atomic::Ordering::Relaxed)
    }

    /// The index the next call to [`next_index`](Self::next_index) returns.
    #[must_use]
    pub fn peek(&self) -> u64 {
        self.next.load(atomic::Ordering::Relaxed)
    }
}
