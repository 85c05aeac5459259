//! Search results and diagnostics.

use std::time::Duration;

/// Counters collected during one search run.
///
/// # Example
///
/// ```
/// use drone_search::SearchStats;
/// use std::time::Duration;
///
/// let stats = SearchStats::new("astar")
///     .with_expanded(120)
///     .with_elapsed(Duration::from_millis(3));
/// assert_eq!(stats.expanded(), 120);
/// assert_eq!(stats.algorithm(), "astar");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// States popped from the frontier and expanded.
    expanded: usize,
    /// States pushed onto the frontier, the root included.
    generated: usize,
    /// States still on the frontier when the search stopped.
    frontier_size: usize,
    /// Wall time spent searching.
    elapsed: Duration,
    /// Name of the algorithm that produced these numbers.
    algorithm: String,
}

impl SearchStats {
    /// Creates empty statistics for `algorithm`.
    #[must_use]
    pub fn new(algorithm: impl Into<String>) -> Self {
        Self {
            expanded: 0,
            generated: 0,
            frontier_size: 0,
            elapsed: Duration::ZERO,
            algorithm: algorithm.into(),
        }
    }

    /// Sets the number of expanded states.
    #[must_use]
    pub const fn with_expanded(mut self, count: usize) -> Self {
        self.expanded = count;
        self
    }

    /// Sets the number of generated states.
    #[must_use]
    pub const fn with_generated(mut self, count: usize) -> Self {
        self.generated = count;
        self
    }

    /// Sets the frontier size at termination.
    #[must_use]
    pub const fn with_frontier_size(mut self, size: usize) -> Self {
        self.frontier_size = size;
        self
    }

    /// Sets the elapsed time.
    #[must_use]
    pub const fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = elapsed;
        self
    }

    /// States expanded.
    #[must_use]
    pub const fn expanded(&self) -> usize {
        self.expanded
    }

    /// States generated.
    #[must_use]
    pub const fn generated(&self) -> usize {
        self.generated
    }

    /// Frontier size at termination.
    #[must_use]
    pub const fn frontier_size(&self) -> usize {
        self.frontier_size
    }

    /// Time spent searching.
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Algorithm name.
    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }
}

/// The result of a search: a path, or `None` when no goal is reachable.
///
/// An exhausted frontier is an ordinary outcome, not an error.
#[derive(Debug, Clone)]
pub struct SearchOutcome<S> {
    path: Option<Vec<S>>,
    stats: SearchStats,
}

impl<S> SearchOutcome<S> {
    /// Creates an outcome from a reconstructed path.
    #[must_use]
    pub const fn found(path: Vec<S>, stats: SearchStats) -> Self {
        Self {
            path: Some(path),
            stats,
        }
    }

    /// Creates an outcome for an exhausted frontier.
    #[must_use]
    pub const fn exhausted(stats: SearchStats) -> Self {
        Self { path: None, stats }
    }

    /// States from the root to the goal, both inclusive.
    #[must_use]
    pub fn path(&self) -> Option<&[S]> {
        self.path.as_deref()
    }

    /// Returns `true` if a goal was reached.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        self.path.is_some()
    }

    /// Number of steps on the path, one less than the number of states.
    #[must_use]
    pub fn steps(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len().saturating_sub(1))
    }

    /// Search statistics.
    #[must_use]
    pub const fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Splits the outcome into its path and statistics.
    #[must_use]
    pub fn into_parts(self) -> (Option<Vec<S>>, SearchStats) {
        (self.path, self.stats)
    }

    /// Maps every state on the path.
    #[must_use]
    pub fn map<T>(self, f: impl FnMut(S) -> T) -> SearchOutcome<T> {
        SearchOutcome {
            path: self.path.map(|p| p.into_iter().map(f).collect()),
            stats: self.stats,
        }
    }
}
