//! Planner configuration.
//!
//! # Example
//!
//! ```
//! use drone_types::{Heuristic, PlannerConfig, SearchMethod};
//!
//! let config = PlannerConfig::default()
//!     .with_heuristic(Heuristic::Euclidean)
//!     .with_goal_tolerance(0.1);
//!
//! assert_eq!(config.method(), SearchMethod::AStar);
//! assert!(config.validate().is_empty());
//! ```

use crate::scene::DEFAULT_GOAL_TOLERANCE;

/// Heuristic estimate of the remaining step count to the nearest goal.
///
/// On a six-connected grid with unit step cost every variant is admissible:
/// each is bounded above by the Manhattan distance, which is itself the exact
/// step count on an empty grid.
///
/// # Example
///
/// ```
/// use drone_types::Heuristic;
///
/// assert_eq!(Heuristic::default(), Heuristic::Manhattan);
/// assert!(Heuristic::Chebyshev.is_admissible());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    /// L1 distance: `|dx| + |dy| + |dz|`.
    ///
    /// The tightest admissible choice for face-only moves.
    #[default]
    Manhattan,

    /// L2 distance: `sqrt(dx² + dy² + dz²)`.
    Euclidean,

    /// L-infinity distance: `max(|dx|, |dy|, |dz|)`.
    Chebyshev,

    /// Always zero. Turns A* into uniform-cost search.
    Zero,
}

impl Heuristic {
    /// Returns `true` if the heuristic never overestimates the remaining
    /// step count on a six-connected unit-cost grid.
    #[must_use]
    pub const fn is_admissible(&self) -> bool {
        match self {
            Self::Manhattan | Self::Euclidean | Self::Chebyshev | Self::Zero => true,
        }
    }

    /// Short lowercase name, used in logs and statistics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Manhattan => "manhattan",
            Self::Euclidean => "euclidean",
            Self::Chebyshev => "chebyshev",
            Self::Zero => "zero",
        }
    }
}

/// Search algorithm run over the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchMethod {
    /// Best-first search ordered by `g + h`.
    #[default]
    AStar,
    /// Breadth-first search; ignores the heuristic.
    BreadthFirst,
}

impl SearchMethod {
    /// Short lowercase name, used in logs and statistics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AStar => "astar",
            Self::BreadthFirst => "bfs",
        }
    }
}

/// Configuration for one planning run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlannerConfig {
    heuristic: Heuristic,
    method: SearchMethod,
    goal_tolerance: f64,
}

impl PlannerConfig {
    /// Creates the default configuration: A* with the Manhattan heuristic
    /// and a goal tolerance of [`DEFAULT_GOAL_TOLERANCE`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            heuristic: Heuristic::Manhattan,
            method: SearchMethod::AStar,
            goal_tolerance: DEFAULT_GOAL_TOLERANCE,
        }
    }

    /// Sets the heuristic.
    #[must_use]
    pub const fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Sets the search algorithm.
    #[must_use]
    pub const fn with_method(mut self, method: SearchMethod) -> Self {
        self.method = method;
        self
    }

    /// Sets the half-size of the box inflated around each goal point.
    #[must_use]
    pub const fn with_goal_tolerance(mut self, tolerance: f64) -> Self {
        self.goal_tolerance = tolerance;
        self
    }

    /// Returns the heuristic.
    #[must_use]
    pub const fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    /// Returns the search algorithm.
    #[must_use]
    pub const fn method(&self) -> SearchMethod {
        self.method
    }

    /// Returns the goal tolerance.
    #[must_use]
    pub const fn goal_tolerance(&self) -> f64 {
        self.goal_tolerance
    }

    /// Validates the configuration and returns any issues.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if !self.goal_tolerance.is_finite() || self.goal_tolerance < 0.0 {
            issues.push(format!(
                "goal tolerance must be finite and non-negative, got {}",
                self.goal_tolerance
            ));
        }

        if self.method == SearchMethod::BreadthFirst && self.heuristic != Heuristic::Zero {
            issues.push(format!(
                "heuristic {:?} is ignored by breadth-first search",
                self.heuristic
            ));
        }

        issues
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PlannerConfig::default();
        assert_eq!(config.heuristic(), Heuristic::Manhattan);
        assert_eq!(config.method(), SearchMethod::AStar);
        assert_eq!(config.goal_tolerance(), 0.05);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_builder() {
        let config = PlannerConfig::new()
            .with_heuristic(Heuristic::Zero)
            .with_method(SearchMethod::BreadthFirst)
            .with_goal_tolerance(0.5);
        assert_eq!(config.heuristic(), Heuristic::Zero);
        assert_eq!(config.method(), SearchMethod::BreadthFirst);
        assert_eq!(config.goal_tolerance(), 0.5);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_tolerance() {
        let issues = PlannerConfig::new().with_goal_tolerance(-1.0).validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].contains("tolerance"));

        assert_eq!(
            PlannerConfig::new()
                .with_goal_tolerance(f64::NAN)
                .validate()
                .len(),
            1
        );
    }

    #[test]
    fn test_validate_bfs_with_heuristic() {
        let issues = PlannerConfig::new()
            .with_method(SearchMethod::BreadthFirst)
            .validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].contains("Manhattan"));
    }

    #[test]
    fn test_all_heuristics_admissible() {
        for h in [
            Heuristic::Manhattan,
            Heuristic::Euclidean,
            Heuristic::Chebyshev,
            Heuristic::Zero,
        ] {
            assert!(h.is_admissible(), "{}", h.name());
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(SearchMethod::AStar.name(), "astar");
        assert_eq!(SearchMethod::BreadthFirst.name(), "bfs");
        assert_eq!(Heuristic::Euclidean.name(), "euclidean");
    }
}
