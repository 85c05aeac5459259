//! Distance estimates between grid cells.
//!
//! Every heuristic here is admissible for unit-cost face moves: none of them
//! exceeds the Manhattan distance, which is the exact cost on an empty grid.
//!
//! # Example
//!
//! ```
//! use drone_search::heuristics::{estimate, nearest_goal_estimate};
//! use drone_spatial::VoxelCoord;
//! use drone_types::Heuristic;
//!
//! let from = VoxelCoord::new(0, 0, 0);
//! let to = VoxelCoord::new(3, 4, 0);
//!
//! assert!((estimate(Heuristic::Manhattan, from, to) - 7.0).abs() < 1e-10);
//! assert!((estimate(Heuristic::Euclidean, from, to) - 5.0).abs() < 1e-10);
//!
//! let goals = [to, VoxelCoord::new(1, 0, 0)];
//! assert!((nearest_goal_estimate(Heuristic::Manhattan, from, &goals) - 1.0).abs() < 1e-10);
//! ```

use drone_spatial::VoxelCoord;
use drone_types::Heuristic;

/// Estimated cost between two cells.
#[must_use]
pub fn estimate(heuristic: Heuristic, from: VoxelCoord, to: VoxelCoord) -> f64 {
    match heuristic {
        Heuristic::Manhattan => f64::from(from.manhattan_distance(to)),
        Heuristic::Euclidean => from.euclidean_distance(to),
        Heuristic::Chebyshev => f64::from(from.chebyshev_distance(to)),
        Heuristic::Zero => 0.0,
    }
}

/// Estimate to the closest of several goals.
///
/// Taking the minimum keeps the estimate admissible when any goal will do.
/// An empty goal list estimates zero.
#[must_use]
pub fn nearest_goal_estimate(heuristic: Heuristic, from: VoxelCoord, goals: &[VoxelCoord]) -> f64 {
    goals
        .iter()
        .map(|goal| estimate(heuristic, from, *goal))
        .min_by(f64::total_cmp)
        .unwrap_or(0.0)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const ALL: [Heuristic; 4] = [
        Heuristic::Manhattan,
        Heuristic::Euclidean,
        Heuristic::Chebyshev,
        Heuristic::Zero,
    ];

    #[test]
    fn test_estimates() {
        let a = VoxelCoord::new(1, 2, 3);
        let b = VoxelCoord::new(4, 0, 9);
        assert_eq!(estimate(Heuristic::Manhattan, a, b), 11.0);
        assert_eq!(estimate(Heuristic::Chebyshev, a, b), 6.0);
        assert_relative_eq!(estimate(Heuristic::Euclidean, a, b), 7.0, epsilon = 1e-12);
        assert_eq!(estimate(Heuristic::Zero, a, b), 0.0);
    }

    #[test]
    fn test_same_cell_is_zero() {
        let a = VoxelCoord::new(5, 5, 5);
        for h in ALL {
            assert_eq!(estimate(h, a, a), 0.0);
        }
    }

    #[test]
    fn test_never_exceeds_manhattan() {
        let a = VoxelCoord::new(0, 0, 0);
        for b in [
            VoxelCoord::new(3, 0, 0),
            VoxelCoord::new(2, 7, 1),
            VoxelCoord::new(9, 9, 9),
        ] {
            let exact = f64::from(a.manhattan_distance(b));
            for h in ALL {
                assert!(estimate(h, a, b) <= exact);
            }
        }
    }

    #[test]
    fn test_nearest_goal() {
        let from = VoxelCoord::new(10, 10, 10);
        let goals = [
            VoxelCoord::new(0, 0, 0),
            VoxelCoord::new(12, 10, 10),
            VoxelCoord::new(10, 10, 13),
        ];
        assert_eq!(nearest_goal_estimate(Heuristic::Manhattan, from, &goals), 2.0);
        assert_eq!(nearest_goal_estimate(Heuristic::Chebyshev, from, &goals), 2.0);
    }

    #[test]
    fn test_no_goals_estimates_zero() {
        let from = VoxelCoord::new(1, 1, 1);
        for h in ALL {
            assert_eq!(nearest_goal_estimate(h, from, &[]), 0.0);
        }
    }
}
