//! Error types for planning.

use drone_maze::TransformError;

/// Errors that can stop a planning run before search starts.
///
/// Failing to reach a goal is not an error; see
/// [`PlanOutcome::path`](crate::PlanOutcome::path).
///
/// # Example
///
/// ```
/// use drone_maze::{InfeasibleReason, TransformError};
/// use drone_search::PlanError;
///
/// let error: PlanError = TransformError::infeasible(InfeasibleReason::OutOfBounds).into();
/// assert!(error.is_infeasible());
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum PlanError {
    /// The scene could not be turned into a grid.
    #[error("grid transform failed: {0}")]
    Transform(#[from] TransformError),
}

impl PlanError {
    /// Returns `true` if the start pose was infeasible.
    #[must_use]
    pub const fn is_infeasible(&self) -> bool {
        match self {
            Self::Transform(e) => e.is_infeasible(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drone_maze::InfeasibleReason;

    #[test]
    fn test_wraps_transform_error() {
        let error = PlanError::from(TransformError::InvalidGoalTolerance(-1.0));
        assert!(!error.is_infeasible());
        assert!(error.to_string().contains("grid transform failed"));
        assert!(error.to_string().contains("-1"));
    }

    #[test]
    fn test_infeasible_passthrough() {
        let error = PlanError::from(TransformError::infeasible(
            InfeasibleReason::ObstacleOverlap { obstacle: 0 },
        ));
        assert!(error.is_infeasible());
    }
}
