//! Error types for the grid transform.

use std::fmt;

use drone_types::SceneError;

/// Why a start pose cannot be planned from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfeasibleReason {
    /// The body's extent box leaves the window.
    OutOfBounds,
    /// The body's extent box overlaps the obstacle with this index.
    ObstacleOverlap {
        /// Index into the scene's obstacle list.
        obstacle: u32,
    },
    /// The start centroid does not round to a cell inside the grid.
    OffGrid,
}

impl fmt::Display for InfeasibleReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds => write!(f, "body extends outside the window"),
            Self::ObstacleOverlap { obstacle } => {
                write!(f, "body overlaps obstacle {obstacle}")
            }
            Self::OffGrid => write!(f, "start position rounds to a cell outside the grid"),
        }
    }
}

/// Errors that can occur while turning a scene into an occupancy grid.
///
/// # Example
///
/// ```
/// use drone_maze::{InfeasibleReason, TransformError};
///
/// let error = TransformError::infeasible(InfeasibleReason::OutOfBounds);
/// assert!(error.is_infeasible());
/// assert!(error.to_string().contains("outside the window"));
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum TransformError {
    /// The start pose collides or lies outside the window. No grid is built.
    #[error("infeasible scene: {reason}")]
    Infeasible {
        /// What is wrong with the start pose.
        reason: InfeasibleReason,
    },

    /// The scene failed validation.
    #[error("invalid scene: {0}")]
    InvalidScene(#[from] SceneError),

    /// The goal tolerance is negative or not finite.
    #[error("goal tolerance must be finite and non-negative, got {0}")]
    InvalidGoalTolerance(f64),

    /// The grid would have more cells than the transform will allocate.
    #[error("grid of {cells} cells exceeds the limit of {limit}")]
    GridTooLarge {
        /// Requested cell count.
        cells: u64,
        /// Largest allowed cell count.
        limit: u64,
    },
}

impl TransformError {
    /// Creates an infeasible-scene error.
    #[must_use]
    pub const fn infeasible(reason: InfeasibleReason) -> Self {
        Self::Infeasible { reason }
    }

    /// Returns `true` if the start pose was infeasible.
    #[must_use]
    pub const fn is_infeasible(&self) -> bool {
        matches!(self, Self::Infeasible { .. })
    }
}
