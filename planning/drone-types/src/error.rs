//! Error types for scene input and grid construction.
//!
//! [`SceneError`] is raised at the scene-input boundary when a caller hands
//! over geometry the planner cannot reason about. [`MazeError`] is raised when
//! an occupancy grid is assembled from labels that break its invariants.

/// Malformed scene geometry.
///
/// # Example
///
/// ```
/// use drone_types::SceneError;
///
/// let error = SceneError::InvalidGranularity(0);
/// assert!(error.to_string().contains("granularity"));
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum SceneError {
    /// A coordinate is NaN or infinite.
    #[error("{what} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Which input carried the coordinate.
        what: &'static str,
    },

    /// A body extent is negative or not finite.
    #[error("{what} must be finite and non-negative, got {value}")]
    InvalidExtent {
        /// Name of the extent (`length`, `width` or `height`).
        what: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The grid pitch is below one.
    #[error("granularity must be at least 1, got {0}")]
    InvalidGranularity(u32),

    /// A window dimension is zero, negative or not finite.
    #[error("window dimensions must be finite and positive, got {width} x {height} x {depth}")]
    InvalidWindow {
        /// Window width.
        width: f64,
        /// Window height.
        height: f64,
        /// Window depth.
        depth: f64,
    },
}

impl SceneError {
    /// Creates a non-finite coordinate error for the named input.
    #[must_use]
    pub const fn non_finite(what: &'static str) -> Self {
        Self::NonFiniteCoordinate { what }
    }

    /// Returns `true` if this error was caused by a non-finite coordinate.
    #[must_use]
    pub const fn is_non_finite(&self) -> bool {
        matches!(self, Self::NonFiniteCoordinate { .. })
    }
}

/// Occupancy-grid construction failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum MazeError {
    /// A character that is not one of `' '`, `'%'`, `'.'` or `'P'`.
    #[error("unknown cell label {0:?}")]
    UnknownLabel(char),

    /// Rows of differing lengths.
    #[error("layer {layer} row {row} has length {found}, expected {expected}")]
    RaggedLayers {
        /// Zero-based layer (z) index.
        layer: usize,
        /// Zero-based row (y) index.
        row: usize,
        /// Length that was found.
        found: usize,
        /// Length of the first row.
        expected: usize,
    },

    /// Layers with differing row counts.
    #[error("layer {layer} has {found} rows, expected {expected}")]
    LayerHeight {
        /// Zero-based layer (z) index.
        layer: usize,
        /// Row count that was found.
        found: usize,
        /// Row count of the first layer.
        expected: usize,
    },

    /// The grid has no cells.
    #[error("grid is empty")]
    Empty,

    /// No cell is labelled as the start.
    #[error("grid has no start cell")]
    MissingStart,

    /// More than one cell is labelled as the start.
    #[error("grid has {0} start cells, expected exactly one")]
    MultipleStarts(usize),

    /// The grid does not fit in memory-addressable coordinates.
    #[error("grid dimensions exceed addressable range")]
    TooLarge,
}

impl MazeError {
    /// Returns `true` for either start-cell violation.
    #[must_use]
    pub const fn is_start_violation(&self) -> bool {
        matches!(self, Self::MissingStart | Self::MultipleStarts(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_error_display() {
        let error = SceneError::InvalidExtent {
            what: "width",
            value: -1.0,
        };
        let msg = error.to_string();
        assert!(msg.contains("width"));
        assert!(msg.contains("-1"));
    }

    #[test]
    fn test_non_finite_helper() {
        let error = SceneError::non_finite("drone centroid");
        assert!(error.is_non_finite());
        assert!(error.to_string().contains("drone centroid"));
        assert!(!SceneError::InvalidGranularity(0).is_non_finite());
    }

    #[test]
    fn test_maze_error_predicates() {
        assert!(MazeError::MissingStart.is_start_violation());
        assert!(MazeError::MultipleStarts(2).is_start_violation());
        assert!(!MazeError::UnknownLabel('x').is_start_violation());
        assert!(MazeError::UnknownLabel('x').to_string().contains("'x'"));
    }
}
