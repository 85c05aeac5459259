//! Spatial primitives for drone path planning.
//!
//! This crate holds the geometry every other planning crate builds on:
//!
//! - [`VoxelCoord`] - Integer cell indices of a planning grid
//! - [`GridBounds`] - Inclusive index bounds with row-major iteration
//! - [`Aabb`] - Closed axis-aligned boxes in world coordinates
//! - [`AabbTree`] - Static bounding volume hierarchy over boxes
//! - [`planar`] - Exact segment distance and intersection predicates
//!
//! It has no knowledge of drones, scenes or search. Those live in the
//! `drone-types`, `drone-maze` and `drone-search` crates.
//!
//! # Coordinate Systems
//!
//! World coordinates are continuous `f64` values measured from the window's
//! origin corner:
//! - X: window width
//! - Y: window height
//! - Z: window depth
//!
//! Grid coordinates are discrete `i32` values. Cell `(i, j, k)` of a grid with
//! pitch `g` sits at world position `(i * g, j * g, k * g)`.
//!
//! # Example
//!
//! ```
//! use drone_spatial::{Aabb, AabbTree, GridBounds, VoxelCoord};
//! use nalgebra::{Point3, Vector3};
//!
//! let obstacles = [Aabb::new(Point3::new(5.0, 5.0, 5.0), Point3::new(8.0, 8.0, 8.0))];
//! let tree = AabbTree::build(&obstacles);
//!
//! let bounds = GridBounds::from_extent(VoxelCoord::new(10, 10, 10));
//! let blocked = bounds
//!     .iter()
//!     .filter(|cell| {
//!         let body = Aabb::from_center(cell.to_world(1.0), Vector3::repeat(0.5));
//!         tree.intersects_any(&body)
//!     })
//!     .count();
//!
//! // Cells 5..=8 on each axis reach the obstacle.
//! assert_eq!(blocked, 4 * 4 * 4);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod aabb;
mod bounds;
mod bvh;
pub mod planar;
mod voxel;

pub use aabb::Aabb;
pub use bounds::{GridBounds, GridBoundsIter};
pub use bvh::{AabbTree, AabbTreeStats, DEFAULT_MAX_LEAF_SIZE};
pub use planar::{
    Segment2, do_segments_intersect, intersection_point, point_segment_distance,
    segment_distance,
};
pub use voxel::VoxelCoord;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector2, Vector3};

/// Tolerance used by the planar predicates.
///
/// Orientation determinants with magnitude at or below this value are
/// treated as collinear, and collinear-interval checks are widened by it.
pub const GEOMETRY_TOLERANCE: f64 = 1e-3;
