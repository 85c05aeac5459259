//! Planar distance and intersection predicates.
//!
//! These are the exact kernels the planar collision checks are built on.
//! Orientation signs and collinear-interval tests both absorb floating-point
//! noise with [`GEOMETRY_TOLERANCE`].
//!
//! # Example
//!
//! ```
//! use drone_spatial::planar::{Segment2, do_segments_intersect, segment_distance};
//!
//! let a = Segment2::from_coords(0.0, 0.0, 10.0, 0.0);
//! let b = Segment2::from_coords(5.0, -5.0, 5.0, 5.0);
//!
//! assert!(do_segments_intersect(&a, &b));
//! assert_eq!(segment_distance(&a, &b), 0.0);
//! ```

use nalgebra::{Point2, Vector2};

use crate::GEOMETRY_TOLERANCE;

/// A line segment in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment2 {
    /// First endpoint.
    pub start: Point2<f64>,
    /// Second endpoint.
    pub end: Point2<f64>,
}

impl Segment2 {
    /// Creates a segment from two endpoints.
    #[must_use]
    pub const fn new(start: Point2<f64>, end: Point2<f64>) -> Self {
        Self { start, end }
    }

    /// Creates a segment from `(x1, y1, x2, y2)`.
    #[must_use]
    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    /// A zero-length segment at `point`.
    #[must_use]
    pub const fn degenerate(point: Point2<f64>) -> Self {
        Self::new(point, point)
    }

    /// Direction vector from `start` to `end`.
    #[must_use]
    pub fn direction(&self) -> Vector2<f64> {
        self.end - self.start
    }

    /// Euclidean length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.direction().norm()
    }

    /// Returns `true` when both endpoints coincide.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.direction().norm_squared() <= f64::EPSILON
    }

    /// Both endpoints.
    #[must_use]
    pub const fn endpoints(&self) -> [Point2<f64>; 2] {
        [self.start, self.end]
    }
}

/// Distance from a point to a segment.
///
/// When the projection of `point` falls past either endpoint, this is the
/// distance to that endpoint; otherwise it is the perpendicular distance.
/// A zero-length segment is treated as a single point.
///
/// # Example
///
/// ```
/// use drone_spatial::planar::{Segment2, point_segment_distance};
/// use nalgebra::Point2;
///
/// let wall = Segment2::from_coords(0.0, 0.0, 0.0, 10.0);
///
/// assert_eq!(point_segment_distance(&Point2::new(0.0, 5.0), &wall), 0.0);
/// assert_eq!(point_segment_distance(&Point2::new(3.0, 5.0), &wall), 3.0);
/// assert_eq!(point_segment_distance(&Point2::new(0.0, 14.0), &wall), 4.0);
/// ```
#[must_use]
pub fn point_segment_distance(point: &Point2<f64>, segment: &Segment2) -> f64 {
    if segment.is_degenerate() {
        return (point - segment.start).norm();
    }

    let dir = segment.direction();
    if dir.dot(&(point - segment.end)) > 0.0 {
        return (point - segment.end).norm();
    }
    if dir.dot(&(point - segment.start)) < 0.0 {
        return (point - segment.start).norm();
    }
    (point - segment.start).perp(&dir).abs() / dir.norm()
}

/// Checks whether two segments share at least one point.
///
/// General crossings are detected from the signs of the four orientation
/// determinants. Collinear and touching configurations make one or more of
/// those determinants vanish, so each zero determinant additionally checks
/// whether the corresponding endpoint lies within the other segment's
/// bounding interval.
///
/// # Example
///
/// ```
/// use drone_spatial::planar::{Segment2, do_segments_intersect};
///
/// let a = Segment2::from_coords(0.0, 0.0, 4.0, 0.0);
///
/// // Collinear overlap
/// assert!(do_segments_intersect(&a, &Segment2::from_coords(3.0, 0.0, 8.0, 0.0)));
/// // Collinear but disjoint
/// assert!(!do_segments_intersect(&a, &Segment2::from_coords(5.0, 0.0, 8.0, 0.0)));
/// // T-junction
/// assert!(do_segments_intersect(&a, &Segment2::from_coords(2.0, 0.0, 2.0, 3.0)));
/// ```
#[must_use]
pub fn do_segments_intersect(a: &Segment2, b: &Segment2) -> bool {
    contact(a, b).is_some()
}

/// Returns a point shared by both segments, if any.
///
/// For a proper crossing this is the unique crossing point. For touching or
/// collinear-overlapping segments it is the first endpoint found to lie on
/// the other segment.
///
/// # Example
///
/// ```
/// use drone_spatial::planar::{Segment2, intersection_point};
/// use nalgebra::Point2;
///
/// let a = Segment2::from_coords(0.0, 0.0, 10.0, 0.0);
/// let b = Segment2::from_coords(5.0, -5.0, 5.0, 5.0);
///
/// let p = intersection_point(&a, &b).unwrap();
/// assert!((p - Point2::new(5.0, 0.0)).norm() < 1e-9);
/// ```
#[must_use]
pub fn intersection_point(a: &Segment2, b: &Segment2) -> Option<Point2<f64>> {
    match contact(a, b)? {
        Contact::Touch(point) => Some(point),
        Contact::Crossing => {
            let da = a.direction();
            let db = b.direction();
            let t = (b.start - a.start).perp(&db) / da.perp(&db);
            Some(a.start + da * t)
        }
    }
}

/// Minimum distance between two segments.
///
/// Zero when they intersect, otherwise the smallest of the four
/// endpoint-to-segment distances.
///
/// # Example
///
/// ```
/// use drone_spatial::planar::{Segment2, segment_distance};
///
/// let a = Segment2::from_coords(0.0, 0.0, 10.0, 0.0);
/// let b = Segment2::from_coords(0.0, 3.0, 10.0, 3.0);
/// assert_eq!(segment_distance(&a, &b), 3.0);
/// ```
#[must_use]
pub fn segment_distance(a: &Segment2, b: &Segment2) -> f64 {
    if do_segments_intersect(a, b) {
        return 0.0;
    }

    a.endpoints()
        .iter()
        .map(|p| point_segment_distance(p, b))
        .chain(b.endpoints().iter().map(|p| point_segment_distance(p, a)))
        .fold(f64::INFINITY, f64::min)
}

/// How two segments meet.
enum Contact {
    /// Interiors cross at a single point.
    Crossing,
    /// An endpoint of one segment lies on the other.
    Touch(Point2<f64>),
}

fn contact(a: &Segment2, b: &Segment2) -> Option<Contact> {
    let d0 = orientation(&a.start, &a.end, &b.start);
    let d1 = orientation(&a.start, &a.end, &b.end);
    let d2 = orientation(&b.start, &b.end, &a.start);
    let d3 = orientation(&b.start, &b.end, &a.end);

    if d0 * d1 < 0 && d2 * d3 < 0 {
        return Some(Contact::Crossing);
    }

    let candidates = [(d0, a, b.start), (d1, a, b.end), (d2, b, a.start), (d3, b, a.end)];
    candidates
        .into_iter()
        .find(|(d, segment, point)| *d == 0 && within_interval(segment, point))
        .map(|(_, _, point)| Contact::Touch(point))
}

/// Sign of the signed area of triangle `(p, q, r)`, with near-zero areas
/// snapped to zero.
fn orientation(p: &Point2<f64>, q: &Point2<f64>, r: &Point2<f64>) -> i8 {
    let det = (q - p).perp(&(r - p));
    if det.abs() <= GEOMETRY_TOLERANCE {
        0
    } else if det > 0.0 {
        1
    } else {
        -1
    }
}

/// Checks whether `point` lies within the segment's bounding interval on
/// both axes.
fn within_interval(segment: &Segment2, point: &Point2<f64>) -> bool {
    let lo = segment.start.inf(&segment.end);
    let hi = segment.start.sup(&segment.end);
    point.x >= lo.x - GEOMETRY_TOLERANCE
        && point.x <= hi.x + GEOMETRY_TOLERANCE
        && point.y >= lo.y - GEOMETRY_TOLERANCE
        && point.y <= hi.y + GEOMETRY_TOLERANCE
}
