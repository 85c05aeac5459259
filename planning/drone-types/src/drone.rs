//! The rigid body being planned for.

use drone_spatial::{Aabb, Segment2};
use nalgebra::{Point2, Point3, Vector3};

use crate::error::SceneError;

/// Planar footprint of the body.
///
/// The 3D grid transform always uses the body's extent box. The planar
/// collision predicates use the footprint instead: a ball is tested by its
/// centroid, the elongated shapes by a head-to-tail segment of `length`
/// along their axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BodyShape {
    /// Capsule elongated along X.
    #[default]
    Horizontal,
    /// Sphere; the footprint is the centroid.
    Ball,
    /// Capsule elongated along Y.
    Vertical,
}

impl BodyShape {
    /// Returns `true` for [`BodyShape::Ball`].
    #[must_use]
    pub const fn is_ball(&self) -> bool {
        matches!(self, Self::Ball)
    }
}

/// A rigid body with a centroid and fixed extents.
///
/// Extents are immutable after construction; only the position changes,
/// through [`Drone::set_position`].
///
/// # Example
///
/// ```
/// use drone_types::Drone;
/// use nalgebra::Point3;
///
/// let drone = Drone::new(Point3::new(2.0, 2.0, 2.0), 1.0, 1.0, 0.2).unwrap();
/// let (min, max) = drone.extent_corners();
///
/// assert_eq!(min, Point3::new(1.5, 1.5, 1.9));
/// assert_eq!(max, Point3::new(2.5, 2.5, 2.1));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Drone {
    centroid: Point3<f64>,
    length: f64,
    width: f64,
    height: f64,
    shape: BodyShape,
}

impl Drone {
    /// Creates a body centred at `centroid`.
    ///
    /// `length`, `width` and `height` are the full box extents along X, Y
    /// and Z.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError`] if the centroid is not finite or any extent is
    /// negative or not finite.
    pub fn new(
        centroid: Point3<f64>,
        length: f64,
        width: f64,
        height: f64,
    ) -> Result<Self, SceneError> {
        let drone = Self {
            centroid,
            length,
            width,
            height,
            shape: BodyShape::default(),
        };
        drone.validate()?;
        Ok(drone)
    }

    /// Sets the planar footprint.
    #[must_use]
    pub const fn with_shape(mut self, shape: BodyShape) -> Self {
        self.shape = shape;
        self
    }

    /// Checks the centroid and extents.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), SceneError> {
        if !self.centroid.iter().all(|c| c.is_finite()) {
            return Err(SceneError::non_finite("drone centroid"));
        }
        for (what, value) in [
            ("length", self.length),
            ("width", self.width),
            ("height", self.height),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SceneError::InvalidExtent { what, value });
            }
        }
        Ok(())
    }

    /// Current centroid.
    #[must_use]
    pub const fn centroid(&self) -> Point3<f64> {
        self.centroid
    }

    /// Moves the centroid. Always succeeds; validity of the new pose is a
    /// question for the collision predicates.
    pub fn set_position(&mut self, centroid: Point3<f64>) {
        self.centroid = centroid;
    }

    /// Extent along X.
    #[must_use]
    pub const fn length(&self) -> f64 {
        self.length
    }

    /// Extent along Y.
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Extent along Z.
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Planar footprint.
    #[must_use]
    pub const fn shape(&self) -> BodyShape {
        self.shape
    }

    /// Clearance the planar predicates keep around the footprint. This is
    /// `width` itself: a ball's width is its radius.
    #[must_use]
    pub const fn radius(&self) -> f64 {
        self.width
    }

    /// Half-extents of the bounding box.
    #[must_use]
    pub fn half_extents(&self) -> Vector3<f64> {
        Vector3::new(self.length, self.width, self.height) / 2.0
    }

    /// Axis-aligned bounding box at the current centroid.
    #[must_use]
    pub fn extent_box(&self) -> Aabb {
        Aabb::from_center(self.centroid, self.half_extents())
    }

    /// The two diagonal corners `(min, max)` of [`Drone::extent_box`].
    #[must_use]
    pub fn extent_corners(&self) -> (Point3<f64>, Point3<f64>) {
        let bbox = self.extent_box();
        (bbox.min, bbox.max)
    }

    /// Projection of the centroid onto the XY plane.
    #[must_use]
    pub fn planar_centroid(&self) -> Point2<f64> {
        self.centroid.xy()
    }

    /// Head-to-tail segment of the planar footprint.
    ///
    /// Degenerate (both ends at the centroid) for a ball.
    ///
    /// # Example
    ///
    /// ```
    /// use drone_types::{BodyShape, Drone};
    /// use nalgebra::{Point2, Point3};
    ///
    /// let drone = Drone::new(Point3::new(5.0, 5.0, 0.0), 4.0, 1.0, 0.0)
    ///     .unwrap()
    ///     .with_shape(BodyShape::Vertical);
    /// let segment = drone.head_and_tail();
    ///
    /// assert_eq!(segment.start, Point2::new(5.0, 3.0));
    /// assert_eq!(segment.end, Point2::new(5.0, 7.0));
    /// ```
    #[must_use]
    pub fn head_and_tail(&self) -> Segment2 {
        let center = self.planar_centroid();
        let half = self.length / 2.0;
        match self.shape {
            BodyShape::Ball => Segment2::degenerate(center),
            BodyShape::Horizontal => Segment2::new(
                Point2::new(center.x - half, center.y),
                Point2::new(center.x + half, center.y),
            ),
            BodyShape::Vertical => Segment2::new(
                Point2::new(center.x, center.y - half),
                Point2::new(center.x, center.y + half),
            ),
        }
    }
}
