//! Axis-aligned boxes in world coordinates.

use nalgebra::{Point3, Vector3};

/// An axis-aligned bounding box in world coordinates.
///
/// Obstacles, inflated goal regions and the drone's extent are all
/// represented as boxes. Every test on this type is closed: boxes that only
/// touch on a face count as overlapping.
///
/// # Example
///
/// ```
/// use drone_spatial::Aabb;
/// use nalgebra::Point3;
///
/// let obstacle = Aabb::new(Point3::new(5.0, 5.0, 5.0), Point3::new(8.0, 8.0, 8.0));
/// let body = Aabb::new(Point3::new(4.0, 4.0, 4.0), Point3::new(5.0, 5.0, 5.0));
///
/// assert!(obstacle.intersects(&body));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb {
    /// Minimum corner of the box.
    pub min: Point3<f64>,
    /// Maximum corner of the box.
    pub max: Point3<f64>,
}

impl Aabb {
    /// Creates a box from two diagonal corners given in any order.
    ///
    /// # Example
    ///
    /// ```
    /// use drone_spatial::Aabb;
    /// use nalgebra::Point3;
    ///
    /// let aabb = Aabb::new(Point3::new(10.0, 0.0, 10.0), Point3::new(0.0, 10.0, 0.0));
    /// assert_eq!(aabb.min, Point3::new(0.0, 0.0, 0.0));
    /// assert_eq!(aabb.max, Point3::new(10.0, 10.0, 10.0));
    /// ```
    #[must_use]
    pub fn new(a: Point3<f64>, b: Point3<f64>) -> Self {
        Self {
            min: Point3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: Point3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    /// Creates a box centred at `center` with the given half-extents.
    #[must_use]
    pub fn from_center(center: Point3<f64>, half_extents: Vector3<f64>) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// An inverted box that any `expand` call will overwrite.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::MAX, f64::MAX, f64::MAX),
            max: Point3::new(f64::MIN, f64::MIN, f64::MIN),
        }
    }

    /// Returns `true` if `min <= max` on every axis.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y && self.min.z <= self.max.z
    }

    /// Centre point of the box.
    #[must_use]
    pub fn center(&self) -> Point3<f64> {
        nalgebra::center(&self.min, &self.max)
    }

    /// Full size of the box along each axis.
    #[must_use]
    pub fn size(&self) -> Vector3<f64> {
        self.max - self.min
    }

    /// Index of the longest axis (0 = X, 1 = Y, 2 = Z).
    #[must_use]
    pub fn longest_axis(&self) -> usize {
        let size = self.size();
        if size.x >= size.y && size.x >= size.z {
            0
        } else if size.y >= size.z {
            1
        } else {
            2
        }
    }

    /// Checks whether a point lies inside the box or on its boundary.
    #[must_use]
    pub fn contains_point(&self, point: &Point3<f64>) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// Checks whether `other` lies entirely inside this box.
    ///
    /// # Example
    ///
    /// ```
    /// use drone_spatial::Aabb;
    /// use nalgebra::Point3;
    ///
    /// let window = Aabb::new(Point3::origin(), Point3::new(30.0, 30.0, 30.0));
    /// let inside = Aabb::new(Point3::new(1.5, 1.5, 1.9), Point3::new(2.5, 2.5, 2.1));
    /// let poking_out = Aabb::new(Point3::new(-0.5, 1.5, 1.9), Point3::new(0.5, 2.5, 2.1));
    ///
    /// assert!(window.contains_box(&inside));
    /// assert!(!window.contains_box(&poking_out));
    /// ```
    #[must_use]
    pub fn contains_box(&self, other: &Self) -> bool {
        self.contains_point(&other.min) && self.contains_point(&other.max)
    }

    /// Checks whether two boxes overlap, touching included.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    /// Grows this box to include `other`.
    pub fn expand(&mut self, other: &Self) {
        self.min = self.min.inf(&other.min);
        self.max = self.max.sup(&other.max);
    }

    /// Returns a copy grown by `padding` in every direction.
    #[must_use]
    pub fn padded(&self, padding: f64) -> Self {
        let pad = Vector3::repeat(padding);
        Self {
            min: self.min - pad,
            max: self.max + pad,
        }
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::new(Point3::origin(), Point3::origin())
    }
}
