//! Integer voxel coordinates.

use nalgebra::Point3;

/// A discrete cell index in a planning grid.
///
/// Planning grids are anchored at the origin, so coordinates produced by the
/// grid transform are never negative. The type still uses `i32` so that
/// neighbour arithmetic at the border (`x - 1` at `x == 0`) yields a value the
/// bounds check can reject instead of wrapping around.
///
/// # Example
///
/// ```
/// use drone_spatial::VoxelCoord;
///
/// let cell = VoxelCoord::new(2, 2, 2);
/// assert_eq!(cell.as_tuple(), (2, 2, 2));
/// assert_eq!(cell.manhattan_distance(VoxelCoord::new(20, 20, 20)), 54);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VoxelCoord {
    /// Index along the window width.
    pub x: i32,
    /// Index along the window height.
    pub y: i32,
    /// Index along the window depth.
    pub z: i32,
}

impl VoxelCoord {
    /// Creates a new voxel coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The cell at index `(0, 0, 0)`.
    #[must_use]
    pub const fn origin() -> Self {
        Self::new(0, 0, 0)
    }

    /// Returns the coordinate as a tuple.
    #[must_use]
    pub const fn as_tuple(self) -> (i32, i32, i32) {
        (self.x, self.y, self.z)
    }

    /// Returns the coordinate as an array.
    #[must_use]
    pub const fn as_array(self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }

    /// World-space position of this cell for a grid with the given pitch.
    ///
    /// Cell `(i, j, k)` sits at `(i * pitch, j * pitch, k * pitch)`.
    ///
    /// # Example
    ///
    /// ```
    /// use drone_spatial::VoxelCoord;
    /// use nalgebra::Point3;
    ///
    /// let cell = VoxelCoord::new(1, 2, 3);
    /// assert_eq!(cell.to_world(2.0), Point3::new(2.0, 4.0, 6.0));
    /// ```
    #[must_use]
    pub fn to_world(self, pitch: f64) -> Point3<f64> {
        Point3::new(
            f64::from(self.x) * pitch,
            f64::from(self.y) * pitch,
            f64::from(self.z) * pitch,
        )
    }

    /// The six face-adjacent cells, in `+x, -x, +y, -y, +z, -z` order.
    ///
    /// The order is fixed; search tiebreaking depends on it.
    ///
    /// # Example
    ///
    /// ```
    /// use drone_spatial::VoxelCoord;
    ///
    /// let neighbors = VoxelCoord::new(0, 0, 0).face_neighbors();
    /// assert_eq!(neighbors[0], VoxelCoord::new(1, 0, 0));
    /// assert_eq!(neighbors[5], VoxelCoord::new(0, 0, -1));
    /// ```
    #[must_use]
    pub const fn face_neighbors(self) -> [Self; 6] {
        [
            Self::new(self.x.saturating_add(1), self.y, self.z),
            Self::new(self.x.saturating_sub(1), self.y, self.z),
            Self::new(self.x, self.y.saturating_add(1), self.z),
            Self::new(self.x, self.y.saturating_sub(1), self.z),
            Self::new(self.x, self.y, self.z.saturating_add(1)),
            Self::new(self.x, self.y, self.z.saturating_sub(1)),
        ]
    }

    /// L1 distance, the exact step count between two cells on an empty
    /// six-connected grid.
    #[must_use]
    pub const fn manhattan_distance(self, other: Self) -> u32 {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        let dz = self.z.abs_diff(other.z);
        dx.saturating_add(dy).saturating_add(dz)
    }

    /// L-infinity distance.
    #[must_use]
    pub fn chebyshev_distance(self, other: Self) -> u32 {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        let dz = self.z.abs_diff(other.z);
        dx.max(dy).max(dz)
    }

    /// Straight-line distance in index units.
    #[must_use]
    pub fn euclidean_distance(self, other: Self) -> f64 {
        let dx = f64::from(self.x.abs_diff(other.x));
        let dy = f64::from(self.y.abs_diff(other.y));
        let dz = f64::from(self.z.abs_diff(other.z));
        dx.mul_add(dx, dy.mul_add(dy, dz * dz)).sqrt()
    }
}

impl From<(i32, i32, i32)> for VoxelCoord {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<VoxelCoord> for (i32, i32, i32) {
    fn from(coord: VoxelCoord) -> Self {
        coord.as_tuple()
    }
}

impl std::ops::Add for VoxelCoord {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(
            self.x.saturating_add(other.x),
            self.y.saturating_add(other.y),
            self.z.saturating_add(other.z),
        )
    }
}

impl std::ops::Sub for VoxelCoord {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(
            self.x.saturating_sub(other.x),
            self.y.saturating_sub(other.y),
            self.z.saturating_sub(other.z),
        )
    }
}
