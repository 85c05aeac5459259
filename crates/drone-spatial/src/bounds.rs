//! Inclusive index bounds of a planning grid.

use crate::voxel::VoxelCoord;

/// Axis-aligned bounds in grid (voxel) space, inclusive on both ends.
///
/// # Example
///
/// ```
/// use drone_spatial::{GridBounds, VoxelCoord};
///
/// let bounds = GridBounds::from_extent(VoxelCoord::new(30, 30, 30));
///
/// assert!(bounds.contains(VoxelCoord::new(0, 0, 0)));
/// assert!(bounds.contains(VoxelCoord::new(30, 30, 30)));
/// assert!(!bounds.contains(VoxelCoord::new(31, 0, 0)));
/// assert_eq!(bounds.volume(), 31 * 31 * 31);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridBounds {
    /// Minimum corner (inclusive).
    pub min: VoxelCoord,
    /// Maximum corner (inclusive).
    pub max: VoxelCoord,
}

impl GridBounds {
    /// Creates bounds from two corners, reordering them per axis.
    #[must_use]
    pub fn new(a: VoxelCoord, b: VoxelCoord) -> Self {
        Self {
            min: VoxelCoord::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: VoxelCoord::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    /// Bounds spanning `[0, extent]` on every axis.
    #[must_use]
    pub fn from_extent(extent: VoxelCoord) -> Self {
        Self::new(VoxelCoord::origin(), extent)
    }

    /// Number of cells along each axis as `(x, y, z)`.
    #[must_use]
    pub const fn size(&self) -> (u32, u32, u32) {
        (
            self.max.x.abs_diff(self.min.x).saturating_add(1),
            self.max.y.abs_diff(self.min.y).saturating_add(1),
            self.max.z.abs_diff(self.min.z).saturating_add(1),
        )
    }

    /// Total number of cells.
    #[must_use]
    pub fn volume(&self) -> u64 {
        let (w, h, d) = self.size();
        u64::from(w)
            .saturating_mul(u64::from(h))
            .saturating_mul(u64::from(d))
    }

    /// Checks whether a coordinate lies inside the bounds.
    #[must_use]
    pub const fn contains(&self, coord: VoxelCoord) -> bool {
        coord.x >= self.min.x
            && coord.x <= self.max.x
            && coord.y >= self.min.y
            && coord.y <= self.max.y
            && coord.z >= self.min.z
            && coord.z <= self.max.z
    }

    /// Row-major offset of `coord` (x fastest, then y, then z), or `None`
    /// when the coordinate is outside the bounds.
    ///
    /// # Example
    ///
    /// ```
    /// use drone_spatial::{GridBounds, VoxelCoord};
    ///
    /// let bounds = GridBounds::from_extent(VoxelCoord::new(1, 1, 1));
    /// assert_eq!(bounds.linear_index(VoxelCoord::new(0, 0, 0)), Some(0));
    /// assert_eq!(bounds.linear_index(VoxelCoord::new(1, 0, 0)), Some(1));
    /// assert_eq!(bounds.linear_index(VoxelCoord::new(0, 1, 0)), Some(2));
    /// assert_eq!(bounds.linear_index(VoxelCoord::new(0, 0, 1)), Some(4));
    /// assert_eq!(bounds.linear_index(VoxelCoord::new(2, 0, 0)), None);
    /// ```
    #[must_use]
    pub fn linear_index(&self, coord: VoxelCoord) -> Option<usize> {
        if !self.contains(coord) {
            return None;
        }
        let (w, h, _) = self.size();
        let dx = u64::from(coord.x.abs_diff(self.min.x));
        let dy = u64::from(coord.y.abs_diff(self.min.y));
        let dz = u64::from(coord.z.abs_diff(self.min.z));
        let offset = dz
            .checked_mul(u64::from(h))?
            .checked_add(dy)?
            .checked_mul(u64::from(w))?
            .checked_add(dx)?;
        usize::try_from(offset).ok()
    }

    /// Iterates over every coordinate in Z-Y-X order (X varies fastest),
    /// matching [`GridBounds::linear_index`].
    #[must_use]
    pub const fn iter(&self) -> GridBoundsIter {
        GridBoundsIter {
            bounds: *self,
            current: Some(self.min),
        }
    }
}

impl IntoIterator for &GridBounds {
    type Item = VoxelCoord;
    type IntoIter = GridBoundsIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over all coordinates in a [`GridBounds`].
#[derive(Debug, Clone)]
pub struct GridBoundsIter {
    bounds: GridBounds,
    current: Option<VoxelCoord>,
}

impl Iterator for GridBoundsIter {
    type Item = VoxelCoord;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;

        let mut next = current;
        if next.x < self.bounds.max.x {
            next.x += 1;
        } else if next.y < self.bounds.max.y {
            next.x = self.bounds.min.x;
            next.y += 1;
        } else if next.z < self.bounds.max.z {
            next.x = self.bounds.min.x;
            next.y = self.bounds.min.y;
            next.z += 1;
        } else {
            self.current = None;
            return Some(current);
        }
        self.current = Some(next);

        Some(current)
    }
}
