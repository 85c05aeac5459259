//! The labelled occupancy grid search runs on.

use drone_spatial::{GridBounds, VoxelCoord};
use nalgebra::Point3;

use crate::cell::Cell;
use crate::error::MazeError;

/// A 3D grid of [`Cell`] labels over `[0, extent]` on every axis.
///
/// A maze has exactly one [`Cell::Start`] cell and any number of goal cells.
/// It is built once and read-only afterwards.
///
/// # Example
///
/// ```
/// use drone_spatial::VoxelCoord;
/// use drone_types::{Cell, Maze};
///
/// let maze = Maze::from_layers(&[["P .", "%%%"]], 1).unwrap();
///
/// assert_eq!(maze.start(), VoxelCoord::new(0, 0, 0));
/// assert_eq!(maze.goals(), vec![VoxelCoord::new(2, 0, 0)]);
/// assert_eq!(maze.get(VoxelCoord::new(1, 1, 0)), Some(Cell::Wall));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Maze {
    bounds: GridBounds,
    cells: Vec<Cell>,
    start: VoxelCoord,
    granularity: u32,
}

impl Maze {
    /// Builds a maze by labelling every coordinate in `[0, extent]`.
    ///
    /// `label` is called once per cell in Z-Y-X order. The cell at `start`
    /// is always stored as [`Cell::Start`] whatever `label` returns for it,
    /// and a [`Cell::Start`] returned anywhere else is stored as
    /// [`Cell::Free`].
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::MissingStart`] if `start` lies outside the grid,
    /// or [`MazeError::TooLarge`] if the cell count is not addressable.
    pub fn from_fn<F>(
        extent: VoxelCoord,
        granularity: u32,
        start: VoxelCoord,
        mut label: F,
    ) -> Result<Self, MazeError>
    where
        F: FnMut(VoxelCoord) -> Cell,
    {
        let bounds = GridBounds::from_extent(extent);
        if !bounds.contains(start) {
            return Err(MazeError::MissingStart);
        }
        let volume = usize::try_from(bounds.volume()).map_err(|_| MazeError::TooLarge)?;

        let mut cells = Vec::with_capacity(volume);
        for coord in &bounds {
            let cell = match label(coord) {
                _ if coord == start => Cell::Start,
                Cell::Start => Cell::Free,
                other => other,
            };
            cells.push(cell);
        }

        Ok(Self {
            bounds,
            cells,
            start,
            granularity,
        })
    }

    /// Parses a maze from `[z][y]` rows of label characters, the same shape
    /// [`Maze::to_layers`] produces.
    ///
    /// # Errors
    ///
    /// Returns a [`MazeError`] if a label is unknown, rows differ in length,
    /// the grid is empty, or it does not contain exactly one start cell.
    pub fn from_layers<L, R>(layers: &[L], granularity: u32) -> Result<Self, MazeError>
    where
        L: AsRef<[R]>,
        R: AsRef<str>,
    {
        let rows = layers.first().map_or(0, |layer| layer.as_ref().len());
        let cols = layers
            .first()
            .and_then(|layer| layer.as_ref().first())
            .map_or(0, |row| row.as_ref().chars().count());
        if rows == 0 || cols == 0 {
            return Err(MazeError::Empty);
        }

        let mut cells = Vec::with_capacity(layers.len() * rows * cols);
        let mut starts = Vec::new();
        for (z, layer) in layers.iter().enumerate() {
            let layer = layer.as_ref();
            if layer.len() != rows {
                return Err(MazeError::LayerHeight {
                    layer: z,
                    found: layer.len(),
                    expected: rows,
                });
            }
            for (y, row) in layer.iter().enumerate() {
                let row = row.as_ref();
                let found = row.chars().count();
                if found != cols {
                    return Err(MazeError::RaggedLayers {
                        layer: z,
                        row: y,
                        found,
                        expected: cols,
                    });
                }
                for (x, c) in row.chars().enumerate() {
                    let cell = Cell::from_char(c)?;
                    if cell == Cell::Start {
                        starts.push(Self::coord_from_indices(x, y, z)?);
                    }
                    cells.push(cell);
                }
            }
        }

        let start = match starts.as_slice() {
            [] => return Err(MazeError::MissingStart),
            [start] => *start,
            many => return Err(MazeError::MultipleStarts(many.len())),
        };
        let extent = Self::coord_from_indices(cols - 1, rows - 1, layers.len() - 1)?;

        Ok(Self {
            bounds: GridBounds::from_extent(extent),
            cells,
            start,
            granularity,
        })
    }

    fn coord_from_indices(x: usize, y: usize, z: usize) -> Result<VoxelCoord, MazeError> {
        let axis = |v: usize| i32::try_from(v).map_err(|_| MazeError::TooLarge);
        Ok(VoxelCoord::new(axis(x)?, axis(y)?, axis(z)?))
    }

    /// Index bounds of the grid.
    #[must_use]
    pub const fn bounds(&self) -> GridBounds {
        self.bounds
    }

    /// Largest valid index on each axis.
    #[must_use]
    pub const fn extent(&self) -> VoxelCoord {
        self.bounds.max
    }

    /// Grid pitch in world units.
    #[must_use]
    pub const fn granularity(&self) -> u32 {
        self.granularity
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the grid has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Label at `coord`, or `None` outside the grid.
    #[must_use]
    pub fn get(&self, coord: VoxelCoord) -> Option<Cell> {
        self.bounds
            .linear_index(coord)
            .and_then(|i| self.cells.get(i))
            .copied()
    }

    /// The unique start cell.
    #[must_use]
    pub const fn start(&self) -> VoxelCoord {
        self.start
    }

    /// Every goal-labelled cell, in Z-Y-X order.
    #[must_use]
    pub fn goals(&self) -> Vec<VoxelCoord> {
        self.iter()
            .filter(|(_, cell)| *cell == Cell::Goal)
            .map(|(coord, _)| coord)
            .collect()
    }

    /// Number of cells carrying `label`.
    #[must_use]
    pub fn count(&self, label: Cell) -> usize {
        self.cells.iter().filter(|c| **c == label).count()
    }

    /// Returns `true` if `coord` is inside the grid and not a wall.
    #[must_use]
    pub fn is_walkable(&self, coord: VoxelCoord) -> bool {
        self.get(coord).is_some_and(Cell::is_walkable)
    }

    /// Walkable face neighbours of `coord`, in `+x, -x, +y, -y, +z, -z`
    /// order.
    pub fn neighbors(&self, coord: VoxelCoord) -> impl Iterator<Item = VoxelCoord> + '_ {
        coord
            .face_neighbors()
            .into_iter()
            .filter(|n| self.is_walkable(*n))
    }

    /// World position of a cell.
    #[must_use]
    pub fn to_world(&self, coord: VoxelCoord) -> Point3<f64> {
        coord.to_world(f64::from(self.granularity))
    }

    /// Every `(coordinate, label)` pair in Z-Y-X order.
    pub fn iter(&self) -> impl Iterator<Item = (VoxelCoord, Cell)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    /// Label characters as `[z][y]` rows, X along each row.
    ///
    /// This is the shape a grid file writer needs.
    #[must_use]
    pub fn to_layers(&self) -> Vec<Vec<String>> {
        let (w, h, _) = self.bounds.size();
        let (w, h) = (w as usize, h as usize);
        self.cells
            .chunks(w * h)
            .map(|layer| {
                layer
                    .chunks(w)
                    .map(|row| row.iter().map(|c| c.as_char()).collect())
                    .collect()
            })
            .collect()
    }
}
