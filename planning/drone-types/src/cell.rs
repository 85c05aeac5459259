//! Occupancy-grid labels.

use std::fmt;

use crate::error::MazeError;

/// Label of one grid cell.
///
/// Each label has a single-character form used by grid serializers.
///
/// # Example
///
/// ```
/// use drone_types::Cell;
///
/// assert_eq!(Cell::Wall.as_char(), '%');
/// assert_eq!(Cell::from_char('P').unwrap(), Cell::Start);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// Reachable, not a goal.
    #[default]
    Free,
    /// The body is out of bounds or overlaps an obstacle here.
    Wall,
    /// The body overlaps a goal region here.
    Goal,
    /// The body's original position.
    Start,
}

impl Cell {
    /// All labels, in declaration order.
    pub const ALL: [Self; 4] = [Self::Free, Self::Wall, Self::Goal, Self::Start];

    /// Single-character form.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Free => ' ',
            Self::Wall => '%',
            Self::Goal => '.',
            Self::Start => 'P',
        }
    }

    /// Parses the single-character form.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::UnknownLabel`] for any other character.
    pub const fn from_char(c: char) -> Result<Self, MazeError> {
        match c {
            ' ' => Ok(Self::Free),
            '%' => Ok(Self::Wall),
            '.' => Ok(Self::Goal),
            'P' => Ok(Self::Start),
            other => Err(MazeError::UnknownLabel(other)),
        }
    }

    /// Returns `true` for every label except [`Cell::Wall`].
    #[must_use]
    pub const fn is_walkable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for Cell {
    type Error = MazeError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::from_char(c)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_char_forms_are_distinct() {
        for cell in Cell::ALL {
            assert_eq!(Cell::from_char(cell.as_char()).unwrap(), cell);
        }
    }

    #[test]
    fn test_unknown_char() {
        assert_eq!(Cell::from_char('#'), Err(MazeError::UnknownLabel('#')));
        assert!(Cell::try_from('x').is_err());
    }

    #[test]
    fn test_walkable() {
        assert!(Cell::Free.is_walkable());
        assert!(Cell::Goal.is_walkable());
        assert!(Cell::Start.is_walkable());
        assert!(!Cell::Wall.is_walkable());
    }

    #[test]
    fn test_display() {
        assert_eq!(Cell::Goal.to_string(), ".");
        assert_eq!(Cell::default(), Cell::Free);
    }
}
