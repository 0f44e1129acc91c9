//! Integer grid coordinates and Euclidean distance between them

use crate::spatial::direction::Direction;

/// A `(row, col)` position on the pixel grid
///
/// Rows grow downwards and columns grow to the right. Coordinates are signed so
/// that a step off the top or left edge is representable and can be rejected
/// by a bounds check instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    /// Row index (vertical position)
    pub row: i32,
    /// Column index (horizontal position)
    pub col: i32,
}

impl Coordinate {
    /// Create a coordinate from a row and a column
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Build a coordinate from unsigned grid indices
    ///
    /// Returns `None` if either index does not fit in an `i32`.
    pub fn from_indices(row: usize, col: usize) -> Option<Self> {
        Some(Self {
            row: i32::try_from(row).ok()?,
            col: i32::try_from(col).ok()?,
        })
    }

    /// The coordinate one unit step away in `direction`
    pub const fn step(self, direction: Direction) -> Self {
        let [d_row, d_col] = direction.offset();
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// Euclidean distance to another coordinate
    pub fn distance(self, other: Self) -> f64 {
        let d_row = f64::from(self.row - other.row);
        let d_col = f64::from(self.col - other.col);
        d_row.hypot(d_col)
    }

    /// Convert to `[row, col]` array indices for a `rows x cols` grid
    ///
    /// Returns `None` when the coordinate lies outside `[0, rows) x [0, cols)`.
    pub fn to_indices(self, rows: usize, cols: usize) -> Option<[usize; 2]> {
        let row = usize::try_from(self.row).ok()?;
        let col = usize::try_from(self.col).ok()?;
        (row < rows && col < cols).then_some([row, col])
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
