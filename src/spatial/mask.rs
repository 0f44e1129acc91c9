use bitvec::prelude::*;
use std::fmt;

use crate::spatial::coordinate::Coordinate;

/// Fixed-size bit mask over the pixels of a `rows x cols` grid
///
/// Stored row-major. Coordinates outside the grid are never members and
/// inserting them is a no-op.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelMask {
    bits: BitVec,
    rows: usize,
    cols: usize,
}

impl PixelMask {
    /// Create a mask with no pixels set
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            bits: bitvec![0; rows * cols],
            rows,
            cols,
        }
    }

    /// Number of rows covered by the mask
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns covered by the mask
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Mark a pixel, returning whether it was newly added
    pub fn insert(&mut self, coords: Coordinate) -> bool {
        let Some(index) = self.flat_index(coords) else {
            return false;
        };
        match self.bits.get_mut(index) {
            Some(mut bit) if !*bit => {
                *bit = true;
                true
            }
            _ => false,
        }
    }

    /// Clear a pixel, returning whether it was present
    pub fn remove(&mut self, coords: Coordinate) -> bool {
        let Some(index) = self.flat_index(coords) else {
            return false;
        };
        match self.bits.get_mut(index) {
            Some(mut bit) if *bit => {
                *bit = false;
                true
            }
            _ => false,
        }
    }

    /// Test pixel membership
    pub fn contains(&self, coords: Coordinate) -> bool {
        self.flat_index(coords)
            .and_then(|index| self.bits.get(index).as_deref().copied())
            .unwrap_or(false)
    }

    /// Test if no pixels are set
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count the pixels that are set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Iterate over the set pixels in row-major order
    pub fn iter(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.bits
            .iter_ones()
            .filter_map(|index| Coordinate::from_indices(index / self.cols, index % self.cols))
    }

    fn flat_index(&self, coords: Coordinate) -> Option<usize> {
        let [row, col] = coords.to_indices(self.rows, self.cols)?;
        Some(row * self.cols + col)
    }
}

impl fmt::Display for PixelMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PixelMask({}x{}, {} set)",
            self.rows,
            self.cols,
            self.count()
        )
    }
}
