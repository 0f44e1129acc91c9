//! Read and write views over single-channel 8-bit rasters
//!
//! The recovery core only ever talks to these traits. Implementations are
//! provided for `ndarray::Array2<u8>` (indexed `[row, col]`) and for
//! `image::GrayImage` (row = `y`, col = `x`).

use image::GrayImage;
use ndarray::Array2;

use crate::spatial::coordinate::Coordinate;

/// Read-only access to a grid of intensity samples
pub trait IntensityView {
    /// Number of rows
    fn rows(&self) -> usize;

    /// Number of columns
    fn cols(&self) -> usize;

    /// Sample at `(row, col)`, or `None` outside the grid
    fn intensity(&self, row: usize, col: usize) -> Option<u8>;

    /// Sample at a signed coordinate, or `None` outside the grid
    fn intensity_at(&self, coords: Coordinate) -> Option<u8> {
        let [row, col] = coords.to_indices(self.rows(), self.cols())?;
        self.intensity(row, col)
    }

    /// Whether `coords` lies inside `[0, rows) x [0, cols)`
    fn contains(&self, coords: Coordinate) -> bool {
        coords.to_indices(self.rows(), self.cols()).is_some()
    }

    /// Whether the grid has no pixels at all
    fn is_empty(&self) -> bool {
        self.rows() == 0 || self.cols() == 0
    }
}

/// Mutable access used by reconstruction
pub trait IntensityViewMut: IntensityView {
    /// Overwrite the sample at `(row, col)`
    ///
    /// Returns the previous sample, or `None` (and writes nothing) outside the grid.
    fn set_intensity(&mut self, row: usize, col: usize, sample: u8) -> Option<u8>;

    /// Overwrite the sample at a signed coordinate
    fn set_intensity_at(&mut self, coords: Coordinate, sample: u8) -> Option<u8> {
        let [row, col] = coords.to_indices(self.rows(), self.cols())?;
        self.set_intensity(row, col, sample)
    }
}

impl IntensityView for Array2<u8> {
    fn rows(&self) -> usize {
        self.nrows()
    }

    fn cols(&self) -> usize {
        self.ncols()
    }

    fn intensity(&self, row: usize, col: usize) -> Option<u8> {
        self.get([row, col]).copied()
    }
}

impl IntensityViewMut for Array2<u8> {
    fn set_intensity(&mut self, row: usize, col: usize, sample: u8) -> Option<u8> {
        self.get_mut([row, col])
            .map(|value| std::mem::replace(value, sample))
    }
}

impl IntensityView for GrayImage {
    fn rows(&self) -> usize {
        self.height() as usize
    }

    fn cols(&self) -> usize {
        self.width() as usize
    }

    fn intensity(&self, row: usize, col: usize) -> Option<u8> {
        let x = u32::try_from(col).ok()?;
        let y = u32::try_from(row).ok()?;
        self.get_pixel_checked(x, y).map(|pixel| pixel.0[0])
    }
}

impl IntensityViewMut for GrayImage {
    fn set_intensity(&mut self, row: usize, col: usize, sample: u8) -> Option<u8> {
        let x = u32::try_from(col).ok()?;
        let y = u32::try_from(row).ok()?;
        self.get_pixel_mut_checked(x, y)
            .map(|pixel| std::mem::replace(&mut pixel.0[0], sample))
    }
}
