//! Grid geometry and raster access
//!
//! This module contains the spatial building blocks of recovery:
//! - Integer coordinates and Euclidean distance
//! - The eight step directions and the four axes pairing them
//! - Intensity views over `ndarray` and `image` rasters
//! - Bit masks marking pixels of interest

/// Grid coordinates and distances
pub mod coordinate;
/// Unit step directions and axes
pub mod direction;
/// Pixel bit masks
pub mod mask;
/// Intensity view traits and their raster implementations
pub mod raster;

pub use coordinate::Coordinate;
pub use direction::{Axis, Direction};
pub use mask::PixelMask;
pub use raster::{IntensityView, IntensityViewMut};
