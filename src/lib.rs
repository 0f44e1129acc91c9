//! Recovery of unhealthy pixels in single-channel images
//!
//! Pixels failing a health predicate (stuck, saturated or dead sensor sites) are
//! rebuilt from the nearest healthy pixels found along horizontal and vertical
//! lines, falling back to the diagonals, using inverse-distance weights.

#![forbid(unsafe_code)]

/// Input/output operations, configuration and error handling
pub mod io;
/// Search, planning and reconstruction of unhealthy pixels
pub mod recovery;
/// Grid coordinates, directions, raster views and pixel masks
pub mod spatial;

pub use io::error::{RecoveryError, Result};
pub use recovery::{HealthPredicate, IntensityCeiling, RecoveryConfig, RecoveryReport, recover};
