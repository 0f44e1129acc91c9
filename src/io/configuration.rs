//! Recovery constants and runtime configuration defaults

// Search and weighting defaults
/// Maximum number of steps a directional search takes
pub const DEFAULT_MAX_DEPTH: usize = 4;

/// Largest allowed distance difference between the two anchors of a line
pub const DEFAULT_DISTANCE_THRESHOLD: f64 = 2.0;

/// Smallest intensity treated as unhealthy by the default predicate
pub const DEFAULT_HEALTH_LIMIT: u8 = 155;

// Safety limit to prevent runaway searches on huge images
/// Maximum accepted search depth
pub const MAX_SEARCH_DEPTH: usize = 1024;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Suffix added to recovered image filenames
pub const OUTPUT_SUFFIX: &str = "_recovered";
/// Suffix added to mask overlay filenames
pub const MASK_SUFFIX: &str = "_mask";

// Mask overlay colours (RGBA)
/// Colour of pixels that received a replacement value
pub const RECOVERED_COLOR: [u8; 4] = [0, 200, 0, 255];
/// Colour of pixels left unrecovered
pub const UNRECOVERED_COLOR: [u8; 4] = [220, 0, 0, 255];

/// Log filter used when neither `RUST_LOG` nor `--log-level` is given
pub const DEFAULT_LOG_LEVEL: &str = "info";
