//! PNG loading and saving of single-channel images

use std::path::Path;

use image::GrayImage;

use crate::io::error::{RecoveryError, Result, WithContext};

/// Load an image from disk as 8-bit luma
///
/// Colour inputs are converted to grayscale; alpha is discarded.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded
pub fn load_grayscale(path: &Path) -> Result<GrayImage> {
    let image = image::open(path).with_path(path)?;
    Ok(image.into_luma8())
}

/// Save an 8-bit luma image, creating the parent directory if needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn save_grayscale(image: &GrayImage, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    image.save(path).map_err(|e| RecoveryError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Create the directory that will hold `path`
///
/// # Errors
///
/// Returns an error if the directory cannot be created
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| RecoveryError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }
    Ok(())
}
